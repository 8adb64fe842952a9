//! Headline metric computation.

use crate::aggregate::types::SummaryMetrics;
use crate::record::Record;
use std::collections::HashSet;

/// Computes the dashboard's headline metrics in a single pass.
///
/// Every input row counts toward the total, even when its fields fail
/// validation for the other metrics.
pub fn summary_metrics(records: &[Record]) -> SummaryMetrics {
    let mut range_sum = 0.0;
    let mut range_count = 0u64;
    let mut makes: HashSet<&str> = HashSet::new();
    let mut bevcount = 0;
    let mut phevcount = 0;

    for record in records {
        if let Some(range) = record.positive_range() {
            range_sum += range;
            range_count += 1;
        }

        if let Some(make) = record.make() {
            makes.insert(make);
        }

        // Substring containment with BEV checked first: a label carrying
        // both tokens counts once, as BEV. Preserved from the reference
        // behavior even though exclusive categories were likely intended.
        if let Some(vtype) = record.vehicle_type() {
            if vtype.contains("BEV") {
                bevcount += 1;
            } else if vtype.contains("PHEV") {
                phevcount += 1;
            }
        }
    }

    let avg_range = if range_count == 0 {
        0
    } else {
        (range_sum / range_count as f64).round() as u64
    };

    SummaryMetrics {
        total_vehicle_count: records.len(),
        avg_range,
        unique_makes_count: makes.len(),
        bevcount,
        phevcount,
    }
}
