//! Orchestration: runs every reducer over the same input and assembles
//! the output bundle.

use crate::aggregate::reducers::{
    avg_range_by_year, top_counties, vehicles_by_type, vehicles_by_year,
};
use crate::aggregate::summary::summary_metrics;
use crate::aggregate::types::{Report, SeriesBundle};
use crate::record::Record;

/// Builds the complete [`Report`] from the record slice.
///
/// Each reducer is an independent pure pass; none shares bucket state
/// with another, so they can be exercised (and replaced) in isolation.
pub fn build_report(records: &[Record]) -> Report {
    Report {
        summary: summary_metrics(records),
        series: SeriesBundle {
            by_year_count: vehicles_by_year(records),
            by_year_avg_range: avg_range_by_year(records),
            top_counties: top_counties(records),
            by_vehicle_type: vehicles_by_type(records),
        },
    }
}
