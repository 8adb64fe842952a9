//! Per-dimension reducers.
//!
//! Each reducer is a pure function from the record slice to one
//! [`ChartSeries`]; it owns its bucket map for the duration of its pass
//! and applies its own validation policy, so a row excluded from one
//! dimension still counts toward the others.

use crate::aggregate::types::ChartSeries;
use crate::record::Record;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Number of counties kept in the county distribution series.
const TOP_COUNTY_LIMIT: usize = 5;

/// Palette assigned to the top counties by rank position, not identity.
const TOP_COUNTY_COLORS: [&str; TOP_COUNTY_LIMIT] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
];

/// Registration counts per model year.
///
/// Labels are the distinct valid years in ascending lexicographic string
/// order. The textual sort is part of the output contract; all years in
/// this dataset share digit length, so it coincides with numeric order.
pub fn vehicles_by_year(records: &[Record]) -> ChartSeries {
    let mut by_year: BTreeMap<&str, u64> = BTreeMap::new();

    for record in records {
        if let Some(year) = record.year() {
            *by_year.entry(year).or_default() += 1;
        }
    }

    let (labels, values) = by_year
        .into_iter()
        .map(|(year, count)| (year.to_string(), count as f64))
        .unzip();

    ChartSeries::new("Total Vehicles", labels, values)
}

/// Mean electric range per model year.
///
/// A row contributes iff both its year and its range are valid; zero and
/// negative ranges are included here (only the scalar summary average
/// filters them out). Values are unrounded quotients.
pub fn avg_range_by_year(records: &[Record]) -> ChartSeries {
    let mut by_year: BTreeMap<&str, (f64, u64)> = BTreeMap::new();

    for record in records {
        if let (Some(year), Some(range)) = (record.year(), record.range()) {
            let bucket = by_year.entry(year).or_default();
            bucket.0 += range;
            bucket.1 += 1;
        }
    }

    let (labels, values) = by_year
        .into_iter()
        .map(|(year, (sum, count))| (year.to_string(), sum / count as f64))
        .unzip();

    ChartSeries::new("Average Electric Range (miles)", labels, values)
}

/// The five counties with the most registrations, highest first.
///
/// Counts accumulate in first-seen order and the descending sort is
/// stable, so equal counts keep their first-seen order across runs.
pub fn top_counties(records: &[Record]) -> ChartSeries {
    let mut by_county: IndexMap<&str, u64> = IndexMap::new();

    for record in records {
        if let Some(county) = record.county() {
            *by_county.entry(county).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, u64)> = by_county.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_COUNTY_LIMIT);

    let colors = TOP_COUNTY_COLORS
        .iter()
        .take(ranked.len())
        .map(|c| c.to_string())
        .collect();

    let (labels, values) = ranked
        .into_iter()
        .map(|(county, count)| (county.to_string(), count as f64))
        .unzip();

    let mut series = ChartSeries::new("Vehicle Distribution by County", labels, values);
    series.colors = colors;
    series
}

/// Registration counts per raw vehicle-type label.
///
/// Every distinct label becomes its own category; labels appear in
/// first-encountered order.
pub fn vehicles_by_type(records: &[Record]) -> ChartSeries {
    let mut by_type: IndexMap<&str, u64> = IndexMap::new();

    for record in records {
        if let Some(vtype) = record.vehicle_type() {
            *by_type.entry(vtype).or_default() += 1;
        }
    }

    let (labels, values) = by_type
        .into_iter()
        .map(|(vtype, count)| (vtype.to_string(), count as f64))
        .unzip();

    ChartSeries::new("Vehicles by Type", labels, values)
}
