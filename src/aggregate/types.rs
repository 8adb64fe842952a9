//! Data types produced by the aggregation pipeline.

use serde::Serialize;

/// One chart's data: ordered category labels with matching values.
///
/// `labels` and `values` always have equal length; `label` is presentation
/// metadata the renderer uses verbatim. `colors` is populated only for
/// series with a positional palette (top counties).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl ChartSeries {
    pub fn new(label: &str, labels: Vec<String>, values: Vec<f64>) -> Self {
        ChartSeries {
            label: label.to_string(),
            labels,
            values,
            colors: Vec::new(),
        }
    }
}

/// Headline dashboard metrics.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_vehicle_count: usize,
    /// Mean of valid positive ranges, rounded to the nearest integer.
    /// 0 when no row carries a valid positive range.
    pub avg_range: u64,
    pub unique_makes_count: usize,
    pub bevcount: usize,
    pub phevcount: usize,
}

/// The per-chart series, one per aggregation dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBundle {
    pub by_year_count: ChartSeries,
    pub by_year_avg_range: ChartSeries,
    pub top_counties: ChartSeries,
    pub by_vehicle_type: ChartSeries,
}

/// Complete aggregation output consumed by the rendering collaborator.
///
/// Carries no timestamps or other run-dependent state: aggregating the
/// same input twice serializes to byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: SummaryMetrics,
    pub series: SeriesBundle,
}
