// File: crates/recover-core/src/layout.rs
// Summary: Class selectors locating the series group, graph path and axis label groups.

use serde::Deserialize;

/// Class attributes identifying the chart parts.
/// Defaults match Highcharts exports; matching is on the whitespace-normalized class string.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChartLayout {
    pub series_group: String,
    pub series_path: String,
    pub x_labels: String,
    pub y_labels: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            series_group: "highcharts-series highcharts-series-0 highcharts-line-series".to_string(),
            series_path: "highcharts-graph".to_string(),
            x_labels: "highcharts-axis-labels highcharts-xaxis-labels".to_string(),
            y_labels: "highcharts-axis-labels highcharts-yaxis-labels".to_string(),
        }
    }
}

/// True when `attr` carries exactly the class tokens of `wanted`, in order.
pub(crate) fn class_matches(attr: &str, wanted: &str) -> bool {
    attr.split_whitespace().eq(wanted.split_whitespace())
}
