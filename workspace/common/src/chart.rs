use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::indicator::Indicator;

/// How a trace is drawn by the charting front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RenderMode {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers")]
    Markers,
}

/// A single labelled series on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trace {
    /// Legend label
    pub name: String,
    pub mode: RenderMode,
    /// Period labels, already formatted for the active language
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Renderable description of one indicator chart: historical values followed by the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    pub indicator: Indicator,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub historical: Trace,
    pub forecast: Trace,
}

impl ChartSpec {
    pub fn traces(&self) -> [&Trace; 2] {
        [&self.historical, &self.forecast]
    }
}
