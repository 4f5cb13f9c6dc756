//! Conversion of [`ChartSpec`] into plotly figures.

use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot, Scatter};
use tracing::trace;

use crate::chart::{ChartSpec, RenderMode, Trace};

/// Builds the plotly plot for a chart specification.
pub fn to_plot(spec: &ChartSpec) -> Plot {
    let mut plot = Plot::new();
    for trace in spec.traces() {
        add_trace(&mut plot, trace);
    }

    let layout = Layout::new()
        .title(Title::with_text(&spec.title))
        .x_axis(Axis::new().title(Title::with_text(&spec.x_axis_title)))
        .y_axis(Axis::new().title(Title::with_text(&spec.y_axis_title)));
    plot.set_layout(layout);
    plot
}

fn add_trace(plot: &mut Plot, trace: &Trace) {
    let x = trace.x.clone();
    let y = trace.y.clone();
    match trace.mode {
        RenderMode::Bar => plot.add_trace(Bar::new(x, y).name(&trace.name)),
        RenderMode::LinesMarkers => {
            plot.add_trace(Scatter::new(x, y).mode(Mode::LinesMarkers).name(&trace.name))
        }
        RenderMode::Markers => {
            plot.add_trace(Scatter::new(x, y).mode(Mode::Markers).name(&trace.name))
        }
    }
}

/// Plotly figure (`data` + `layout`) as a JSON value, ready for `Plotly.react`.
pub fn figure_json(spec: &ChartSpec) -> serde_json::Result<serde_json::Value> {
    trace!(indicator = %spec.indicator, "Converting chart spec to plotly figure");
    serde_json::from_str(&to_plot(spec).to_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Indicator;

    fn spec(mode: RenderMode) -> ChartSpec {
        let trace = |name: &str, x: Vec<&str>, y: Vec<f64>| Trace {
            name: name.to_string(),
            mode,
            x: x.into_iter().map(String::from).collect(),
            y,
        };
        ChartSpec {
            indicator: Indicator::Inflation,
            title: "Inflation".to_string(),
            x_axis_title: "Year".to_string(),
            y_axis_title: "Inflation".to_string(),
            historical: trace("Historical", vec!["2021", "2022"], vec![1.5, 2.5]),
            forecast: trace("Forecast", vec!["2023"], vec![2.0]),
        }
    }

    #[test]
    fn test_bar_figure() {
        let figure = figure_json(&spec(RenderMode::Bar)).unwrap();
        let data = figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|t| t["type"] == "bar"));
        assert_eq!(data[1]["name"], "Forecast");
        assert_eq!(data[1]["x"][0], "2023");
    }

    #[test]
    fn test_scatter_figure_uses_mode() {
        let figure = figure_json(&spec(RenderMode::Markers)).unwrap();
        let data = figure["data"].as_array().unwrap();
        assert!(data.iter().all(|t| t["type"] == "scatter"));
        assert!(data.iter().all(|t| t["mode"] == "markers"));

        let figure = figure_json(&spec(RenderMode::LinesMarkers)).unwrap();
        assert_eq!(figure["data"][0]["mode"], "lines+markers");
    }

    #[test]
    fn test_layout_titles() {
        let figure = figure_json(&spec(RenderMode::Bar)).unwrap();
        assert_eq!(figure["layout"]["title"]["text"], "Inflation");
        assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Year");
        assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "Inflation");
    }
}
