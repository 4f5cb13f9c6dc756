use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::chart::RenderMode;
use crate::error::SelectorError;

/// Display language of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "AR")]
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }
}

impl FromStr for Language {
    type Err = SelectorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "EN" => Ok(Language::En),
            "AR" => Ok(Language::Ar),
            other => Err(SelectorError::Language(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Chart style picked by the user.
///
/// The wire token (`lines+markers`, `bar`, `markers`) only identifies the
/// selection; how a style is drawn comes from [`ChartStyle::render_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ChartStyle {
    #[serde(rename = "lines+markers")]
    Line,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "markers")]
    Scatter,
}

impl ChartStyle {
    /// Dropdown order.
    pub const ALL: [ChartStyle; 3] = [ChartStyle::Line, ChartStyle::Bar, ChartStyle::Scatter];

    pub const fn token(self) -> &'static str {
        match self {
            ChartStyle::Line => "lines+markers",
            ChartStyle::Bar => "bar",
            ChartStyle::Scatter => "markers",
        }
    }

    pub const fn render_mode(self) -> RenderMode {
        match self {
            ChartStyle::Line => RenderMode::LinesMarkers,
            ChartStyle::Bar => RenderMode::Bar,
            ChartStyle::Scatter => RenderMode::Markers,
        }
    }
}

impl FromStr for ChartStyle {
    type Err = SelectorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ChartStyle::ALL
            .into_iter()
            .find(|style| style.token() == token)
            .ok_or_else(|| SelectorError::ChartStyle(token.to_string()))
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
