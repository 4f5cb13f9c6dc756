use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// One of the four tracked economic series.
///
/// The declaration order is the presentation order: dashboard chart slots are
/// positional, so every per-indicator collection follows [`Indicator::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Indicator {
    #[serde(rename = "GDP")]
    Gdp,
    #[serde(rename = "GDP_per_capita")]
    GdpPerCapita,
    #[serde(rename = "Inflation")]
    Inflation,
    #[serde(rename = "Adjusted_Net_National_Income")]
    AdjustedNetNationalIncome,
}

impl Indicator {
    /// All indicators in presentation order.
    pub const ALL: [Indicator; 4] = [
        Indicator::Gdp,
        Indicator::GdpPerCapita,
        Indicator::Inflation,
        Indicator::AdjustedNetNationalIncome,
    ];

    /// Position of this indicator in [`Indicator::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Indicator::Gdp => 0,
            Indicator::GdpPerCapita => 1,
            Indicator::Inflation => 2,
            Indicator::AdjustedNetNationalIncome => 3,
        }
    }

    /// Column holding this indicator in the upstream CSV.
    pub const fn column_name(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::GdpPerCapita => "GDP_per_capita",
            Indicator::Inflation => "Inflation",
            Indicator::AdjustedNetNationalIncome => "Adjusted_Net_National_Income",
        }
    }

    /// DOM id of the chart slot rendering this indicator.
    pub const fn slot_id(self) -> &'static str {
        match self {
            Indicator::Gdp => "gdp-graph",
            Indicator::GdpPerCapita => "gdp-per-capita-graph",
            Indicator::Inflation => "inflation-graph",
            Indicator::AdjustedNetNationalIncome => "anni-graph",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
