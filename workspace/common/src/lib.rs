//! Common transport-layer types shared between the backend and any dashboard client.
//! These structs describe the selectors a user can change, the localized text the
//! dashboard shows, and the chart specifications the backend emits.

mod chart;
mod error;
mod figure;
mod indicator;
mod locale;
mod selector;

pub use chart::{ChartSpec, RenderMode, Trace};
pub use error::{Result, SelectorError};
pub use figure::{figure_json, to_plot};
pub use indicator::Indicator;
pub use locale::{
    resolve, LayoutSpec, LayoutStyle, LocaleBundle, NumeralSystem, StyleOption, TextDirection,
};
pub use selector::{ChartStyle, Language};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
