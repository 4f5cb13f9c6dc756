use common::{
    ApiResponse, ChartSpec, ChartStyle, Indicator, Language, LayoutSpec, LayoutStyle, RenderMode,
    StyleOption, TextDirection, Trace,
};
use compute::bank::ModelBank;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::controller::Dashboard;

/// Language shown when the request does not pick one
pub const DEFAULT_LANGUAGE: Language = Language::Ar;
/// Chart style shown when the request does not pick one
pub const DEFAULT_STYLE: ChartStyle = ChartStyle::Line;
/// Forecast horizon shown when the request does not pick one
pub const DEFAULT_HORIZON: i64 = 5;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Historical data and forecast engine
    pub dashboard: Arc<Dashboard>,
    /// Fitted model descriptions, computed once at startup
    pub models: Arc<Vec<ModelResponse>>,
    /// Cache for rendered responses
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Charts(Arc<Vec<ChartSpec>>),
    Figures(Arc<Vec<serde_json::Value>>),
}

/// Query parameters for the layout endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct LayoutQuery {
    /// Display language, `EN` or `AR` (default: AR)
    pub language: Option<String>,
}

/// Query parameters for the chart endpoints
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ChartsQuery {
    /// Forecast horizon in years, 1 to 10 (default: 5)
    #[validate(range(min = 1, max = 10))]
    pub horizon: Option<i64>,
    /// Display language, `EN` or `AR` (default: AR)
    pub language: Option<String>,
    /// Chart style: `lines+markers`, `bar` or `markers` (default: lines+markers)
    pub style: Option<String>,
}

impl ChartsQuery {
    pub fn horizon(&self) -> i64 {
        self.horizon.unwrap_or(DEFAULT_HORIZON)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE.code())
    }

    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or(DEFAULT_STYLE.token())
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of indicators with a fitted model
    pub indicators: usize,
}

/// Fitted model for one indicator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelResponse {
    pub indicator: Indicator,
    /// Model name, e.g. `ARIMA(1,1,0)`
    pub model: String,
    /// Autoregressive order
    pub p: Option<usize>,
    /// Differencing order
    pub d: Option<usize>,
    /// Moving-average order
    pub q: Option<usize>,
    /// Akaike information criterion of the selected fit
    pub aic: Option<f64>,
    /// Number of historical observations the model was fitted on
    pub observations: usize,
}

impl ModelResponse {
    pub fn from_bank(bank: &ModelBank) -> Vec<Self> {
        bank.summaries()
            .into_iter()
            .map(|(indicator, summary)| Self {
                indicator,
                model: summary.name,
                p: summary.order.map(|order| order.p),
                d: summary.order.map(|order| order.d),
                q: summary.order.map(|order| order.q),
                aic: summary.aic,
                observations: summary.observations,
            })
            .collect()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::layout::get_layout,
        crate::handlers::charts::get_charts,
        crate::handlers::charts::get_figures,
        crate::handlers::models::get_models,
    ),
    components(
        schemas(
            ApiResponse<LayoutSpec>,
            ApiResponse<Vec<ChartSpec>>,
            ApiResponse<Vec<ModelResponse>>,
            ErrorResponse,
            HealthResponse,
            LayoutQuery,
            ChartsQuery,
            ModelResponse,
            LayoutSpec,
            LayoutStyle,
            StyleOption,
            TextDirection,
            ChartSpec,
            Trace,
            RenderMode,
            ChartStyle,
            Language,
            Indicator,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard layout and chart endpoints"),
        (name = "models", description = "Fitted forecasting models"),
    ),
    info(
        title = "Econcast API",
        description = "Bilingual economic indicator dashboard with ARIMA forecasts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
