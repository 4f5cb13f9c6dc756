use thiserror::Error;

/// Errors raised while turning raw selector tokens into typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A language token outside the supported set
    #[error("Unknown language selector: {0}")]
    Language(String),

    /// A chart style token outside the supported set
    #[error("Unknown chart style selector: {0}")]
    ChartStyle(String),
}

impl SelectorError {
    /// The raw token that failed to resolve.
    pub fn token(&self) -> &str {
        match self {
            SelectorError::Language(token) | SelectorError::ChartStyle(token) => token,
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
