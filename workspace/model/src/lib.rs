//! Historical data for the tracked indicators.
//!
//! The [`DataStore`] is built once at startup, either from the upstream CSV
//! ([`DataStore::from_csv_path`]) or directly from in-memory series, and is
//! read-only afterwards.

pub mod error;
pub mod ingest;
pub mod series;
pub mod store;

pub use common::Indicator;
pub use error::{DataError, Result};
pub use series::Series;
pub use store::DataStore;
