use common::Indicator;
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::error::{DataError, Result};

/// Annual history of one indicator.
///
/// Periods are contiguous years starting at `start`, so the series is stored as
/// a start year plus values; it always holds at least one finite value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    indicator: Indicator,
    start: i32,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series from explicit `(period, value)` columns.
    pub fn new(indicator: Indicator, periods: &[i32], values: Vec<f64>) -> Result<Self> {
        if periods.len() != values.len() {
            return Err(DataError::LengthMismatch {
                indicator,
                periods: periods.len(),
                values: values.len(),
            });
        }
        let Some(&start) = periods.first() else {
            return Err(DataError::NoObservations(indicator));
        };
        for pair in periods.windows(2) {
            if pair[1] != pair[0] + 1 {
                return Err(DataError::NonContiguous {
                    indicator,
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Self::from_start(indicator, start, values)
    }

    /// Creates a series whose first value belongs to `start`.
    pub fn from_start(indicator: Indicator, start: i32, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(DataError::NoObservations(indicator));
        }
        if let Some(offset) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFinite {
                indicator,
                period: start + offset as i32,
            });
        }
        Ok(Self {
            indicator,
            start,
            values,
        })
    }

    /// Builds a series from a year column and an interpolated value column.
    ///
    /// Leading gaps cannot be filled forward, so the series starts at the first
    /// observed year. Trailing gaps repeat the last observed value.
    pub fn from_observations(
        indicator: Indicator,
        periods: &[i32],
        observed: &[Option<f64>],
    ) -> Result<Self> {
        if periods.len() != observed.len() {
            return Err(DataError::LengthMismatch {
                indicator,
                periods: periods.len(),
                values: observed.len(),
            });
        }
        let first = observed
            .iter()
            .position(Option::is_some)
            .ok_or(DataError::NoObservations(indicator))?;

        let mut last_seen = f64::NAN;
        let values: Vec<f64> = observed[first..]
            .iter()
            .map(|value| {
                if let Some(value) = value {
                    last_seen = *value;
                }
                last_seen
            })
            .collect();

        Self::new(indicator, &periods[first..], values)
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_period(&self) -> i32 {
        self.start
    }

    pub fn last_period(&self) -> i32 {
        self.start + self.values.len() as i32 - 1
    }

    pub fn periods(&self) -> RangeInclusive<i32> {
        self.first_period()..=self.last_period()
    }

    /// The `horizon` periods directly following the last observation.
    pub fn forecast_periods(&self, horizon: usize) -> RangeInclusive<i32> {
        let last = self.last_period();
        (last + 1)..=(last + horizon as i32)
    }

    /// `(period, value)` pairs in period order.
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.periods().zip(self.values.iter().copied())
    }
}
