use cached::{Cached, TimedSizedCache};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::trace;

use super::{validate_horizon, ForecastEngine, ForecastSet};
use crate::error::Result;

/// A caching wrapper for ForecastEngine implementations.
///
/// Forecasts only depend on the horizon, so results are memoized per horizon.
/// Switching language or chart style then reuses the forecasts computed for
/// the current horizon. Output is identical to the wrapped engine.
///
/// Features:
/// - Caches forecast_all results with TTL
/// - Cache clearing functionality
/// - Thread-safe implementation using Arc<Mutex<>>
pub struct CachedForecastEngine<
    T: ForecastEngine,
    C: Cached<usize, ForecastSet> = TimedSizedCache<usize, ForecastSet>,
> {
    /// The wrapped engine
    inner: T,
    /// Cache for forecast_all results, keyed by horizon
    forecast_cache: Arc<Mutex<C>>,
}

impl<T: ForecastEngine, C: Cached<usize, ForecastSet>> CachedForecastEngine<T, C> {
    /// Creates a new caching engine wrapping the provided engine with a custom cache store.
    pub fn new_with_store(inner: T, cache_store: C) -> Self {
        Self {
            inner,
            forecast_cache: Arc::new(Mutex::new(cache_store)),
        }
    }

    /// Clears all cached forecasts.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.forecast_cache.lock() {
            cache.cache_clear();
        }
    }

    /// Returns the current number of cached horizons.
    pub fn cache_size(&self) -> usize {
        if let Ok(cache) = self.forecast_cache.lock() {
            cache.cache_size()
        } else {
            0
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: ForecastEngine> CachedForecastEngine<T, TimedSizedCache<usize, ForecastSet>> {
    /// Creates a new caching engine wrapping the provided engine.
    ///
    /// # Arguments
    /// * `inner` - The engine to wrap with caching
    /// * `cache_size` - Maximum number of horizons kept
    /// * `ttl` - Time to live for cached entries
    pub fn new(inner: T, cache_size: usize, ttl: Duration) -> Self {
        Self::new_with_store(
            inner,
            TimedSizedCache::with_size_and_lifespan(cache_size, ttl.as_secs()),
        )
    }

    /// Creates a new caching engine with default settings.
    ///
    /// Default settings:
    /// - Cache size: 16 entries
    /// - TTL: 5 minutes
    pub fn with_defaults(inner: T) -> Self {
        Self::new(inner, 16, Duration::from_secs(300))
    }
}

impl<T: ForecastEngine, C: Cached<usize, ForecastSet> + Send> ForecastEngine
    for CachedForecastEngine<T, C>
{
    fn forecast_all(&self, horizon: i64) -> Result<ForecastSet> {
        let key = validate_horizon(horizon)?;

        if let Ok(mut cache) = self.forecast_cache.lock() {
            if let Some(cached_result) = cache.cache_get(&key) {
                trace!(horizon, "Forecast cache hit");
                return Ok(cached_result.clone());
            }
        }

        trace!(horizon, "Forecast cache miss");
        let result = self.inner.forecast_all(horizon)?;

        if let Ok(mut cache) = self.forecast_cache.lock() {
            cache.cache_set(key, result.clone());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and forecasts a ramp.
    #[derive(Default)]
    struct CountingEngine {
        calls: AtomicUsize,
    }

    impl ForecastEngine for CountingEngine {
        fn forecast_all(&self, horizon: i64) -> Result<ForecastSet> {
            let periods = validate_horizon(horizon)?;
            self.calls.fetch_add(1, Ordering::SeqCst);
            let ramp: Vec<f64> = (1..=periods).map(|i| i as f64).collect();
            ForecastSet::new(periods, [ramp.clone(), ramp.clone(), ramp.clone(), ramp])
        }
    }

    #[test]
    fn test_cache_reuses_forecasts_per_horizon() {
        let engine = CachedForecastEngine::with_defaults(CountingEngine::default());

        let first = engine.forecast_all(5).unwrap();
        let second = engine.forecast_all(5).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.inner().calls.load(Ordering::SeqCst), 1);

        engine.forecast_all(3).unwrap();
        assert_eq!(engine.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(engine.cache_size(), 2);
    }

    #[test]
    fn test_cache_clearing() {
        let engine = CachedForecastEngine::with_defaults(CountingEngine::default());
        engine.forecast_all(2).unwrap();
        engine.clear_cache();
        assert_eq!(engine.cache_size(), 0);

        engine.forecast_all(2).unwrap();
        assert_eq!(engine.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalid_horizon_is_not_cached() {
        let engine = CachedForecastEngine::with_defaults(CountingEngine::default());
        assert!(matches!(engine.forecast_all(0), Err(ComputeError::InvalidHorizon(0))));
        assert_eq!(engine.cache_size(), 0);
        assert_eq!(engine.inner().calls.load(Ordering::SeqCst), 0);
    }
}
