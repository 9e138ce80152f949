use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// A snapshot of rates keyed by currency unit, relative to one implicit base unit.
pub type Rates = HashMap<String, f64>;

#[derive(Debug, Default)]
struct CacheState {
    rates: Rates,
    frozen: bool,
}

/// Thread-safe store of currency rates.
///
/// Every operation goes through one mutex. Sync passes replace data with
/// [`RateCache::load`], conversion queries work on a [`RateCache::copy`].
/// Once [`RateCache::freeze`] returns, mutations are ignored.
#[derive(Debug, Default)]
pub struct RateCache {
    inner: Mutex<CacheState>,
}

impl RateCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheState::default()),
        }
    }

    pub async fn get(&self, unit: &str) -> Option<f64> {
        let state = self.inner.lock().await;
        let value = state.rates.get(unit).copied();
        if value.is_some() {
            debug!(unit, "Rate cache HIT");
        } else {
            debug!(unit, "Rate cache MISS");
        }
        value
    }

    pub async fn set(&self, unit: &str, rate: f64) {
        let mut state = self.inner.lock().await;
        if !state.frozen {
            state.rates.insert(unit.to_string(), rate);
        }
    }

    pub async fn delete(&self, unit: &str) {
        let mut state = self.inner.lock().await;
        if !state.frozen {
            state.rates.remove(unit);
        }
    }

    /// Upserts every entry of `snapshot`. Keys missing from the snapshot are kept.
    ///
    /// Returns false when the cache is frozen and nothing was written.
    pub async fn load(&self, snapshot: &Rates) -> bool {
        let mut state = self.inner.lock().await;
        if state.frozen {
            debug!(count = snapshot.len(), "Rate cache frozen, LOAD skipped");
            return false;
        }
        debug!(count = snapshot.len(), "Rate cache LOAD");
        state
            .rates
            .extend(snapshot.iter().map(|(k, v)| (k.clone(), *v)));
        true
    }

    /// Stops all further mutations. A load already holding the lock finishes first.
    pub async fn freeze(&self) {
        self.inner.lock().await.frozen = true;
    }

    /// Returns a point-in-time copy that can be used without holding the lock.
    pub async fn copy(&self) -> Rates {
        self.inner.lock().await.rates.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.rates.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rates.len()
    }
}
