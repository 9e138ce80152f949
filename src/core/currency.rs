//! Currency rate source abstractions

use crate::core::cache::Rates;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default base unit when none is configured.
pub const DEFAULT_BASE_UNIT: &str = "USD";

/// Asks a source for rates expressed relative to `base_unit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub base_unit: String,
}

impl SyncRequest {
    pub fn new(base_unit: &str) -> Self {
        Self {
            base_unit: base_unit.to_uppercase(),
        }
    }
}

#[derive(Debug)]
pub struct SyncMeta {
    pub request_id: String,
    pub success: bool,
    pub source_type: String,
    pub sync_time: DateTime<Utc>,
    pub error: Option<anyhow::Error>,
}

/// Outcome of one sync attempt against a single source.
#[derive(Debug)]
pub struct SyncResponse {
    pub meta: SyncMeta,
    pub base_unit: String,
    pub rates: Rates,
}

impl SyncResponse {
    /// Creates an unsuccessful, empty response for `req`.
    pub fn new(req: &SyncRequest, source_type: &str) -> Self {
        Self {
            meta: SyncMeta {
                request_id: Uuid::new_v4().to_string(),
                success: false,
                source_type: source_type.to_string(),
                sync_time: Utc::now(),
                error: None,
            },
            base_unit: req.base_unit.clone(),
            rates: Rates::new(),
        }
    }

    /// Marks the response failed with `error`, dropping any partial rates.
    pub fn fail(mut self, error: anyhow::Error) -> Self {
        self.meta.success = false;
        self.meta.error = Some(error);
        self.rates.clear();
        self
    }

    pub fn succeed(mut self, rates: Rates) -> Self {
        self.meta.success = true;
        self.meta.error = None;
        self.rates = rates;
        self
    }
}

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Stable identifier of the source kind, e.g. `StaticRateSource`.
    fn source_type(&self) -> &'static str;

    async fn sync(&self, req: &SyncRequest) -> SyncResponse;
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Re-expresses `rates` relative to the unit whose rate is `pivot_rate`.
///
/// Returns `None` when the pivot is zero or not finite.
pub fn rebase(pivot_rate: f64, rates: &Rates) -> Option<Rates> {
    if pivot_rate == 0.0 || !pivot_rate.is_finite() {
        return None;
    }

    Some(
        rates
            .iter()
            .map(|(unit, rate)| (unit.clone(), round2(1.0 / pivot_rate * rate)))
            .collect(),
    )
}
