use crate::core::cache::Rates;
use crate::core::currency::{
    DEFAULT_BASE_UNIT, RateSource, SyncRequest, SyncResponse, rebase, round2,
};
use anyhow::anyhow;
use async_trait::async_trait;
use tracing::debug;

/// Serves a fixed rate table supplied by configuration.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    base_unit: String,
    rates: Rates,
}

impl StaticRateSource {
    pub const TYPE: &'static str = "StaticRateSource";

    /// Unit codes are upper-cased and the base unit's own rate is forced to 1.
    pub fn new(base_unit: &str, rates: &Rates) -> Self {
        let base_unit = if base_unit.is_empty() {
            DEFAULT_BASE_UNIT.to_string()
        } else {
            base_unit.to_uppercase()
        };

        let mut rates: Rates = rates
            .iter()
            .map(|(unit, rate)| (unit.to_uppercase(), *rate))
            .collect();
        rates.insert(base_unit.clone(), 1.0);

        Self { base_unit, rates }
    }

    pub fn base_unit(&self) -> &str {
        &self.base_unit
    }
}

#[async_trait]
impl RateSource for StaticRateSource {
    fn source_type(&self) -> &'static str {
        Self::TYPE
    }

    async fn sync(&self, req: &SyncRequest) -> SyncResponse {
        let resp = SyncResponse::new(req, Self::TYPE);
        let requested = req.base_unit.to_uppercase();

        if requested == self.base_unit {
            let rates = self
                .rates
                .iter()
                .map(|(unit, rate)| (unit.clone(), round2(*rate)))
                .collect();
            return resp.succeed(rates);
        }

        debug!(from = %self.base_unit, to = %requested, "Re-basing static rates");
        match self
            .rates
            .get(&requested)
            .and_then(|pivot| rebase(*pivot, &self.rates))
        {
            Some(rates) => resp.succeed(rates),
            None => resp.fail(anyhow!("base unit not found, baseUnit:{}", requested)),
        }
    }
}
