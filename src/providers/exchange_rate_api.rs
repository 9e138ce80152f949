use crate::core::cache::Rates;
use crate::core::currency::{RateSource, SyncRequest, SyncResponse, round2};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

// ExchangeRateApiSource implementation of RateSource, backed by exchangerate-api.com
pub struct ExchangeRateApiSource {
    base_url: String,
    base_unit: String,
    api_key: String,
}

impl ExchangeRateApiSource {
    pub const TYPE: &'static str = "ExchangeRateApiSource";

    pub fn new(base_url: &str, base_unit: &str, api_key: &str) -> Self {
        ExchangeRateApiSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            base_unit: base_unit.to_uppercase(),
            api_key: api_key.to_string(),
        }
    }

    fn latest_url(&self) -> String {
        format!(
            "{}/v6/{}/latest/{}",
            self.base_url, self.api_key, self.base_unit
        )
    }

    async fn fetch_rates(&self) -> Result<Rates> {
        let url = self.latest_url();
        debug!(base_unit = %self.base_unit, "Requesting latest rates");

        let client = reqwest::Client::builder()
            .user_agent("exrate/1.0")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base unit: {}", e, self.base_unit))?;

        let text = response.text().await.map_err(|e| {
            anyhow!(
                "Failed to read response body for base unit {}: {}",
                self.base_unit,
                e
            )
        })?;

        let data: LatestRatesResponse = serde_json::from_str(&text).map_err(|e| {
            anyhow!(
                "Failed to parse JSON response for {}: {}",
                self.base_unit,
                e
            )
        })?;

        if data.result == "error" {
            return Err(anyhow!(
                "Exchange rate API error: {} for base unit: {}",
                data.error_type.as_deref().unwrap_or("unknown"),
                self.base_unit
            ));
        }

        let conversion_rates = data.conversion_rates.ok_or_else(|| {
            anyhow!(
                "No conversion rates found for base unit: {}",
                self.base_unit
            )
        })?;

        debug!(
            base_code = ?data.base_code,
            count = conversion_rates.len(),
            "Received latest rates"
        );

        Ok(conversion_rates
            .into_iter()
            .map(|(unit, rate)| (unit, round2(rate)))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    result: String,
    base_code: Option<String>,
    conversion_rates: Option<Rates>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    fn source_type(&self) -> &'static str {
        Self::TYPE
    }

    #[instrument(
        name = "ExchangeRateApiSync",
        skip(self, req),
        fields(base_unit = %self.base_unit)
    )]
    async fn sync(&self, req: &SyncRequest) -> SyncResponse {
        let resp = SyncResponse::new(req, Self::TYPE);

        match self.fetch_rates().await {
            Ok(rates) => resp.succeed(rates),
            Err(e) => {
                warn!(error = %e, "Exchange rate sync failed");
                resp.fail(e)
            }
        }
    }
}
