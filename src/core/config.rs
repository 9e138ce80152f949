use crate::core::cache::Rates;
use crate::core::currency::DEFAULT_BASE_UNIT;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

pub const DEFAULT_ENTRY_NAME: &str = "ExchangeEntry";
pub const DEFAULT_SYNC_INTERVAL_MIN: i64 = 60 * 24;
pub const DEFAULT_EXCHANGE_RATE_API_URL: &str = "https://v6.exchangerate-api.com";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub currency: Rates,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateApiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_exchange_rate_api_url")]
    pub base_url: String,
}

impl Default for ExchangeRateApiConfig {
    fn default() -> Self {
        ExchangeRateApiConfig {
            enabled: false,
            api_key: String::new(),
            base_url: default_exchange_rate_api_url(),
        }
    }
}

fn default_exchange_rate_api_url() -> String {
    DEFAULT_EXCHANGE_RATE_API_URL.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default)]
    pub exchange_rate_api: ExchangeRateApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_entry_name")]
    pub name: String,
    #[serde(default = "default_sync_interval_min")]
    pub sync_interval_min: i64,
    #[serde(default = "default_base_unit")]
    pub base_unit: String,
    #[serde(default, rename = "static")]
    pub static_rates: StaticConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig {
            enabled: false,
            name: default_entry_name(),
            sync_interval_min: default_sync_interval_min(),
            base_unit: default_base_unit(),
            static_rates: StaticConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

fn default_entry_name() -> String {
    DEFAULT_ENTRY_NAME.to_string()
}

fn default_sync_interval_min() -> i64 {
    DEFAULT_SYNC_INTERVAL_MIN
}

fn default_base_unit() -> String {
    DEFAULT_BASE_UNIT.to_string()
}

/// Converts a minute count into a [`Duration`], `None` when non-positive or too large.
pub fn minutes_to_duration(minutes: i64) -> Option<Duration> {
    u64::try_from(minutes)
        .ok()
        .filter(|m| *m > 0)
        .and_then(|m| m.checked_mul(60))
        .map(Duration::from_secs)
}

impl ExchangeConfig {
    /// Rejects settings that would make the entry misbehave at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.sync_interval_min > 0 && minutes_to_duration(self.sync_interval_min).is_none() {
            bail!("syncIntervalMin {} is out of range", self.sync_interval_min);
        }

        if self.static_rates.enabled {
            for (unit, rate) in &self.static_rates.currency {
                if !rate.is_finite() || *rate <= 0.0 {
                    bail!("Invalid static rate for {unit}: {rate}, rates must be positive");
                }
            }
        }

        let api = &self.provider.exchange_rate_api;
        if api.enabled && api.api_key.trim().is_empty() {
            bail!("provider.exchangeRateApi is enabled but apiKey is empty");
        }

        Ok(())
    }
}

/// Boot configuration file, with the exchange entry under the `exchange` key.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BootConfig {
    #[serde(default)]
    pub exchange: ExchangeConfig,
}

impl BootConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "exrate", "exrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
