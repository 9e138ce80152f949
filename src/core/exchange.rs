//! Exchange rate entry: keeps a rate cache fresh from the configured sources
//! and answers conversion queries from it.

use crate::core::cache::{RateCache, Rates};
use crate::core::config::{
    DEFAULT_ENTRY_NAME, DEFAULT_SYNC_INTERVAL_MIN, ExchangeConfig, minutes_to_duration,
};
use crate::core::currency::{DEFAULT_BASE_UNIT, RateSource, SyncRequest, rebase, round2};
use crate::core::plugin::Entry;
use crate::providers::exchange_rate_api::ExchangeRateApiSource;
use crate::providers::static_source::StaticRateSource;
use anyhow::Result;
use async_trait::async_trait;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const ENTRY_TYPE: &str = "ExchangeEntry";
pub const ENTRY_DESCRIPTION: &str = "Collect exchange rate information from remote services";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Idle,
    Starting,
    Running,
    Stopped,
}

enum EntryState {
    Idle,
    // Bootstrap's first pass is in flight
    Starting,
    Running {
        shutdown: watch::Sender<bool>,
        task: JoinHandle<()>,
    },
    Stopped,
}

impl EntryState {
    fn status(&self) -> EntryStatus {
        match self {
            EntryState::Idle => EntryStatus::Idle,
            EntryState::Starting => EntryStatus::Starting,
            EntryState::Running { .. } => EntryStatus::Running,
            EntryState::Stopped => EntryStatus::Stopped,
        }
    }
}

// State shared between the entry and its background sync task.
struct Coordinator {
    base_unit: String,
    cache: RateCache,
    sources: BTreeMap<String, Arc<dyn RateSource>>,
    // Number of completed sync passes
    synced: watch::Sender<u64>,
}

impl Coordinator {
    fn notify_synced(&self) {
        self.synced.send_modify(|passes| *passes += 1);
    }

    /// Tries every non-static source until one succeeds. Returns whether the cache was loaded.
    async fn sync_pass(&self) -> bool {
        let req = SyncRequest::new(&self.base_unit);

        for (source_type, source) in &self.sources {
            if source_type == StaticRateSource::TYPE {
                continue;
            }

            let resp = source.sync(&req).await;
            if !resp.meta.success {
                warn!(
                    source = %source_type,
                    request_id = %resp.meta.request_id,
                    error = ?resp.meta.error,
                    "Rate source sync failed, trying next source"
                );
                continue;
            }

            debug!(
                source = %source_type,
                request_id = %resp.meta.request_id,
                count = resp.rates.len(),
                "Loading synced rates"
            );
            return self.cache.load(&resp.rates).await;
        }

        false
    }

    async fn load_static(&self) -> bool {
        let Some(source) = self.sources.get(StaticRateSource::TYPE) else {
            return false;
        };

        let resp = source.sync(&SyncRequest::new(&self.base_unit)).await;
        if !resp.meta.success {
            warn!(error = ?resp.meta.error, "Static rates unavailable for base unit");
            return false;
        }

        info!(count = resp.rates.len(), "Falling back to static rates");
        self.cache.load(&resp.rates).await
    }
}

async fn run_sync_loop(
    coordinator: Arc<Coordinator>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() {
                    // Entry dropped without interrupt
                    break;
                }
            }
            _ = async {
                tokio::time::sleep(interval).await;
                coordinator.sync_pass().await;
                coordinator.notify_synced();
            } => {}
        }
    }
    debug!("Sync task shutting down");
}

/// Periodically refreshed currency rates for one base unit.
pub struct ExchangeEntry {
    name: String,
    sync_interval: Duration,
    coordinator: Arc<Coordinator>,
    state: Mutex<EntryState>,
}

impl ExchangeEntry {
    pub fn builder() -> ExchangeEntryBuilder {
        ExchangeEntryBuilder::default()
    }

    /// Builds an entry from the `exchange` config block.
    ///
    /// Returns `Ok(None)` when the entry is disabled and an error when the
    /// configuration is invalid; the host is expected to skip registration then.
    pub fn from_config(config: &ExchangeConfig) -> Result<Option<Self>> {
        if !config.enabled {
            debug!("Exchange entry disabled");
            return Ok(None);
        }
        config.validate()?;

        let mut builder = Self::builder()
            .name(&config.name)
            .base_unit(&config.base_unit)
            .sync_interval_min(config.sync_interval_min);

        if config.static_rates.enabled {
            builder = builder.source(StaticRateSource::new(
                &config.base_unit,
                &config.static_rates.currency,
            ));
        }

        let api = &config.provider.exchange_rate_api;
        if api.enabled {
            builder = builder.source(ExchangeRateApiSource::new(
                &api.base_url,
                &config.base_unit,
                &api.api_key,
            ));
        }

        Ok(Some(builder.build()))
    }

    pub fn base_unit(&self) -> &str {
        &self.coordinator.base_unit
    }

    pub fn sync_interval(&self) -> Duration {
        self.sync_interval
    }

    pub fn source_types(&self) -> Vec<&str> {
        self.coordinator.sources.keys().map(String::as_str).collect()
    }

    pub async fn status(&self) -> EntryStatus {
        self.state.lock().await.status()
    }

    /// Runs one sync pass right away. Does nothing once the entry is stopped.
    pub async fn sync_now(&self) -> bool {
        if self.status().await == EntryStatus::Stopped {
            return false;
        }
        let loaded = self.coordinator.sync_pass().await;
        self.coordinator.notify_synced();
        loaded
    }

    /// Receiver that changes after every completed sync pass, bootstrap's included.
    pub fn sync_updates(&self) -> watch::Receiver<u64> {
        self.coordinator.synced.subscribe()
    }

    async fn rates_for(&self, src_unit: &str) -> Option<Rates> {
        let rates = self.coordinator.cache.copy().await;
        let src_unit = src_unit.to_uppercase();

        if src_unit == self.coordinator.base_unit {
            return Some(rates);
        }

        let pivot = *rates.get(&src_unit)?;
        rebase(pivot, &rates)
    }

    /// Rate from `src_unit` to `target_unit`, re-basing the cached table when
    /// `src_unit` is not the base unit.
    pub async fn get_currency(&self, src_unit: &str, target_unit: &str) -> Option<f64> {
        self.rates_for(src_unit)
            .await?
            .get(&target_unit.to_uppercase())
            .copied()
    }

    /// Converts `amount` and rounds to two decimals.
    pub async fn convert(&self, src_unit: &str, target_unit: &str, amount: f64) -> Option<f64> {
        self.get_currency(src_unit, target_unit)
            .await
            .map(|rate| round2(amount * rate))
    }

    /// All rates relative to `src_unit`, empty when the unit is unknown.
    pub async fn list_currency(&self, src_unit: &str) -> Rates {
        self.rates_for(src_unit).await.unwrap_or_default()
    }
}

#[async_trait]
impl Entry for ExchangeEntry {
    async fn bootstrap(&self) {
        {
            let mut state = self.state.lock().await;
            if !matches!(*state, EntryState::Idle) {
                debug!(entry = %self.name, "Entry already bootstrapped");
                return;
            }
            *state = EntryState::Starting;
        }

        info!(
            entry = %self.name,
            base_unit = %self.coordinator.base_unit,
            interval_secs = self.sync_interval.as_secs(),
            "Bootstrapping exchange entry"
        );

        self.coordinator.sync_pass().await;
        if self.coordinator.cache.is_empty().await {
            self.coordinator.load_static().await;
        }
        self.coordinator.notify_synced();

        let mut state = self.state.lock().await;
        if !matches!(*state, EntryState::Starting) {
            debug!(entry = %self.name, "Entry interrupted during bootstrap");
            return;
        }

        let (shutdown, rx) = watch::channel(false);
        let task = tokio::spawn(run_sync_loop(
            Arc::clone(&self.coordinator),
            self.sync_interval,
            rx,
        ));
        *state = EntryState::Running { shutdown, task };
    }

    async fn interrupt(&self) {
        let previous = {
            let mut state = self.state.lock().await;
            std::mem::replace(&mut *state, EntryState::Stopped)
        };
        if matches!(previous, EntryState::Stopped) {
            return;
        }

        info!(entry = %self.name, "Interrupting exchange entry");
        // A pass still in flight can no longer write once this returns
        self.coordinator.cache.freeze().await;

        if let EntryState::Running { shutdown, task } = previous {
            shutdown.send_replace(true);
            if let Err(e) = task.await {
                warn!(error = %e, "Sync task ended abnormally");
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn entry_type(&self) -> &str {
        ENTRY_TYPE
    }

    fn description(&self) -> &str {
        ENTRY_DESCRIPTION
    }
}

impl Serialize for ExchangeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("entryName", self.name())?;
        map.serialize_entry("entryType", self.entry_type())?;
        map.serialize_entry("entryDescription", self.description())?;
        map.serialize_entry("syncers", &self.source_types())?;
        map.end()
    }
}

impl Display for ExchangeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

pub struct ExchangeEntryBuilder {
    name: String,
    base_unit: String,
    sync_interval: Duration,
    sources: BTreeMap<String, Arc<dyn RateSource>>,
}

impl Default for ExchangeEntryBuilder {
    fn default() -> Self {
        ExchangeEntryBuilder {
            name: DEFAULT_ENTRY_NAME.to_string(),
            base_unit: DEFAULT_BASE_UNIT.to_string(),
            sync_interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_MIN as u64 * 60),
            sources: BTreeMap::new(),
        }
    }
}

impl ExchangeEntryBuilder {
    pub fn name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.name = name.to_string();
        }
        self
    }

    pub fn base_unit(mut self, base_unit: &str) -> Self {
        if !base_unit.is_empty() {
            self.base_unit = base_unit.to_uppercase();
        }
        self
    }

    /// Non-positive or out of range values keep the default of one day.
    pub fn sync_interval_min(self, minutes: i64) -> Self {
        match minutes_to_duration(minutes) {
            Some(interval) => self.sync_interval(interval),
            None => self,
        }
    }

    pub fn sync_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.sync_interval = interval;
        }
        self
    }

    /// Adds a source, replacing any earlier source of the same type.
    pub fn source<S: RateSource + 'static>(mut self, source: S) -> Self {
        self.sources
            .insert(source.source_type().to_string(), Arc::new(source));
        self
    }

    pub fn build(self) -> ExchangeEntry {
        ExchangeEntry {
            name: self.name,
            sync_interval: self.sync_interval,
            coordinator: Arc::new(Coordinator {
                base_unit: self.base_unit,
                cache: RateCache::new(),
                sources: self.sources,
                synced: watch::Sender::new(0),
            }),
            state: Mutex::new(EntryState::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::SyncResponse;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // MockRateSource returns a fixed table, or fails when `rates` is None
    struct MockRateSource {
        source_type: &'static str,
        rates: Option<Rates>,
        call_count: Arc<AtomicUsize>,
    }

    impl MockRateSource {
        fn new(source_type: &'static str, rates: Option<Rates>) -> (Self, Arc<AtomicUsize>) {
            let call_count = Arc::new(AtomicUsize::new(0));
            let source = MockRateSource {
                source_type,
                rates,
                call_count: Arc::clone(&call_count),
            };
            (source, call_count)
        }
    }

    #[async_trait]
    impl RateSource for MockRateSource {
        fn source_type(&self) -> &'static str {
            self.source_type
        }

        async fn sync(&self, req: &SyncRequest) -> SyncResponse {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            let resp = SyncResponse::new(req, self.source_type);
            match &self.rates {
                Some(rates) => resp.succeed(rates.clone()),
                None => resp.fail(anyhow!("{} unavailable", self.source_type)),
            }
        }
    }

    // SlowRateSource takes `delay` per sync and reports EUR as the number of calls so far
    struct SlowRateSource {
        delay: Duration,
        call_count: Arc<AtomicUsize>,
    }

    impl SlowRateSource {
        fn new(delay: Duration) -> (Self, Arc<AtomicUsize>) {
            let call_count = Arc::new(AtomicUsize::new(0));
            let source = SlowRateSource {
                delay,
                call_count: Arc::clone(&call_count),
            };
            (source, call_count)
        }
    }

    #[async_trait]
    impl RateSource for SlowRateSource {
        fn source_type(&self) -> &'static str {
            "Slow"
        }

        async fn sync(&self, req: &SyncRequest) -> SyncResponse {
            let calls = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::time::sleep(self.delay).await;
            SyncResponse::new(req, "Slow").succeed(Rates::from([("EUR".to_string(), calls as f64)]))
        }
    }

    fn static_entry() -> ExchangeEntry {
        ExchangeEntry::builder()
            .base_unit("USD")
            .source(StaticRateSource::new(
                "USD",
                &Rates::from([("EUR".to_string(), 0.9)]),
            ))
            .build()
    }

    #[tokio::test]
    async fn test_bootstrap_with_static_source_only() {
        let entry = static_entry();
        entry.bootstrap().await;

        assert_eq!(entry.status().await, EntryStatus::Running);
        let rates = entry.list_currency("USD").await;
        assert_eq!(
            rates,
            Rates::from([("USD".to_string(), 1.0), ("EUR".to_string(), 0.9)])
        );

        entry.interrupt().await;
    }

    #[tokio::test]
    async fn test_get_currency_and_convert() {
        let entry = static_entry();
        entry.bootstrap().await;

        assert_eq!(entry.get_currency("EUR", "USD").await, Some(1.11));
        assert_eq!(entry.get_currency("eur", "eur").await, Some(1.0));
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(0.9));
        assert_eq!(entry.get_currency("USD", "JPY").await, None);
        assert_eq!(entry.get_currency("JPY", "USD").await, None);

        assert_eq!(entry.convert("USD", "USD", 12.5).await, Some(12.5));
        assert_eq!(entry.convert("USD", "EUR", 100.0).await, Some(90.0));
        assert_eq!(entry.convert("EUR", "USD", 10.0).await, Some(11.1));
        assert_eq!(entry.convert("XYZ", "USD", 10.0).await, None);

        assert!(entry.list_currency("XYZ").await.is_empty());
        let eur = entry.list_currency("EUR").await;
        assert_eq!(eur["EUR"], 1.0);
        assert_eq!(eur["USD"], 1.11);

        entry.interrupt().await;
    }

    #[tokio::test]
    async fn test_remote_source_wins_over_static() {
        let (remote, remote_calls) = MockRateSource::new(
            "Remote",
            Some(Rates::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.95),
            ])),
        );
        let entry = ExchangeEntry::builder()
            .source(StaticRateSource::new(
                "USD",
                &Rates::from([("EUR".to_string(), 0.9)]),
            ))
            .source(remote)
            .build();

        entry.bootstrap().await;

        assert_eq!(remote_calls.load(Ordering::SeqCst), 1);
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(0.95));
        entry.interrupt().await;
    }

    #[tokio::test]
    async fn test_sync_pass_stops_at_first_success() {
        // BTreeMap ordering makes "A" run before "B" and "C"
        let (failing, failing_calls) = MockRateSource::new("A", None);
        let (working, working_calls) =
            MockRateSource::new("B", Some(Rates::from([("EUR".to_string(), 0.5)])));
        let (unused, unused_calls) =
            MockRateSource::new("C", Some(Rates::from([("EUR".to_string(), 0.7)])));

        let entry = ExchangeEntry::builder()
            .source(failing)
            .source(working)
            .source(unused)
            .build();

        assert!(entry.sync_now().await);
        assert_eq!(failing_calls.load(Ordering::SeqCst), 1);
        assert_eq!(working_calls.load(Ordering::SeqCst), 1);
        assert_eq!(unused_calls.load(Ordering::SeqCst), 0);
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(0.5));
    }

    #[tokio::test]
    async fn test_all_sources_failing_leaves_cache_empty() {
        let (failing, _) = MockRateSource::new("Remote", None);
        let entry = ExchangeEntry::builder().source(failing).build();

        entry.bootstrap().await;

        assert!(entry.list_currency("USD").await.is_empty());
        assert_eq!(entry.convert("USD", "EUR", 1.0).await, None);
        entry.interrupt().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_background_sync_runs_every_interval() {
        let (remote, calls) =
            MockRateSource::new("Remote", Some(Rates::from([("EUR".to_string(), 0.9)])));
        let entry = ExchangeEntry::builder()
            .sync_interval(Duration::from_secs(60))
            .source(remote)
            .build();

        entry.bootstrap().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        entry.interrupt().await;
        assert_eq!(entry.status().await, EntryStatus::Stopped);

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_updates_follow_loaded_rates() {
        let (slow, calls) = SlowRateSource::new(Duration::from_secs(5));
        let entry = ExchangeEntry::builder()
            .sync_interval(Duration::from_secs(60))
            .source(slow)
            .build();

        entry.bootstrap().await;
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(1.0));

        let mut updates = entry.sync_updates();
        updates.borrow_and_update();
        let started = tokio::time::Instant::now();

        // Each change is seen only after the new rates are in the cache
        updates.changed().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(65));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(2.0));

        updates.changed().await.unwrap();
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(3.0));

        assert!(entry.sync_now().await);
        assert!(updates.has_changed().unwrap());
        assert_eq!(entry.get_currency("USD", "EUR").await, Some(4.0));

        entry.interrupt().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_during_slow_bootstrap() {
        let (slow, calls) = SlowRateSource::new(Duration::from_secs(30));
        let entry = Arc::new(
            ExchangeEntry::builder()
                .sync_interval(Duration::from_secs(60))
                .source(slow)
                .build(),
        );

        let bootstrapping = tokio::spawn({
            let entry = Arc::clone(&entry);
            async move { entry.bootstrap().await }
        });
        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // The state lock is free while the first pass is in flight
        let started = tokio::time::Instant::now();
        assert_eq!(entry.status().await, EntryStatus::Starting);
        entry.interrupt().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(!entry.sync_now().await);

        bootstrapping.await.unwrap();
        assert_eq!(entry.status().await, EntryStatus::Stopped);
        assert!(entry.list_currency("USD").await.is_empty());

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_interrupt_freezes_cache() {
        let (remote, calls) =
            MockRateSource::new("Remote", Some(Rates::from([("EUR".to_string(), 0.9)])));
        let entry = ExchangeEntry::builder()
            .sync_interval(Duration::from_secs(3600))
            .source(remote)
            .build();

        entry.bootstrap().await;
        // Completes promptly even though the task is mid-sleep
        entry.interrupt().await;

        assert!(!entry.sync_now().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // No transitions out of stopped
        entry.bootstrap().await;
        assert_eq!(entry.status().await, EntryStatus::Stopped);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_twice_is_noop() {
        let (remote, calls) =
            MockRateSource::new("Remote", Some(Rates::from([("EUR".to_string(), 0.9)])));
        let entry = ExchangeEntry::builder().source(remote).build();

        entry.bootstrap().await;
        entry.bootstrap().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        entry.interrupt().await;
    }

    #[test]
    fn test_builder_ignores_invalid_options() {
        let entry = ExchangeEntry::builder()
            .name("")
            .base_unit("")
            .sync_interval_min(0)
            .sync_interval_min(-5)
            .sync_interval_min(i64::MAX)
            .build();

        assert_eq!(entry.name(), DEFAULT_ENTRY_NAME);
        assert_eq!(entry.base_unit(), "USD");
        assert_eq!(
            entry.sync_interval(),
            Duration::from_secs(DEFAULT_SYNC_INTERVAL_MIN as u64 * 60)
        );

        let entry = ExchangeEntry::builder()
            .base_unit("eur")
            .sync_interval_min(5)
            .build();
        assert_eq!(entry.base_unit(), "EUR");
        assert_eq!(entry.sync_interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_json_introspection() {
        let (remote, _) = MockRateSource::new("Remote", None);
        let entry = ExchangeEntry::builder()
            .name("rates")
            .source(StaticRateSource::new("USD", &Rates::new()))
            .source(remote)
            .build();

        let json: serde_json::Value = serde_json::from_str(&entry.to_string()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entryName": "rates",
                "entryType": ENTRY_TYPE,
                "entryDescription": ENTRY_DESCRIPTION,
                "syncers": ["Remote", StaticRateSource::TYPE],
            })
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = ExchangeConfig::default();
        assert!(ExchangeEntry::from_config(&config).unwrap().is_none());

        config.enabled = true;
        config.base_unit = "eur".to_string();
        config.sync_interval_min = 15;
        config.static_rates.enabled = true;
        config.static_rates.currency = Rates::from([("USD".to_string(), 1.1)]);
        config.provider.exchange_rate_api.enabled = true;
        config.provider.exchange_rate_api.api_key = "key".to_string();

        let entry = ExchangeEntry::from_config(&config).unwrap().unwrap();
        assert_eq!(entry.base_unit(), "EUR");
        assert_eq!(entry.sync_interval(), Duration::from_secs(900));
        assert_eq!(
            entry.source_types(),
            vec![ExchangeRateApiSource::TYPE, StaticRateSource::TYPE]
        );

        config.static_rates.currency = Rates::from([("USD".to_string(), 0.0)]);
        assert!(ExchangeEntry::from_config(&config).is_err());

        config.static_rates.currency = Rates::from([("USD".to_string(), 1.1)]);
        config.sync_interval_min = i64::MAX;
        let err = ExchangeEntry::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("syncIntervalMin"));
    }
}
