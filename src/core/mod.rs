//! Core exchange rate abstractions

pub mod cache;
pub mod config;
pub mod currency;
pub mod exchange;
pub mod log;
pub mod plugin;

// Re-export main types for cleaner imports
pub use cache::{RateCache, Rates};
pub use currency::{RateSource, SyncRequest, SyncResponse};
pub use exchange::{EntryStatus, ExchangeEntry};
pub use plugin::Entry;
