pub mod exchange_rate_api;
pub mod static_source;

pub use exchange_rate_api::ExchangeRateApiSource;
pub use static_source::StaticRateSource;
