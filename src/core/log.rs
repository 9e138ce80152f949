//! Logging setup for the `exrate` binary.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Installs the global subscriber. Logs go to stderr so rate tables on stdout stay clean.
///
/// Sync failures are logged at `warn`, so they stay visible without `--verbose`.
pub fn init_logging(verbose: bool) {
    let (level_filter, level) = if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::WARN, "warn")
    };
    let app_filter = Targets::new().with_target(LOG_TARGET, level_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}
