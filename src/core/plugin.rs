//! Lifecycle contract between the host application and its entries

use async_trait::async_trait;

/// A component the host application bootstraps at startup and interrupts on shutdown.
///
/// Entries are constructed explicitly from configuration and handed to the
/// host, which owns their lifetime.
#[async_trait]
pub trait Entry: Send + Sync {
    async fn bootstrap(&self);

    async fn interrupt(&self);

    fn name(&self) -> &str;

    fn entry_type(&self) -> &str;

    fn description(&self) -> &str;
}
