//! Host runtime context
//!
//! The context object a lifecycle operation runs against: it owns the keyed
//! data registry and the handle used to forward platform setup/unload to the
//! host runtime. Integrations never touch global state; everything goes
//! through a `RuntimeContext` passed into each call.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::entry::ConfigEntry;
use crate::platform::Platform;
use crate::registry::DataRegistry;

/// Errors surfaced by the host's platform forwarding calls
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("platform setup forwarding failed for {platform}: {reason}")]
    ForwardFailed { platform: Platform, reason: String },

    #[error("platform unload failed for {platform}: {reason}")]
    UnloadFailed { platform: Platform, reason: String },
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// The host runtime contract consumed by integration lifecycle code.
///
/// Both operations are awaited at a single suspension point; retry, backoff
/// and timeout policy all live on the host side of this trait.
#[async_trait]
pub trait PlatformForwarder: Send + Sync {
    /// Forward config entry setup to the given platforms.
    ///
    /// Resolves once every platform confirmed initialization; a failure in
    /// any platform surfaces as an error.
    async fn forward_entry_setups(
        &self,
        entry: &ConfigEntry,
        platforms: &[Platform],
    ) -> PlatformResult<()>;

    /// Unload the given platforms for a config entry.
    ///
    /// `Ok(false)` means the host declined or failed the unload in a way it
    /// reports as an outcome rather than an error.
    async fn unload_platforms(
        &self,
        entry: &ConfigEntry,
        platforms: &[Platform],
    ) -> PlatformResult<bool>;
}

/// Host runtime context passed into every lifecycle operation
pub struct RuntimeContext {
    forwarder: Arc<dyn PlatformForwarder>,
    data: DataRegistry,
}

impl RuntimeContext {
    pub fn new(forwarder: Arc<dyn PlatformForwarder>) -> Self {
        Self {
            forwarder,
            data: DataRegistry::new(),
        }
    }

    /// The per-entry data registry
    pub fn data(&self) -> &DataRegistry {
        &self.data
    }

    /// Forward entry setup to the host runtime
    pub async fn forward_entry_setups(
        &self,
        entry: &ConfigEntry,
        platforms: &[Platform],
    ) -> PlatformResult<()> {
        self.forwarder.forward_entry_setups(entry, platforms).await
    }

    /// Ask the host runtime to unload platforms for an entry
    pub async fn unload_platforms(
        &self,
        entry: &ConfigEntry,
        platforms: &[Platform],
    ) -> PlatformResult<bool> {
        self.forwarder.unload_platforms(entry, platforms).await
    }
}
