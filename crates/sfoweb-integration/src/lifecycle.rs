//! Entry lifecycle
//!
//! Setup wires a configured account to a scraper handle, registers it under
//! `(DOMAIN, entry_id)` and forwards setup to the sensor platform. Unload
//! reverses that on host confirmation; reload is unload followed by setup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use sfoweb_core::{ConfigEntry, Platform, PlatformError, RuntimeContext};

use crate::scraper::SfoScraper;

/// Integration domain within the host's registry
pub const DOMAIN: &str = "sfoweb";

/// Platforms this integration forwards entries to
pub const PLATFORMS: &[Platform] = &[Platform::Sensor];

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum SfowebError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

pub type SfowebResult<T> = Result<T, SfowebError>;

/// Per-entry resources kept in the registry for the lifetime of a loaded entry
pub struct EntryResources {
    pub scraper: Arc<SfoScraper>,
}

/// Set up a config entry.
///
/// Builds a scraper from the entry's credentials, registers it, then forwards
/// setup to [`PLATFORMS`]. Returns `Ok(true)` once the host confirms the
/// platforms initialized. If forwarding fails, the just-registered bundle is
/// removed again so a registered entry always means a fully forwarded one.
pub async fn setup_entry(ctx: &RuntimeContext, entry: &ConfigEntry) -> SfowebResult<bool> {
    let scraper = Arc::new(SfoScraper::new(
        entry.data.username.clone(),
        entry.data.password.clone(),
    ));
    debug!(
        entry_id = %entry.entry_id,
        username = %scraper.username(),
        "created scraper for entry"
    );

    ctx.data().insert(
        DOMAIN,
        &entry.entry_id,
        Arc::new(EntryResources { scraper }),
    );

    if let Err(err) = ctx.forward_entry_setups(entry, PLATFORMS).await {
        let _ = ctx.data().remove(DOMAIN, &entry.entry_id);
        return Err(err.into());
    }

    info!(entry_id = %entry.entry_id, title = %entry.title, "set up entry");
    Ok(true)
}

/// Unload a config entry.
///
/// Asks the host to unload [`PLATFORMS`]; on confirmation removes the entry's
/// resources (and the domain bucket once empty). On a reported failure the
/// registry is left untouched so a retried unload still finds the scraper.
pub async fn unload_entry(ctx: &RuntimeContext, entry: &ConfigEntry) -> SfowebResult<bool> {
    let unloaded = ctx.unload_platforms(entry, PLATFORMS).await?;

    if unloaded {
        let _ = ctx.data().remove(DOMAIN, &entry.entry_id);
        info!(entry_id = %entry.entry_id, title = %entry.title, "unloaded entry");
    } else {
        warn!(entry_id = %entry.entry_id, "host reported platform unload failure");
    }

    Ok(unloaded)
}

/// Reload a config entry: unload, then set up again.
///
/// The host's unload outcome does not abort the reload; setup replaces
/// whatever the registry still holds. No compensating action is taken if
/// setup fails after a successful unload.
pub async fn reload_entry(ctx: &RuntimeContext, entry: &ConfigEntry) -> SfowebResult<()> {
    unload_entry(ctx, entry).await?;
    setup_entry(ctx, entry).await?;
    Ok(())
}
