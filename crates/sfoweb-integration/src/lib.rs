//! SFOWeb integration
//!
//! Lifecycle shim for configured SFOWeb accounts: `setup_entry` wires an
//! entry's credentials to a [`SfoScraper`] handle, registers it in the host
//! context's data registry under the `sfoweb` domain and forwards setup to
//! the sensor platform; `unload_entry` and `reload_entry` tear the entry
//! back down and cycle it.

pub mod lifecycle;
pub mod scraper;

pub use lifecycle::{
    reload_entry, setup_entry, unload_entry, EntryResources, SfowebError, SfowebResult, DOMAIN,
    PLATFORMS,
};
pub use scraper::SfoScraper;
