//! Per-entry data registry
//!
//! The host runtime exposes a keyed storage area that integrations use to
//! stash per-entry resources: integration domain -> config entry id ->
//! opaque resource bundle. Buckets are created lazily on first insert and
//! removed again when their last entry is removed, so the registry never
//! accumulates empty domain buckets.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

/// Opaque per-entry resource bundle stored by an integration
pub type ResourceBundle = Arc<dyn Any + Send + Sync>;

/// Two-level keyed storage: domain -> entry_id -> resource bundle
#[derive(Default)]
pub struct DataRegistry {
    domains: DashMap<String, DashMap<String, ResourceBundle>>,
}

impl DataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bundle under `(domain, entry_id)`, creating the domain bucket
    /// if it does not exist yet. Replaces any previous bundle for the entry.
    pub fn insert(&self, domain: &str, entry_id: &str, bundle: ResourceBundle) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .insert(entry_id.to_string(), bundle);
        debug!(domain, entry_id, "registered entry resources");
    }

    /// Look up the bundle for `(domain, entry_id)`
    pub fn get(&self, domain: &str, entry_id: &str) -> Option<ResourceBundle> {
        self.domains
            .get(domain)
            .and_then(|bucket| bucket.get(entry_id).map(|r| r.value().clone()))
    }

    /// Look up and downcast the bundle for `(domain, entry_id)`
    pub fn get_as<T: Send + Sync + 'static>(&self, domain: &str, entry_id: &str) -> Option<Arc<T>> {
        self.get(domain, entry_id)
            .and_then(|bundle| bundle.downcast::<T>().ok())
    }

    /// Remove the bundle for `(domain, entry_id)`, dropping the domain bucket
    /// if it becomes empty. Removing an unknown key is a no-op.
    pub fn remove(&self, domain: &str, entry_id: &str) -> Option<ResourceBundle> {
        let removed = self
            .domains
            .get(domain)
            .and_then(|bucket| bucket.remove(entry_id).map(|(_, bundle)| bundle));

        // Bucket guard is dropped above; safe to take the outer lock again.
        if removed.is_some() {
            self.domains.remove_if(domain, |_, bucket| bucket.is_empty());
            debug!(domain, entry_id, "removed entry resources");
        }

        removed
    }

    /// Whether a bucket exists for this domain
    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// Whether a bundle is registered for `(domain, entry_id)`
    pub fn contains_entry(&self, domain: &str, entry_id: &str) -> bool {
        self.domains
            .get(domain)
            .is_some_and(|bucket| bucket.contains_key(entry_id))
    }

    /// Number of entries registered under a domain
    pub fn entry_count(&self, domain: &str) -> usize {
        self.domains.get(domain).map_or(0, |bucket| bucket.len())
    }

    /// Whether the registry holds no buckets at all
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
