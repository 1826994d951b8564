//! Config Entry types
//!
//! A ConfigEntry represents a single configured account for the integration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account credentials read from a config entry's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login username
    pub username: String,

    /// Login password
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A configuration entry: one configured instance of the integration.
///
/// Entries are created and persisted by the host runtime; this crate only
/// reads the credential fields and uses `entry_id` as a registry key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Unique identifier (ULID)
    pub entry_id: String,

    /// Human-readable display name
    pub title: String,

    /// Immutable configuration data
    pub data: Credentials,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
}

impl ConfigEntry {
    /// Create a new config entry with a fresh ULID identifier
    pub fn new(title: impl Into<String>, data: Credentials) -> Self {
        let now = Utc::now();
        Self {
            entry_id: ulid::Ulid::new().to_string(),
            title: title.into(),
            data,
            created_at: now,
            modified_at: now,
        }
    }

    /// Override the generated entry id
    pub fn with_entry_id(mut self, entry_id: impl Into<String>) -> Self {
        self.entry_id = entry_id.into();
        self
    }
}
