//! SFOWeb scraper handle
//!
//! Opaque collaborator constructed from account credentials. The actual
//! fetching and parsing live behind the handle and are driven by the sensor
//! platform; lifecycle code only constructs the handle and stashes it in the
//! registry.

/// Handle encapsulating one account's data-fetching behavior
#[derive(Debug, Clone)]
pub struct SfoScraper {
    username: String,
    password: String,
}

impl SfoScraper {
    /// Create a scraper for the given account
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The account username this scraper was built for
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Local shape check on the stored credentials.
    ///
    /// Rejects blank or implausibly short values before any network use.
    pub fn credentials_look_valid(&self) -> bool {
        self.username.len() >= 3 && self.password.len() >= 3
    }
}
