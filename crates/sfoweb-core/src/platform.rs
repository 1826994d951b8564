//! Platform identifiers
//!
//! A platform is a downstream surface (e.g. sensor) the host runtime sets up
//! and tears down on behalf of an integration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms this integration can forward entries to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Sensor,
}

impl Platform {
    /// The platform's domain string as the host runtime knows it
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Sensor => "sensor",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Sensor.to_string(), "sensor");
    }

    #[test]
    fn test_platform_serde_form() {
        let json = serde_json::to_string(&Platform::Sensor).unwrap();
        assert_eq!(json, "\"sensor\"");
    }
}
