//! Client Configuration
//!
//! Where the record store lives and how long notifications stay visible.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_COLLECTION: &str = "persons";
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 5_000;

/// Client configuration. Every field is optional in JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Server origin, without the collection path
    pub base_url: String,
    /// Collection resource name
    pub collection: String,
    /// Lifetime of a notification in milliseconds
    pub notification_ttl_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config document, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// URL of the collection resource, e.g. `http://localhost:3001/persons`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}
