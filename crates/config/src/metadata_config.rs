//! Metadata service configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Google Books endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Remote book-metadata service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetadataConfig {
    /// Volumes search endpoint
    pub endpoint: String,

    /// API key sent with every request; anonymous access when unset
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent header
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 15,
            user_agent: format!("Bookcase/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ConfigSection for MetadataConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::http_url(&self.endpoint, "metadata.endpoint"),
            Validator::in_range(self.timeout_secs, 1, 300, "metadata.timeout_secs"),
            Validator::not_empty(&self.user_agent, "metadata.user_agent"),
        ];

        if let Some(key) = &self.api_key {
            results.push(Validator::not_empty(key, "metadata.api_key"));
        }

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.endpoint = other.endpoint;
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        self.timeout_secs = other.timeout_secs;
        self.user_agent = other.user_agent;
    }

    fn section_name(&self) -> &'static str {
        "metadata"
    }
}
