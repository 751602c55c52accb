//! Configuration types for the Notion client.

use std::time::Duration;
use url::Url;

/// Default base URL of the Notion API.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Default value of the `Notion-Version` header.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Configuration for the Notion client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Notion API.
    pub base_url: Url,
    /// Integration token sent as the bearer credential.
    pub api_key: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given API base URL and token, with
    /// default version header and timeout.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url.clone(), "secret-key");

        assert_eq!(config.base_url, url);
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.notion_version, DEFAULT_NOTION_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
