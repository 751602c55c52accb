//! Main client for the Notion SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION};
use crate::error::{NotionError, NotionResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable holding the integration token.
pub const ENV_NOTION_API_KEY: &str = "NOTION_API_KEY";

/// Main client for interacting with the Notion API.
#[derive(Clone)]
pub struct NotionClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl NotionClient {
    /// Create a new client builder.
    pub fn builder() -> NotionClientBuilder {
        NotionClientBuilder::new()
    }

    /// Create a client from the `NOTION_API_KEY` environment variable.
    pub fn from_env() -> NotionResult<Self> {
        let api_key = std::env::var(ENV_NOTION_API_KEY)
            .map_err(|_| NotionError::Config(format!("{ENV_NOTION_API_KEY} is not set")))?;
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> NotionResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the pages API.
    pub fn pages(&self) -> PagesApi<'_> {
        PagesApi::new(self)
    }

    /// Get the blocks API.
    pub fn blocks(&self) -> BlocksApi<'_> {
        BlocksApi::new(self)
    }

    /// Get the databases API.
    pub fn databases(&self) -> DatabasesApi<'_> {
        DatabasesApi::new(self)
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Get the comments API.
    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(self)
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the file uploads API.
    pub fn file_uploads(&self) -> FileUploadsApi<'_> {
        FileUploadsApi::new(self)
    }
}

/// Builder for creating a NotionClient.
pub struct NotionClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    notion_version: String,
    timeout: Duration,
}

impl NotionClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the API base URL (useful for tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the integration token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the `Notion-Version` header value.
    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> NotionResult<NotionClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| NotionError::Config("api_key is required".to_string()))?;

        let base_url_str = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            api_key,
            notion_version: self.notion_version,
            timeout: self.timeout,
        };

        NotionClient::from_config(config)
    }
}

impl Default for NotionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_api_key() {
        let result = NotionClient::builder().build();
        match result {
            Err(NotionError::Config(message)) => assert!(message.contains("api_key")),
            other => panic!("expected Config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn build_defaults_to_public_api() {
        let client = NotionClient::builder().api_key("secret").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.notion.com/");
    }

    #[test]
    fn build_rejects_invalid_base_url() {
        let result = NotionClient::builder()
            .api_key("secret")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(NotionError::InvalidUrl(_))));
    }
}
