//! HTTP transport layer for the Notion SDK.

use crate::config::ClientConfig;
use crate::error::{NotionError, NotionResult};
use reqwest::{header, multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// Performs exactly one outbound call per method invocation; retry and
/// backoff are left to the caller's policy, not implemented here.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> NotionResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| NotionError::Config("Invalid API key format".to_string()))?,
        );

        headers.insert(
            header::HeaderName::from_static("notion-version"),
            header::HeaderValue::from_str(&config.notion_version)
                .map_err(|_| NotionError::Config("Invalid Notion version format".to_string()))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> NotionResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(NotionError::InvalidUrl)
    }

    /// Decode a response: JSON body on success, API error otherwise.
    async fn decode<T: DeserializeOwned>(&self, response: Response) -> NotionResult<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotionError::from_response(status.as_u16(), &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.client.get(url).send().await?;
        self.decode(response).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.client.get(url).query(query).send().await?;
        self.decode(response).await
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.client.post(url).json(body).send().await?;
        self.decode(response).await
    }

    /// Execute a POST request with a multipart form carrying one file part.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, filename = filename, "POST multipart request");

        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        self.decode(response).await
    }

    /// Execute a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PATCH request");

        let response = self.client.patch(url).json(body).send().await?;
        self.decode(response).await
    }

    /// Execute a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> NotionResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "DELETE request");

        let response = self.client.delete(url).send().await?;
        self.decode(response).await
    }
}
