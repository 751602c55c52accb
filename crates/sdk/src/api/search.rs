//! Search API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search API over the workspace the integration can see.
pub struct SearchApi<'a> {
    client: &'a NotionClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Search pages and databases by title.
    pub async fn search(&self, request: SearchRequest) -> NotionResult<Value> {
        self.client.http.post("/v1/search", &request).await
    }
}

/// Search request. An empty request returns everything shared with the
/// integration, one page of results at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Restrict search results to one object kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilter {
    pub property: String,
    pub value: String,
}

impl SearchFilter {
    /// Only return pages.
    pub fn pages() -> Self {
        Self {
            property: "object".to_string(),
            value: "page".to_string(),
        }
    }

    /// Only return databases.
    pub fn databases() -> Self {
        Self {
            property: "object".to_string(),
            value: "database".to_string(),
        }
    }
}

/// Sort order for search results, by last edited time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSort {
    pub direction: String,
    pub timestamp: String,
}

impl SearchSort {
    pub fn ascending() -> Self {
        Self {
            direction: "ascending".to_string(),
            timestamp: "last_edited_time".to_string(),
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: "descending".to_string(),
            timestamp: "last_edited_time".to_string(),
        }
    }
}
