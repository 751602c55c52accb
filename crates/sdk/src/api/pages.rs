//! Pages API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::blocks::Block;
use notare_core::types::{Icon, PageId, Parent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pages API for creating, retrieving, and updating pages.
pub struct PagesApi<'a> {
    client: &'a NotionClient,
}

impl<'a> PagesApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Create a page under a page or database parent.
    pub async fn create(&self, request: CreatePageRequest) -> NotionResult<Value> {
        self.client.http.post("/v1/pages", &request).await
    }

    /// Retrieve a page by ID.
    pub async fn retrieve(&self, page_id: &PageId) -> NotionResult<Value> {
        self.client
            .http
            .get(&format!("/v1/pages/{}", page_id.0))
            .await
    }

    /// Update page properties, icon, cover, or archived state.
    pub async fn update(
        &self,
        page_id: &PageId,
        request: UpdatePageRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .patch(&format!("/v1/pages/{}", page_id.0), &request)
            .await
    }
}

/// Request to create a new page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

/// Request to update an existing page. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_omits_empty_options() {
        let request = CreatePageRequest {
            parent: Parent::page("p-1"),
            properties: Map::new(),
            children: None,
            icon: None,
            cover: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "parent": { "type": "page_id", "page_id": "p-1" },
                "properties": {}
            })
        );
    }

    #[test]
    fn update_request_serializes_archived_flag() {
        let request = UpdatePageRequest {
            archived: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "archived": true })
        );
    }
}
