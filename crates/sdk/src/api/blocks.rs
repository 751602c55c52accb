//! Blocks API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::types::BlockId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Blocks API for appending, reading, updating, and deleting blocks.
pub struct BlocksApi<'a> {
    client: &'a NotionClient,
}

impl<'a> BlocksApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Append child blocks to a page or block.
    pub async fn append_children(
        &self,
        block_id: &BlockId,
        request: AppendChildrenRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .patch(&format!("/v1/blocks/{}/children", block_id.0), &request)
            .await
    }

    /// Retrieve a block by ID.
    pub async fn retrieve(&self, block_id: &BlockId) -> NotionResult<Value> {
        self.client
            .http
            .get(&format!("/v1/blocks/{}", block_id.0))
            .await
    }

    /// Update a block's payload or archived state. The body shape is the
    /// block's own type key, e.g. `{"paragraph": {...}}`.
    pub async fn update(&self, block_id: &BlockId, request: &Value) -> NotionResult<Value> {
        self.client
            .http
            .patch(&format!("/v1/blocks/{}", block_id.0), request)
            .await
    }

    /// Move a block to the trash.
    pub async fn delete(&self, block_id: &BlockId) -> NotionResult<Value> {
        self.client
            .http
            .delete(&format!("/v1/blocks/{}", block_id.0))
            .await
    }

    /// List a block's children, one page of results per call.
    pub async fn children(
        &self,
        block_id: &BlockId,
        query: ListChildrenQuery,
    ) -> NotionResult<Value> {
        self.client
            .http
            .get_with_query(&format!("/v1/blocks/{}/children", block_id.0), &query)
            .await
    }
}

/// Request to append children to a block.
///
/// Children travel as raw values so callers can pass both typed
/// `notare_core::Block` payloads (via `serde_json::to_value`) and
/// payloads received from elsewhere, unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendChildrenRequest {
    pub children: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl AppendChildrenRequest {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            children,
            after: None,
        }
    }
}

/// Cursor query for listing block children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListChildrenQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
