//! Comments API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::rich_text::RichText;
use notare_core::types::{BlockId, Parent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comments API for reading and writing page comments.
pub struct CommentsApi<'a> {
    client: &'a NotionClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Create a comment on a page or an existing discussion thread.
    pub async fn create(&self, request: CreateCommentRequest) -> NotionResult<Value> {
        self.client.http.post("/v1/comments", &request).await
    }

    /// List open comments on a block or page, one page of results per call.
    pub async fn list(&self, block_id: &BlockId, query: ListCommentsQuery) -> NotionResult<Value> {
        let query = ListCommentsQueryWithBlock {
            block_id: block_id.0.clone(),
            start_cursor: query.start_cursor,
            page_size: query.page_size,
        };
        self.client.http.get_with_query("/v1/comments", &query).await
    }
}

/// Request to create a comment. The API requires exactly one of `parent`
/// (new thread on a page) or `discussion_id` (reply to a thread); that
/// constraint is enforced remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<String>,
    pub rich_text: Vec<RichText>,
}

/// Cursor query for listing comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ListCommentsQueryWithBlock {
    block_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_comment_serializes_parent() {
        let request = CreateCommentRequest {
            parent: Some(Parent::page("p-1")),
            discussion_id: None,
            rich_text: vec![RichText::text("looks good")],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parent"]["page_id"], "p-1");
        assert!(value.get("discussion_id").is_none());
        assert_eq!(value["rich_text"][0]["text"]["content"], "looks good");
    }

    #[test]
    fn thread_reply_serializes_discussion_id() {
        let request = CreateCommentRequest {
            parent: None,
            discussion_id: Some("d-1".to_string()),
            rich_text: vec![RichText::text("replying")],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["discussion_id"], "d-1");
        assert!(value.get("parent").is_none());
    }
}
