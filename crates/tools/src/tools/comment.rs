// Comment tools: create a comment and list open comments

use super::{
    json_schema_number, json_schema_object, json_schema_string, parse_args, require_id, Tool,
    ToolSchema,
};
use anyhow::{bail, Context, Result};
use notare_core::rich_text::RichText;
use notare_core::types::{BlockId, Parent};
use notare_sdk::api::{CreateCommentRequest, ListCommentsQuery};
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};

/// Tool to create a comment on a page or reply to a discussion thread
pub struct CreateCommentTool {
    client: NotionClient,
}

impl CreateCommentTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreateCommentArgs {
    #[serde(default)]
    page_id: Option<String>,
    #[serde(default)]
    discussion_id: Option<String>,
    text: String,
}

#[async_trait::async_trait]
impl Tool for CreateCommentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_comment".to_string(),
            description: "Comment on a page (page_id) or reply to a thread (discussion_id); exactly one target is required".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("Page to start a new comment thread on"),
                    "discussion_id": json_schema_string("Existing discussion thread to reply to"),
                    "text": json_schema_string("Comment text")
                }),
                vec!["text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: CreateCommentArgs = parse_args("create_comment", arguments)?;

        let request = match (args.page_id, args.discussion_id) {
            (Some(page_id), None) => {
                require_id("page_id", &page_id)?;
                CreateCommentRequest {
                    parent: Some(Parent::page(page_id)),
                    discussion_id: None,
                    rich_text: vec![RichText::text(args.text)],
                }
            }
            (None, Some(discussion_id)) => {
                require_id("discussion_id", &discussion_id)?;
                CreateCommentRequest {
                    parent: None,
                    discussion_id: Some(discussion_id),
                    rich_text: vec![RichText::text(args.text)],
                }
            }
            (Some(_), Some(_)) => bail!("pass only one of page_id or discussion_id"),
            (None, None) => bail!("either page_id or discussion_id is required"),
        };

        self.client
            .comments()
            .create(request)
            .await
            .context("create_comment failed")
    }
}

/// Tool to list open comments on a block or page
pub struct ListCommentsTool {
    client: NotionClient,
}

impl ListCommentsTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListCommentsArgs {
    block_id: String,
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for ListCommentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_comments".to_string(),
            description: "List open comments on a page or block".to_string(),
            input_schema: json_schema_object(
                json!({
                    "block_id": json_schema_string("The page or block ID to list comments for"),
                    "start_cursor": json_schema_string("Cursor from a previous result page"),
                    "page_size": json_schema_number("Maximum number of comments to return")
                }),
                vec!["block_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: ListCommentsArgs = parse_args("list_comments", arguments)?;
        require_id("block_id", &args.block_id)?;

        let query = ListCommentsQuery {
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        self.client
            .comments()
            .list(&BlockId::new(args.block_id), query)
            .await
            .context("list_comments failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> NotionClient {
        NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn create_comment_targets_a_page() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/comments"))
            .and(body_partial_json(json!({
                "parent": { "type": "page_id", "page_id": "p-1" },
                "rich_text": [{ "text": { "content": "nice work" } }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "comment",
                "id": "c-1"
            })))
            .mount(&server)
            .await;

        let tool = CreateCommentTool::new(client_for(&server).await);
        let result = tool
            .call(json!({ "page_id": "p-1", "text": "nice work" }))
            .await
            .unwrap();
        assert_eq!(result["id"], "c-1");
    }

    #[tokio::test]
    async fn create_comment_needs_exactly_one_target() {
        let server = MockServer::start().await;
        let tool = CreateCommentTool::new(client_for(&server).await);

        let err = tool.call(json!({ "text": "orphan" })).await.unwrap_err();
        assert!(err.to_string().contains("page_id or discussion_id"));

        let err = tool
            .call(json!({ "page_id": "p-1", "discussion_id": "d-1", "text": "both" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("only one"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_comments_sends_block_id_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/comments"))
            .and(query_param("block_id", "b-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [{ "object": "comment", "id": "c-1" }],
                "has_more": false
            })))
            .mount(&server)
            .await;

        let tool = ListCommentsTool::new(client_for(&server).await);
        let result = tool.call(json!({ "block_id": "b-1" })).await.unwrap();
        assert_eq!(result["results"][0]["id"], "c-1");
    }
}
