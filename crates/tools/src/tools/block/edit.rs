// Block editing tools: bulk append, retrieve, update, delete, and
// listing children

use crate::tools::{
    json_schema_array, json_schema_number, json_schema_object, json_schema_string, parse_args,
    require_id, Tool, ToolSchema,
};
use anyhow::{Context, Result};
use notare_core::types::BlockId;
use notare_sdk::api::{AppendChildrenRequest, ListChildrenQuery};
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};

/// Tool to append a batch of pre-built blocks in one call
pub struct AppendBlocksTool {
    client: NotionClient,
}

impl AppendBlocksTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AppendBlocksArgs {
    page_id: String,
    blocks: Vec<Value>,
    #[serde(default)]
    after: Option<String>,
}

#[async_trait::async_trait]
impl Tool for AppendBlocksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "append_blocks".to_string(),
            description: "Append a list of pre-built blocks to a page in one call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "blocks": json_schema_array(
                        json!({ "type": "object" }),
                        "Block payloads in the API's creation shape"
                    ),
                    "after": json_schema_string("Optional block ID to insert after")
                }),
                vec!["page_id", "blocks"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AppendBlocksArgs = parse_args("append_blocks", arguments)?;
        require_id("page_id", &args.page_id)?;

        let request = AppendChildrenRequest {
            children: args.blocks,
            after: args.after,
        };

        self.client
            .blocks()
            .append_children(&BlockId::new(args.page_id), request)
            .await
            .context("append_blocks failed")
    }
}

/// Tool to retrieve a single block
pub struct RetrieveBlockTool {
    client: NotionClient,
}

impl RetrieveBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct BlockOnlyArgs {
    block_id: String,
}

#[async_trait::async_trait]
impl Tool for RetrieveBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "retrieve_block".to_string(),
            description: "Retrieve a block by ID".to_string(),
            input_schema: json_schema_object(
                json!({
                    "block_id": json_schema_string("The block ID to retrieve")
                }),
                vec!["block_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: BlockOnlyArgs = parse_args("retrieve_block", arguments)?;
        require_id("block_id", &args.block_id)?;

        self.client
            .blocks()
            .retrieve(&BlockId::new(args.block_id))
            .await
            .context("retrieve_block failed")
    }
}

/// Tool to update a block's payload
pub struct UpdateBlockTool {
    client: NotionClient,
}

impl UpdateBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct UpdateBlockArgs {
    block_id: String,
    payload: Value,
}

#[async_trait::async_trait]
impl Tool for UpdateBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_block".to_string(),
            description: "Update a block; the payload is keyed by the block's own type, e.g. {\"paragraph\": {...}}".to_string(),
            input_schema: json_schema_object(
                json!({
                    "block_id": json_schema_string("The block ID to update"),
                    "payload": { "type": "object", "description": "Update body in the API's shape" }
                }),
                vec!["block_id", "payload"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: UpdateBlockArgs = parse_args("update_block", arguments)?;
        require_id("block_id", &args.block_id)?;

        self.client
            .blocks()
            .update(&BlockId::new(args.block_id), &args.payload)
            .await
            .context("update_block failed")
    }
}

/// Tool to move a block to the trash
pub struct DeleteBlockTool {
    client: NotionClient,
}

impl DeleteBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_block".to_string(),
            description: "Move a block to the trash".to_string(),
            input_schema: json_schema_object(
                json!({
                    "block_id": json_schema_string("The block ID to delete")
                }),
                vec!["block_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: BlockOnlyArgs = parse_args("delete_block", arguments)?;
        require_id("block_id", &args.block_id)?;

        self.client
            .blocks()
            .delete(&BlockId::new(args.block_id))
            .await
            .context("delete_block failed")
    }
}

/// Tool to list a block's children one result page at a time
pub struct ListBlockChildrenTool {
    client: NotionClient,
}

impl ListBlockChildrenTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListBlockChildrenArgs {
    block_id: String,
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for ListBlockChildrenTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_block_children".to_string(),
            description: "List a block's or page's child blocks; pass the returned cursor to continue".to_string(),
            input_schema: json_schema_object(
                json!({
                    "block_id": json_schema_string("The block or page ID to list children of"),
                    "start_cursor": json_schema_string("Cursor from a previous result page"),
                    "page_size": json_schema_number("Maximum number of children to return")
                }),
                vec!["block_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: ListBlockChildrenArgs = parse_args("list_block_children", arguments)?;
        require_id("block_id", &args.block_id)?;

        let query = ListChildrenQuery {
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        self.client
            .blocks()
            .children(&BlockId::new(args.block_id), query)
            .await
            .context("list_block_children failed")
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
    async fn append_blocks_passes_payloads_through() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/blocks/p-1/children"))
            .and(body_partial_json(json!({
                "children": [
                    { "type": "paragraph" },
                    { "type": "divider" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [
                    { "object": "block", "id": "b-1" },
                    { "object": "block", "id": "b-2" }
                ]
            })))
            .mount(&server)
            .await;

        let tool = AppendBlocksTool::new(client_for(&server).await);
        let result = tool
            .call(json!({
                "page_id": "p-1",
                "blocks": [
                    { "type": "paragraph", "paragraph": { "rich_text": [] } },
                    { "type": "divider", "divider": {} }
                ]
            }))
            .await
            .unwrap();
        assert_eq!(result["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_children_forwards_cursor() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/blocks/b-1/children"))
            .and(query_param("start_cursor", "cur-1"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [],
                "has_more": false,
                "next_cursor": null
            })))
            .mount(&server)
            .await;

        let tool = ListBlockChildrenTool::new(client_for(&server).await);
        let result = tool
            .call(json!({ "block_id": "b-1", "start_cursor": "cur-1", "page_size": 10 }))
            .await
            .unwrap();
        assert_eq!(result["has_more"], false);
    }

    #[tokio::test]
    async fn delete_block_requires_id() {
        let server = MockServer::start().await;
        let tool = DeleteBlockTool::new(client_for(&server).await);

        let err = tool.call(json!({ "block_id": "" })).await.unwrap_err();
        assert!(err.to_string().contains("block_id"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
