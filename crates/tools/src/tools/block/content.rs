// Content block tools: headings, paragraphs, callouts, quotes, toggles,
// code, to-dos, and list items

use super::append_block;
use crate::tools::{
    json_schema_boolean, json_schema_number, json_schema_object, json_schema_string, parse_args,
    Tool, ToolSchema,
};
use anyhow::Result;
use notare_core::blocks::Block;
use notare_core::rich_text::RichText;
use notare_core::types::Icon;
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};

fn default_level() -> u8 {
    1
}

fn default_icon() -> String {
    "💡".to_string()
}

fn default_language() -> String {
    "python".to_string()
}

/// Tool to add a heading block (h1/h2/h3)
pub struct AddHeadingTool {
    client: NotionClient,
}

impl AddHeadingTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddHeadingArgs {
    page_id: String,
    text: String,
    #[serde(default = "default_level")]
    level: u8,
}

#[async_trait::async_trait]
impl Tool for AddHeadingTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_heading".to_string(),
            description: "Add a heading block (level 1-3) to a page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Heading text"),
                    "level": json_schema_number("Heading level 1-3 (default: 1)")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddHeadingArgs = parse_args("add_heading", arguments)?;
        let block = Block::heading(args.level, vec![RichText::text(args.text)]);
        append_block(&self.client, "add_heading", &args.page_id, block).await
    }
}

/// Tool to add a paragraph block
pub struct AddParagraphTool {
    client: NotionClient,
}

impl AddParagraphTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddParagraphArgs {
    page_id: String,
    text: String,
}

#[async_trait::async_trait]
impl Tool for AddParagraphTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_paragraph".to_string(),
            description: "Add a paragraph block to a page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Paragraph text")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddParagraphArgs = parse_args("add_paragraph", arguments)?;
        let block = Block::paragraph(vec![RichText::text(args.text)]);
        append_block(&self.client, "add_paragraph", &args.page_id, block).await
    }
}

/// Tool to add a callout block with an emoji icon
pub struct AddCalloutTool {
    client: NotionClient,
}

impl AddCalloutTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddCalloutArgs {
    page_id: String,
    text: String,
    #[serde(default = "default_icon")]
    icon: String,
}

#[async_trait::async_trait]
impl Tool for AddCalloutTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_callout".to_string(),
            description: "Add a callout block with an emoji icon, for important notes"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Callout text"),
                    "icon": json_schema_string("Emoji icon (default: 💡)")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddCalloutArgs = parse_args("add_callout", arguments)?;
        let block = Block::callout(vec![RichText::text(args.text)], Icon::emoji(args.icon));
        append_block(&self.client, "add_callout", &args.page_id, block).await
    }
}

/// Tool to add a quote block
pub struct AddQuoteTool {
    client: NotionClient,
}

impl AddQuoteTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddQuoteArgs {
    page_id: String,
    text: String,
}

#[async_trait::async_trait]
impl Tool for AddQuoteTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_quote".to_string(),
            description: "Add a quote block to a page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Quoted text")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddQuoteArgs = parse_args("add_quote", arguments)?;
        let block = Block::quote(vec![RichText::text(args.text)]);
        append_block(&self.client, "add_quote", &args.page_id, block).await
    }
}

/// Tool to add a toggle block for collapsible content
pub struct AddToggleTool {
    client: NotionClient,
}

impl AddToggleTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddToggleArgs {
    page_id: String,
    text: String,
}

#[async_trait::async_trait]
impl Tool for AddToggleTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_toggle".to_string(),
            description: "Add a toggle block for collapsible content".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Toggle summary text")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddToggleArgs = parse_args("add_toggle", arguments)?;
        let block = Block::toggle(vec![RichText::text(args.text)]);
        append_block(&self.client, "add_toggle", &args.page_id, block).await
    }
}

/// Tool to add a code block with syntax highlighting
pub struct AddCodeTool {
    client: NotionClient,
}

impl AddCodeTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddCodeArgs {
    page_id: String,
    text: String,
    #[serde(default = "default_language")]
    language: String,
}

#[async_trait::async_trait]
impl Tool for AddCodeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_code".to_string(),
            description: "Add a code block with syntax highlighting".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("Code content"),
                    "language": json_schema_string("Language for highlighting (default: python)")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddCodeArgs = parse_args("add_code", arguments)?;
        let block = Block::code(vec![RichText::text(args.text)], args.language);
        append_block(&self.client, "add_code", &args.page_id, block).await
    }
}

/// Tool to add a to-do checklist item
pub struct AddToDoTool {
    client: NotionClient,
}

impl AddToDoTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddToDoArgs {
    page_id: String,
    text: String,
    #[serde(default)]
    checked: bool,
}

#[async_trait::async_trait]
impl Tool for AddToDoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_to_do".to_string(),
            description: "Add a to-do checklist item with checked/unchecked state".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("To-do text"),
                    "checked": json_schema_boolean("Whether the item starts checked (default: false)")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddToDoArgs = parse_args("add_to_do", arguments)?;
        let block = Block::to_do(vec![RichText::text(args.text)], args.checked);
        append_block(&self.client, "add_to_do", &args.page_id, block).await
    }
}

/// Tool to add a bulleted list item
pub struct AddBulletedListItemTool {
    client: NotionClient,
}

impl AddBulletedListItemTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddListItemArgs {
    page_id: String,
    text: String,
}

#[async_trait::async_trait]
impl Tool for AddBulletedListItemTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_bulleted_list_item".to_string(),
            description: "Add a bulleted list item to a page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("List item text")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddListItemArgs = parse_args("add_bulleted_list_item", arguments)?;
        let block = Block::bulleted_list_item(vec![RichText::text(args.text)]);
        append_block(&self.client, "add_bulleted_list_item", &args.page_id, block).await
    }
}

/// Tool to add a numbered list item
pub struct AddNumberedListItemTool {
    client: NotionClient,
}

impl AddNumberedListItemTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for AddNumberedListItemTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_numbered_list_item".to_string(),
            description: "Add a numbered list item to a page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "text": json_schema_string("List item text")
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddListItemArgs = parse_args("add_numbered_list_item", arguments)?;
        let block = Block::numbered_list_item(vec![RichText::text(args.text)]);
        append_block(&self.client, "add_numbered_list_item", &args.page_id, block).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> NotionClient {
        NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn append_response() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [{ "object": "block", "id": "b-new" }]
        }))
    }

    #[tokio::test]
    async fn add_heading_sends_clamped_level() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/blocks/p-1/children"))
            .and(body_partial_json(json!({
                "children": [{
                    "type": "heading_2",
                    "heading_2": { "rich_text": [{ "text": { "content": "Setup" } }] }
                }]
            })))
            .respond_with(append_response())
            .mount(&server)
            .await;

        let tool = AddHeadingTool::new(client_for(&server).await);
        let result = tool
            .call(json!({ "page_id": "p-1", "text": "Setup", "level": 2 }))
            .await
            .unwrap();
        assert_eq!(result["results"][0]["id"], "b-new");
    }

    #[tokio::test]
    async fn add_callout_defaults_the_icon() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/blocks/p-1/children"))
            .and(body_partial_json(json!({
                "children": [{
                    "type": "callout",
                    "callout": { "icon": { "type": "emoji", "emoji": "💡" } }
                }]
            })))
            .respond_with(append_response())
            .mount(&server)
            .await;

        let tool = AddCalloutTool::new(client_for(&server).await);
        let result = tool
            .call(json!({ "page_id": "p-1", "text": "remember" }))
            .await
            .unwrap();
        assert!(result["results"].is_array());
    }

    #[tokio::test]
    async fn add_to_do_rejects_empty_page_id() {
        let server = MockServer::start().await;
        let tool = AddToDoTool::new(client_for(&server).await);

        let err = tool
            .call(json!({ "page_id": " ", "text": "task" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("page_id"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_paragraph_surfaces_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/blocks/missing/children"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find block with ID: missing."
            })))
            .mount(&server)
            .await;

        let tool = AddParagraphTool::new(client_for(&server).await);
        let err = tool
            .call(json!({ "page_id": "missing", "text": "hello" }))
            .await
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("add_paragraph failed"));
        assert!(message.contains("object_not_found"));
    }
}
