pub mod block;
pub mod comment;
pub mod database;
pub mod file;
pub mod page;
mod registry;
pub mod search;
pub mod text;
pub mod user;

pub use registry::{
    json_schema_array, json_schema_boolean, json_schema_number, json_schema_object,
    json_schema_string, Tool, ToolRegistry, ToolSchema,
};

use anyhow::{bail, Context, Result};
use notare_sdk::NotionClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Parse a tool's argument object into its typed form. A `null` argument
/// value counts as an empty object so no-argument tools accept both.
fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).with_context(|| format!("invalid arguments for {tool}"))
}

/// Required identifiers must be non-empty; fail before any network call.
fn require_id(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} must be a non-empty string");
    }
    Ok(())
}

/// Registry with the complete tool catalog wired to one client.
pub fn standard_registry(client: &NotionClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Search
    registry.register(Arc::new(search::SearchTool::new(client.clone())));
    registry.register(Arc::new(search::SearchPagesTool::new(client.clone())));

    // Pages
    registry.register(Arc::new(page::CreatePageTool::new(client.clone())));
    registry.register(Arc::new(page::RetrievePageTool::new(client.clone())));
    registry.register(Arc::new(page::UpdatePageTool::new(client.clone())));
    registry.register(Arc::new(page::ArchivePageTool::new(client.clone())));

    // Content blocks
    registry.register(Arc::new(block::AddHeadingTool::new(client.clone())));
    registry.register(Arc::new(block::AddParagraphTool::new(client.clone())));
    registry.register(Arc::new(block::AddCalloutTool::new(client.clone())));
    registry.register(Arc::new(block::AddQuoteTool::new(client.clone())));
    registry.register(Arc::new(block::AddToggleTool::new(client.clone())));
    registry.register(Arc::new(block::AddCodeTool::new(client.clone())));
    registry.register(Arc::new(block::AddToDoTool::new(client.clone())));
    registry.register(Arc::new(block::AddBulletedListItemTool::new(client.clone())));
    registry.register(Arc::new(block::AddNumberedListItemTool::new(client.clone())));

    // Structural blocks
    registry.register(Arc::new(block::AddDividerTool::new(client.clone())));
    registry.register(Arc::new(block::AddTableOfContentsTool::new(client.clone())));
    registry.register(Arc::new(block::AddBreadcrumbTool::new(client.clone())));
    registry.register(Arc::new(block::AddEquationTool::new(client.clone())));
    registry.register(Arc::new(block::AddTableTool::new(client.clone())));

    // Media blocks
    registry.register(Arc::new(block::AddImageTool::new(client.clone())));
    registry.register(Arc::new(block::AddVideoTool::new(client.clone())));
    registry.register(Arc::new(block::AddEmbedTool::new(client.clone())));
    registry.register(Arc::new(block::AddLinkTool::new(client.clone())));
    registry.register(Arc::new(block::AddBookmarkTool::new(client.clone())));

    // Block editing
    registry.register(Arc::new(block::AppendBlocksTool::new(client.clone())));
    registry.register(Arc::new(block::RetrieveBlockTool::new(client.clone())));
    registry.register(Arc::new(block::UpdateBlockTool::new(client.clone())));
    registry.register(Arc::new(block::DeleteBlockTool::new(client.clone())));
    registry.register(Arc::new(block::ListBlockChildrenTool::new(client.clone())));

    // Databases
    registry.register(Arc::new(database::CreateDatabaseTool::new(client.clone())));
    registry.register(Arc::new(database::RetrieveDatabaseTool::new(client.clone())));
    registry.register(Arc::new(database::UpdateDatabaseTool::new(client.clone())));
    registry.register(Arc::new(database::QueryDatabaseTool::new(client.clone())));

    // Text shaping (pure, no network)
    registry.register(Arc::new(text::FormatTextTool::new()));
    registry.register(Arc::new(text::ComposeRichTextTool::new()));
    registry.register(Arc::new(text::BuildBlocksTool::new()));

    // Users
    registry.register(Arc::new(user::ListUsersTool::new(client.clone())));
    registry.register(Arc::new(user::RetrieveUserTool::new(client.clone())));
    registry.register(Arc::new(user::CurrentUserTool::new(client.clone())));

    // Comments
    registry.register(Arc::new(comment::CreateCommentTool::new(client.clone())));
    registry.register(Arc::new(comment::ListCommentsTool::new(client.clone())));

    // Files
    registry.register(Arc::new(file::EncodeFileTool::new()));
    registry.register(Arc::new(file::FileContentTypeTool::new()));
    registry.register(Arc::new(file::UploadFileTool::new(client.clone())));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn standard_registry_covers_the_catalog() {
        let client = NotionClient::builder()
            .api_key("test-key")
            .build()
            .unwrap();
        let registry = standard_registry(&client);

        for name in [
            "search",
            "search_pages",
            "create_page",
            "retrieve_page",
            "update_page",
            "archive_page",
            "add_heading",
            "add_paragraph",
            "add_callout",
            "add_quote",
            "add_toggle",
            "add_code",
            "add_to_do",
            "add_bulleted_list_item",
            "add_numbered_list_item",
            "add_divider",
            "add_table_of_contents",
            "add_breadcrumb",
            "add_equation",
            "add_table",
            "add_image",
            "add_video",
            "add_embed",
            "add_link",
            "add_bookmark",
            "append_blocks",
            "retrieve_block",
            "update_block",
            "delete_block",
            "list_block_children",
            "create_database",
            "retrieve_database",
            "update_database",
            "query_database",
            "format_text",
            "compose_rich_text",
            "build_blocks",
            "list_users",
            "retrieve_user",
            "current_user",
            "create_comment",
            "list_comments",
            "encode_file",
            "file_content_type",
            "upload_file",
        ] {
            assert!(registry.contains(name), "missing tool: {name}");
        }
        assert_eq!(registry.len(), 45);
    }

    #[test]
    fn parse_args_accepts_null_for_empty_objects() {
        #[derive(Debug, serde::Deserialize, Default)]
        struct NoArgs {}

        let parsed: Result<NoArgs> = parse_args("current_user", Value::Null);
        assert!(parsed.is_ok());
    }

    #[test]
    fn require_id_rejects_blank_values() {
        assert!(require_id("page_id", "p-1").is_ok());
        assert!(require_id("page_id", "").is_err());
        assert!(require_id("page_id", "   ").is_err());
    }

    async fn client_for(server: &MockServer) -> NotionClient {
        NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn dispatch_passes_successful_payloads_through_unchanged() {
        let server = MockServer::start().await;

        let payload = json!({
            "object": "page",
            "id": "p-1",
            "created_time": "2024-01-02T10:00:00.000Z",
            "properties": { "title": { "title": [{ "plain_text": "Hi" }] } },
            "unrecognized_future_field": { "nested": [1, 2, 3] }
        });

        Mock::given(method("GET"))
            .and(path("/v1/pages/p-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let registry = standard_registry(&client_for(&server).await);
        let outcome = registry
            .dispatch("retrieve_page", json!({ "page_id": "p-1" }))
            .await;

        assert!(outcome.is_success());
        assert_eq!(outcome.data(), Some(&payload));
    }

    #[tokio::test]
    async fn dispatch_turns_not_found_into_failure_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/pages/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "object": "error",
                "status": 404,
                "code": "object_not_found",
                "message": "Could not find page with ID: missing."
            })))
            .mount(&server)
            .await;

        let registry = standard_registry(&client_for(&server).await);
        let outcome = registry
            .dispatch("retrieve_page", json!({ "page_id": "missing" }))
            .await;

        assert!(!outcome.is_success());
        let error = outcome.error().unwrap();
        assert!(!error.is_empty());
        assert!(error.contains("Could not find page"));
    }

    #[tokio::test]
    async fn dispatch_turns_bad_arguments_into_failure_envelope() {
        let server = MockServer::start().await;
        let registry = standard_registry(&client_for(&server).await);

        let outcome = registry
            .dispatch("retrieve_page", json!({ "wrong_field": true }))
            .await;

        assert!(!outcome.is_success());
        assert!(outcome.error().unwrap().contains("invalid arguments"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pure_text_tools_work_with_no_server_at_all() {
        // Client pointed at an unroutable address: pure tools never touch it.
        let client = NotionClient::builder()
            .api_key("test-key")
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let registry = standard_registry(&client);

        let outcome = registry
            .dispatch("format_text", json!({ "text": "hi", "bold": true }))
            .await;
        assert!(outcome.is_success());
        assert_eq!(outcome.data().unwrap()["annotations"]["bold"], true);

        let outcome = registry
            .dispatch("file_content_type", json!({ "path": "a.pdf" }))
            .await;
        assert_eq!(
            outcome.data(),
            Some(&json!({ "content_type": "application/pdf" }))
        );
    }
}
