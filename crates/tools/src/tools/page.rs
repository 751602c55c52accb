// Page tools: create, retrieve, update, archive

use super::{
    json_schema_boolean, json_schema_object, json_schema_string, parse_args, require_id, Tool,
    ToolSchema,
};
use anyhow::{Context, Result};
use notare_core::properties;
use notare_core::types::{Icon, PageId, Parent};
use notare_sdk::api::{CreatePageRequest, UpdatePageRequest};
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Tool to create a page under a page or database parent
pub struct CreatePageTool {
    client: NotionClient,
}

impl CreatePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreatePageArgs {
    parent_id: String,
    #[serde(default)]
    parent_kind: ParentKind,
    title: String,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    icon_emoji: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ParentKind {
    #[default]
    Page,
    Database,
}

#[async_trait::async_trait]
impl Tool for CreatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_page".to_string(),
            description: "Create a page under a parent page or database".to_string(),
            input_schema: json_schema_object(
                json!({
                    "parent_id": json_schema_string("ID of the parent page or database"),
                    "parent_kind": {
                        "type": "string",
                        "description": "Kind of parent (default: page)",
                        "enum": ["page", "database"]
                    },
                    "title": json_schema_string("Page title"),
                    "properties": {
                        "type": "object",
                        "description": "Additional property values keyed by property name"
                    },
                    "icon_emoji": json_schema_string("Optional emoji icon for the page")
                }),
                vec!["parent_id", "title"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: CreatePageArgs = parse_args("create_page", arguments)?;
        require_id("parent_id", &args.parent_id)?;

        let parent = match args.parent_kind {
            ParentKind::Page => Parent::page(args.parent_id.as_str()),
            ParentKind::Database => Parent::database(args.parent_id.as_str()),
        };

        let mut props = args.properties.unwrap_or_default();
        props
            .entry("title".to_string())
            .or_insert_with(|| properties::title(args.title.as_str()));

        let request = CreatePageRequest {
            parent,
            properties: props,
            children: None,
            icon: args.icon_emoji.map(Icon::emoji),
            cover: None,
        };

        self.client
            .pages()
            .create(request)
            .await
            .context("create_page failed")
    }
}

/// Tool to retrieve a page by ID
pub struct RetrievePageTool {
    client: NotionClient,
}

impl RetrievePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RetrievePageArgs {
    page_id: String,
}

#[async_trait::async_trait]
impl Tool for RetrievePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "retrieve_page".to_string(),
            description: "Retrieve a page and its property values by ID".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page ID to retrieve")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: RetrievePageArgs = parse_args("retrieve_page", arguments)?;
        require_id("page_id", &args.page_id)?;

        self.client
            .pages()
            .retrieve(&PageId::new(args.page_id))
            .await
            .context("retrieve_page failed")
    }
}

/// Tool to update a page's properties or icon
pub struct UpdatePageTool {
    client: NotionClient,
}

impl UpdatePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct UpdatePageArgs {
    page_id: String,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    icon_emoji: Option<String>,
}

#[async_trait::async_trait]
impl Tool for UpdatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_page".to_string(),
            description: "Update a page's property values or icon".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page ID to update"),
                    "properties": {
                        "type": "object",
                        "description": "Property values to overwrite, keyed by property name"
                    },
                    "icon_emoji": json_schema_string("New emoji icon")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: UpdatePageArgs = parse_args("update_page", arguments)?;
        require_id("page_id", &args.page_id)?;

        let request = UpdatePageRequest {
            properties: args.properties,
            icon: args.icon_emoji.map(Icon::emoji),
            ..Default::default()
        };

        self.client
            .pages()
            .update(&PageId::new(args.page_id), request)
            .await
            .context("update_page failed")
    }
}

/// Tool to archive or restore a page
pub struct ArchivePageTool {
    client: NotionClient,
}

impl ArchivePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ArchivePageArgs {
    page_id: String,
    #[serde(default = "default_archived")]
    archived: bool,
}

fn default_archived() -> bool {
    true
}

#[async_trait::async_trait]
impl Tool for ArchivePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "archive_page".to_string(),
            description: "Move a page to the trash, or restore it with archived=false"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page ID to archive"),
                    "archived": json_schema_boolean("Archived state to set (default: true)")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: ArchivePageArgs = parse_args("archive_page", arguments)?;
        require_id("page_id", &args.page_id)?;

        let request = UpdatePageRequest {
            archived: Some(args.archived),
            ..Default::default()
        };

        self.client
            .pages()
            .update(&PageId::new(args.page_id), request)
            .await
            .context("archive_page failed")
    }
}
