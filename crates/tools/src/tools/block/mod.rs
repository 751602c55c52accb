// Block tools, grouped the way the catalog groups them: content blocks,
// structural blocks, media blocks, and block editing.

pub mod content;
pub mod edit;
pub mod media;
pub mod structure;

pub use content::{
    AddBulletedListItemTool, AddCalloutTool, AddCodeTool, AddHeadingTool, AddNumberedListItemTool,
    AddParagraphTool, AddQuoteTool, AddToDoTool, AddToggleTool,
};
pub use edit::{
    AppendBlocksTool, DeleteBlockTool, ListBlockChildrenTool, RetrieveBlockTool, UpdateBlockTool,
};
pub use media::{AddBookmarkTool, AddEmbedTool, AddImageTool, AddLinkTool, AddVideoTool};
pub use structure::{
    AddBreadcrumbTool, AddDividerTool, AddEquationTool, AddTableOfContentsTool, AddTableTool,
};

use super::require_id;
use anyhow::{Context, Result};
use notare_core::blocks::Block;
use notare_core::types::BlockId;
use notare_sdk::api::AppendChildrenRequest;
use notare_sdk::NotionClient;
use serde_json::Value;

/// Append one block to a page and return the API's response unchanged.
/// Shared by every `add_*` tool.
async fn append_block(
    client: &NotionClient,
    tool: &str,
    page_id: &str,
    block: Block,
) -> Result<Value> {
    require_id("page_id", page_id)?;

    let request = AppendChildrenRequest::new(vec![serde_json::to_value(&block)?]);
    client
        .blocks()
        .append_children(&BlockId::new(page_id), request)
        .await
        .with_context(|| format!("{tool} failed"))
}
