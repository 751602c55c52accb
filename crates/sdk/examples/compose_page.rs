//! Example: composing a page out of typed blocks.
//!
//! Creates a page under an existing parent page and fills it with headings,
//! formatted text, a to-do list, and media blocks.
//!
//! Run with:
//!   NOTION_API_KEY=secret_... PARENT_PAGE_ID=... cargo run --example compose_page

use notare_sdk::api::{AppendChildrenRequest, CreatePageRequest};
use notare_sdk::{Block, BlockId, Color, Icon, NotionClient, NotionResult, Parent, RichText};
use serde_json::Map;

#[tokio::main]
async fn main() -> NotionResult<()> {
    tracing_subscriber::fmt::init();

    let client = NotionClient::from_env()?;
    let parent_id = std::env::var("PARENT_PAGE_ID").expect("PARENT_PAGE_ID must be set");

    // Create the page
    let mut properties = Map::new();
    properties.insert(
        "title".to_string(),
        notare_core::properties::title("Release checklist"),
    );

    let page = client
        .pages()
        .create(CreatePageRequest {
            parent: Parent::page(parent_id),
            properties,
            children: None,
            icon: Some(Icon::emoji("🚀")),
            cover: None,
        })
        .await?;

    let page_id = page["id"].as_str().unwrap_or_default().to_string();
    println!("Created page {page_id}");

    // Compose the body out of typed blocks
    let blocks = vec![
        Block::heading(1, vec![RichText::text("Release checklist")]),
        Block::paragraph(vec![
            RichText::text("Ship only when "),
            RichText::text("every").bold().color(Color::Red),
            RichText::text(" box is ticked."),
        ]),
        Block::divider(),
        Block::to_do(vec![RichText::text("Changelog written")], false),
        Block::to_do(vec![RichText::text("Tests green")], true),
        Block::code(
            vec![RichText::text("cargo publish --dry-run")],
            "shell",
        ),
        Block::bookmark("https://example.com/release-runbook", vec![]),
    ];

    let children = blocks
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let appended = client
        .blocks()
        .append_children(&BlockId::new(page_id.as_str()), AppendChildrenRequest::new(children))
        .await?;

    let count = appended["results"].as_array().map(Vec::len).unwrap_or(0);
    println!("Appended {count} blocks");

    Ok(())
}
