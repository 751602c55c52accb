// Media block tools: image, video, embed, link paragraph, and bookmark.
// Media URLs are validated locally (well-formed, http/https) before any
// network call; everything else is left to the remote API.

use super::append_block;
use crate::tools::{json_schema_object, json_schema_string, parse_args, Tool, ToolSchema};
use anyhow::{bail, Context, Result};
use notare_core::blocks::Block;
use notare_core::rich_text::RichText;
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

fn validate_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{field} is not a valid URL"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("only HTTP/HTTPS URLs are supported, got: {}", url.scheme());
    }
    Ok(())
}

fn caption_spans(caption: &str) -> Vec<RichText> {
    if caption.is_empty() {
        Vec::new()
    } else {
        vec![RichText::text(caption)]
    }
}

/// Tool to add an image block from an external URL
pub struct AddImageTool {
    client: NotionClient,
}

impl AddImageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddImageArgs {
    page_id: String,
    image_url: String,
    #[serde(default)]
    caption: String,
}

#[async_trait::async_trait]
impl Tool for AddImageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_image".to_string(),
            description: "Add an image block from an external URL, with optional caption"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "image_url": json_schema_string("HTTP(S) URL of the image"),
                    "caption": json_schema_string("Optional caption text")
                }),
                vec!["page_id", "image_url"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddImageArgs = parse_args("add_image", arguments)?;
        let image_url = args.image_url.trim();
        validate_url("image_url", image_url)?;

        let block = Block::image(image_url, caption_spans(&args.caption));
        append_block(&self.client, "add_image", &args.page_id, block).await
    }
}

/// Tool to add a video block (YouTube, Vimeo, direct files)
pub struct AddVideoTool {
    client: NotionClient,
}

impl AddVideoTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddVideoArgs {
    page_id: String,
    video_url: String,
    #[serde(default)]
    caption: String,
}

#[async_trait::async_trait]
impl Tool for AddVideoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_video".to_string(),
            description: "Add a video block (YouTube, Vimeo, or direct file URL)".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "video_url": json_schema_string("HTTP(S) URL of the video"),
                    "caption": json_schema_string("Optional caption text")
                }),
                vec!["page_id", "video_url"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddVideoArgs = parse_args("add_video", arguments)?;
        let video_url = args.video_url.trim();
        validate_url("video_url", video_url)?;

        let block = Block::video(video_url, caption_spans(&args.caption));
        append_block(&self.client, "add_video", &args.page_id, block).await
    }
}

/// Tool to add an embed block for external content
pub struct AddEmbedTool {
    client: NotionClient,
}

impl AddEmbedTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddEmbedArgs {
    page_id: String,
    embed_url: String,
    #[serde(default)]
    caption: String,
}

#[async_trait::async_trait]
impl Tool for AddEmbedTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_embed".to_string(),
            description: "Add an embed block rendering external content inline".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "embed_url": json_schema_string("HTTP(S) URL to embed"),
                    "caption": json_schema_string("Optional caption text")
                }),
                vec!["page_id", "embed_url"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddEmbedArgs = parse_args("add_embed", arguments)?;
        let embed_url = args.embed_url.trim();
        validate_url("embed_url", embed_url)?;

        let block = Block::embed(embed_url, caption_spans(&args.caption));
        append_block(&self.client, "add_embed", &args.page_id, block).await
    }
}

/// Tool to add a hyperlink as a paragraph block
pub struct AddLinkTool {
    client: NotionClient,
}

impl AddLinkTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddLinkArgs {
    page_id: String,
    url: String,
    #[serde(default)]
    title: String,
}

#[async_trait::async_trait]
impl Tool for AddLinkTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_link".to_string(),
            description: "Add a hyperlink paragraph; the visible text is the title or the URL itself".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "url": json_schema_string("HTTP(S) URL to link to"),
                    "title": json_schema_string("Optional visible text")
                }),
                vec!["page_id", "url"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddLinkArgs = parse_args("add_link", arguments)?;
        let url = args.url.trim();
        validate_url("url", url)?;

        let title = (!args.title.is_empty()).then(|| args.title.clone());
        let block = Block::link(url, title);
        append_block(&self.client, "add_link", &args.page_id, block).await
    }
}

/// Tool to add a bookmark preview block
pub struct AddBookmarkTool {
    client: NotionClient,
}

impl AddBookmarkTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddBookmarkArgs {
    page_id: String,
    bookmark_url: String,
    #[serde(default)]
    caption: String,
}

#[async_trait::async_trait]
impl Tool for AddBookmarkTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_bookmark".to_string(),
            description: "Add a bookmark preview block with optional caption".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "bookmark_url": json_schema_string("HTTP(S) URL to bookmark"),
                    "caption": json_schema_string("Optional caption text")
                }),
                vec!["page_id", "bookmark_url"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddBookmarkArgs = parse_args("add_bookmark", arguments)?;
        let bookmark_url = args.bookmark_url.trim();
        validate_url("bookmark_url", bookmark_url)?;

        let block = Block::bookmark(bookmark_url, caption_spans(&args.caption));
        append_block(&self.client, "add_bookmark", &args.page_id, block).await
    }
}
