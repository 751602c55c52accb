// Text shaping tools. These are pure: they translate ergonomic scalar
// parameters into the nested rich text / block shapes the external API
// expects, and never touch the network.

use super::{json_schema_array, json_schema_boolean, json_schema_object, json_schema_string, parse_args, Tool, ToolSchema};
use anyhow::{Context, Result};
use notare_core::blocks::Block;
use notare_core::rich_text::{Annotations, Color, RichText};
use serde::Deserialize;
use serde_json::{json, Value};

/// One span described by flat scalar fields, the shape callers find
/// easiest to produce
#[derive(Debug, Deserialize)]
struct SpanConfig {
    content: String,
    #[serde(default)]
    link_url: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    code: bool,
    #[serde(default)]
    color: Color,
}

impl SpanConfig {
    fn into_rich_text(self) -> RichText {
        let mut span = RichText::text(self.content).with_annotations(Annotations {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            underline: self.underline,
            code: self.code,
            color: self.color,
        });
        if let Some(url) = self.link_url {
            span = span.link(url);
        }
        span
    }
}

/// Accept a span in either form: the flat config shape above, or an
/// already-nested rich text object passed through unchanged.
fn parse_span(value: Value) -> Result<RichText> {
    if value.get("content").is_some() && value.get("text").is_none() {
        let config: SpanConfig =
            serde_json::from_value(value).context("invalid rich text config")?;
        return Ok(config.into_rich_text());
    }
    serde_json::from_value(value).context("invalid rich text object")
}

/// Tool to turn one piece of text plus style flags into a rich text object
pub struct FormatTextTool;

impl FormatTextTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FormatTextTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct FormatTextArgs {
    text: String,
    #[serde(default)]
    link_url: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    code: bool,
    #[serde(default)]
    color: Color,
}

#[async_trait::async_trait]
impl Tool for FormatTextTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "format_text".to_string(),
            description: "Build a single rich text object from text and style flags; no network call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "text": json_schema_string("Text content"),
                    "link_url": json_schema_string("Optional hyperlink URL"),
                    "bold": json_schema_boolean("Bold"),
                    "italic": json_schema_boolean("Italic"),
                    "underline": json_schema_boolean("Underline"),
                    "strikethrough": json_schema_boolean("Strikethrough"),
                    "code": json_schema_boolean("Inline code"),
                    "color": json_schema_string("Text color, e.g. red or blue_background (default: default)")
                }),
                vec!["text"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: FormatTextArgs = parse_args("format_text", arguments)?;

        let config = SpanConfig {
            content: args.text,
            link_url: args.link_url,
            bold: args.bold,
            italic: args.italic,
            underline: args.underline,
            strikethrough: args.strikethrough,
            code: args.code,
            color: args.color,
        };

        serde_json::to_value(config.into_rich_text()).context("format_text failed")
    }
}

/// Tool to turn a list of span configs into a rich text array
pub struct ComposeRichTextTool;

impl ComposeRichTextTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComposeRichTextTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ComposeRichTextArgs {
    items: Vec<SpanConfig>,
}

#[async_trait::async_trait]
impl Tool for ComposeRichTextTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "compose_rich_text".to_string(),
            description: "Build a rich text array from span configs like {\"content\": \"x\", \"bold\": true}; no network call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "items": json_schema_array(
                        json!({ "type": "object" }),
                        "Span configs: content plus optional bold/italic/underline/strikethrough/code/color/link_url"
                    )
                }),
                vec!["items"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: ComposeRichTextArgs = parse_args("compose_rich_text", arguments)?;

        let spans: Vec<RichText> = args
            .items
            .into_iter()
            .map(SpanConfig::into_rich_text)
            .collect();

        Ok(json!({
            "rich_text_objects": spans,
            "count": spans.len()
        }))
    }
}

/// Block shape requested for one slice of rich text
#[derive(Debug, Deserialize)]
struct BlockConfig {
    #[serde(rename = "type", default = "default_block_type")]
    kind: String,
    #[serde(default)]
    checked: bool,
}

fn default_block_type() -> String {
    "paragraph".to_string()
}

fn first_span(spans: Vec<RichText>) -> Vec<RichText> {
    spans.into_iter().take(1).collect()
}

fn build_block(config: &BlockConfig, spans: Vec<RichText>) -> Block {
    match config.kind.as_str() {
        "heading_1" => Block::heading(1, first_span(spans)),
        "heading_2" => Block::heading(2, first_span(spans)),
        "heading_3" => Block::heading(3, first_span(spans)),
        "to_do" => Block::to_do(first_span(spans), config.checked),
        _ => Block::paragraph(spans),
    }
}

/// Pair rich text spans with block configs:
/// - equal counts map one span per block;
/// - more spans than configs split evenly, remainder to the leading blocks;
/// - fewer spans leave the trailing blocks empty.
fn distribute(spans: Vec<RichText>, configs: &[BlockConfig]) -> Vec<Block> {
    if configs.is_empty() {
        return Vec::new();
    }

    if spans.len() > configs.len() {
        let per_block = spans.len() / configs.len();
        let remainder = spans.len() % configs.len();
        let mut spans = spans.into_iter();

        configs
            .iter()
            .enumerate()
            .map(|(i, config)| {
                let count = per_block + usize::from(i < remainder);
                let slice: Vec<RichText> = spans.by_ref().take(count).collect();
                build_block(config, slice)
            })
            .collect()
    } else {
        let mut spans = spans.into_iter();
        configs
            .iter()
            .map(|config| {
                let slice: Vec<RichText> = spans.next().into_iter().collect();
                build_block(config, slice)
            })
            .collect()
    }
}

/// Tool to pair a rich text array with block configs into block payloads
pub struct BuildBlocksTool;

impl BuildBlocksTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildBlocksTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct BuildBlocksArgs {
    rich_text_objects: Vec<Value>,
    blocks_config: Vec<BlockConfig>,
}

#[async_trait::async_trait]
impl Tool for BuildBlocksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "build_blocks".to_string(),
            description: "Pair rich text objects with block configs (paragraph, heading_1-3, to_do) into block payloads; no network call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "rich_text_objects": json_schema_array(
                        json!({ "type": "object" }),
                        "Rich text objects, nested or flat-config form"
                    ),
                    "blocks_config": json_schema_array(
                        json!({ "type": "object" }),
                        "Block configs: {\"type\": \"paragraph|heading_1|heading_2|heading_3|to_do\", \"checked\": bool}"
                    )
                }),
                vec!["rich_text_objects", "blocks_config"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: BuildBlocksArgs = parse_args("build_blocks", arguments)?;

        let spans: Vec<RichText> = args
            .rich_text_objects
            .into_iter()
            .map(parse_span)
            .collect::<Result<_>>()?;

        let blocks = distribute(spans, &args.blocks_config);

        Ok(json!({
            "blocks": blocks,
            "count": blocks.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: &str) -> BlockConfig {
        BlockConfig {
            kind: kind.to_string(),
            checked: false,
        }
    }

    #[tokio::test]
    async fn format_text_bold_matches_builder_output() {
        let tool = FormatTextTool::new();
        let result = tool
            .call(json!({ "text": "hi", "bold": true }))
            .await
            .unwrap();

        assert_eq!(
            result,
            serde_json::to_value(RichText::text("hi").bold()).unwrap()
        );
        assert_eq!(result["annotations"]["bold"], true);
        assert_eq!(result["annotations"]["italic"], false);
        assert_eq!(result["annotations"]["color"], "default");
    }

    #[tokio::test]
    async fn format_text_is_deterministic() {
        let tool = FormatTextTool::new();
        let args = json!({ "text": "x", "italic": true, "color": "green" });

        let first = tool.call(args.clone()).await.unwrap();
        let second = tool.call(args).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn format_text_rejects_unknown_color() {
        let tool = FormatTextTool::new();
        let err = tool
            .call(json!({ "text": "x", "color": "chartreuse" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("format_text"));
    }

    #[tokio::test]
    async fn compose_rich_text_builds_span_array() {
        let tool = ComposeRichTextTool::new();
        let result = tool
            .call(json!({
                "items": [
                    { "content": "Python", "bold": true, "color": "blue" },
                    { "content": " is great" }
                ]
            }))
            .await
            .unwrap();

        assert_eq!(result["count"], 2);
        assert_eq!(result["rich_text_objects"][0]["annotations"]["bold"], true);
        assert_eq!(result["rich_text_objects"][0]["annotations"]["color"], "blue");
        assert_eq!(
            result["rich_text_objects"][1]["text"]["content"],
            " is great"
        );
    }

    #[test]
    fn parse_span_accepts_both_forms() {
        let from_config = parse_span(json!({ "content": "a", "bold": true })).unwrap();
        assert!(from_config.annotations().bold);

        let nested = serde_json::to_value(RichText::text("b").italic()).unwrap();
        let from_nested = parse_span(nested).unwrap();
        assert!(from_nested.annotations().italic);
    }

    #[test]
    fn distribute_maps_one_to_one_when_counts_match() {
        let spans = vec![RichText::text("h"), RichText::text("p")];
        let configs = [config("heading_1"), config("paragraph")];

        let blocks = distribute(spans, &configs);
        let values: Vec<Value> = blocks
            .iter()
            .map(|b| serde_json::to_value(b).unwrap())
            .collect();

        assert_eq!(values[0]["type"], "heading_1");
        assert_eq!(values[1]["type"], "paragraph");
        assert_eq!(
            values[1]["paragraph"]["rich_text"][0]["text"]["content"],
            "p"
        );
    }

    #[test]
    fn distribute_splits_surplus_spans_evenly() {
        let spans: Vec<RichText> = (0..5).map(|i| RichText::text(format!("s{i}"))).collect();
        let configs = [config("paragraph"), config("paragraph")];

        let blocks = distribute(spans, &configs);
        let values: Vec<Value> = blocks
            .iter()
            .map(|b| serde_json::to_value(b).unwrap())
            .collect();

        // 5 spans over 2 blocks: 3 to the first, 2 to the second.
        assert_eq!(values[0]["paragraph"]["rich_text"].as_array().unwrap().len(), 3);
        assert_eq!(values[1]["paragraph"]["rich_text"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn distribute_leaves_trailing_blocks_empty() {
        let spans = vec![RichText::text("only")];
        let configs = [config("paragraph"), config("paragraph"), config("paragraph")];

        let blocks = distribute(spans, &configs);
        let values: Vec<Value> = blocks
            .iter()
            .map(|b| serde_json::to_value(b).unwrap())
            .collect();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["paragraph"]["rich_text"].as_array().unwrap().len(), 1);
        assert!(values[1]["paragraph"]["rich_text"].as_array().unwrap().is_empty());
        assert!(values[2]["paragraph"]["rich_text"].as_array().unwrap().is_empty());
    }

    #[test]
    fn headings_take_only_the_first_span_of_their_slice() {
        let spans: Vec<RichText> = (0..4).map(|i| RichText::text(format!("s{i}"))).collect();
        let configs = [config("heading_2"), config("paragraph")];

        let blocks = distribute(spans, &configs);
        let heading = serde_json::to_value(&blocks[0]).unwrap();
        assert_eq!(heading["heading_2"]["rich_text"].as_array().unwrap().len(), 1);
        assert_eq!(heading["heading_2"]["rich_text"][0]["text"]["content"], "s0");
    }

    #[tokio::test]
    async fn build_blocks_wires_everything_together() {
        let tool = BuildBlocksTool::new();
        let result = tool
            .call(json!({
                "rich_text_objects": [
                    { "content": "Title", "bold": true },
                    { "content": "task one" }
                ],
                "blocks_config": [
                    { "type": "heading_1" },
                    { "type": "to_do", "checked": true }
                ]
            }))
            .await
            .unwrap();

        assert_eq!(result["count"], 2);
        assert_eq!(result["blocks"][0]["type"], "heading_1");
        assert_eq!(result["blocks"][1]["to_do"]["checked"], true);
    }
}
