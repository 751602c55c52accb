// Structural block tools: divider, table of contents, breadcrumb,
// equation, and table scaffold

use super::append_block;
use crate::tools::{
    json_schema_boolean, json_schema_number, json_schema_object, json_schema_string, parse_args,
    Tool, ToolSchema,
};
use anyhow::Result;
use notare_core::blocks::Block;
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};

fn default_expression() -> String {
    "E = mc^2".to_string()
}

fn default_dimension() -> u32 {
    1
}

/// Tool to add a divider line between sections
pub struct AddDividerTool {
    client: NotionClient,
}

impl AddDividerTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct PageOnlyArgs {
    page_id: String,
}

#[async_trait::async_trait]
impl Tool for AddDividerTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_divider".to_string(),
            description: "Add a divider line block for section separation".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PageOnlyArgs = parse_args("add_divider", arguments)?;
        append_block(&self.client, "add_divider", &args.page_id, Block::divider()).await
    }
}

/// Tool to add a table of contents block
pub struct AddTableOfContentsTool {
    client: NotionClient,
}

impl AddTableOfContentsTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for AddTableOfContentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_table_of_contents".to_string(),
            description: "Add a table of contents block for navigation".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PageOnlyArgs = parse_args("add_table_of_contents", arguments)?;
        append_block(
            &self.client,
            "add_table_of_contents",
            &args.page_id,
            Block::table_of_contents(),
        )
        .await
    }
}

/// Tool to add a breadcrumb navigation block
pub struct AddBreadcrumbTool {
    client: NotionClient,
}

impl AddBreadcrumbTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for AddBreadcrumbTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_breadcrumb".to_string(),
            description: "Add a breadcrumb navigation block".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PageOnlyArgs = parse_args("add_breadcrumb", arguments)?;
        append_block(&self.client, "add_breadcrumb", &args.page_id, Block::breadcrumb()).await
    }
}

/// Tool to add a mathematical equation block
pub struct AddEquationTool {
    client: NotionClient,
}

impl AddEquationTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddEquationArgs {
    page_id: String,
    #[serde(default = "default_expression")]
    expression: String,
}

#[async_trait::async_trait]
impl Tool for AddEquationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_equation".to_string(),
            description: "Add an equation block with a LaTeX expression".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "expression": json_schema_string("LaTeX expression (default: E = mc^2)")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddEquationArgs = parse_args("add_equation", arguments)?;
        let block = Block::equation(args.expression);
        append_block(&self.client, "add_equation", &args.page_id, block).await
    }
}

/// Tool to add a table block with a pre-filled scaffold
pub struct AddTableTool {
    client: NotionClient,
}

impl AddTableTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AddTableArgs {
    page_id: String,
    #[serde(default = "default_dimension")]
    table_width: u32,
    #[serde(default = "default_dimension")]
    table_height: u32,
    #[serde(default)]
    has_column_header: bool,
    #[serde(default)]
    has_row_header: bool,
}

#[async_trait::async_trait]
impl Tool for AddTableTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "add_table".to_string(),
            description: "Add a table block with configurable size and headers".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_id": json_schema_string("The page to append to"),
                    "table_width": json_schema_number("Number of columns (default: 1)"),
                    "table_height": json_schema_number("Number of rows (default: 1)"),
                    "has_column_header": json_schema_boolean("First row is a header (default: false)"),
                    "has_row_header": json_schema_boolean("First column is a header (default: false)")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: AddTableArgs = parse_args("add_table", arguments)?;
        let block = Block::table(
            args.table_width,
            args.table_height,
            args.has_column_header,
            args.has_row_header,
        );
        append_block(&self.client, "add_table", &args.page_id, block).await
    }
}
