// Database tools: create, retrieve, update, and query

use super::{
    json_schema_number, json_schema_object, json_schema_string, parse_args, require_id, Tool,
    ToolSchema,
};
use anyhow::{Context, Result};
use notare_core::rich_text::RichText;
use notare_core::types::{DatabaseId, Parent};
use notare_sdk::api::{CreateDatabaseRequest, QueryDatabaseRequest, UpdateDatabaseRequest};
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Tool to create a database under a page
pub struct CreateDatabaseTool {
    client: NotionClient,
}

impl CreateDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreateDatabaseArgs {
    parent_page_id: String,
    title: String,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[async_trait::async_trait]
impl Tool for CreateDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_database".to_string(),
            description: "Create a database under a parent page".to_string(),
            input_schema: json_schema_object(
                json!({
                    "parent_page_id": json_schema_string("ID of the parent page"),
                    "title": json_schema_string("Database title"),
                    "properties": {
                        "type": "object",
                        "description": "Property schema keyed by property name; defaults to a single Name title column"
                    }
                }),
                vec!["parent_page_id", "title"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: CreateDatabaseArgs = parse_args("create_database", arguments)?;
        require_id("parent_page_id", &args.parent_page_id)?;

        // Every database schema needs a title property.
        let properties = args.properties.unwrap_or_else(|| {
            let mut map = Map::new();
            map.insert("Name".to_string(), json!({ "title": {} }));
            map
        });

        let request = CreateDatabaseRequest {
            parent: Parent::page(args.parent_page_id.as_str()),
            title: vec![RichText::text(args.title)],
            properties,
            icon: None,
        };

        self.client
            .databases()
            .create(request)
            .await
            .context("create_database failed")
    }
}

/// Tool to retrieve a database's schema and metadata
pub struct RetrieveDatabaseTool {
    client: NotionClient,
}

impl RetrieveDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct DatabaseOnlyArgs {
    database_id: String,
}

#[async_trait::async_trait]
impl Tool for RetrieveDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "retrieve_database".to_string(),
            description: "Retrieve a database's schema and metadata by ID".to_string(),
            input_schema: json_schema_object(
                json!({
                    "database_id": json_schema_string("The database ID to retrieve")
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: DatabaseOnlyArgs = parse_args("retrieve_database", arguments)?;
        require_id("database_id", &args.database_id)?;

        self.client
            .databases()
            .retrieve(&DatabaseId::new(args.database_id))
            .await
            .context("retrieve_database failed")
    }
}

/// Tool to update a database's title or property schema
pub struct UpdateDatabaseTool {
    client: NotionClient,
}

impl UpdateDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct UpdateDatabaseArgs {
    database_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[async_trait::async_trait]
impl Tool for UpdateDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_database".to_string(),
            description: "Update a database's title or property schema".to_string(),
            input_schema: json_schema_object(
                json!({
                    "database_id": json_schema_string("The database ID to update"),
                    "title": json_schema_string("New database title"),
                    "properties": {
                        "type": "object",
                        "description": "Property schema changes keyed by property name"
                    }
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: UpdateDatabaseArgs = parse_args("update_database", arguments)?;
        require_id("database_id", &args.database_id)?;

        let request = UpdateDatabaseRequest {
            title: args.title.map(|t| vec![RichText::text(t)]),
            properties: args.properties,
        };

        self.client
            .databases()
            .update(&DatabaseId::new(args.database_id), request)
            .await
            .context("update_database failed")
    }
}

/// Tool to query database rows with the API's filter/sort grammar
pub struct QueryDatabaseTool {
    client: NotionClient,
}

impl QueryDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct QueryDatabaseArgs {
    database_id: String,
    #[serde(default)]
    filter: Option<Value>,
    #[serde(default)]
    sorts: Option<Vec<Value>>,
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for QueryDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "query_database".to_string(),
            description: "Query database rows; filter and sorts use the API's own grammar"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "database_id": json_schema_string("The database ID to query"),
                    "filter": { "type": "object", "description": "Filter in the API's grammar" },
                    "sorts": { "type": "array", "description": "Sorts in the API's grammar" },
                    "start_cursor": json_schema_string("Cursor from a previous result page"),
                    "page_size": json_schema_number("Maximum number of rows to return")
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: QueryDatabaseArgs = parse_args("query_database", arguments)?;
        require_id("database_id", &args.database_id)?;

        let request = QueryDatabaseRequest {
            filter: args.filter,
            sorts: args.sorts,
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        self.client
            .databases()
            .query(&DatabaseId::new(args.database_id), request)
            .await
            .context("query_database failed")
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

    #[tokio::test]
    async fn create_database_defaults_schema_to_title_column() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/databases"))
            .and(body_partial_json(json!({
                "parent": { "type": "page_id", "page_id": "p-1" },
                "title": [{ "text": { "content": "Tasks" } }],
                "properties": { "Name": { "title": {} } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "database",
                "id": "db-new"
            })))
            .mount(&server)
            .await;

        let tool = CreateDatabaseTool::new(client_for(&server).await);
        let result = tool
            .call(json!({ "parent_page_id": "p-1", "title": "Tasks" }))
            .await
            .unwrap();
        assert_eq!(result["id"], "db-new");
    }

    #[tokio::test]
    async fn query_database_passes_filter_through() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/databases/db-1/query"))
            .and(body_partial_json(json!({
                "filter": { "property": "Done", "checkbox": { "equals": false } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [{ "object": "page", "id": "row-1" }]
            })))
            .mount(&server)
            .await;

        let tool = QueryDatabaseTool::new(client_for(&server).await);
        let result = tool
            .call(json!({
                "database_id": "db-1",
                "filter": { "property": "Done", "checkbox": { "equals": false } }
            }))
            .await
            .unwrap();
        assert_eq!(result["results"][0]["id"], "row-1");
    }
}
