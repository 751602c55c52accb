//! Databases API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::rich_text::RichText;
use notare_core::types::{DatabaseId, Icon, Parent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Databases API for creating, querying, and updating databases.
pub struct DatabasesApi<'a> {
    client: &'a NotionClient,
}

impl<'a> DatabasesApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Create a database under a page parent.
    pub async fn create(&self, request: CreateDatabaseRequest) -> NotionResult<Value> {
        self.client.http.post("/v1/databases", &request).await
    }

    /// Retrieve a database by ID.
    pub async fn retrieve(&self, database_id: &DatabaseId) -> NotionResult<Value> {
        self.client
            .http
            .get(&format!("/v1/databases/{}", database_id.0))
            .await
    }

    /// Update a database's title or property schema.
    pub async fn update(
        &self,
        database_id: &DatabaseId,
        request: UpdateDatabaseRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .patch(&format!("/v1/databases/{}", database_id.0), &request)
            .await
    }

    /// Query database rows with the API's filter/sort grammar.
    pub async fn query(
        &self,
        database_id: &DatabaseId,
        request: QueryDatabaseRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .post(&format!("/v1/databases/{}/query", database_id.0), &request)
            .await
    }
}

/// Request to create a new database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub parent: Parent,
    pub title: Vec<RichText>,
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Request to update an existing database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

/// Query over database rows. Filter and sorts use the API's own grammar
/// and are passed through unvalidated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_request_defaults_to_empty_body() {
        let request = QueryDatabaseRequest::default();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn create_request_carries_title_spans() {
        let request = CreateDatabaseRequest {
            parent: Parent::page("p-1"),
            title: vec![RichText::text("Tasks")],
            properties: Map::new(),
            icon: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["title"][0]["text"]["content"], "Tasks");
        assert_eq!(value["parent"]["type"], "page_id");
    }
}
