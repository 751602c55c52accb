//! Users API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Users API for listing workspace members and bots.
pub struct UsersApi<'a> {
    client: &'a NotionClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// List workspace users, one page of results per call.
    pub async fn list(&self, query: ListUsersQuery) -> NotionResult<Value> {
        self.client.http.get_with_query("/v1/users", &query).await
    }

    /// Retrieve a user by ID.
    pub async fn retrieve(&self, user_id: &UserId) -> NotionResult<Value> {
        self.client
            .http
            .get(&format!("/v1/users/{}", user_id.0))
            .await
    }

    /// Retrieve the bot user the token belongs to.
    pub async fn me(&self) -> NotionResult<Value> {
        self.client.http.get("/v1/users/me").await
    }
}

/// Cursor query for listing users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
