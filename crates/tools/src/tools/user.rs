// User tools: list workspace users, retrieve one, and identify the
// integration's own bot user

use super::{
    json_schema_number, json_schema_object, json_schema_string, parse_args, require_id, Tool,
    ToolSchema,
};
use anyhow::{Context, Result};
use notare_core::types::UserId;
use notare_sdk::api::ListUsersQuery;
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};

/// Tool to list workspace members and bots
pub struct ListUsersTool {
    client: NotionClient,
}

impl ListUsersTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListUsersArgs {
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for ListUsersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_users".to_string(),
            description: "List workspace members and bots; pass the returned cursor to continue".to_string(),
            input_schema: json_schema_object(
                json!({
                    "start_cursor": json_schema_string("Cursor from a previous result page"),
                    "page_size": json_schema_number("Maximum number of users to return")
                }),
                vec![],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: ListUsersArgs = parse_args("list_users", arguments)?;

        let query = ListUsersQuery {
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        self.client
            .users()
            .list(query)
            .await
            .context("list_users failed")
    }
}

/// Tool to retrieve a user by ID
pub struct RetrieveUserTool {
    client: NotionClient,
}

impl RetrieveUserTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RetrieveUserArgs {
    user_id: String,
}

#[async_trait::async_trait]
impl Tool for RetrieveUserTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "retrieve_user".to_string(),
            description: "Retrieve a workspace user by ID".to_string(),
            input_schema: json_schema_object(
                json!({
                    "user_id": json_schema_string("The user ID to retrieve")
                }),
                vec!["user_id"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: RetrieveUserArgs = parse_args("retrieve_user", arguments)?;
        require_id("user_id", &args.user_id)?;

        self.client
            .users()
            .retrieve(&UserId::new(args.user_id))
            .await
            .context("retrieve_user failed")
    }
}

/// Tool to identify the bot user the token belongs to
pub struct CurrentUserTool {
    client: NotionClient,
}

impl CurrentUserTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CurrentUserTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "current_user".to_string(),
            description: "Retrieve the bot user the integration token belongs to".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn call(&self, _arguments: Value) -> Result<Value> {
        self.client.users().me().await.context("current_user failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> NotionClient {
        NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn current_user_ignores_arguments() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "user",
                "id": "bot-1",
                "type": "bot",
                "name": "Integration"
            })))
            .mount(&server)
            .await;

        let tool = CurrentUserTool::new(client_for(&server).await);
        let result = tool.call(Value::Null).await.unwrap();
        assert_eq!(result["id"], "bot-1");
    }

    #[tokio::test]
    async fn list_users_accepts_missing_arguments() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [{ "object": "user", "id": "u-1" }],
                "has_more": false
            })))
            .mount(&server)
            .await;

        let tool = ListUsersTool::new(client_for(&server).await);
        let result = tool.call(Value::Null).await.unwrap();
        assert_eq!(result["results"][0]["id"], "u-1");
    }
}
