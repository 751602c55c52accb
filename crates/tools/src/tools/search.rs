// Search tools: raw workspace search and title-narrowed page lookup

use super::{json_schema_number, json_schema_object, json_schema_string, parse_args, require_id, Tool, ToolSchema};
use anyhow::{bail, Context, Result};
use chrono::DateTime;
use notare_sdk::api::{SearchFilter, SearchRequest, SearchSort};
use notare_sdk::NotionClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Tool for raw workspace search, passing the API's result list through
/// unchanged
pub struct SearchTool {
    client: NotionClient,
}

impl SearchTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    object: Option<String>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    page_size: Option<u32>,
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Search pages and databases shared with the integration".to_string(),
            input_schema: json_schema_object(
                json!({
                    "query": json_schema_string("Title text to search for; empty returns everything"),
                    "object": {
                        "type": "string",
                        "description": "Restrict results to one object kind",
                        "enum": ["page", "database"]
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort by last edited time",
                        "enum": ["ascending", "descending"]
                    },
                    "start_cursor": json_schema_string("Cursor from a previous result page"),
                    "page_size": json_schema_number("Maximum number of results to return")
                }),
                vec![],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: SearchArgs = parse_args("search", arguments)?;

        let filter = match args.object.as_deref() {
            Some("page") => Some(SearchFilter::pages()),
            Some("database") => Some(SearchFilter::databases()),
            Some(other) => bail!("unsupported object filter: {other}"),
            None => None,
        };

        let sort = match args.sort.as_deref() {
            Some("ascending") => Some(SearchSort::ascending()),
            Some("descending") => Some(SearchSort::descending()),
            Some(other) => bail!("unsupported sort direction: {other}"),
            None => None,
        };

        let request = SearchRequest {
            query: args.query,
            filter,
            sort,
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        self.client
            .search()
            .search(request)
            .await
            .context("search failed")
    }
}

/// Summary of one matched page
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_time: String,
    pub last_edited_time: String,
}

/// Tool to find a page by title. Matches are case-insensitive and literal;
/// of several matches, only the most recently created page is returned.
pub struct SearchPagesTool {
    client: NotionClient,
}

impl SearchPagesTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPagesArgs {
    page_title: String,
}

#[async_trait::async_trait]
impl Tool for SearchPagesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_pages".to_string(),
            description: "Find a page by title (partial match); returns the most recently created match".to_string(),
            input_schema: json_schema_object(
                json!({
                    "page_title": json_schema_string("Title of the page to find, full or partial")
                }),
                vec!["page_title"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: SearchPagesArgs = parse_args("search_pages", arguments)?;
        require_id("page_title", &args.page_title)?;

        let request = SearchRequest {
            query: Some(args.page_title.clone()),
            filter: Some(SearchFilter::pages()),
            ..Default::default()
        };

        let payload = self
            .client
            .search()
            .search(request)
            .await
            .context("search_pages failed")?;

        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let needle = clean_title(&args.page_title).to_lowercase();
        let matches: Vec<PageInfo> = results
            .iter()
            .filter_map(|page| {
                let title = clean_title(&extract_page_title(page));
                if title.to_lowercase().contains(&needle) {
                    Some(page_info(page, title))
                } else {
                    None
                }
            })
            .collect();

        tracing::debug!(
            query = %args.page_title,
            matched = matches.len(),
            "search_pages narrowed results"
        );

        // Several pages can share a title; keep the newest one.
        let most_recent = matches
            .into_iter()
            .max_by_key(|page| DateTime::parse_from_rfc3339(&page.created_time).ok());
        let pages: Vec<PageInfo> = most_recent.into_iter().collect();

        Ok(json!({
            "pages": pages,
            "total_found": pages.len()
        }))
    }
}

/// Strip whitespace and surrounding quote characters from a title.
fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim()
        .to_string()
}

/// Concatenate the plain text of a page's title property. Pages created
/// under a database keep their title under a differently named property,
/// so any property carrying a `title` array counts.
fn extract_page_title(page: &Value) -> String {
    let Some(props) = page.get("properties").and_then(Value::as_object) else {
        return String::new();
    };

    let title_items = props
        .get("title")
        .or_else(|| props.values().find(|prop| prop.get("title").is_some()))
        .and_then(|prop| prop.get("title"))
        .and_then(Value::as_array);

    let Some(items) = title_items else {
        return String::new();
    };

    items
        .iter()
        .filter_map(|item| {
            item.get("plain_text")
                .and_then(Value::as_str)
                .or_else(|| item.pointer("/text/content").and_then(Value::as_str))
        })
        .collect()
}

fn page_info(page: &Value, title: String) -> PageInfo {
    let field = |key: &str| {
        page.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    PageInfo {
        id: field("id"),
        title,
        url: field("url"),
        created_time: field("created_time"),
        last_edited_time: field("last_edited_time"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_result(id: &str, title: &str, created: &str) -> Value {
        json!({
            "object": "page",
            "id": id,
            "url": format!("https://notion.so/{id}"),
            "created_time": created,
            "last_edited_time": created,
            "properties": {
                "title": {
                    "id": "title",
                    "type": "title",
                    "title": [{ "plain_text": title, "text": { "content": title } }]
                }
            }
        })
    }

    #[test]
    fn clean_title_strips_quotes_and_whitespace() {
        assert_eq!(clean_title(r#"  "Weekly sync"  "#), "Weekly sync");
        assert_eq!(clean_title("'notes'"), "notes");
        assert_eq!(clean_title("plain"), "plain");
    }

    #[test]
    fn extract_title_concatenates_spans() {
        let page = json!({
            "properties": {
                "title": { "title": [{ "plain_text": "Hello " }, { "plain_text": "World" }] }
            }
        });
        assert_eq!(extract_page_title(&page), "Hello World");
    }

    #[test]
    fn extract_title_finds_renamed_title_property() {
        let page = json!({
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "Database row" }] }
            }
        });
        assert_eq!(extract_page_title(&page), "Database row");
    }

    #[test]
    fn extract_title_handles_missing_properties() {
        assert_eq!(extract_page_title(&json!({})), "");
        assert_eq!(extract_page_title(&json!({ "properties": {} })), "");
    }

    #[tokio::test]
    async fn search_pages_returns_most_recent_match() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .and(body_partial_json(json!({
                "query": "sync",
                "filter": { "property": "object", "value": "page" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [
                    page_result("p-old", "Weekly sync", "2024-01-02T10:00:00.000Z"),
                    page_result("p-new", "Weekly Sync notes", "2024-03-04T10:00:00.000Z"),
                    page_result("p-other", "Roadmap", "2024-05-06T10:00:00.000Z")
                ]
            })))
            .mount(&server)
            .await;

        let client = NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap();
        let tool = SearchPagesTool::new(client);

        let result = tool.call(json!({ "page_title": "sync" })).await.unwrap();
        assert_eq!(result["total_found"], 1);
        assert_eq!(result["pages"][0]["id"], "p-new");
        assert_eq!(result["pages"][0]["title"], "Weekly Sync notes");
    }

    #[tokio::test]
    async fn search_rejects_unknown_object_filter() {
        let server = MockServer::start().await;
        let client = NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap();
        let tool = SearchTool::new(client);

        let err = tool
            .call(json!({ "object": "comment" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unsupported object filter"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
