// File tools. Encoding and content-type detection are local and pure;
// upload_file runs the two-step remote flow (create the upload, then send
// the bytes) behind a single invocation.

use super::{json_schema_object, json_schema_string, parse_args, require_id, Tool, ToolSchema};
use anyhow::{anyhow, Context, Result};
use notare_core::files::{content_type_for, EncodedFile};
use notare_core::types::FileUploadId;
use notare_sdk::api::CreateFileUploadRequest;
use notare_sdk::NotionClient;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PathArgs {
    path: String,
}

/// Tool to read a local file into its base64 + content type form
pub struct EncodeFileTool;

impl EncodeFileTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EncodeFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for EncodeFileTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "encode_file".to_string(),
            description: "Read a local file and return its name, content type, and base64 data; no network call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "path": json_schema_string("Path of the local file to encode")
                }),
                vec!["path"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PathArgs = parse_args("encode_file", arguments)?;
        require_id("path", &args.path)?;

        let encoded = EncodedFile::from_path(&args.path).context("encode_file failed")?;
        serde_json::to_value(encoded).context("encode_file failed")
    }
}

/// Tool projecting just the content type of a path
pub struct FileContentTypeTool;

impl FileContentTypeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileContentTypeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for FileContentTypeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "file_content_type".to_string(),
            description: "Determine the MIME type a file would upload as, from its extension; no network call".to_string(),
            input_schema: json_schema_object(
                json!({
                    "path": json_schema_string("File path or name to inspect")
                }),
                vec!["path"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PathArgs = parse_args("file_content_type", arguments)?;
        require_id("path", &args.path)?;

        Ok(json!({
            "content_type": content_type_for(Path::new(&args.path))
        }))
    }
}

/// Tool to upload a local file: encode it, create the upload, send the
/// bytes, and return the upload object whose ID can back file blocks
pub struct UploadFileTool {
    client: NotionClient,
}

impl UploadFileTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UploadFileTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "upload_file".to_string(),
            description: "Upload a local file; the returned upload ID can back image and file blocks".to_string(),
            input_schema: json_schema_object(
                json!({
                    "path": json_schema_string("Path of the local file to upload")
                }),
                vec!["path"],
            ),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value> {
        let args: PathArgs = parse_args("upload_file", arguments)?;
        require_id("path", &args.path)?;

        let encoded = EncodedFile::from_path(&args.path).context("upload_file failed")?;
        let bytes = encoded.bytes().context("upload_file failed")?;

        let created = self
            .client
            .file_uploads()
            .create(CreateFileUploadRequest::single_part(
                encoded.name.clone(),
                encoded.content_type.clone(),
            ))
            .await
            .context("upload_file failed")?;

        let upload_id = created
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("upload_file failed: upload ID missing from response"))?
            .to_string();

        self.client
            .file_uploads()
            .send(
                &FileUploadId::new(upload_id),
                &encoded.name,
                &encoded.content_type,
                bytes,
            )
            .await
            .context("upload_file failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> String {
        let file_path = dir.path().join(name);
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(contents).unwrap();
        file_path.display().to_string()
    }

    #[tokio::test]
    async fn encode_file_returns_projection() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_file(&dir, "readme.md", b"# hi");

        let tool = EncodeFileTool::new();
        let result = tool.call(json!({ "path": file_path })).await.unwrap();

        assert_eq!(result["name"], "readme.md");
        assert_eq!(result["content_type"], "text/markdown");
        assert!(!result["data"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn encode_file_reports_missing_files() {
        let tool = EncodeFileTool::new();
        let err = tool
            .call(json!({ "path": "/nonexistent/readme.md" }))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("encode_file failed"));
    }

    #[tokio::test]
    async fn file_content_type_projects_one_field() {
        let tool = FileContentTypeTool::new();
        let result = tool.call(json!({ "path": "chart.png" })).await.unwrap();
        assert_eq!(result, json!({ "content_type": "image/png" }));
    }

    #[tokio::test]
    async fn upload_file_runs_create_then_send() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_file(&dir, "photo.png", b"fake-png-bytes");

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/file_uploads"))
            .and(body_partial_json(json!({
                "mode": "single_part",
                "filename": "photo.png",
                "content_type": "image/png"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "file_upload",
                "id": "fu-1",
                "status": "pending"
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/file_uploads/fu-1/send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "file_upload",
                "id": "fu-1",
                "status": "uploaded"
            })))
            .mount(&server)
            .await;

        let client = NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap();
        let tool = UploadFileTool::new(client);

        let result = tool.call(json!({ "path": file_path })).await.unwrap();
        assert_eq!(result["id"], "fu-1");
        assert_eq!(result["status"], "uploaded");
    }

    #[tokio::test]
    async fn upload_file_fails_when_id_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_file(&dir, "photo.png", b"bytes");

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/file_uploads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "file_upload",
                "status": "pending"
            })))
            .mount(&server)
            .await;

        let client = NotionClient::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap();
        let tool = UploadFileTool::new(client);

        let err = tool.call(json!({ "path": file_path })).await.unwrap_err();
        assert!(err.to_string().contains("upload ID missing"));
    }
}
