//! File upload API endpoints.
//!
//! Uploading is a two-step flow: create an upload object, then send the
//! file contents. The returned upload ID can be attached to file-backed
//! blocks (e.g. `Block::image_upload`).

use crate::client::NotionClient;
use crate::error::NotionResult;
use notare_core::types::FileUploadId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File uploads API.
pub struct FileUploadsApi<'a> {
    client: &'a NotionClient,
}

impl<'a> FileUploadsApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Start a file upload.
    pub async fn create(&self, request: CreateFileUploadRequest) -> NotionResult<Value> {
        self.client.http.post("/v1/file_uploads", &request).await
    }

    /// Send the file contents for a pending upload.
    pub async fn send(
        &self,
        file_upload_id: &FileUploadId,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> NotionResult<Value> {
        self.client
            .http
            .post_multipart(
                &format!("/v1/file_uploads/{}/send", file_upload_id.0),
                filename,
                content_type,
                bytes,
            )
            .await
    }

    /// Retrieve an upload's status.
    pub async fn retrieve(&self, file_upload_id: &FileUploadId) -> NotionResult<Value> {
        self.client
            .http
            .get(&format!("/v1/file_uploads/{}", file_upload_id.0))
            .await
    }
}

/// Request to start a file upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileUploadRequest {
    pub mode: String,
    pub filename: String,
    pub content_type: String,
}

impl CreateFileUploadRequest {
    /// Single-part upload, the only mode this client issues.
    pub fn single_part(filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            mode: "single_part".to_string(),
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }
}
