//! # Notare SDK
//!
//! Typed Rust client for the Notion HTTP API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notare_sdk::{NotionClient, NotionResult};
//!
//! #[tokio::main]
//! async fn main() -> NotionResult<()> {
//!     // Reads the integration token from NOTION_API_KEY
//!     let client = NotionClient::from_env()?;
//!
//!     // Who am I?
//!     let me = client.users().me().await?;
//!     println!("integration user: {}", me["name"]);
//!
//!     // Search for pages
//!     let results = client
//!         .search()
//!         .search(notare_sdk::api::SearchRequest {
//!             query: Some("Meeting notes".to_string()),
//!             filter: Some(notare_sdk::api::SearchFilter::pages()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("found {} objects", results["results"].as_array().map(Vec::len).unwrap_or(0));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{NotionClient, NotionClientBuilder, ENV_NOTION_API_KEY};
pub use config::ClientConfig;
pub use error::{ErrorResponse, NotionError, NotionResult};

// Re-export core types for convenience
pub use notare_core::blocks::Block;
pub use notare_core::rich_text::{Annotations, Color, RichText};
pub use notare_core::types::{
    BlockId, DatabaseId, FileUploadId, Icon, PageId, Parent, UserId,
};
