//! Transport layer for the Notion SDK.

mod http;

pub use http::HttpTransport;
