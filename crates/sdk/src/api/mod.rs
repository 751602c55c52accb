//! API groups of the Notion client, one module per resource.

pub mod blocks;
pub mod comments;
pub mod databases;
pub mod files;
pub mod pages;
pub mod search;
pub mod users;

pub use blocks::*;
pub use comments::*;
pub use databases::*;
pub use files::*;
pub use pages::*;
pub use search::*;
pub use users::*;
