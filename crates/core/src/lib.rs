// Core types for Notare - data shapes shared by the Notion SDK and tool facade

pub mod blocks;
pub mod files;
pub mod properties;
pub mod rich_text;
pub mod types;

pub use blocks::Block;
pub use files::EncodedFile;
pub use rich_text::{Annotations, Color, RichText};
pub use types::*;
