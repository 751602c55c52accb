// Tool facade over the Notion API.
// Every tool builds a request, invokes the SDK, and reports through the
// uniform {success, data|error} envelope. Callers dispatch by tool name
// through the registry or call the typed tool structs directly.

pub mod outcome;
pub mod tools;

pub use outcome::ToolOutcome;
pub use tools::{standard_registry, Tool, ToolRegistry, ToolSchema};
