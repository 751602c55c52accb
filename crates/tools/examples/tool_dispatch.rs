//! Example: dispatching tools by name and reading the result envelope.
//!
//! This is the calling convention a backend route handler uses: pick a tool
//! name, pass a JSON argument object, and branch on the envelope's
//! success flag.
//!
//! Run with: NOTION_API_KEY=secret_... cargo run --example tool_dispatch

use notare_sdk::NotionClient;
use notare_tools::standard_registry;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = NotionClient::from_env()?;
    let registry = standard_registry(&client);

    println!("Registered tools: {}", registry.len());

    // Pure shaping tool: no network involved
    let outcome = registry
        .dispatch("format_text", json!({ "text": "hi", "bold": true }))
        .await;
    println!(
        "format_text -> {}",
        serde_json::to_string_pretty(&outcome)?
    );

    // Network tool: identifies the integration's bot user
    let outcome = registry.dispatch("current_user", json!({})).await;
    match outcome.data() {
        Some(user) => println!("current_user -> {}", user["name"]),
        None => println!("current_user failed: {}", outcome.error().unwrap_or("?")),
    }

    // Failure stays inside the envelope, even for unknown tools
    let outcome = registry.dispatch("no_such_tool", json!({})).await;
    println!(
        "no_such_tool -> {}",
        serde_json::to_string_pretty(&outcome)?
    );

    Ok(())
}
