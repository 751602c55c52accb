//! Basic SDK usage example.
//!
//! This example demonstrates how to connect to the Notion API, identify the
//! integration, and search for pages.
//!
//! Run with: NOTION_API_KEY=secret_... cargo run --example basic_usage

use notare_sdk::api::{SearchFilter, SearchRequest, SearchSort};
use notare_sdk::{NotionClient, NotionResult};

#[tokio::main]
async fn main() -> NotionResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Build the client from the NOTION_API_KEY environment variable
    let client = NotionClient::from_env()?;

    // Identify the bot user the token belongs to
    println!("Checking the integration user...");
    let me = client.users().me().await?;
    println!(
        "Connected as: {} ({})",
        me["name"].as_str().unwrap_or("unknown"),
        me["id"].as_str().unwrap_or("?")
    );

    // Search for pages, most recently edited first
    println!("\nSearching for pages...");
    let results = client
        .search()
        .search(SearchRequest {
            filter: Some(SearchFilter::pages()),
            sort: Some(SearchSort::descending()),
            page_size: Some(5),
            ..Default::default()
        })
        .await?;

    let pages = results["results"].as_array().cloned().unwrap_or_default();
    println!("Found {} pages", pages.len());
    for page in &pages {
        println!(
            "  {} (last edited: {})",
            page["id"].as_str().unwrap_or("?"),
            page["last_edited_time"].as_str().unwrap_or("?")
        );
    }

    // List workspace users
    println!("\nListing users...");
    let users = client.users().list(Default::default()).await?;
    for user in users["results"].as_array().into_iter().flatten().take(5) {
        println!(
            "  {} ({})",
            user["name"].as_str().unwrap_or("unnamed"),
            user["type"].as_str().unwrap_or("?")
        );
    }

    println!("\nBasic usage example completed successfully!");
    Ok(())
}
