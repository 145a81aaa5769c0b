//! Example: Discover the API client id embedded in a playlist page
//!
//! This example demonstrates:
//! - Fetching a SoundCloud page and building a page context from it
//! - Scanning the page's script bundles for the client id
//!
//! Run with: cargo run --example find_client_id -- <page-url>

use pmosoundcloud::{HtmlPage, PageContext, SoundCloudClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://soundcloud.com/discover".to_string());

    println!("SoundCloud - Client Id Discovery");
    println!("================================\n");

    let client = SoundCloudClient::new().await?;
    let page = HtmlPage::fetch(client.http_client(), &url).await?;

    let scripts = page.script_urls();
    println!("Found {} candidate script bundle(s)", scripts.len());
    for script in &scripts {
        println!("  {}", script);
    }

    let client_id = client.discover_client_id(&scripts).await?;
    println!("\nClient id: {}", client_id);

    Ok(())
}
