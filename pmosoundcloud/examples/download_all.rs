//! Example: Resolve every download link of a playlist
//!
//! This example runs the whole pipeline - client-id discovery, metadata
//! reconciliation, concurrent link resolution - and prints each resolved
//! link through the presenter seam.
//!
//! Run with: cargo run --example download_all -- <playlist-url>

use async_trait::async_trait;
use pmosoundcloud::{HtmlPage, LinkPresenter, Result, SoundCloudClient};

/// Prints each resolved link to stdout
struct StdoutPresenter;

#[async_trait]
impl LinkPresenter for StdoutPresenter {
    async fn present(&self, uri: &str) -> Result<()> {
        println!("{}", uri);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("Usage: download_all <playlist-url>");
        std::process::exit(1);
    };

    let client = SoundCloudClient::new().await?;
    let page = HtmlPage::fetch(client.http_client(), &url).await?;

    let links = client
        .download_all_tracks_with(&page, &StdoutPresenter)
        .await?;

    eprintln!("\n{} download link(s) resolved", links.len());

    Ok(())
}
