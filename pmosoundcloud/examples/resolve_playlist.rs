//! Example: Resolve the track references of a playlist
//!
//! This example demonstrates:
//! - Building a page context from a playlist page
//! - Discovering the client id
//! - Reconciling track metadata (hydration snapshot or resolve fallback,
//!   with repair of partially-hydrated tails)
//!
//! Run with: cargo run --example resolve_playlist -- <playlist-url>

use pmosoundcloud::{HtmlPage, PageContext, SoundCloudClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("Usage: resolve_playlist <playlist-url>");
        std::process::exit(1);
    };

    println!("SoundCloud - Playlist Resolution");
    println!("================================\n");

    let client = SoundCloudClient::new().await?;
    let page = HtmlPage::fetch(client.http_client(), &url).await?;

    let client_id = client.discover_client_id(&page.script_urls()).await?;
    println!("Client id: {}\n", client_id);

    let refs = client.resolve_track_refs(&client_id, &page).await?;
    println!("{} track(s) in playlist:", refs.len());
    for (index, track) in refs.iter().enumerate() {
        match &track.secret_token {
            Some(token) => println!("  {:>3}. {} ({})", index + 1, track.id, token),
            None => println!("  {:>3}. {} (public)", index + 1, track.id),
        }
    }

    Ok(())
}
