//! # pmosoundcloud - SoundCloud Playlist Download Links for Rust
//!
//! `pmosoundcloud` resolves the complete set of downloadable tracks for a
//! SoundCloud playlist and produces a direct download link for each one,
//! given only the playlist page context.
//!
//! ## Features
//!
//! - **Client-Id Discovery**: Scan the page's script bundles for the
//!   ephemeral API client id (newest bundle first, stop at the first hit)
//! - **Metadata Reconciliation**: Read the playlist from the page hydration
//!   snapshot, fall back to the resolve API, and repair partially-hydrated
//!   track tails through one batch call
//! - **Concurrent Link Resolution**: Fan out one download request per
//!   track, join all-or-nothing, keep playlist order in the output
//! - **Injected Page Context**: No ambient browser state; the page is a
//!   trait collaborator, so the pipeline runs deterministically in tests
//! - **Async/Await**: Built on tokio for efficient async I/O
//!
//! ## Architecture
//!
//! ```text
//! pmosoundcloud/
//! ├── src/
//! │   ├── lib.rs              # Crate root (this file)
//! │   ├── client.rs           # SoundCloudClient + pipeline orchestration
//! │   ├── resolver.rs         # Track metadata reconciliation
//! │   ├── models.rs           # Playlist / track data structures
//! │   ├── hydration.rs        # Page hydration snapshot records
//! │   ├── page.rs             # PageContext / LinkPresenter collaborators
//! │   ├── api/
//! │   │   ├── mod.rs          # Low-level HTTP layer
//! │   │   ├── credentials.rs  # Client-id discovery
//! │   │   └── playlist.rs     # Resolve / tracks / download endpoints
//! │   └── error.rs            # Error types
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use pmosoundcloud::{HtmlPage, SoundCloudClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SoundCloudClient::new().await?;
//!
//!     // Build the page context from the playlist page
//!     let page = HtmlPage::fetch(
//!         client.http_client(),
//!         "https://soundcloud.com/somelabel/sets/album/s-SET99",
//!     )
//!     .await?;
//!
//!     // Discovery -> reconciliation -> concurrent link resolution
//!     let links = client.download_all_tracks(&page).await?;
//!     for link in links {
//!         println!("{}", link);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline stages
//!
//! The three stages can also be driven individually, threading the
//! discovered client id through explicitly:
//!
//! ```no_run
//! # use pmosoundcloud::{PageContext, SoundCloudClient, StaticPage};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let page = StaticPage::default();
//! let client = SoundCloudClient::new().await?;
//!
//! let client_id = client.discover_client_id(&page.script_urls()).await?;
//! let refs = client.resolve_track_refs(&client_id, &page).await?;
//! let links = client.resolve_download_links(&client_id, &refs).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Failures are fail-fast throughout: any stage error aborts the pipeline,
//! nothing is retried, and no partial link list is ever produced.
//!
//! ## See also
//!
//! - [`page::PageContext`] for supplying page data from other sources
//! - [`page::LinkPresenter`] for receiving the resolved links in order

pub mod api;
pub mod client;
pub mod error;
pub mod hydration;
pub mod models;
pub mod page;
mod resolver;

pub use api::SoundCloudApi;
pub use client::{ClientBuilder, SoundCloudClient};
pub use error::{Error, Result};
pub use hydration::{HydrationRecord, HydrationSnapshot};
pub use models::{secret_token_from_track_href, Playlist, TrackRecord, TrackRef};
pub use page::{HtmlPage, LinkPresenter, PageContext, StaticPage};
