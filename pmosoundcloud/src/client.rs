//! SoundCloud client and pipeline orchestration

use crate::api::{SoundCloudApi, API_BASE_URL};
use crate::error::Result;
use crate::models::{Playlist, TrackRef};
use crate::page::{LinkPresenter, PageContext};
use futures::future::try_join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = API_BASE_URL;

/// Default timeout for HTTP requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "pmosoundcloud/0.1.0";

/// SoundCloud playlist download-link client
///
/// Wraps the low-level API layer and sequences the resolution pipeline:
/// client-id discovery, track metadata reconciliation, and the concurrent
/// download-link fan-out. The client keeps no credential state; the
/// discovered client id is threaded through the calls explicitly.
///
/// # Example
///
/// ```no_run
/// use pmosoundcloud::{HtmlPage, SoundCloudClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SoundCloudClient::new().await?;
///     let page = HtmlPage::fetch(
///         client.http_client(),
///         "https://soundcloud.com/somelabel/sets/album/s-SET99",
///     )
///     .await?;
///
///     for link in client.download_all_tracks(&page).await? {
///         println!("{}", link);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SoundCloudClient {
    api: SoundCloudApi,
}

impl SoundCloudClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings.
    pub fn with_client(client: Client) -> Self {
        Self {
            api: SoundCloudApi::new(
                client,
                DEFAULT_API_BASE,
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        }
    }

    /// The low-level API layer
    pub fn api(&self) -> &SoundCloudApi {
        &self.api
    }

    /// The underlying HTTP client
    pub fn http_client(&self) -> &Client {
        self.api.http_client()
    }

    /// Discover the API client id from the page's script bundles
    ///
    /// See [`SoundCloudApi::discover_client_id`].
    pub async fn discover_client_id(&self, script_urls: &[String]) -> Result<String> {
        self.api.discover_client_id(script_urls).await
    }

    /// Resolve a playlist page URL to its playlist structure
    pub async fn resolve_playlist(&self, client_id: &str, url: &str) -> Result<Playlist> {
        self.api.resolve_playlist(client_id, url).await
    }

    /// Fetch a playlist by id
    pub async fn get_playlist(
        &self,
        client_id: &str,
        playlist_id: u64,
        secret_token: Option<&str>,
    ) -> Result<Playlist> {
        self.api
            .get_playlist(client_id, playlist_id, secret_token)
            .await
    }

    /// Resolve the download links for a set of track references
    ///
    /// All per-track calls are issued concurrently and joined as a batch:
    /// the output has one link per input reference, position-for-position,
    /// regardless of network completion order. The first failing call fails
    /// the whole batch; no partial results are returned.
    pub async fn resolve_download_links(
        &self,
        client_id: &str,
        refs: &[TrackRef],
    ) -> Result<Vec<String>> {
        debug!("Resolving download links for {} track(s)", refs.len());
        let links = try_join_all(
            refs.iter()
                .map(|track| self.api.download_link(client_id, track)),
        )
        .await?;
        info!("Resolved {} download link(s)", links.len());
        Ok(links)
    }

    /// Run the whole pipeline: discovery, reconciliation, link resolution
    ///
    /// Stages run in order with no retries; any failure aborts the pipeline
    /// and no links are produced.
    pub async fn download_all_tracks(&self, page: &dyn PageContext) -> Result<Vec<String>> {
        let client_id = self.discover_client_id(&page.script_urls()).await?;
        let refs = self.resolve_track_refs(&client_id, page).await?;
        self.resolve_download_links(&client_id, &refs).await
    }

    /// Run the pipeline and hand each link to a presenter
    ///
    /// Links are presented in resolver output order, and only after the
    /// whole batch has resolved - a mid-batch failure presents nothing.
    pub async fn download_all_tracks_with(
        &self,
        page: &dyn PageContext,
        presenter: &dyn LinkPresenter,
    ) -> Result<Vec<String>> {
        let links = self.download_all_tracks(page).await?;
        for link in &links {
            presenter.present(link).await?;
        }
        Ok(links)
    }
}

/// Builder for configuring a SoundCloudClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    api_base: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<SoundCloudClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(SoundCloudClient {
            api: SoundCloudApi::new(client, self.api_base, self.timeout),
        })
    }
}
