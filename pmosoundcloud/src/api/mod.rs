//! Low-level access to the SoundCloud v2 API
//!
//! This module provides the HTTP layer shared by every endpoint: URL
//! construction against a configurable base, JSON and text GETs, and the
//! common response handling (status mapping, body parsing).

pub mod credentials;
pub mod playlist;

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Base URL of the SoundCloud v2 API
pub const API_BASE_URL: &str = "https://api-v2.soundcloud.com";

/// Low-level API client
///
/// Holds the shared HTTP client and the API base URL. Every call takes the
/// discovered client id as a parameter; the API layer keeps no credential
/// state.
#[derive(Debug, Clone)]
pub struct SoundCloudApi {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl SoundCloudApi {
    /// Create a new API layer
    pub fn new(client: Client, api_base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            timeout,
        }
    }

    /// The configured API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The underlying HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Build an endpoint URL with query parameters
    pub(crate) fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.api_base, path))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// Perform a GET request returning parsed JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path, params)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Perform a GET request returning the raw body text
    ///
    /// Used for script bundle scanning, where the target is an absolute URL
    /// outside the API base.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("fetch failed ({}): {}", status, url);
            return Err(Error::api(status.as_u16(), url.to_string()));
        }

        Ok(response.text().await?)
    }

    /// Map the HTTP response to a typed result
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API error ({}): {}", status, body);
            return Err(Error::api(status.as_u16(), body));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("Failed to parse response: {}", e);
            Error::Json(e)
        })
    }
}
