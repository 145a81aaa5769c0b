//! Playlist and track endpoints
//!
//! Typed wrappers over the v2 endpoints the pipeline uses: `/resolve` for
//! the hydration fallback, `/playlists/{id}` for direct lookup, `/tracks`
//! for the batch secret-token correction, and `/tracks/{id}/download` for
//! the per-track download link.

use super::SoundCloudApi;
use crate::error::{Error, Result};
use crate::models::{Playlist, TrackRecord, TrackRef};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Response of `/tracks/{id}/download`
#[derive(Debug, Deserialize)]
struct DownloadResponse {
    #[serde(default, rename = "redirectUri")]
    redirect_uri: Option<String>,
}

impl SoundCloudApi {
    /// Resolve an arbitrary SoundCloud URL to its API representation
    ///
    /// The `/resolve` endpoint accepts any public page URL (track, set,
    /// profile) and returns the matching API object.
    pub async fn resolve(&self, client_id: &str, url: &str) -> Result<Value> {
        debug!("Resolving {}", url);
        let params = [("client_id", client_id), ("url", url)];
        self.get_json("/resolve", &params).await
    }

    /// Resolve a playlist page URL to its playlist structure
    ///
    /// Used as the fallback when the page carried no hydration snapshot.
    /// The response is equivalent to `/playlists/{id}?representation=full`.
    pub async fn resolve_playlist(&self, client_id: &str, url: &str) -> Result<Playlist> {
        let value = self.resolve(client_id, url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a playlist by id
    pub async fn get_playlist(
        &self,
        client_id: &str,
        playlist_id: u64,
        secret_token: Option<&str>,
    ) -> Result<Playlist> {
        debug!("Fetching playlist {}", playlist_id);
        let mut params = vec![("client_id", client_id), ("representation", "full")];
        if let Some(token) = secret_token {
            params.push(("secret_token", token));
        }
        self.get_json(&format!("/playlists/{}", playlist_id), &params)
            .await
    }

    /// Batch-fetch corrected track records for a playlist
    ///
    /// Returns the full records (correct secret tokens included) for the
    /// given track ids. The playlist id and secret token authorize access
    /// to tracks the client could not read individually.
    pub async fn playlist_tracks(
        &self,
        client_id: &str,
        playlist_id: u64,
        playlist_secret_token: Option<&str>,
        ids: &[u64],
    ) -> Result<Vec<TrackRecord>> {
        debug!(
            "Fetching {} track record(s) for playlist {}",
            ids.len(),
            playlist_id
        );

        let ids_param = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let playlist_id_param = playlist_id.to_string();

        let mut params = vec![
            ("ids", ids_param.as_str()),
            ("playlistId", playlist_id_param.as_str()),
        ];
        if let Some(token) = playlist_secret_token {
            params.push(("playlistSecretToken", token));
        }
        params.push(("client_id", client_id));

        self.get_json("/tracks", &params).await
    }

    /// Resolve the direct download link for a single track
    ///
    /// # Errors
    ///
    /// * [`Error::MalformedResponse`] - the response carried no
    ///   `redirectUri` field
    pub async fn download_link(&self, client_id: &str, track: &TrackRef) -> Result<String> {
        let mut params = vec![("client_id", client_id)];
        if let Some(token) = track.secret_token.as_deref() {
            params.push(("secret_token", token));
        }

        let response: DownloadResponse = self
            .get_json(&format!("/tracks/{}/download", track.id), &params)
            .await?;

        response.redirect_uri.ok_or_else(|| {
            Error::malformed(format!(
                "no redirectUri in download response for track {}",
                track.id
            ))
        })
    }
}
