//! Data models for SoundCloud API responses
//!
//! This module contains the structures needed to deserialize playlist and
//! track data, whether it arrives through the page hydration snapshot or
//! through the `/resolve` and `/playlists` endpoints.

use serde::{Deserialize, Serialize};
use url::Url;

/// A playlist as delivered by the hydration snapshot or the resolve API
///
/// The `tracks` sequence preserves playlist order. When the page loads
/// tracks lazily, the trailing entries arrive partially hydrated (no `urn`,
/// placeholder secret token) and need a follow-up batch call to repair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist id
    pub id: u64,
    /// Per-playlist secret token (absent for public playlists)
    #[serde(default)]
    pub secret_token: Option<String>,
    /// Playlist title
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical playlist page URL
    #[serde(default)]
    pub permalink_url: Option<String>,
    /// Track records in playlist order
    #[serde(default)]
    pub tracks: Vec<TrackRecord>,
}

impl Playlist {
    /// Whether the snapshot is fully hydrated
    ///
    /// Lazy loading always leaves a partial *tail*, so only the last record
    /// needs inspecting. An empty playlist counts as complete.
    pub fn is_fully_hydrated(&self) -> bool {
        self.tracks.last().map_or(true, TrackRecord::is_hydrated)
    }
}

/// A single track entry inside a playlist
///
/// A record is *complete* when it carries its `urn`; partial records only
/// have `id` and a secret token that cannot be trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Track id
    pub id: u64,
    /// Per-track secret token (absent for public tracks)
    #[serde(default)]
    pub secret_token: Option<String>,
    /// Full identity marker, present only on hydrated records
    #[serde(default)]
    pub urn: Option<String>,
    /// Track title (hydrated records only)
    #[serde(default)]
    pub title: Option<String>,
}

impl TrackRecord {
    /// Whether this record is fully hydrated
    pub fn is_hydrated(&self) -> bool {
        self.urn.is_some()
    }
}

/// The identity pair needed to request a track download
///
/// Produced by the metadata resolver, one per playlist track, unique by
/// `id` and ordered by playlist position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Track id
    pub id: u64,
    /// Per-track secret token (absent for public tracks)
    pub secret_token: Option<String>,
}

impl TrackRef {
    /// Create a new track reference
    pub fn new(id: u64, secret_token: Option<String>) -> Self {
        Self { id, secret_token }
    }
}

/// Extract a track's secret token from its permalink href
///
/// Track anchors on a secret playlist page look like
/// `/<artist>/<track>/<secret>?in=<artist>/sets/<set>//<set_secret>`; the
/// third path segment is the per-track secret token.
///
/// Intended for hrefs scraped from a rendered playlist page, with the
/// limitation that implies: a lazily-loaded page only renders anchors for
/// the tracks already in view. Prefer the hydration snapshot or the
/// resolve API when available.
pub fn secret_token_from_track_href(href: &str) -> Option<String> {
    // Relative hrefs are the common case; any base works for parsing.
    let base = Url::parse("https://soundcloud.com/").ok()?;
    let url = base.join(href).ok()?;
    let segment = url.path_segments()?.nth(2)?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_record_hydration() {
        let hydrated: TrackRecord = serde_json::from_value(json!({
            "id": 42,
            "secret_token": "s-aaaa",
            "urn": "soundcloud:tracks:42",
            "title": "A Track"
        }))
        .unwrap();
        assert!(hydrated.is_hydrated());

        let partial: TrackRecord =
            serde_json::from_value(json!({ "id": 43, "secret_token": "s-bbbb" })).unwrap();
        assert!(!partial.is_hydrated());
    }

    #[test]
    fn test_playlist_completeness_checks_last_record_only() {
        let playlist: Playlist = serde_json::from_value(json!({
            "id": 7,
            "secret_token": "s-set",
            "tracks": [
                { "id": 1, "secret_token": "s-1" },
                { "id": 2, "secret_token": "s-2", "urn": "soundcloud:tracks:2" }
            ]
        }))
        .unwrap();
        // First record is partial, but only the tail matters.
        assert!(playlist.is_fully_hydrated());
    }

    #[test]
    fn test_empty_playlist_is_complete() {
        let playlist: Playlist =
            serde_json::from_value(json!({ "id": 7, "tracks": [] })).unwrap();
        assert!(playlist.is_fully_hydrated());
    }

    #[test]
    fn test_secret_token_from_track_href() {
        assert_eq!(
            secret_token_from_track_href(
                "/somelabel/some-track/s-XYZ12?in=somelabel/sets/album//s-SET99"
            ),
            Some("s-XYZ12".to_string())
        );
        assert_eq!(
            secret_token_from_track_href("https://soundcloud.com/label/track/s-ABC"),
            Some("s-ABC".to_string())
        );
        // No secret segment present
        assert_eq!(secret_token_from_track_href("/somelabel/some-track"), None);
    }
}
