//! Hydration snapshot records
//!
//! SoundCloud pages ship an initial data bundle: an ordered array of
//! records, each tagged with a `hydratable` discriminator and carrying its
//! payload under `data`. This module models that array and the lookup used
//! to find the playlist record inside it.

use crate::models::Playlist;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One record of the hydration array, discriminated by its `hydratable` tag
///
/// Only playlist records are decoded; every other kind is preserved by name
/// so that an unexpected record never fails snapshot parsing.
#[derive(Debug, Clone)]
pub enum HydrationRecord {
    /// A `hydratable: "playlist"` record
    Playlist(Playlist),
    /// Any other record kind (`user`, `anonymousId`, ...)
    Other(String),
}

impl HydrationRecord {
    /// The playlist payload, if this is a playlist record
    pub fn as_playlist(&self) -> Option<&Playlist> {
        match self {
            HydrationRecord::Playlist(playlist) => Some(playlist),
            HydrationRecord::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    hydratable: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl<'de> Deserialize<'de> for HydrationRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRecord::deserialize(deserializer)?;
        match raw.hydratable.as_str() {
            "playlist" => serde_json::from_value(raw.data)
                .map(HydrationRecord::Playlist)
                .map_err(D::Error::custom),
            _ => Ok(HydrationRecord::Other(raw.hydratable)),
        }
    }
}

/// The ordered sequence of hydration records delivered with a page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct HydrationSnapshot {
    /// Records in document order
    pub records: Vec<HydrationRecord>,
}

impl HydrationSnapshot {
    /// Parse a snapshot from its JSON text
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Locate the playlist record
    ///
    /// The playlist is normally the last record, so that position is
    /// checked first; otherwise the sequence is scanned for the first
    /// record with the playlist discriminator. Valid snapshots carry at
    /// most one playlist record, so the fast path never changes the
    /// result.
    pub fn playlist(&self) -> Option<&Playlist> {
        if let Some(playlist) = self.records.last().and_then(HydrationRecord::as_playlist) {
            return Some(playlist);
        }
        self.records.iter().find_map(HydrationRecord::as_playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: serde_json::Value) -> HydrationSnapshot {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_playlist_is_last_record() {
        let snap = snapshot(serde_json::json!([
            { "hydratable": "anonymousId", "data": "abc" },
            { "hydratable": "user", "data": { "id": 1 } },
            { "hydratable": "playlist", "data": { "id": 99, "tracks": [] } }
        ]));
        assert_eq!(snap.playlist().unwrap().id, 99);
    }

    #[test]
    fn test_playlist_found_by_scan() {
        let snap = snapshot(serde_json::json!([
            { "hydratable": "playlist", "data": { "id": 7, "tracks": [] } },
            { "hydratable": "user", "data": { "id": 1 } }
        ]));
        assert_eq!(snap.playlist().unwrap().id, 7);
    }

    #[test]
    fn test_no_playlist_record() {
        let snap = snapshot(serde_json::json!([
            { "hydratable": "anonymousId", "data": "abc" },
            { "hydratable": "user", "data": { "id": 1 } }
        ]));
        assert!(snap.playlist().is_none());
    }

    #[test]
    fn test_unknown_record_kinds_are_preserved() {
        let snap = snapshot(serde_json::json!([
            { "hydratable": "somethingNew", "data": { "whatever": true } }
        ]));
        assert!(matches!(
            &snap.records[0],
            HydrationRecord::Other(kind) if kind == "somethingNew"
        ));
    }

    #[test]
    fn test_record_without_data_field() {
        // `data` is defaulted so bare records still parse
        let snap = snapshot(serde_json::json!([{ "hydratable": "meUser" }]));
        assert!(snap.playlist().is_none());
    }
}
