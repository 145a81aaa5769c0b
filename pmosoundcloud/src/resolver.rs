//! Playlist metadata reconciliation
//!
//! Turns the page context into the ordered set of track references the
//! download resolver needs. The playlist structure comes from the hydration
//! snapshot when the page delivered one, else from the resolve API; track
//! records that arrived partially hydrated get their secret tokens repaired
//! through one batch call.

use crate::client::SoundCloudClient;
use crate::error::{Error, Result};
use crate::models::{TrackRecord, TrackRef};
use crate::page::PageContext;
use indexmap::IndexMap;
use tracing::{debug, info};

/// Build the insertion-ordered id -> secret token map for a track sequence
///
/// One forward pass; playlist order is preserved and duplicate ids (which
/// valid data never contains) resolve last-write-wins.
pub(crate) fn track_token_map(tracks: &[TrackRecord]) -> IndexMap<u64, Option<String>> {
    let mut map = IndexMap::with_capacity(tracks.len());
    for track in tracks {
        map.insert(track.id, track.secret_token.clone());
    }
    map
}

/// Collect the ids of the contiguous run of partial records at the tail
///
/// Walks backward and stops at the first hydrated record. Lazy loading
/// leaves incompleteness as a strict trailing run, and that assumption is
/// trusted rather than verified: a partial record earlier in the sequence
/// would be left uncorrected.
pub(crate) fn trailing_unhydrated_ids(tracks: &[TrackRecord]) -> Vec<u64> {
    let mut ids: Vec<u64> = tracks
        .iter()
        .rev()
        .take_while(|track| !track.is_hydrated())
        .map(|track| track.id)
        .collect();
    ids.reverse();
    ids
}

impl SoundCloudClient {
    /// Resolve the ordered track references of the page's playlist
    ///
    /// Obtains the playlist from the page's hydration snapshot, falling
    /// back to the resolve API when the page carried none. If the snapshot
    /// tail is partially hydrated, one batch call repairs the affected
    /// secret tokens in place; playlist order is preserved either way.
    ///
    /// An empty playlist yields an empty result without any network call.
    ///
    /// # Errors
    ///
    /// * [`Error::PlaylistNotFound`] - the snapshot has no playlist record
    pub async fn resolve_track_refs(
        &self,
        client_id: &str,
        page: &dyn PageContext,
    ) -> Result<Vec<TrackRef>> {
        let playlist = match page.hydration() {
            Some(snapshot) => snapshot
                .playlist()
                .cloned()
                .ok_or(Error::PlaylistNotFound)?,
            None => {
                info!("No hydration snapshot on page, using resolve fallback");
                self.api()
                    .resolve_playlist(client_id, &page.location())
                    .await?
            }
        };

        debug!(
            "Playlist {} has {} track record(s)",
            playlist.id,
            playlist.tracks.len()
        );

        let mut tokens = track_token_map(&playlist.tracks);

        if !playlist.is_fully_hydrated() {
            let ids = trailing_unhydrated_ids(&playlist.tracks);
            info!(
                "Tracks info incomplete, resolving {} trailing record(s)",
                ids.len()
            );

            let corrected = self
                .api()
                .playlist_tracks(
                    client_id,
                    playlist.id,
                    playlist.secret_token.as_deref(),
                    &ids,
                )
                .await?;

            // Existing keys keep their position, so playlist order survives
            // the out-of-order corrections.
            for track in corrected {
                tokens.insert(track.id, track.secret_token);
            }
        }

        Ok(tokens
            .into_iter()
            .map(|(id, secret_token)| TrackRef { id, secret_token })
            .collect())
    }
}
