//! Engine facade tying the playlist, rating index, and history together
//!
//! [`PlaylistEngine`] is the single entry point for callers. Each method is
//! one logical operation that runs to completion against the composite
//! state; cross-structure operations (rate by title, play, undo) resolve
//! and mutate inside the same call, so the caller never observes the
//! structures out of step. The engine is single-threaded by design; a
//! multi-threaded host must wrap the whole engine in one lock.

use crate::error::{EngineError, Result};
use crate::history::PlaybackHistory;
use crate::model::{Track, TrackId};
use crate::playlist::Playlist;
use crate::rating::RatingIndex;
use crate::report::{self, GenreReport};

/// The composite playlist engine
#[derive(Debug, Default)]
pub struct PlaylistEngine {
    playlist: Playlist,
    ratings: RatingIndex,
    history: PlaybackHistory,
}

impl PlaylistEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self {
            playlist: Playlist::new(),
            ratings: RatingIndex::new(),
            history: PlaybackHistory::new(),
        }
    }

    /// Append a new track; see [`Playlist::append`]
    pub fn add_track(
        &mut self,
        title: &str,
        artist: &str,
        genre: &str,
        duration_secs: u32,
    ) -> Result<TrackId> {
        self.playlist.append(title, artist, genre, duration_secs)
    }

    /// Delete the track at a zero-based position; see [`Playlist::delete_at`]
    ///
    /// Any rating the track carried stays in its bucket as a stale id and is
    /// filtered out of [`Self::rated_tracks`]; history snapshots are owned
    /// and unaffected.
    pub fn delete_at(&mut self, position: usize) -> Option<Track> {
        self.playlist.delete_at(position)
    }

    /// Relocate a track; see [`Playlist::move_track`]
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        self.playlist.move_track(from, to)
    }

    /// Reverse the playlist order
    pub fn reverse(&mut self) {
        self.playlist.reverse()
    }

    /// Head-to-tail copy of the playlist
    pub fn snapshot(&self) -> Vec<Track> {
        self.playlist.snapshot()
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Find a track by its unique title
    pub fn lookup_by_title(&self, title: &str) -> Option<&Track> {
        self.playlist.lookup_by_title(title)
    }

    /// Find a track by id
    pub fn lookup_by_id(&self, id: TrackId) -> Option<&Track> {
        self.playlist.lookup_by_id(id)
    }

    /// Rate the track with the given title
    ///
    /// Re-rating moves the track to the new bucket. Fails with
    /// [`EngineError::TrackNotFound`] if the title is not in the playlist.
    pub fn rate(&mut self, title: &str, rating: u8) -> Result<TrackId> {
        let id = self
            .playlist
            .lookup_by_title(title)
            .map(|track| track.id)
            .ok_or_else(|| EngineError::TrackNotFound(title.to_string()))?;
        self.ratings.rate(id, rating);
        Ok(id)
    }

    /// Rated tracks grouped by rating, ascending, buckets in insertion order
    ///
    /// Deleted tracks are dropped from the view through the id-index
    /// liveness check.
    pub fn rated_tracks(&self) -> Vec<(u8, Vec<Track>)> {
        self.ratings
            .tracks_ascending(&self.playlist)
            .map(|(rating, tracks)| (rating, tracks.into_iter().cloned().collect()))
            .collect()
    }

    /// Play the track with the given title, recording it in the history
    pub fn play(&mut self, title: &str) -> Result<Track> {
        let track = self
            .playlist
            .lookup_by_title(title)
            .ok_or_else(|| EngineError::TrackNotFound(title.to_string()))?
            .clone();
        log::info!("now playing: {} by {}", track.title, track.artist);
        self.history.record(&track);
        Ok(track)
    }

    /// Undo the last play by re-appending the played track's fields
    ///
    /// The restored track is a new record under a fresh id, not the
    /// original re-attached. `Ok(None)` means the history was empty
    /// ("nothing to undo"). A duplicate-title rejection (the played track
    /// is still in the playlist) surfaces as the error and leaves the
    /// history entry in place, so the undo can be retried after the
    /// conflicting track is removed.
    pub fn undo_last_play(&mut self) -> Result<Option<Track>> {
        let Some(played) = self.history.last().cloned() else {
            return Ok(None);
        };

        let id = self.playlist.append(
            &played.title,
            &played.artist,
            &played.genre,
            played.duration_secs,
        )?;
        self.history.pop();

        log::info!("restored \"{}\" as track {}", played.title, id);
        Ok(self.playlist.lookup_by_id(id).cloned())
    }

    /// The `n` longest tracks, longest first
    pub fn top_longest(&self, n: usize) -> Vec<Track> {
        report::top_n_longest(&self.playlist.snapshot(), n)
    }

    /// Genre counts and dominance flags over the current playlist
    pub fn genre_report(&self) -> GenreReport {
        report::genre_distribution(&self.playlist.snapshot())
    }
}
