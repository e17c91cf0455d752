//! Playback history: the last-played stack behind undo
//!
//! The stack stores owned field snapshots rather than references or ids, so
//! deleting a track from the playlist can never leave the history dangling.
//! Undo re-appends the snapshot as a brand-new track with a fresh id.

use crate::model::Track;
use serde::{Deserialize, Serialize};

/// Owned snapshot of the fields of a played track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedTrack {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration_secs: u32,
}

impl From<&Track> for PlayedTrack {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            genre: track.genre.clone(),
            duration_secs: track.duration_secs,
        }
    }
}

/// LIFO record of played tracks
#[derive(Debug, Default)]
pub struct PlaybackHistory {
    stack: Vec<PlayedTrack>,
}

impl PlaybackHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Record a play, O(1)
    pub fn record(&mut self, track: &Track) {
        log::debug!("recorded play of \"{}\"", track.title);
        self.stack.push(PlayedTrack::from(track));
    }

    /// Most recent play without removing it
    pub fn last(&self) -> Option<&PlayedTrack> {
        self.stack.last()
    }

    /// Pop the most recent play
    pub fn pop(&mut self) -> Option<PlayedTrack> {
        self.stack.pop()
    }

    /// Number of recorded plays
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if nothing has been played
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
