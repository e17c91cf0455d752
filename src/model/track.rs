use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique track identifier.
///
/// Ids are allocated by [`super::TrackRegistry`] starting at 1 and are never
/// reused, even after the track is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single playlist track with its metadata
///
/// Tracks are immutable once created: there is no in-place edit operation,
/// only deletion and re-insertion (which allocates a fresh id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier for this track
    pub id: TrackId,

    /// Track title (unique across the playlist)
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Genre (optional; empty string means untagged)
    pub genre: String,

    /// Track duration in seconds
    pub duration_secs: u32,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} [{}] ({}s, ID: {})",
            self.title, self.artist, self.genre, self.duration_secs, self.id
        )
    }
}
