use super::{Track, TrackId};

/// Allocates track records with monotonically increasing ids
///
/// The counter starts at 1 and only ever moves forward; deleting a track
/// never returns its id to the pool. The registry is owned by the playlist
/// instance it serves, so constructing a fresh playlist is the only way to
/// restart the sequence.
#[derive(Debug)]
pub struct TrackRegistry {
    next_id: u64,
}

impl Default for TrackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackRegistry {
    /// Create a registry whose first allocated id will be 1
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Build a new track under the next free id
    ///
    /// No duplicate detection happens here; title uniqueness is enforced by
    /// the owning playlist before it calls this.
    pub fn create(&mut self, title: &str, artist: &str, genre: &str, duration_secs: u32) -> Track {
        let id = TrackId(self.next_id);
        self.next_id += 1;

        Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            duration_secs,
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next_id.saturating_sub(1)
    }
}
