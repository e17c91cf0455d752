//! Rating index: ordered grouping of tracks by star rating
//!
//! The index holds track ids, never track data; the playlist stays the sole
//! owner of every track. Resolution back to tracks goes through
//! [`RatingIndex::tracks_ascending`], which drops ids whose tracks have
//! since been deleted.

use crate::model::{Track, TrackId};
use crate::playlist::Playlist;
use std::collections::BTreeMap;

/// Ordered multimap from rating value to the tracks carrying it
///
/// Buckets are created on first use and never removed, even once emptied.
/// Rating an already-rated track moves it: the id is pulled out of its
/// previous bucket before insertion, so a track is in at most one bucket.
#[derive(Debug, Default)]
pub struct RatingIndex {
    buckets: BTreeMap<u8, Vec<TrackId>>,
}

impl RatingIndex {
    /// Create an empty rating index
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Rate (or re-rate) a track
    ///
    /// Appends the id to the bucket for `rating`, preserving insertion
    /// order within the bucket.
    pub fn rate(&mut self, id: TrackId, rating: u8) {
        for bucket in self.buckets.values_mut() {
            bucket.retain(|rated| *rated != id);
        }
        self.buckets.entry(rating).or_default().push(id);
        log::debug!("rated track {} at {}", id, rating);
    }

    /// Iterate buckets in ascending rating order
    ///
    /// Yields raw ids, including ids of tracks that have since been deleted
    /// from the playlist; use [`Self::tracks_ascending`] for a live view.
    pub fn iter_ascending(&self) -> impl Iterator<Item = (u8, &[TrackId])> + '_ {
        self.buckets
            .iter()
            .map(|(&rating, bucket)| (rating, bucket.as_slice()))
    }

    /// Live view of the index, ascending by rating
    ///
    /// Resolves each id against the playlist and silently skips ids that no
    /// longer name a live track. Empty and fully-stale buckets are omitted.
    pub fn tracks_ascending<'a>(
        &'a self,
        playlist: &'a Playlist,
    ) -> impl Iterator<Item = (u8, Vec<&'a Track>)> + 'a {
        self.buckets.iter().filter_map(move |(&rating, bucket)| {
            let live: Vec<&Track> = bucket
                .iter()
                .filter_map(|&id| playlist.lookup_by_id(id))
                .collect();
            if live.is_empty() {
                None
            } else {
                Some((rating, live))
            }
        })
    }

    /// Number of rating buckets ever created
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_playlist() -> Playlist {
        let mut playlist = Playlist::new();
        for (title, duration) in [("A", 100), ("B", 200), ("C", 300)] {
            playlist.append(title, "Artist", "Pop", duration).unwrap();
        }
        playlist
    }

    #[test]
    fn buckets_come_back_in_ascending_rating_order() {
        let playlist = seeded_playlist();
        let mut index = RatingIndex::new();

        index.rate(TrackId(2), 5);
        index.rate(TrackId(1), 2);
        index.rate(TrackId(3), 4);

        let view: Vec<(u8, Vec<&str>)> = index
            .tracks_ascending(&playlist)
            .map(|(r, tracks)| (r, tracks.iter().map(|t| t.title.as_str()).collect()))
            .collect();
        assert_eq!(view, vec![(2, vec!["A"]), (4, vec!["C"]), (5, vec!["B"])]);
    }

    #[test]
    fn bucket_preserves_insertion_order() {
        let mut index = RatingIndex::new();

        index.rate(TrackId(3), 4);
        index.rate(TrackId(1), 4);
        index.rate(TrackId(2), 4);

        let (rating, ids) = index.iter_ascending().next().unwrap();
        assert_eq!(rating, 4);
        assert_eq!(ids, &[TrackId(3), TrackId(1), TrackId(2)]);
    }

    #[test]
    fn re_rating_moves_the_track() {
        let playlist = seeded_playlist();
        let mut index = RatingIndex::new();

        index.rate(TrackId(1), 2);
        index.rate(TrackId(1), 5);

        let view: Vec<(u8, usize)> = index
            .tracks_ascending(&playlist)
            .map(|(r, tracks)| (r, tracks.len()))
            .collect();
        assert_eq!(view, vec![(5, 1)]);
        // the emptied bucket stays allocated
        assert_eq!(index.bucket_count(), 2);
    }

    #[test]
    fn deleted_tracks_drop_out_of_the_live_view() {
        let mut playlist = seeded_playlist();
        let mut index = RatingIndex::new();

        index.rate(TrackId(1), 3);
        index.rate(TrackId(2), 3);
        playlist.delete_at(0).unwrap(); // deletes track 1 ("A")

        let view: Vec<(u8, Vec<&str>)> = index
            .tracks_ascending(&playlist)
            .map(|(r, tracks)| (r, tracks.iter().map(|t| t.title.as_str()).collect()))
            .collect();
        assert_eq!(view, vec![(3, vec!["B"])]);

        // the raw view still carries the stale id
        let (_, ids) = index.iter_ascending().next().unwrap();
        assert_eq!(ids.len(), 2);
    }
}
