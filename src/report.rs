//! Snapshot reporting: sorting, top-N, and genre distribution
//!
//! Every function here is pure: it takes a playlist snapshot by slice and
//! builds a fresh result, never touching engine state.

use crate::model::Track;
use serde::Serialize;
use std::collections::BTreeMap;

/// A genre's share of the playlist must exceed this (strictly) to be
/// flagged as dominant.
pub const DOMINANCE_THRESHOLD_PCT: f64 = 70.0;

/// Tracks sorted ascending by title
///
/// The sort is stable, so equal titles keep their snapshot order (moot
/// while titles are unique, but cheaper than promising otherwise).
pub fn sort_by_title(tracks: &[Track]) -> Vec<Track> {
    let mut sorted = tracks.to_vec();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    sorted
}

/// Tracks sorted by duration
///
/// Stable in both directions: tracks of equal duration keep their relative
/// snapshot order whether `ascending` or not.
pub fn sort_by_duration(tracks: &[Track], ascending: bool) -> Vec<Track> {
    let mut sorted = tracks.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.duration_secs.cmp(&b.duration_secs));
    } else {
        sorted.sort_by(|a, b| b.duration_secs.cmp(&a.duration_secs));
    }
    sorted
}

/// The `n` longest tracks, longest first
///
/// `n` of zero yields an empty vec; `n` beyond the snapshot length yields
/// the whole snapshot.
pub fn top_n_longest(tracks: &[Track], n: usize) -> Vec<Track> {
    let mut sorted = sort_by_duration(tracks, false);
    sorted.truncate(n);
    sorted
}

/// Genre counts plus dominance flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreReport {
    /// Tracks per genre, keyed by exact (case-sensitive) genre string
    pub counts: BTreeMap<String, usize>,

    /// Genres holding strictly more than [`DOMINANCE_THRESHOLD_PCT`] of the
    /// playlist, in count order (largest share first)
    pub dominant: Vec<String>,
}

impl GenreReport {
    /// Check if no genre dominates
    pub fn is_balanced(&self) -> bool {
        self.dominant.is_empty()
    }
}

/// Count tracks per genre and flag any genre above the dominance threshold
///
/// An empty snapshot yields empty counts and no flags. The empty genre
/// string counts as a genre of its own.
pub fn genre_distribution(tracks: &[Track]) -> GenreReport {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for track in tracks {
        *counts.entry(track.genre.clone()).or_default() += 1;
    }

    let total = tracks.len();
    let mut dominant: Vec<String> = Vec::new();
    if total > 0 {
        for (genre, &count) in &counts {
            let share = (count as f64) * 100.0 / (total as f64);
            if share > DOMINANCE_THRESHOLD_PCT {
                dominant.push(genre.clone());
            }
        }
        dominant.sort_by_key(|genre| std::cmp::Reverse(counts[genre]));
    }

    GenreReport { counts, dominant }
}
