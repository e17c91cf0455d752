//! Core data model for the playlist engine
//!
//! This module defines plain value types: the track record and the id
//! allocator. Structural state (ordering, indices) lives in
//! [`crate::playlist`].

mod registry;
mod track;

pub use registry::TrackRegistry;
pub use track::{Track, TrackId};
