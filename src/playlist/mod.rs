//! The ordered track sequence and its secondary indices
//!
//! This is the owning structure of the engine: every track's lifetime is
//! bounded by its membership here, and the title/id lookup indices are
//! updated in the same call as every structural mutation.

mod sequence;

pub use sequence::Playlist;
