//! Playlist Engine - in-memory playlist manager
//!
//! An indexed ordered collection of tracks (doubly-linked sequence kept in
//! sync with title and id lookup indices), plus a last-played undo stack,
//! a rating index ordered by rating, and snapshot-based reporting.

pub mod cli;
pub mod engine;
pub mod error;
pub mod history;
pub mod model;
pub mod playlist;
pub mod rating;
pub mod report;

pub use engine::PlaylistEngine;
pub use error::{EngineError, Result};
