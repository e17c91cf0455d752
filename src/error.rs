//! Typed errors for the playlist engine

use thiserror::Error;

/// Errors surfaced by playlist and engine operations
///
/// Out-of-range positions and lookup misses are not errors; they come back
/// as `Option`/`bool` results. Only conditions that reject an operation
/// outright live here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Policy: titles are unique, so inserting an existing title is rejected
    /// before any state is touched.
    #[error("a track titled \"{0}\" is already in the playlist")]
    DuplicateTitle(String),

    /// A title-addressed operation (rate, play) missed the title index.
    #[error("no track titled \"{0}\" in the playlist")]
    TrackNotFound(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
