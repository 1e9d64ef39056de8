//! Trail Metrics Library - Track Parsing and Summary Metrics
//!
//! This library turns raw GPX track files into the summary data a hiking
//! route browser needs: total distance, total ascent, an elevation profile
//! and a coarse difficulty rating. Parsing and summarizing are pure
//! functions over in-memory data; reading bytes from storage and caching
//! results are the caller's concern.
//!
//! # Architecture
//!
//! - **[`Track`]**: immutable storage for a parsed GPX document plus the
//!   flattened, order-preserving point sequence
//! - **[`TrackSummary`]**: derived metrics (distance, ascent, per-point
//!   elevation profile, difficulty)
//! - **[`Difficulty`]**: three-level rating computed from ascent and distance

mod difficulty;
mod summary;
mod track;
pub mod utils;

// Public API exports
pub use difficulty::Difficulty;
pub use summary::{ProfilePoint, TrackSummary};
pub use track::{Track, TrackPoint};

/// Error types for the metrics pipeline
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// The input was not a well-formed GPX document, or a point was missing
    /// a mandatory coordinate.
    #[error("GPX parsing error: {0}")]
    Parse(#[from] gpx::errors::GpxError),

    /// The document was well-formed but contained no track points.
    #[error("track contains no points")]
    EmptyTrack,
}

pub type Result<T> = std::result::Result<T, TrackError>;
