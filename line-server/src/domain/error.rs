//! Topology error types.
//!
//! These errors cover malformed sections and rejected topology mutations.
//! They are detected before any state changes, so a failed operation never
//! leaves a partially mutated line behind.

use super::{InvalidDistance, Station};

/// Errors raised by section and topology operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Malformed section (equal endpoints, non-positive distance)
    #[error("invalid section: {0}")]
    InvalidSection(&'static str),

    /// New section touches no station of the line
    #[error("section {up} -> {down} does not touch the line")]
    DisconnectedSection { up: Station, down: Station },

    /// New section covers a span the line already has, or splitting would
    /// leave no positive remainder
    #[error("section {up} -> {down} overlaps the line")]
    OverlappingSection { up: Station, down: Station },

    /// Removal target is not part of the line's path
    #[error("station {0} is not on the line")]
    StationNotOnLine(Station),

    /// A line keeps at least one section / two stations
    #[error("cannot remove a station from a single-section line")]
    MinimumSection,

    /// Sections no longer form a single path (a defect, not user input)
    #[error("line sections do not form a single path")]
    BrokenPath,
}

impl From<InvalidDistance> for SectionError {
    fn from(_: InvalidDistance) -> Self {
        SectionError::InvalidSection("distance must be positive")
    }
}
