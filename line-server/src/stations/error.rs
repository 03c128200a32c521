//! Station registry error types.

use crate::domain::{InvalidStation, StationId};

/// Errors from station registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// Name failed token validation
    #[error(transparent)]
    Invalid(#[from] InvalidStation),

    /// No station with this id
    #[error("station {0} not found")]
    NotFound(StationId),

    /// Another station already uses this name
    #[error("station name already in use: {0}")]
    DuplicateName(String),
}
