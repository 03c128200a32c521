//! Line service error types.

use crate::domain::{LineId, SectionError};
use crate::stations::StationError;

/// Errors from line service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// No line with this id
    #[error("line {0} not found")]
    NotFound(LineId),

    /// Station resolution failed
    #[error(transparent)]
    Station(#[from] StationError),

    /// The topology rejected the operation
    #[error(transparent)]
    Section(#[from] SectionError),
}
