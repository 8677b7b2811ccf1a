//! Error types for maze carving.

use thiserror::Error;
use warren_space::SpaceError;

/// Errors from configuring or running a carver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarveError {
    /// The start coordinate holds no live cell.
    #[error("no start cell at ({x}, {y})")]
    InvalidStart {
        /// Requested start column.
        x: i32,
        /// Requested start row.
        y: i32,
    },
    /// Carver configuration rejected by the builder.
    #[error("invalid carver configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
    /// The move/backtrack loop ran past the configured step limit.
    ///
    /// Carve state is reset before this is returned.
    #[error("carving exceeded step limit of {limit}")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
    /// The topology rejected an operation.
    #[error(transparent)]
    Space(#[from] SpaceError),
}
