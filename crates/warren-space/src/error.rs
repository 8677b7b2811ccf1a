//! Error types for topology construction and carve-state mutation.

use thiserror::Error;

/// Errors arising from topology construction, rewiring or carving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// A coordinate is outside `[0, size)` on some axis.
    #[error("coordinate ({x}, {y}) out of bounds: [0, {size}) x [0, {size})")]
    OutOfBounds {
        /// Offending column.
        x: i32,
        /// Offending row.
        y: i32,
        /// Side length of the topology.
        size: u32,
    },
    /// The coordinate is in range but holds no live cell.
    #[error("no cell at ({x}, {y})")]
    MissingCell {
        /// Column of the hole.
        x: i32,
        /// Row of the hole.
        y: i32,
    },
    /// Attempted to construct a topology with zero slots.
    #[error("topology must have at least one slot")]
    EmptySpace,
    /// The requested side length exceeds [`Topology::MAX_SIZE`](crate::Topology::MAX_SIZE).
    #[error("topology size {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// Rewiring or carving was attempted before [`link`](crate::Topology::link).
    #[error("topology has not been linked")]
    NotLinked,
    /// Layout mutation or a second link was attempted after linking.
    #[error("topology is already linked")]
    AlreadyLinked,
    /// A border sentinel was asked to carve itself.
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// What was attempted.
        reason: &'static str,
    },
    /// Two patch sides of different lengths cannot be stitched.
    #[error("cannot stitch sides of length {a} and {b}")]
    EdgeLengthMismatch {
        /// Length of the first side.
        a: usize,
        /// Length of the second side.
        b: usize,
    },
}
