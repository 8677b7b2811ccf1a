//! Cell topologies for Warren mazes.
//!
//! This crate defines the [`Topology`], an N×N arena of optional
//! [`Cell`]s whose four directional neighbour slots are derived from grid
//! layout and may then be rewired to join cells that are not grid-adjacent.
//! Slots that have no live neighbour hold [`Neighbour::Border`].
//!
//! # Lifecycle
//!
//! 1. [`Topology::new`] allocates an empty table (all holes).
//! 2. A layout routine calls [`Topology::make_cell`], [`Topology::del_cell`]
//!    or [`Topology::make_patch`].
//! 3. [`Topology::link`] derives grid adjacency, exactly once.
//! 4. Optional [`Topology::rewire`] / [`Topology::stitch`] calls glue
//!    distant cells together.
//!
//! ```
//! use warren_space::{Direction, Neighbour, Topology};
//!
//! let mut topo = Topology::new(3).unwrap();
//! topo.make_cell(0, 0).unwrap();
//! topo.make_cell(1, 0).unwrap();
//! topo.link().unwrap();
//!
//! let a = topo.cell_id(0, 0).unwrap();
//! let b = topo.cell_id(1, 0).unwrap();
//! assert_eq!(topo.neighbour(a, Direction::Right), Neighbour::Cell(b));
//! assert_eq!(topo.neighbour(a, Direction::Up), Neighbour::Border);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod patch;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::{Cell, CellId, Neighbour};
pub use direction::Direction;
pub use error::SpaceError;
pub use patch::{Orientation, Patch, PatchSide};
pub use topology::Topology;
