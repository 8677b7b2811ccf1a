//! Warren: perfect-maze generation over stitched cell topologies.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Warren sub-crates. Adding `warren` as a single dependency is enough to lay
//! out a topology, carve it, and read back the result.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // A 7×7 table, fully populated.
//! let mut topo = Topology::new(7).unwrap();
//! topo.make_patch(&Patch::square(0, 0, 7)).unwrap();
//! topo.link().unwrap();
//!
//! // Carve from the middle of the top edge.
//! let report = RecursiveBacktracker::new(1).run(&mut topo, (3, 0)).unwrap();
//!
//! let start = topo.get_cell(3, 0).unwrap();
//! assert_eq!(start.distance(), Some(0));
//! assert!(start.marked());
//! assert_eq!(report.longest_path.len(), report.max_distance as usize + 1);
//!
//! // One row per table row, `**` for the highlighted path.
//! println!("{topo}");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`space`] | `warren-space` | Cell arena, grid linking, rewiring, patches |
//! | [`carve`] | `warren-carve` | Recursive backtracker, carve reports, events |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell arena and adjacency (`warren-space`).
///
/// Build a [`space::Topology`], fill it with [`space::Topology::make_cell`]
/// or [`space::Topology::make_patch`], then [`space::Topology::link`] and
/// optionally [`space::Topology::rewire`] or [`space::Topology::stitch`].
pub use warren_space as space;

/// Maze carving (`warren-carve`).
///
/// [`carve::RecursiveBacktracker`] carves a linked topology and returns a
/// [`carve::CarveReport`].
pub use warren_carve as carve;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    // Layout
    pub use warren_space::{
        Cell, CellId, Direction, Neighbour, Orientation, Patch, PatchSide, SpaceError, Topology,
    };

    // Carving
    pub use warren_carve::{CarveError, CarveEvent, CarveReport, RecursiveBacktracker};
}
