//! Perfect-maze carving over Warren topologies.
//!
//! [`RecursiveBacktracker`] carves a tree of open cells out of a linked
//! [`Topology`](warren_space::Topology), starting from one cell and walking
//! an explicit stack. A cell is only entered while at most one of its
//! neighbours is already carved, so the carved cells never close a cycle.
//! The deepest chain seen during carving is marked on the topology as the
//! highlighted path.
//!
//! ```
//! use warren_carve::RecursiveBacktracker;
//! use warren_space::{Patch, Topology};
//!
//! let mut topo = Topology::new(8).unwrap();
//! topo.make_patch(&Patch::square(0, 0, 8)).unwrap();
//! topo.link().unwrap();
//!
//! let report = RecursiveBacktracker::new(7).run(&mut topo, (3, 0)).unwrap();
//! assert_eq!(report.longest_path.len(), report.max_distance as usize + 1);
//! assert!(topo.get_cell(3, 0).unwrap().carved());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtracker;
pub mod error;

pub use backtracker::{CarveEvent, CarveReport, RecursiveBacktracker, RecursiveBacktrackerBuilder};
pub use error::CarveError;
