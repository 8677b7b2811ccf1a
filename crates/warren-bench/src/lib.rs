//! Benchmark layouts for the Warren maze generator.
//!
//! Provides pre-built linked [`Topology`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), no holes
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//! - [`torus_profile`]: square grid with opposite edges stitched together
//! - [`holed_profile`]: square grid with deterministic holes punched in it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_space::{Direction, Orientation, Patch, Topology};

/// Build a reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile() -> Topology {
    square_grid(100)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same layout as [`reference_profile`] at 10x the cell count.
pub fn stress_profile() -> Topology {
    square_grid(316)
}

/// Build an `n` x `n` torus: the right edge is stitched to the left edge
/// and the bottom edge to the top, so no cell has a border slot.
pub fn torus_profile(n: u32) -> Topology {
    let patch = Patch::square(0, 0, n);
    let mut topo = Topology::new(n).unwrap();
    topo.make_patch(&patch).unwrap();
    topo.link().unwrap();
    topo.stitch(
        &patch.side(Direction::Right),
        &patch.side(Direction::Left),
        Orientation::Forward,
    )
    .unwrap();
    topo.stitch(
        &patch.side(Direction::Down),
        &patch.side(Direction::Up),
        Orientation::Forward,
    )
    .unwrap();
    topo
}

/// Build an `n` x `n` grid with roughly one slot in `every` left empty.
///
/// Hole placement is a pure function of `seed`; `(0, 0)` is always kept so
/// it can serve as a start cell.
pub fn holed_profile(n: u32, every: u64, seed: u64) -> Topology {
    let mut topo = Topology::new(n).unwrap();
    topo.make_patch(&Patch::square(0, 0, n)).unwrap();
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            let i = (y as u64) * n as u64 + x as u64;
            let h = i.wrapping_add(seed).wrapping_mul(6364136223846793007) >> 33;
            if (x, y) != (0, 0) && every > 0 && h % every == 0 {
                topo.del_cell(x, y).unwrap();
            }
        }
    }
    topo.link().unwrap();
    topo
}

fn square_grid(n: u32) -> Topology {
    let mut topo = Topology::new(n).unwrap();
    topo.make_patch(&Patch::square(0, 0, n)).unwrap();
    topo.link().unwrap();
    topo
}
