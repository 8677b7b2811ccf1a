//! Topology invariant test helpers.
//!
//! Reused by the unit tests of `topology` and `patch` to check that linking
//! and stitching leave the neighbour slots in a consistent state.

use crate::cell::Neighbour;
use crate::direction::Direction;
use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that every slot of every live cell is either the border or a
/// reference to a live cell.
pub fn assert_slots_populated(topo: &Topology) {
    for (id, cell) in topo.cells() {
        for dir in Direction::ALL {
            if let Neighbour::Cell(nb) = cell.neighbour(dir) {
                assert!(
                    topo.cell(nb).is_some(),
                    "cell {id} {dir} slot references dead slot {nb}"
                );
            }
        }
    }
}

/// Assert that grid links match coordinates and are mirrored: the `dir`
/// slot of `(x, y)` is the cell at `(x, y) + dir.offset()` or the border
/// when that slot is empty, and that cell's opposite slot points back.
pub fn assert_grid_links_mirrored(topo: &Topology) {
    for (id, cell) in topo.cells() {
        let (x, y) = cell.coord();
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let expected = topo
                .cell_id(x + dx, y + dy)
                .map_or(Neighbour::Border, Neighbour::Cell);
            assert_eq!(cell.neighbour(dir), expected, "({x}, {y}) {dir}");
            if let Neighbour::Cell(nb) = expected {
                assert_eq!(topo.neighbour(nb, dir.opposite()), Neighbour::Cell(id));
            }
        }
    }
}

/// Assert that every link is answered: if `a` has a slot pointing at `b`,
/// then `b` has some slot pointing at `a`.
pub fn assert_links_reciprocal(topo: &Topology) {
    for (id, cell) in topo.cells() {
        for dir in Direction::ALL {
            if let Neighbour::Cell(nb) = cell.neighbour(dir) {
                assert!(
                    topo.neighbours(nb).contains(&Neighbour::Cell(id)),
                    "cell {id} {dir} -> {nb}, but {nb} has no slot back"
                );
            }
        }
    }
}

/// Assert that `each_cell` visits every coordinate exactly once.
pub fn assert_each_cell_complete(topo: &Topology) {
    let seen: IndexSet<(i32, i32)> = topo.each_cell().map(|(_, x, y)| (x, y)).collect();
    let n = topo.size() as usize;
    assert_eq!(seen.len(), n * n, "each_cell repeated or skipped a slot");
    let live = topo.each_cell().filter(|(c, _, _)| c.is_some()).count();
    assert_eq!(live, topo.len());
}

/// Run every check that holds for a freshly linked, unrewired topology.
pub fn run_link_compliance(topo: &Topology) {
    assert!(topo.is_linked());
    assert_slots_populated(topo);
    assert_grid_links_mirrored(topo);
    assert_links_reciprocal(topo);
    assert_each_cell_complete(topo);
}
