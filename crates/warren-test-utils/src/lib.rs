//! Test utilities for Warren development.
//!
//! Provides linked layout fixtures (see [`fixtures`]) and assertion helpers
//! that check the structural promises of a carved topology: the carved
//! cells form a tree, the carving is maximal, distances are tree depths,
//! and the marked cells form one simple path.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{cube_net, full_grid, grid_with_holes, two_regions, CubeNet, TwoRegions};

use indexmap::IndexSet;
use std::collections::VecDeque;
use warren_space::{CellId, Neighbour, Topology};

/// Per-slot `(carved, marked, distance)`, `None` for holes, row-major.
pub type CarveState = Vec<Option<(bool, bool, Option<u32>)>>;

/// Snapshot the carve state of every slot for equality comparisons.
pub fn carve_state(topo: &Topology) -> CarveState {
    topo.each_cell()
        .map(|(cell, _, _)| cell.map(|c| (c.carved(), c.marked(), c.distance())))
        .collect()
}

/// Distinct live cells referenced by `id`'s slots.
pub fn linked_cells(topo: &Topology, id: CellId) -> IndexSet<CellId> {
    topo.neighbours(id)
        .iter()
        .filter_map(|n| n.cell())
        .filter(|&nb| nb != id)
        .collect()
}

/// `true` if `a` and `b` each have a slot pointing at the other.
pub fn mutually_linked(topo: &Topology, a: CellId, b: CellId) -> bool {
    topo.neighbours(a).contains(&Neighbour::Cell(b))
        && topo.neighbours(b).contains(&Neighbour::Cell(a))
}

fn carved(topo: &Topology, id: CellId) -> bool {
    topo.is_carved(Neighbour::Cell(id))
}

/// Carved neighbours of a carved cell, over mutual links.
fn carved_links(topo: &Topology, id: CellId) -> impl Iterator<Item = CellId> + '_ {
    linked_cells(topo, id)
        .into_iter()
        .filter(move |&nb| carved(topo, nb) && mutually_linked(topo, id, nb))
}

/// Number of unordered carved pairs joined by a mutual link.
pub fn carved_edges(topo: &Topology) -> usize {
    let mut edges: IndexSet<(CellId, CellId)> = IndexSet::new();
    for (id, cell) in topo.cells() {
        if !cell.carved() {
            continue;
        }
        for nb in carved_links(topo, id) {
            edges.insert((id.min(nb), id.max(nb)));
        }
    }
    edges.len()
}

/// Carved cells reachable from `from` over carved mutual links.
pub fn carved_component(topo: &Topology, from: CellId) -> IndexSet<CellId> {
    let mut seen = IndexSet::new();
    if !carved(topo, from) {
        return seen;
    }
    let mut queue = VecDeque::from([from]);
    seen.insert(from);
    while let Some(id) = queue.pop_front() {
        for nb in carved_links(topo, id) {
            if seen.insert(nb) {
                queue.push_back(nb);
            }
        }
    }
    seen
}

/// Number of carved cells.
pub fn carved_count(topo: &Topology) -> usize {
    topo.cells().filter(|(_, c)| c.carved()).count()
}

/// Assert that the carved cells form one tree containing `start`.
pub fn assert_carved_tree(topo: &Topology, start: CellId) {
    let total = carved_count(topo);
    assert!(total > 0, "nothing carved");
    let component = carved_component(topo, start);
    assert_eq!(
        component.len(),
        total,
        "carved cells not connected to start {start}"
    );
    assert_eq!(
        carved_edges(topo),
        total - 1,
        "carved graph with {total} cells is not a tree"
    );
}

/// Assert that no further cell could be carved: every uncarved live cell
/// next to a carved cell already has two or more carved neighbours.
pub fn assert_maximal(topo: &Topology) {
    for (id, cell) in topo.cells() {
        if !cell.carved() {
            continue;
        }
        for nb in linked_cells(topo, id) {
            if !carved(topo, nb) {
                assert!(
                    topo.carved_neighbours(nb) >= 2,
                    "cell {nb} beside carved {id} is still enterable"
                );
            }
        }
    }
}

/// Assert that distances are depths in the carved tree rooted at `start`.
pub fn assert_distances_are_depths(topo: &Topology, start: CellId) {
    let root = topo.cell(start).unwrap();
    assert_eq!(root.distance(), Some(0));
    for (id, cell) in topo.cells() {
        let Some(d) = cell.distance() else {
            continue;
        };
        let mut parents = 0;
        for nb in carved_links(topo, id) {
            let nd = topo.cell(nb).and_then(|c| c.distance()).unwrap();
            if nd + 1 == d {
                parents += 1;
            } else {
                assert_eq!(nd, d + 1, "cell {id} at {d} linked to {nb} at {nd}");
            }
        }
        let expected = usize::from(id != start);
        assert_eq!(parents, expected, "cell {id} at {d} has {parents} parents");
    }
}

/// Assert that the marked cells form one simple path of
/// `max_distance + 1` cells.
pub fn assert_marked_path(topo: &Topology, max_distance: u32) {
    let marked: Vec<CellId> = topo
        .cells()
        .filter(|(_, c)| c.marked())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(marked.len(), max_distance as usize + 1);
    for &id in &marked {
        assert!(carved(topo, id), "marked cell {id} is not carved");
    }
    if marked.len() == 1 {
        return;
    }
    let mut endpoints = 0;
    for &id in &marked {
        let degree = carved_links(topo, id)
            .filter(|&nb| topo.cell(nb).is_some_and(|c| c.marked()))
            .count();
        match degree {
            1 => endpoints += 1,
            2 => {}
            other => panic!("marked cell {id} has {other} marked neighbours"),
        }
    }
    assert_eq!(endpoints, 2, "marked path must have exactly two endpoints");
}
