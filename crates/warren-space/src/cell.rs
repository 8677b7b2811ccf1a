//! Maze cells, their arena identifiers, and neighbour slots.

use crate::direction::Direction;
use std::fmt;

/// Index of a cell slot in its [`Topology`](crate::Topology).
///
/// `CellId(y * size + x)`: the row-major flat index of the cell's
/// coordinate. Stable for the lifetime of the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    /// The flat slot index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The content of one neighbour slot.
///
/// `Border` stands for "no cell here, permanently solid wall". It is never
/// carved, always reports itself unmade, and cannot be carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbour {
    /// A live cell in the same topology.
    Cell(CellId),
    /// The border sentinel.
    Border,
}

impl Neighbour {
    /// `true` for the border sentinel.
    pub fn is_border(self) -> bool {
        matches!(self, Self::Border)
    }

    /// The referenced cell, or `None` for the border sentinel.
    pub fn cell(self) -> Option<CellId> {
        match self {
            Self::Cell(id) => Some(id),
            Self::Border => None,
        }
    }
}

/// A node of the maze graph.
///
/// Cells are owned by the topology's arena; neighbour slots are
/// non-owning [`CellId`] references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    carved: bool,
    marked: bool,
    distance: u32,
    neighbours: [Neighbour; 4],
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            carved: false,
            marked: false,
            distance: 0,
            neighbours: [Neighbour::Border; 4],
        }
    }

    /// Grid coordinate `(x, y)` of this cell.
    pub fn coord(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Whether the cell is part of the open passage network.
    pub fn carved(&self) -> bool {
        self.carved
    }

    /// Whether the cell lies on the recorded longest path.
    pub fn marked(&self) -> bool {
        self.marked
    }

    /// Carve depth from the start cell; `None` until carved.
    pub fn distance(&self) -> Option<u32> {
        self.carved.then_some(self.distance)
    }

    /// Neighbour slot in direction `dir`.
    pub fn neighbour(&self, dir: Direction) -> Neighbour {
        self.neighbours[dir.index()]
    }

    /// All four slots in [`Direction::ALL`] order.
    pub fn neighbours(&self) -> [Neighbour; 4] {
        self.neighbours
    }

    pub(crate) fn set_neighbour(&mut self, dir: Direction, n: Neighbour) {
        self.neighbours[dir.index()] = n;
    }

    /// One-way: a carved cell keeps its first distance.
    pub(crate) fn carve(&mut self, distance: u32) {
        if !self.carved {
            self.carved = true;
            self.distance = distance;
        }
    }

    pub(crate) fn mark(&mut self) {
        self.marked = true;
    }

    pub(crate) fn reset(&mut self) {
        self.carved = false;
        self.marked = false;
        self.distance = 0;
    }
}
