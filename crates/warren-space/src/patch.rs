//! Rectangular patches and side-to-side stitching.
//!
//! A [`Patch`] is a rectangle of cells placed on the topology table. Two
//! patch sides of equal length can be glued cell by cell with
//! [`Topology::stitch`], which is how non-planar surfaces such as a cube
//! net are assembled: each glued cell's outward slot is rewired to the
//! matching cell across the seam.

use crate::direction::Direction;
use crate::error::SpaceError;
use crate::topology::Topology;
use tracing::debug;

/// An axis-aligned rectangle of cells with its top-left corner at `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Patch {
    /// Top-left coordinate `(x, y)`.
    pub origin: (i32, i32),
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Patch {
    /// A `width` × `height` patch with its top-left corner at `(x, y)`.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: (x, y),
            width,
            height,
        }
    }

    /// A square patch, e.g. one face of a cube net.
    pub fn square(x: i32, y: i32, side: u32) -> Self {
        Self::new(x, y, side, side)
    }

    /// Bottom-right coordinate (inclusive), or `None` for a degenerate
    /// patch or one reaching past the `i32` coordinate range.
    fn far_corner(&self) -> Option<(i32, i32)> {
        let (x0, y0) = self.origin;
        Some((
            x0.checked_add_unsigned(self.width.checked_sub(1)?)?,
            y0.checked_add_unsigned(self.height.checked_sub(1)?)?,
        ))
    }

    /// The side of this patch facing `dir`.
    pub fn side(&self, dir: Direction) -> PatchSide {
        PatchSide {
            patch: *self,
            side: dir,
        }
    }
}

/// How two sides line up when stitched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// First cell meets first cell.
    Forward,
    /// First cell meets last cell.
    Reversed,
}

/// One side of a [`Patch`].
///
/// Cells along `Left`/`Right` sides run top to bottom; cells along
/// `Up`/`Down` sides run left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatchSide {
    /// The patch the side belongs to.
    pub patch: Patch,
    /// Outward direction of the side.
    pub side: Direction,
}

impl PatchSide {
    /// Number of cells along the side.
    pub fn len(&self) -> usize {
        match self.side {
            Direction::Left | Direction::Right => self.patch.height as usize,
            Direction::Up | Direction::Down => self.patch.width as usize,
        }
    }

    /// `true` for a side of a degenerate patch.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates of the side's cells in canonical order.
    ///
    /// `None` if the patch is degenerate or its far edge lies beyond the
    /// `i32` coordinate range.
    pub fn coords(&self) -> Option<Vec<(i32, i32)>> {
        let (x0, y0) = self.patch.origin;
        let (x1, y1) = self.patch.far_corner()?;
        let coords = match self.side {
            Direction::Left => (y0..=y1).map(|y| (x0, y)).collect(),
            Direction::Right => (y0..=y1).map(|y| (x1, y)).collect(),
            Direction::Up => (x0..=x1).map(|x| (x, y0)).collect(),
            Direction::Down => (x0..=x1).map(|x| (x, y1)).collect(),
        };
        Some(coords)
    }
}

impl Topology {
    /// Both corners of `patch`, checked to lie on the table.
    ///
    /// A patch whose far corner overflows `i32` is reported at the
    /// saturated coordinate.
    fn patch_bounds(&self, patch: &Patch) -> Result<((i32, i32), (i32, i32)), SpaceError> {
        if patch.width == 0 || patch.height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let (x0, y0) = patch.origin;
        self.checked_slot(x0, y0)?;
        let far = patch.far_corner().ok_or(SpaceError::OutOfBounds {
            x: x0.saturating_add_unsigned(patch.width - 1),
            y: y0.saturating_add_unsigned(patch.height - 1),
            size: self.size(),
        })?;
        self.checked_slot(far.0, far.1)?;
        Ok(((x0, y0), far))
    }

    /// Coordinates of `side`, bounds-checked against the table.
    fn side_coords(&self, side: &PatchSide) -> Result<Vec<(i32, i32)>, SpaceError> {
        self.patch_bounds(&side.patch)?;
        side.coords().ok_or(SpaceError::EmptySpace)
    }

    /// Create every cell of `patch`.
    ///
    /// Both corners are bounds-checked before any slot is written, so a
    /// patch that does not fit leaves the table untouched.
    pub fn make_patch(&mut self, patch: &Patch) -> Result<(), SpaceError> {
        let ((x0, y0), (x1, y1)) = self.patch_bounds(patch)?;
        self.ensure_unlinked()?;
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.make_cell(x, y)?;
            }
        }
        Ok(())
    }

    /// Glue side `a` to side `b`.
    ///
    /// The i-th cell of `a` has its `a.side` slot pointed at the matching
    /// cell of `b`, which has its `b.side` slot pointed back. Every cell
    /// on both sides is validated before the first rewire.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_space::{Direction, Neighbour, Orientation, Patch, Topology};
    ///
    /// // Two 2×2 patches that are not grid-adjacent.
    /// let left = Patch::square(0, 0, 2);
    /// let right = Patch::square(3, 0, 2);
    /// let mut topo = Topology::new(5).unwrap();
    /// topo.make_patch(&left).unwrap();
    /// topo.make_patch(&right).unwrap();
    /// topo.link().unwrap();
    ///
    /// topo.stitch(
    ///     &left.side(Direction::Right),
    ///     &right.side(Direction::Left),
    ///     Orientation::Forward,
    /// )
    /// .unwrap();
    ///
    /// let a = topo.cell_id(1, 0).unwrap();
    /// let b = topo.cell_id(3, 0).unwrap();
    /// assert_eq!(topo.neighbour(a, Direction::Right), Neighbour::Cell(b));
    /// assert_eq!(topo.neighbour(b, Direction::Left), Neighbour::Cell(a));
    /// ```
    pub fn stitch(
        &mut self,
        a: &PatchSide,
        b: &PatchSide,
        orientation: Orientation,
    ) -> Result<(), SpaceError> {
        if a.len() != b.len() {
            return Err(SpaceError::EdgeLengthMismatch {
                a: a.len(),
                b: b.len(),
            });
        }
        self.ensure_linked()?;
        let ca = self.side_coords(a)?;
        let mut cb = self.side_coords(b)?;
        if orientation == Orientation::Reversed {
            cb.reverse();
        }
        for &(x, y) in ca.iter().chain(cb.iter()) {
            self.live_slot(x, y)?;
        }
        for (&pa, &pb) in ca.iter().zip(cb.iter()) {
            self.rewire(pa, a.side, pb, b.side)?;
        }
        debug!(
            cells = ca.len(),
            a_side = %a.side,
            b_side = %b.side,
            ?orientation,
            "stitched patch sides"
        );
        Ok(())
    }
}
