//! The coordinate-indexed cell arena and its adjacency.

use crate::cell::{Cell, CellId, Neighbour};
use crate::direction::Direction;
use crate::error::SpaceError;
use std::fmt;
use tracing::debug;

/// A cell may be entered while at most this many of its neighbours are carved.
const UNMADE_MAX_CARVED: usize = 1;

/// An N×N table of optional cells plus their neighbour slots.
///
/// Slots are addressed by `(x, y)` with `0 <= x, y < size`, or by the
/// equivalent row-major [`CellId`]. Empty slots are holes. Coordinates
/// outside the table are errors for mutators and `None` for queries.
///
/// # Examples
///
/// ```
/// use warren_space::{SpaceError, Topology};
///
/// let mut topo = Topology::new(4).unwrap();
/// topo.make_cell(1, 1).unwrap();
/// assert!(topo.get_cell(1, 1).is_some());
/// assert!(topo.get_cell(-1, 0).is_none());
/// assert!(matches!(
///     topo.make_cell(4, 0),
///     Err(SpaceError::OutOfBounds { x: 4, y: 0, size: 4 })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct Topology {
    size: u32,
    slots: Vec<Option<Cell>>,
    linked: bool,
}

impl Topology {
    /// Largest side length.
    ///
    /// The table is allocated eagerly, so the cap bounds memory (about 1M
    /// slots) as well as keeping slot indices inside a [`CellId`].
    pub const MAX_SIZE: u32 = 1024;

    /// Allocate an empty `size` × `size` table.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `size` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if it exceeds [`Self::MAX_SIZE`].
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        let n = (size as usize) * (size as usize);
        Ok(Self {
            size,
            slots: vec![None; n],
            linked: false,
        })
    }

    /// Side length of the table.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// `true` if every slot is a hole.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether [`link`](Self::link) has run.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    fn slot(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.size as i32;
        if x < 0 || y < 0 || x >= n || y >= n {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    pub(crate) fn checked_slot(&self, x: i32, y: i32) -> Result<usize, SpaceError> {
        self.slot(x, y).ok_or(SpaceError::OutOfBounds {
            x,
            y,
            size: self.size,
        })
    }

    pub(crate) fn live_slot(&self, x: i32, y: i32) -> Result<usize, SpaceError> {
        let i = self.checked_slot(x, y)?;
        if self.slots[i].is_none() {
            return Err(SpaceError::MissingCell { x, y });
        }
        Ok(i)
    }

    pub(crate) fn ensure_unlinked(&self) -> Result<(), SpaceError> {
        if self.linked {
            return Err(SpaceError::AlreadyLinked);
        }
        Ok(())
    }

    pub(crate) fn ensure_linked(&self) -> Result<(), SpaceError> {
        if !self.linked {
            return Err(SpaceError::NotLinked);
        }
        Ok(())
    }

    // ── Construction ────────────────────────────────────────────

    /// Create a fresh cell at `(x, y)`, replacing whatever was there.
    pub fn make_cell(&mut self, x: i32, y: i32) -> Result<CellId, SpaceError> {
        let i = self.checked_slot(x, y)?;
        self.ensure_unlinked()?;
        self.slots[i] = Some(Cell::new(x, y));
        Ok(CellId(i as u32))
    }

    /// Turn `(x, y)` into a hole. Deleting a hole is a no-op.
    pub fn del_cell(&mut self, x: i32, y: i32) -> Result<(), SpaceError> {
        let i = self.checked_slot(x, y)?;
        self.ensure_unlinked()?;
        self.slots[i] = None;
        Ok(())
    }

    /// Derive every live cell's neighbour slots from grid adjacency.
    ///
    /// A direction whose adjacent slot is a hole or outside the table gets
    /// [`Neighbour::Border`]. Runs once; a second call is
    /// [`SpaceError::AlreadyLinked`].
    pub fn link(&mut self) -> Result<(), SpaceError> {
        self.ensure_unlinked()?;
        let links: Vec<(usize, [Neighbour; 4])> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|cell| (i, cell.coord())))
            .map(|(i, (x, y))| {
                let mut slots = [Neighbour::Border; 4];
                for dir in Direction::ALL {
                    let (dx, dy) = dir.offset();
                    if let Some(id) = self.cell_id(x + dx, y + dy) {
                        slots[dir.index()] = Neighbour::Cell(id);
                    }
                }
                (i, slots)
            })
            .collect();

        let cells = links.len();
        for (i, slots) in links {
            if let Some(cell) = self.slots[i].as_mut() {
                for dir in Direction::ALL {
                    cell.set_neighbour(dir, slots[dir.index()]);
                }
            }
        }
        self.linked = true;
        debug!(size = self.size, cells, "linked topology");
        Ok(())
    }

    /// Point `a`'s `dir_a` slot at `b` and `b`'s `dir_b` slot at `a`.
    ///
    /// The direction pair is stored exactly as given: `dir_b` need not be
    /// `dir_a.opposite()`. Keeping the result a coherent surface is the
    /// caller's responsibility.
    pub fn rewire(
        &mut self,
        a: (i32, i32),
        dir_a: Direction,
        b: (i32, i32),
        dir_b: Direction,
    ) -> Result<(), SpaceError> {
        let ia = self.live_slot(a.0, a.1)?;
        let ib = self.live_slot(b.0, b.1)?;
        self.ensure_linked()?;
        let (id_a, id_b) = (CellId(ia as u32), CellId(ib as u32));
        if let Some(cell) = self.slots[ia].as_mut() {
            cell.set_neighbour(dir_a, Neighbour::Cell(id_b));
        }
        if let Some(cell) = self.slots[ib].as_mut() {
            cell.set_neighbour(dir_b, Neighbour::Cell(id_a));
        }
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The live cell at `(x, y)`, or `None` for holes and out-of-range
    /// coordinates.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.slot(x, y).and_then(|i| self.slots[i].as_ref())
    }

    /// Identifier of the live cell at `(x, y)`.
    pub fn cell_id(&self, x: i32, y: i32) -> Option<CellId> {
        self.slot(x, y)
            .filter(|&i| self.slots[i].is_some())
            .map(|i| CellId(i as u32))
    }

    /// The live cell with identifier `id`.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Neighbour slot `dir` of cell `id`; `Border` if `id` is not live.
    pub fn neighbour(&self, id: CellId, dir: Direction) -> Neighbour {
        self.cell(id)
            .map_or(Neighbour::Border, |cell| cell.neighbour(dir))
    }

    /// All four slots of cell `id` in [`Direction::ALL`] order.
    pub fn neighbours(&self, id: CellId) -> [Neighbour; 4] {
        self.cell(id)
            .map_or([Neighbour::Border; 4], |cell| cell.neighbours())
    }

    /// Every slot in row-major order (`y` outer, `x` inner), holes as `None`.
    pub fn each_cell(&self) -> impl Iterator<Item = (Option<&Cell>, i32, i32)> + '_ {
        let n = self.size as usize;
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, slot)| (slot.as_ref(), (i % n) as i32, (i / n) as i32))
    }

    /// Live cells with their identifiers, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|cell| (CellId(i as u32), cell)))
    }

    // ── Border-uniform predicates ───────────────────────────────

    /// Carve state of a slot; the border is never carved.
    pub fn is_carved(&self, n: Neighbour) -> bool {
        match n {
            Neighbour::Cell(id) => self.cell(id).is_some_and(Cell::carved),
            Neighbour::Border => false,
        }
    }

    /// Number of carved slots around cell `id`.
    pub fn carved_neighbours(&self, id: CellId) -> usize {
        self.neighbours(id)
            .iter()
            .filter(|&&n| self.is_carved(n))
            .count()
    }

    /// Whether `n` could join the tree without closing a cycle: at most one
    /// of its neighbours is carved. The border always answers `true`.
    pub fn is_unmade(&self, n: Neighbour) -> bool {
        match n {
            Neighbour::Cell(id) => self.carved_neighbours(id) <= UNMADE_MAX_CARVED,
            Neighbour::Border => true,
        }
    }

    // ── Carve state ─────────────────────────────────────────────

    /// Carve the cell behind `n` at depth `distance`.
    ///
    /// Re-carving leaves the first distance in place. Carving the
    /// border is [`SpaceError::InvalidOperation`].
    pub fn carve(&mut self, n: Neighbour, distance: u32) -> Result<CellId, SpaceError> {
        self.ensure_linked()?;
        let id = n.cell().ok_or(SpaceError::InvalidOperation {
            reason: "cannot carve border cell",
        })?;
        let (x, y) = self.coord(id);
        let cell = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SpaceError::MissingCell { x, y })?;
        cell.carve(distance);
        Ok(id)
    }

    /// Mark a live cell as lying on the highlighted path.
    pub fn mark(&mut self, id: CellId) -> Result<(), SpaceError> {
        let (x, y) = self.coord(id);
        let cell = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SpaceError::MissingCell { x, y })?;
        cell.mark();
        Ok(())
    }

    /// Clear carved, marked and distance on every cell. Links are kept.
    pub fn reset_carving(&mut self) {
        for cell in self.slots.iter_mut().flatten() {
            cell.reset();
        }
    }

    /// Coordinate of slot `id`, whether or not it holds a cell.
    pub fn coord(&self, id: CellId) -> (i32, i32) {
        let n = self.size as usize;
        ((id.index() % n) as i32, (id.index() / n) as i32)
    }
}

/// Debug dump: `[]` uncarved, `..` carved, `**` carved and marked, blank
/// for holes. A header row gives column numbers (last two digits), then
/// one row per line, prefixed by the row number.
impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topology {0}x{0}:", self.size)?;
        let n = self.size as usize;
        f.write_str("    ")?;
        for x in 0..n {
            write!(f, "{:>2}", x % 100)?;
        }
        writeln!(f)?;
        for (y, row) in self.slots.chunks(n).enumerate() {
            write!(f, "{y:>3} ")?;
            for slot in row {
                let glyph = match slot {
                    None => "  ",
                    Some(c) if c.marked() => "**",
                    Some(c) if c.carved() => "..",
                    Some(_) => "[]",
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn full(n: u32) -> Topology {
        let mut t = Topology::new(n).unwrap();
        for y in 0..n as i32 {
            for x in 0..n as i32 {
                t.make_cell(x, y).unwrap();
            }
        }
        t
    }

    fn id(t: &Topology, x: i32, y: i32) -> CellId {
        t.cell_id(x, y).unwrap()
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_returns_error() {
        assert!(matches!(Topology::new(0), Err(SpaceError::EmptySpace)));
    }

    #[test]
    fn new_rejects_oversized() {
        assert!(matches!(
            Topology::new(Topology::MAX_SIZE + 1),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn new_table_is_all_holes() {
        let t = Topology::new(3).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.each_cell().count(), 9);
        assert!(t.each_cell().all(|(c, _, _)| c.is_none()));
    }

    // ── Bounds tests ────────────────────────────────────────────

    #[test]
    fn get_cell_out_of_range_is_none() {
        let t = full(5);
        assert!(t.get_cell(-1, 0).is_none());
        assert!(t.get_cell(5, 0).is_none());
        assert!(t.get_cell(0, -1).is_none());
        assert!(t.get_cell(0, 5).is_none());
        assert!(t.get_cell(4, 4).is_some());
    }

    #[test]
    fn make_cell_negative_is_out_of_bounds() {
        let mut t = Topology::new(5).unwrap();
        assert_eq!(
            t.make_cell(-1, 0),
            Err(SpaceError::OutOfBounds { x: -1, y: 0, size: 5 })
        );
        assert!(t.is_empty());
    }

    #[test]
    fn del_cell_out_of_range_is_out_of_bounds() {
        let mut t = full(2);
        assert!(matches!(t.del_cell(2, 0), Err(SpaceError::OutOfBounds { .. })));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn del_cell_makes_hole() {
        let mut t = full(3);
        t.del_cell(1, 1).unwrap();
        assert!(t.get_cell(1, 1).is_none());
        assert_eq!(t.len(), 8);
        t.del_cell(1, 1).unwrap();
    }

    // ── Link tests ──────────────────────────────────────────────

    #[test]
    fn link_interior_has_four_grid_neighbours() {
        let mut t = full(3);
        t.link().unwrap();
        let c = id(&t, 1, 1);
        assert_eq!(t.neighbour(c, Direction::Left), Neighbour::Cell(id(&t, 0, 1)));
        assert_eq!(t.neighbour(c, Direction::Right), Neighbour::Cell(id(&t, 2, 1)));
        assert_eq!(t.neighbour(c, Direction::Up), Neighbour::Cell(id(&t, 1, 0)));
        assert_eq!(t.neighbour(c, Direction::Down), Neighbour::Cell(id(&t, 1, 2)));
    }

    #[test]
    fn link_corner_gets_border_sentinels() {
        let mut t = full(3);
        t.link().unwrap();
        let c = id(&t, 0, 0);
        assert!(t.neighbour(c, Direction::Left).is_border());
        assert!(t.neighbour(c, Direction::Up).is_border());
        assert!(!t.neighbour(c, Direction::Right).is_border());
    }

    #[test]
    fn link_hole_becomes_border() {
        let mut t = full(3);
        t.del_cell(1, 0).unwrap();
        t.link().unwrap();
        assert!(t.neighbour(id(&t, 0, 0), Direction::Right).is_border());
        assert!(t.neighbour(id(&t, 1, 1), Direction::Up).is_border());
    }

    #[test]
    fn link_twice_is_error() {
        let mut t = full(2);
        t.link().unwrap();
        assert_eq!(t.link(), Err(SpaceError::AlreadyLinked));
    }

    #[test]
    fn layout_after_link_is_error() {
        let mut t = full(2);
        t.link().unwrap();
        assert_eq!(t.make_cell(0, 0), Err(SpaceError::AlreadyLinked));
        assert_eq!(t.del_cell(0, 0), Err(SpaceError::AlreadyLinked));
    }

    // ── Rewire tests ────────────────────────────────────────────

    #[test]
    fn rewire_before_link_is_error() {
        let mut t = full(3);
        assert_eq!(
            t.rewire((0, 0), Direction::Left, (2, 2), Direction::Right),
            Err(SpaceError::NotLinked)
        );
    }

    #[test]
    fn rewire_keeps_direction_pair_verbatim() {
        let mut t = full(4);
        t.link().unwrap();
        t.rewire((3, 0), Direction::Right, (3, 3), Direction::Right)
            .unwrap();
        let a = id(&t, 3, 0);
        let b = id(&t, 3, 3);
        assert_eq!(t.neighbour(a, Direction::Right), Neighbour::Cell(b));
        assert_eq!(t.neighbour(b, Direction::Right), Neighbour::Cell(a));
        // Untouched slots keep their grid links.
        assert_eq!(t.neighbour(b, Direction::Left), Neighbour::Cell(id(&t, 2, 3)));
    }

    #[test]
    fn rewire_to_hole_is_missing_cell() {
        let mut t = full(3);
        t.del_cell(2, 2).unwrap();
        t.link().unwrap();
        assert_eq!(
            t.rewire((0, 0), Direction::Up, (2, 2), Direction::Down),
            Err(SpaceError::MissingCell { x: 2, y: 2 })
        );
        assert!(t.neighbour(id(&t, 0, 0), Direction::Up).is_border());
    }

    #[test]
    fn rewire_out_of_range_is_out_of_bounds() {
        let mut t = full(3);
        t.link().unwrap();
        assert!(matches!(
            t.rewire((0, 0), Direction::Up, (0, 3), Direction::Down),
            Err(SpaceError::OutOfBounds { .. })
        ));
    }

    // ── Iteration tests ─────────────────────────────────────────

    #[test]
    fn each_cell_is_row_major() {
        let mut t = Topology::new(2).unwrap();
        t.make_cell(1, 0).unwrap();
        let order: Vec<(bool, i32, i32)> =
            t.each_cell().map(|(c, x, y)| (c.is_some(), x, y)).collect();
        assert_eq!(
            order,
            vec![(false, 0, 0), (true, 1, 0), (false, 0, 1), (false, 1, 1)]
        );
    }

    #[test]
    fn cell_id_round_trips_coord() {
        let t = full(6);
        for (cid, cell) in t.cells() {
            assert_eq!(t.coord(cid), cell.coord());
        }
    }

    // ── Predicate and carve tests ───────────────────────────────

    #[test]
    fn border_is_never_carved_and_always_unmade() {
        let t = full(2);
        assert!(!t.is_carved(Neighbour::Border));
        assert!(t.is_unmade(Neighbour::Border));
    }

    #[test]
    fn carving_border_is_invalid_operation() {
        let mut t = full(2);
        t.link().unwrap();
        assert!(matches!(
            t.carve(Neighbour::Border, 0),
            Err(SpaceError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn carve_before_link_is_error() {
        let mut t = full(2);
        let c = id(&t, 0, 0);
        assert_eq!(t.carve(Neighbour::Cell(c), 0), Err(SpaceError::NotLinked));
    }

    #[test]
    fn unmade_counts_carved_neighbours() {
        let mut t = full(3);
        t.link().unwrap();
        let centre = Neighbour::Cell(id(&t, 1, 1));
        assert!(t.is_unmade(centre));
        t.carve(Neighbour::Cell(id(&t, 0, 1)), 0).unwrap();
        assert!(t.is_unmade(centre));
        t.carve(Neighbour::Cell(id(&t, 1, 0)), 1).unwrap();
        assert_eq!(t.carved_neighbours(id(&t, 1, 1)), 2);
        assert!(!t.is_unmade(centre));
    }

    #[test]
    fn recarve_keeps_distance_and_reset_clears() {
        let mut t = full(2);
        t.link().unwrap();
        let c = id(&t, 1, 1);
        t.carve(Neighbour::Cell(c), 2).unwrap();
        t.carve(Neighbour::Cell(c), 7).unwrap();
        t.mark(c).unwrap();
        assert_eq!(t.cell(c).unwrap().distance(), Some(2));
        t.reset_carving();
        let cell = t.cell(c).unwrap();
        assert!(!cell.carved() && !cell.marked());
        assert!(t.is_linked());
    }

    #[test]
    fn display_dump_glyphs() {
        let mut t = full(2);
        t.del_cell(1, 1).unwrap();
        t.link().unwrap();
        let c = id(&t, 0, 0);
        t.carve(Neighbour::Cell(c), 0).unwrap();
        t.mark(c).unwrap();
        t.carve(Neighbour::Cell(id(&t, 1, 0)), 1).unwrap();
        assert_eq!(
            t.to_string(),
            "Topology 2x2:\n     0 1\n  0 **..\n  1 []  \n"
        );
    }

    #[test]
    fn display_header_numbers_every_column() {
        let t = Topology::new(12).unwrap();
        let dump = t.to_string();
        let header = dump.lines().nth(1).unwrap();
        assert_eq!(header, "     0 1 2 3 4 5 6 7 8 91011");
        assert_eq!(header.len(), 4 + 2 * 12);
        let row = dump.lines().nth(2).unwrap();
        assert_eq!(row.len(), header.len());
    }

    #[test]
    fn max_size_table_is_allocatable() {
        let t = Topology::new(Topology::MAX_SIZE).unwrap();
        assert_eq!(t.size(), Topology::MAX_SIZE);
        assert!(t.is_empty());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_full_grid() {
        let mut t = full(6);
        t.link().unwrap();
        compliance::run_link_compliance(&t);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn grid_links_mirrored_with_holes(
            n in 1u32..8,
            holes in proptest::collection::vec((0i32..8, 0i32..8), 0..20),
        ) {
            let mut t = full(n);
            for (x, y) in holes {
                if x < n as i32 && y < n as i32 {
                    t.del_cell(x, y).unwrap();
                }
            }
            t.link().unwrap();
            compliance::run_link_compliance(&t);
        }
    }
}
