//! Reusable topology layouts.
//!
//! - [`full_grid`]: hole-free square grid.
//! - [`grid_with_holes`]: square grid with chosen slots deleted.
//! - [`two_regions`]: two disjoint rectangles joined by a single rewire.
//! - [`cube_net`]: six square faces of a cross-shaped net stitched into a
//!   closed cube surface.
//!
//! All fixtures return linked topologies ready for carving.

use warren_space::{Direction, Orientation, Patch, Topology};

/// A linked `n` × `n` grid with every slot populated.
pub fn full_grid(n: u32) -> Topology {
    let mut t = Topology::new(n).unwrap();
    t.make_patch(&Patch::square(0, 0, n)).unwrap();
    t.link().unwrap();
    t
}

/// A linked `n` × `n` grid with the listed slots turned into holes.
pub fn grid_with_holes(n: u32, holes: &[(i32, i32)]) -> Topology {
    let mut t = Topology::new(n).unwrap();
    t.make_patch(&Patch::square(0, 0, n)).unwrap();
    for &(x, y) in holes {
        t.del_cell(x, y).unwrap();
    }
    t.link().unwrap();
    t
}

/// Two regions separated by a blank column, glued by one rewire.
pub struct TwoRegions {
    pub topology: Topology,
    /// Left region; carving starts here.
    pub a: Patch,
    /// Right region, reachable only through the rewire.
    pub b: Patch,
    /// Cell of `a` whose `Up` slot was rewired.
    pub a_gate: (i32, i32),
    /// Cell of `b` whose `Down` slot points back at `a_gate`.
    pub b_gate: (i32, i32),
}

/// A 9 × 9 table holding a 4 × 9 region, a blank column, and a second
/// 4 × 9 region. The top cell of column 1 is rewired (`Up`) to the bottom
/// cell of column 7 (`Down`).
pub fn two_regions() -> TwoRegions {
    let a = Patch::new(0, 0, 4, 9);
    let b = Patch::new(5, 0, 4, 9);
    let mut t = Topology::new(9).unwrap();
    t.make_patch(&a).unwrap();
    t.make_patch(&b).unwrap();
    t.link().unwrap();
    let a_gate = (1, 0);
    let b_gate = (7, 8);
    t.rewire(a_gate, Direction::Up, b_gate, Direction::Down)
        .unwrap();
    TwoRegions {
        topology: t,
        a,
        b,
        a_gate,
        b_gate,
    }
}

/// The six faces of a [`cube_net`].
pub struct CubeNet {
    pub topology: Topology,
    pub up: Patch,
    pub left: Patch,
    pub front: Patch,
    pub right: Patch,
    pub back: Patch,
    pub down: Patch,
}

impl CubeNet {
    /// All faces.
    pub fn faces(&self) -> [Patch; 6] {
        [
            self.up, self.left, self.front, self.right, self.back, self.down,
        ]
    }
}

/// A cube surface with `face` × `face` cells per face.
///
/// Net layout on a `4 * face` table, in face units:
///
/// ```text
///     . U . .
///     L F R B
///     . D . .
/// ```
///
/// Five cube edges are grid-adjacent in the net; the other seven are
/// stitched, some with same-direction pairings (Up to Up, Down to Down).
pub fn cube_net(face: u32) -> CubeNet {
    let f = face as i32;
    let at = |fx: i32, fy: i32| Patch::square(fx * f, fy * f, face);
    let (up, left, front, right, back, down) =
        (at(1, 0), at(0, 1), at(1, 1), at(2, 1), at(3, 1), at(1, 2));

    let mut topology = Topology::new(4 * face).unwrap();
    for p in [up, left, front, right, back, down] {
        topology.make_patch(&p).unwrap();
    }
    topology.link().unwrap();

    use Direction::{Down as D, Left as L, Right as R, Up as U};
    use Orientation::{Forward, Reversed};
    let seams = [
        (left.side(L), back.side(R), Forward),
        (up.side(U), back.side(U), Reversed),
        (up.side(L), left.side(U), Forward),
        (up.side(R), right.side(U), Reversed),
        (down.side(L), left.side(D), Reversed),
        (down.side(R), right.side(D), Forward),
        (down.side(D), back.side(D), Reversed),
    ];
    for (a, b, orientation) in seams {
        topology.stitch(&a, &b, orientation).unwrap();
    }

    CubeNet {
        topology,
        up,
        left,
        front,
        right,
        back,
        down,
    }
}
