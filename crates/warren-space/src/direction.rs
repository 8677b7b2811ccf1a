//! The four neighbour directions of a cell.

use std::fmt;

/// One of the four neighbour slots of a [`Cell`](crate::Cell).
///
/// The discriminant is the slot index, so a direction maps to its slot
/// with [`Direction::index`] and no runtime dispatch.
///
/// # Examples
///
/// ```
/// use warren_space::Direction;
///
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// assert_eq!(Direction::Up.offset(), (0, -1));
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards `x - 1`.
    Left = 0,
    /// Towards `x + 1`.
    Right = 1,
    /// Towards `y - 1`.
    Up = 2,
    /// Towards `y + 1`.
    Down = 3,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Slot index of this direction, in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid offset `(dx, dy)` used by [`Topology::link`](crate::Topology::link).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// The geometrically opposite direction.
    ///
    /// Grid links are always mirrored; rewired links need not be.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}
