use serde::{Deserialize, Serialize};

/// Position relative to a directed line: on the line itself, or on one of its sides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// On the line.
    On = 0,
    /// Left side, looking along the line direction.
    Left = 1,
    /// Right side, looking along the line direction.
    Right = 2,
}

impl Position {
    /// All positions in index order.
    pub const ALL: [Position; 3] = [Position::On, Position::Left, Position::Right];

    /// Returns the position on the other side of the line. `On` is its own opposite.
    pub fn opposite(&self) -> Self {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
