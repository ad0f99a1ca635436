//! Move representation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cell::Cell;

/// A single ply: source cell, destination cell and a castling flag.
///
/// Equality and hashing look at the coordinates only; two moves between the
/// same cells compare equal whatever their castling flag.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Cell,
    to: Cell,
    castling: bool,
}

impl Move {
    /// Create an ordinary move.
    #[inline]
    pub const fn new(from: Cell, to: Cell) -> Move {
        Move {
            from,
            to,
            castling: false,
        }
    }

    /// Create a castling move using the keeper's source and destination cells.
    #[inline]
    pub const fn new_castling(from: Cell, to: Cell) -> Move {
        Move {
            from,
            to,
            castling: true,
        }
    }

    #[inline]
    pub const fn from(self) -> Cell {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Cell {
        self.to
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.castling
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Move;
    use crate::cell::Cell;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn accessors() {
        let mv = Move::new(cell(1, 2), cell(3, 4));
        assert_eq!(mv.from(), cell(1, 2));
        assert_eq!(mv.to(), cell(3, 4));
        assert!(!mv.is_castling());
    }

    #[test]
    fn equality_ignores_castling_flag() {
        let plain = Move::new(cell(0, 4), cell(0, 6));
        let castle = Move::new_castling(cell(0, 4), cell(0, 6));
        assert!(castle.is_castling());
        assert_eq!(plain, castle);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(set.contains(&castle));
    }

    #[test]
    fn equality_compares_all_coordinates() {
        let base = Move::new(cell(1, 1), cell(2, 2));
        assert_ne!(base, Move::new(cell(1, 1), cell(2, 3)));
        assert_ne!(base, Move::new(cell(1, 0), cell(2, 2)));
        assert_ne!(base, Move::new(cell(2, 2), cell(1, 1)));
    }

    #[test]
    fn display() {
        let mv = Move::new(cell(1, 3), cell(2, 3));
        assert_eq!(mv.to_string(), "(1, 3) -> (2, 3)");
    }
}
