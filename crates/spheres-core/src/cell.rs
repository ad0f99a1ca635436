//! Board cells addressed by `(file, rank)`.

use std::fmt;

/// A cell on the 8×8 board.
///
/// `file` is the axis along which pieces advance (Purple toward file 7,
/// Red toward file 0); `rank` runs across it. Both are in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    file: u8,
    rank: u8,
}

impl Cell {
    /// Number of files and of ranks.
    pub const SIDE: u8 = 8;

    /// Total number of cells.
    pub const COUNT: usize = 64;

    /// Create a cell, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Cell> {
        if file < Self::SIDE && rank < Self::SIDE {
            Some(Cell { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The cell reflected across the midline between files 3 and 4.
    #[inline]
    pub const fn mirrored(self) -> Cell {
        Cell {
            file: Self::SIDE - 1 - self.file,
            rank: self.rank,
        }
    }

    /// Step by `(df, dr)`, returning `None` when the target leaves the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Cell> {
        let file = u8::try_from(i16::from(self.file) + i16::from(df)).ok()?;
        let rank = u8::try_from(i16::from(self.rank) + i16::from(dr)).ok()?;
        Cell::new(file, rank)
    }

    /// All 64 cells, file-major: (0,0), (0,1), ..., (7,7).
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Self::SIDE).flat_map(|file| (0..Self::SIDE).map(move |rank| Cell { file, rank }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.file, self.rank)
    }
}
