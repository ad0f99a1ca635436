//! Side colors.

use std::fmt;
use std::ops::Not;

/// One of the two sides: Purple (maximizing) or Red (minimizing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Purple = 0,
    Red = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Purple, Color::Red];

    /// Return the index (0 for Purple, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Purple => Color::Red,
            Color::Red => Color::Purple,
        }
    }

    /// File delta of a forward step: Purple advances toward file 7, Red toward file 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Purple => 1,
            Color::Red => -1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Purple => write!(f, "p"),
            Color::Red => write!(f, "r"),
        }
    }
}
