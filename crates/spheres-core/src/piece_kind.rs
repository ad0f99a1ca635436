//! Piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// Advancing piece; the only kind with an authored position table.
    Sphere = 0,
    /// The piece whose capture threat constitutes check.
    Keeper = 1,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 2;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 2] = [PieceKind::Sphere, PieceKind::Keeper];

    /// Return the index (0..1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material worth of one piece of this kind.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Sphere => 100,
            PieceKind::Keeper => 20_000,
        }
    }

    /// Layout character for this kind (lowercase).
    #[inline]
    pub const fn layout_char(self) -> char {
        match self {
            PieceKind::Sphere => 's',
            PieceKind::Keeper => 'k',
        }
    }

    /// Parse a layout character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            's' => Some(PieceKind::Sphere),
            'k' => Some(PieceKind::Keeper),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}
