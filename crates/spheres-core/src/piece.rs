//! Colored piece.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Purple sphere.
    pub const PURPLE_SPHERE: Piece = Piece::new(PieceKind::Sphere, Color::Purple);
    /// Purple keeper.
    pub const PURPLE_KEEPER: Piece = Piece::new(PieceKind::Keeper, Color::Purple);
    /// Red sphere.
    pub const RED_SPHERE: Piece = Piece::new(PieceKind::Sphere, Color::Red);
    /// Red keeper.
    pub const RED_KEEPER: Piece = Piece::new(PieceKind::Keeper, Color::Red);

    /// All pieces: Purple first, then Red.
    pub const ALL: [Piece; 4] = [
        Self::PURPLE_SPHERE,
        Self::PURPLE_KEEPER,
        Self::RED_SPHERE,
        Self::RED_KEEPER,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a layout character into a piece.
    ///
    /// Uppercase letters produce Purple pieces; lowercase letters produce Red pieces.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_layout_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::Purple
        } else {
            Color::Red
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Material worth of this piece.
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// Return the same kind with the opposite color.
    #[inline]
    pub const fn recolored(self) -> Piece {
        Piece::new(self.kind, self.color.flip())
    }

    /// Layout character: uppercase for Purple, lowercase for Red.
    #[inline]
    pub fn layout_char(self) -> char {
        let base = self.kind.layout_char();
        match self.color {
            Color::Purple => base.to_ascii_uppercase(),
            Color::Red => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::Purple => 'P',
            Color::Red => 'R',
        };
        let kind_char = self.kind.layout_char().to_ascii_uppercase();
        write!(f, "{color_prefix}{kind_char}")
    }
}
