//! The reference board: an 8×8 grid of optional pieces plus the side to move.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Home file of each side's spheres, indexed by [`Color::index()`].
pub(crate) const SPHERE_HOME_FILE: [u8; Color::COUNT] = [1, 6];

/// Back file of each side, indexed by [`Color::index()`].
const BACK_FILE: [u8; Color::COUNT] = [0, 7];

/// Rank the keepers start on.
const KEEPER_START_RANK: u8 = 4;

/// Complete position state.
///
/// Cells are stored `[file][rank]`. `Board` is `Copy`, so cloning it for a
/// search branch never shares storage with the parent.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
}

impl Board {
    /// A board with no pieces, Purple to move.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
            side_to_move: Color::Purple,
        }
    }

    /// Return the standard starting position.
    ///
    /// Each side has a keeper on its back file at rank 4 and eight spheres on
    /// its home file. Purple moves first.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = BACK_FILE[color.index()] as usize;
            let home = SPHERE_HOME_FILE[color.index()] as usize;
            board.cells[back][KEEPER_START_RANK as usize] =
                Some(Piece::new(PieceKind::Keeper, color));
            for rank in 0..8 {
                board.cells[home][rank] = Some(Piece::new(PieceKind::Sphere, color));
            }
        }
        board
    }

    /// Return the piece on `cell`, if any.
    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.file() as usize][cell.rank() as usize]
    }

    /// Place `piece` on `cell`, returning whatever stood there before.
    pub fn put(&mut self, cell: Cell, piece: Piece) -> Option<Piece> {
        self.cells[cell.file() as usize][cell.rank() as usize].replace(piece)
    }

    /// Clear `cell`, returning whatever stood there.
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[cell.file() as usize][cell.rank() as usize].take()
    }

    /// Iterate over every occupied cell, file-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(|cell| self.piece_at(cell).map(|piece| (cell, piece)))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color() == color).count()
    }

    /// Return the cell of `color`'s keeper, if it has one.
    pub fn keeper_cell(&self, color: Color) -> Option<Cell> {
        self.pieces()
            .find(|&(_, piece)| piece == Piece::new(PieceKind::Keeper, color))
            .map(|(cell, _)| cell)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// The same position with every piece's color swapped. Placement and the
    /// side to move are left untouched.
    pub fn recolored(&self) -> Board {
        let mut board = *self;
        for file in board.cells.iter_mut() {
            for slot in file.iter_mut() {
                *slot = slot.map(Piece::recolored);
            }
        }
        board
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|&(_, piece)| piece == Piece::new(PieceKind::Keeper, color))
                .count();
            if count > 1 {
                return Err(BoardError::TooManyKeepers { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, one file per line.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for file in (0u8..8).rev() {
            write!(f, "{file}  ")?;
            for rank in 0u8..8 {
                let c = Cell::new(file, rank)
                    .and_then(|cell| board.piece_at(cell))
                    .map_or('.', Piece::layout_char);
                if rank < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::piece::Piece;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_piece_at() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(cell(0, 4)), Some(Piece::PURPLE_KEEPER));
        assert_eq!(board.piece_at(cell(7, 4)), Some(Piece::RED_KEEPER));
        assert_eq!(board.piece_at(cell(1, 0)), Some(Piece::PURPLE_SPHERE));
        assert_eq!(board.piece_at(cell(6, 7)), Some(Piece::RED_SPHERE));
        assert_eq!(board.piece_at(cell(3, 3)), None);
        assert_eq!(board.piece_at(cell(0, 0)), None);
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.count(Color::Purple), 9);
        assert_eq!(board.count(Color::Red), 9);
        assert_eq!(board.side_to_move(), Color::Purple);
    }

    #[test]
    fn keeper_cell() {
        let board = Board::starting_position();
        assert_eq!(board.keeper_cell(Color::Purple), Some(cell(0, 4)));
        assert_eq!(board.keeper_cell(Color::Red), Some(cell(7, 4)));
        assert_eq!(Board::empty().keeper_cell(Color::Red), None);
    }

    #[test]
    fn put_and_remove() {
        let mut board = Board::empty();
        assert_eq!(board.put(cell(3, 3), Piece::RED_SPHERE), None);
        assert_eq!(board.put(cell(3, 3), Piece::PURPLE_SPHERE), Some(Piece::RED_SPHERE));
        assert_eq!(board.remove(cell(3, 3)), Some(Piece::PURPLE_SPHERE));
        assert_eq!(board.remove(cell(3, 3)), None);
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn recolored_swaps_sides() {
        let board = Board::starting_position().recolored();
        assert_eq!(board.piece_at(cell(0, 4)), Some(Piece::RED_KEEPER));
        assert_eq!(board.piece_at(cell(6, 0)), Some(Piece::PURPLE_SPHERE));
    }

    #[test]
    fn second_keeper_fails_validation() {
        let mut board = Board::starting_position();
        board.put(cell(3, 3), Piece::RED_KEEPER);
        assert!(board.validate().is_err());
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("S S S S S S S S"));
        assert!(output.contains(". . . . k . . ."));
        assert!(output.contains("0 1 2 3 4 5 6 7"));
    }
}
