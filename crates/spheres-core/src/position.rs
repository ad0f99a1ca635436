//! The interface the search engine uses to talk to a rules implementation.

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::game_move::Move;
use crate::piece::Piece;

/// A board snapshot the engine can explore.
///
/// `Clone` must produce a deep, independent copy: the search clones before
/// every `apply_move`, and sibling branches rely on never observing each
/// other's moves.
pub trait Position: Clone {
    /// Candidate moves for `color`. May include moves that leave `color` in check.
    fn possible_moves(&self, color: Color) -> Vec<Move>;

    /// Play `mv` on this snapshot.
    fn apply_move(&mut self, mv: Move);

    /// Whether `color` is currently in check.
    fn is_in_check(&self, color: Color) -> bool;

    /// The piece on `cell`, if any.
    fn piece_at(&self, cell: Cell) -> Option<Piece>;

    /// Clone this snapshot and play `mv` on the copy.
    fn with_move(&self, mv: Move) -> Self {
        let mut child = self.clone();
        child.apply_move(mv);
        child
    }
}

impl Position for Board {
    fn possible_moves(&self, color: Color) -> Vec<Move> {
        Board::possible_moves(self, color)
    }

    fn apply_move(&mut self, mv: Move) {
        Board::apply_move(self, mv);
    }

    fn is_in_check(&self, color: Color) -> bool {
        Board::is_in_check(self, color)
    }

    fn piece_at(&self, cell: Cell) -> Option<Piece> {
        Board::piece_at(self, cell)
    }
}
