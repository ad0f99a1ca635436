//! Move generation and check detection for the reference rules.
//!
//! Generated moves are pseudo-legal: a move may leave the mover's keeper
//! threatened. Filtering those is the move selector's job.

mod check;
mod keeper;
mod spheres;

use crate::board::Board;
use crate::color::Color;
use crate::game_move::Move;
use crate::piece_kind::PieceKind;

use self::keeper::gen_keeper;
use self::spheres::gen_sphere;

/// Generate all moves for `color`, in file-major order of the moving piece.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut list = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color() != color {
            continue;
        }
        match piece.kind() {
            PieceKind::Sphere => gen_sphere(board, from, color, &mut list),
            PieceKind::Keeper => gen_keeper(board, from, color, &mut list),
        }
    }
    list
}

impl Board {
    /// All moves for `color` on this board.
    pub fn possible_moves(&self, color: Color) -> Vec<Move> {
        generate_moves(self, color)
    }

    /// Return `true` if `color`'s keeper is threatened.
    pub fn is_in_check(&self, color: Color) -> bool {
        check::in_check(self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::check::is_attacked;
    use super::generate_moves;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::game_move::Move;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn starting_position_18_moves() {
        // Eight spheres with single and double steps plus two keeper steps.
        let board = Board::starting_position();
        assert_eq!(generate_moves(&board, Color::Purple).len(), 18);
        assert_eq!(generate_moves(&board, Color::Red).len(), 18);
    }

    #[test]
    fn empty_board_has_no_moves() {
        let board = Board::empty();
        assert!(generate_moves(&board, Color::Purple).is_empty());
        assert!(generate_moves(&board, Color::Red).is_empty());
    }

    #[test]
    fn only_movers_pieces_generate() {
        let board: Board = "8/8/8/3S4/8/8/8/8".parse().unwrap();
        assert_eq!(
            generate_moves(&board, Color::Purple),
            vec![Move::new(cell(3, 3), cell(4, 3))]
        );
        assert!(generate_moves(&board, Color::Red).is_empty());
    }

    #[test]
    fn keeper_in_check_from_sphere() {
        // Red sphere on (4, 4) threatens (3, 3) and (3, 5).
        let board: Board = "8/8/8/3K4/4s3/8/8/8".parse().unwrap();
        assert!(board.is_in_check(Color::Purple));
        assert!(!board.is_in_check(Color::Red));
    }

    #[test]
    fn keeper_not_in_check_from_straight_ahead() {
        let board: Board = "8/8/8/3K4/3s4/8/8/8".parse().unwrap();
        assert!(!board.is_in_check(Color::Purple));
    }

    #[test]
    fn keeper_in_check_from_keeper() {
        let board: Board = "8/8/8/3K4/3k4/8/8/8".parse().unwrap();
        assert!(board.is_in_check(Color::Purple));
        assert!(board.is_in_check(Color::Red));
    }

    #[test]
    fn no_keeper_never_in_check() {
        let board: Board = "8/8/8/8/8/8/ssssssss/8".parse().unwrap();
        assert!(!board.is_in_check(Color::Purple));
    }

    #[test]
    fn starting_position_no_check() {
        let board = Board::starting_position();
        assert!(!board.is_in_check(Color::Purple));
        assert!(!board.is_in_check(Color::Red));
        assert!(!is_attacked(&board, cell(3, 3), Color::Red));
        assert!(is_attacked(&board, cell(5, 3), Color::Red));
    }
}
