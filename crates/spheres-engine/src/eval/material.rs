//! Material balance evaluation.
//!
//! Sums piece values per side. Returned from Purple's perspective
//! (positive = Purple ahead).

use spheres_core::{Cell, Color, Position};

use crate::eval::score::Score;

/// Evaluate material balance: Purple's total piece value minus Red's.
pub fn material_score<P: Position>(board: &P) -> Score {
    let mut totals = [0 as Score; Color::COUNT];

    for cell in Cell::all() {
        if let Some(piece) = board.piece_at(cell) {
            totals[piece.color().index()] += piece.value();
        }
    }

    totals[Color::Purple.index()] - totals[Color::Red.index()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use spheres_core::{Board, PieceKind};

    use super::material_score;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(material_score(&Board::starting_position()), 0);
    }

    #[test]
    fn empty_board_is_zero() {
        assert_eq!(material_score(&Board::empty()), 0);
    }

    #[test]
    fn missing_red_sphere_gives_sphere_advantage() {
        let board: Board = "4K3/SSSSSSSS/8/8/8/8/sss1ssss/4k3".parse().unwrap();
        assert_eq!(material_score(&board), PieceKind::Sphere.value());
    }

    #[test]
    fn score_is_negative_when_red_is_ahead() {
        let board: Board = "4K3/8/8/8/8/8/ss6/4k3".parse().unwrap();
        assert_eq!(material_score(&board), -2 * PieceKind::Sphere.value());
    }

    #[test]
    fn recoloring_negates_material() {
        let layouts = [
            "4K3/SSSSSSSS/8/8/8/8/ssssssss/4k3",
            "4K3/SS1S1SSS/8/3s4/8/8/s1s5/4k3",
            "8/S7/8/8/8/8/ss6/4k3",
        ];
        for layout in layouts {
            let board: Board = layout.parse().unwrap();
            assert_eq!(
                material_score(&board.recolored()),
                -material_score(&board),
                "recoloring did not negate material for {layout}"
            );
        }
    }
}
