//! Static evaluation: material balance plus piece-position tables.

pub mod material;
pub mod pst;
pub mod score;

use spheres_core::{PieceKind, Position};

use self::material::material_score;
use self::pst::{SPHERE_TABLE, ScoreTable, position_score};
use self::score::Score;

/// Static evaluator. Positive scores favour Purple.
///
/// Holds one optional [`ScoreTable`] per piece kind. Kinds without a table
/// contribute material only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    tables: [Option<ScoreTable>; PieceKind::COUNT],
}

impl Heuristics {
    /// An evaluator with no position tables (material only).
    pub const fn material_only() -> Self {
        Self {
            tables: [None; PieceKind::COUNT],
        }
    }

    /// Register (or replace) the position table for `kind`.
    #[must_use]
    pub fn with_table(mut self, kind: PieceKind, table: ScoreTable) -> Self {
        self.tables[kind.index()] = Some(table);
        self
    }

    /// The table registered for `kind`, if any.
    pub fn table(&self, kind: PieceKind) -> Option<&ScoreTable> {
        self.tables[kind.index()].as_ref()
    }

    /// Evaluate `board`: material plus the position score of every kind with
    /// a registered table.
    pub fn evaluate<P: Position>(&self, board: &P) -> Score {
        let mut score = material_score(board);

        for kind in PieceKind::ALL {
            if let Some(table) = self.table(kind) {
                score += position_score(board, kind, table);
            }
        }

        score
    }
}

impl Default for Heuristics {
    /// Material plus [`SPHERE_TABLE`] for spheres.
    fn default() -> Self {
        Self::material_only().with_table(PieceKind::Sphere, SPHERE_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use spheres_core::{Board, Cell, Piece, PieceKind};

    use super::Heuristics;
    use super::material::material_score;
    use super::pst::{SPHERE_TABLE, ScoreTable};
    use super::score::INFINITY;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn opposed_spheres_cancel() {
        // Purple on (6, 3) reads SPHERE_TABLE[6][3]; Red on (1, 3) reads the
        // mirrored SPHERE_TABLE[6][3]. Material is equal too.
        let mut board = Board::empty();
        board.put(cell(6, 3), Piece::PURPLE_SPHERE);
        board.put(cell(1, 3), Piece::RED_SPHERE);
        assert_eq!(SPHERE_TABLE[6][3], 50);
        assert_eq!(Heuristics::default().evaluate(&board), 0);
    }

    #[test]
    fn lone_advanced_sphere() {
        let mut board = Board::empty();
        board.put(cell(5, 3), Piece::PURPLE_SPHERE);
        assert_eq!(
            Heuristics::default().evaluate(&board),
            PieceKind::Sphere.value() + 30
        );
    }

    #[test]
    fn material_only_ignores_placement() {
        let board: Board = "4K3/1SSSSSS1/S7/8/8/8/ssssssss/4k3".parse().unwrap();
        assert_eq!(
            Heuristics::material_only().evaluate(&board),
            material_score(&board)
        );
    }

    #[test]
    fn extra_table_is_additive() {
        let mut keeper_table: ScoreTable = [[0; 8]; 8];
        keeper_table[0][4] = 7;
        let heuristics = Heuristics::default().with_table(PieceKind::Keeper, keeper_table);

        let mut board = Board::empty();
        board.put(cell(0, 4), Piece::PURPLE_KEEPER);
        board.put(cell(2, 2), Piece::PURPLE_SPHERE);

        let base = Heuristics::default().evaluate(&board);
        assert_eq!(heuristics.evaluate(&board), base + 7);
    }

    #[test]
    fn lopsided_board_stays_below_infinity() {
        // One keeper and a sphere on every other cell.
        let mut board = Board::empty();
        for cell in Cell::all() {
            board.put(cell, Piece::PURPLE_SPHERE);
        }
        board.put(cell(0, 0), Piece::PURPLE_KEEPER);

        let heuristics = Heuristics::default();
        let score = heuristics.evaluate(&board);
        assert!(score > PieceKind::Keeper.value());
        assert!(score < INFINITY);
        assert_eq!(heuristics.evaluate(&board.recolored()), -score);
    }

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(Heuristics::default().evaluate(&Board::starting_position()), 0);
    }
}
