//! Piece-position tables.
//!
//! Tables are indexed `[file][rank]` and authored from Purple's side of the
//! board. Red reads the file-mirrored entry, `table[7 - file][rank]`, so one
//! table serves both colors.

use spheres_core::{Cell, Color, PieceKind, Position};

use crate::eval::score::Score;

/// Positional bonus or penalty per cell for one piece kind.
pub type ScoreTable = [[Score; 8]; 8];

/// Sphere table. Rewards central advance and the file just short of the far edge.
#[rustfmt::skip]
pub const SPHERE_TABLE: ScoreTable = [
    // File 0 (behind the home file)
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    // File 1 (home)
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    // File 2
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    // File 3
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    // File 4
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    // File 5
    [10, 10, 20, 30, 30, 20, 10, 10],
    // File 6
    [50, 50, 50, 50, 50, 50, 50, 50],
    // File 7
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

/// Look up the table bonus for a piece of `color` on `cell`.
#[inline]
pub fn table_value(table: &ScoreTable, color: Color, cell: Cell) -> Score {
    let cell = match color {
        Color::Purple => cell,
        Color::Red => cell.mirrored(),
    };
    table[cell.file() as usize][cell.rank() as usize]
}

/// Positional balance for every `kind` piece on the board, Purple minus Red.
pub fn position_score<P: Position>(board: &P, kind: PieceKind, table: &ScoreTable) -> Score {
    let mut totals = [0 as Score; Color::COUNT];

    for cell in Cell::all() {
        let Some(piece) = board.piece_at(cell) else {
            continue;
        };
        if piece.kind() == kind {
            totals[piece.color().index()] += table_value(table, piece.color(), cell);
        }
    }

    totals[Color::Purple.index()] - totals[Color::Red.index()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
