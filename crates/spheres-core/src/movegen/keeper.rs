//! Keeper move generation.

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::game_move::Move;

/// The eight neighbour offsets.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate keeper moves: one step in any direction onto an empty or enemy cell.
///
/// Moves into attacked cells are included; the caller filters self-check.
pub(super) fn gen_keeper(board: &Board, from: Cell, us: Color, list: &mut Vec<Move>) {
    for target in keeper_attacks(from) {
        if board.piece_at(target).is_none_or(|p| p.color() != us) {
            list.push(Move::new(from, target));
        }
    }
}

/// Cells a keeper on `from` threatens.
pub(super) fn keeper_attacks(from: Cell) -> impl Iterator<Item = Cell> {
    DIRECTIONS
        .into_iter()
        .filter_map(move |(df, dr)| from.offset(df, dr))
}
