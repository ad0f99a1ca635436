//! Sphere move generation.

use crate::board::{Board, SPHERE_HOME_FILE};
use crate::cell::Cell;
use crate::color::Color;
use crate::game_move::Move;

/// Generate sphere moves from `from` for `us`.
///
/// Single step forward onto an empty cell, a double step from the home file
/// when both cells are empty, and diagonal-forward captures of enemy pieces.
pub(super) fn gen_sphere(board: &Board, from: Cell, us: Color, list: &mut Vec<Move>) {
    let forward = us.forward();

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0).filter(|&c| board.piece_at(c).is_none()) {
        list.push(Move::new(from, one));

        if from.file() == SPHERE_HOME_FILE[us.index()] {
            if let Some(two) = one.offset(forward, 0).filter(|&c| board.piece_at(c).is_none()) {
                list.push(Move::new(from, two));
            }
        }
    }

    // --- Captures ---
    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if board.piece_at(target).is_some_and(|p| p.color() != us) {
            list.push(Move::new(from, target));
        }
    }
}

/// Cells a sphere of `us` on `from` threatens.
pub(super) fn sphere_attacks(from: Cell, us: Color) -> impl Iterator<Item = Cell> {
    [-1, 1]
        .into_iter()
        .filter_map(move |side| from.offset(us.forward(), side))
}
