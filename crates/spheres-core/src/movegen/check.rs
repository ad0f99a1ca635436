//! Check detection.

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::piece_kind::PieceKind;

use super::keeper::keeper_attacks;
use super::spheres::sphere_attacks;

/// Return `true` if any piece of `by_color` threatens `target`.
pub(super) fn is_attacked(board: &Board, target: Cell, by_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == by_color)
        .any(|(from, piece)| match piece.kind() {
            PieceKind::Sphere => sphere_attacks(from, by_color).any(|c| c == target),
            PieceKind::Keeper => keeper_attacks(from).any(|c| c == target),
        })
}

/// Return `true` if `color`'s keeper is threatened. A side without a keeper
/// is never in check.
pub(super) fn in_check(board: &Board, color: Color) -> bool {
    board
        .keeper_cell(color)
        .is_some_and(|keeper| is_attacked(board, keeper, color.flip()))
}
