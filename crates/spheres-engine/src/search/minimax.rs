//! Plain fixed-depth minimax.

use spheres_core::{Color, Position};

use crate::eval::score::{INFINITY, Score};
use crate::search::SearchContext;

/// Minimax value of `board` searched `depth` plies deep.
///
/// Purple maximizes and Red minimizes. Every child is explored on its own
/// clone of `board`. A side with no moves at a non-leaf node leaves the
/// initial bound (`-INFINITY` for Purple, `+INFINITY` for Red) as the value.
pub(super) fn minimax<P: Position>(
    board: &P,
    depth: u8,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> Score {
    ctx.nodes += 1;

    if depth == 0 {
        return ctx.heuristics.evaluate(board);
    }

    if maximizing {
        let mut best_score = -INFINITY;
        for mv in board.possible_moves(Color::Purple) {
            let child = board.with_move(mv);
            best_score = best_score.max(minimax(&child, depth - 1, false, ctx));
        }
        best_score
    } else {
        let mut best_score = INFINITY;
        for mv in board.possible_moves(Color::Red) {
            let child = board.with_move(mv);
            best_score = best_score.min(minimax(&child, depth - 1, true, ctx));
        }
        best_score
    }
}
