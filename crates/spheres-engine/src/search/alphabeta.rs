//! Minimax with alpha-beta pruning.

use spheres_core::{Color, Position};

use crate::eval::score::{INFINITY, Score};
use crate::search::SearchContext;

/// Alpha-beta search.
///
/// `alpha` is the score Purple can already guarantee, `beta` the score Red
/// can already guarantee. Siblings stop being explored once `beta <= alpha`.
/// Called with the full window `(-INFINITY, INFINITY)` it returns exactly
/// the [`minimax`](super::minimax::minimax) value.
pub(super) fn alphabeta<P: Position>(
    board: &P,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
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
            best_score = best_score.max(alphabeta(&child, depth - 1, alpha, beta, false, ctx));
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = INFINITY;
        for mv in board.possible_moves(Color::Red) {
            let child = board.with_move(mv);
            best_score = best_score.min(alphabeta(&child, depth - 1, alpha, beta, true, ctx));
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}
