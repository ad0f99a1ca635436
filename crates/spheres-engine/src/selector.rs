//! Top-level move selection for the AI side.
//!
//! Every candidate is scored by a fixed-depth search of the position after
//! it. The search itself ignores check; legality is enforced afterwards by
//! trial and reject: a chosen move that leaves the mover in check is added
//! to the [`InvalidMoves`] list and selection starts over.

use tracing::{debug, trace};

use spheres_core::{Move, Position};

use crate::config::{Algorithm, SideAssignment};
use crate::eval::score::Score;
use crate::search::Searcher;

/// Moves already rejected during one selection because they leave the mover
/// in check. Matching uses [`Move`] equality (coordinates only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidMoves(Vec<Move>);

impl InvalidMoves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.0.contains(mv)
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejected moves in the order they were rejected.
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }
}

impl From<Vec<Move>> for InvalidMoves {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

/// Picks one move per call for the AI side.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    searcher: Searcher,
}

impl MoveSelector {
    pub fn new(searcher: Searcher) -> Self {
        Self { searcher }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Choose a move for the side given by `side`, or `None` when no
    /// candidate survives (checkmate or stalemate for the AI).
    ///
    /// Candidates in `invalid` are skipped. Each remaining candidate is scored
    /// with `algorithm` at the configured depth, Purple replying first, and the
    /// **lowest** score wins; ties keep the earlier candidate. A winner that
    /// leaves the AI in check is appended to `invalid` and the whole
    /// enumeration restarts.
    pub fn get_ai_move<P: Position>(
        &mut self,
        board: &P,
        invalid: &mut InvalidMoves,
        algorithm: Algorithm,
        side: SideAssignment,
    ) -> Option<Move> {
        let us = side.color();
        let depth = self.searcher.config().depth;
        self.searcher.reset_nodes();

        loop {
            let mut best: Option<(Move, Score)> = None;

            for mv in board.possible_moves(us) {
                if invalid.contains(&mv) {
                    continue;
                }

                let child = board.with_move(mv);
                let score = self.searcher.search(algorithm, &child, depth, true);
                trace!(%mv, score, "scored candidate");

                if best.is_none_or(|(_, best_score)| score < best_score) {
                    best = Some((mv, score));
                }
            }

            let Some((best_move, best_score)) = best else {
                debug!(color = %us, rejected = invalid.len(), "no move available");
                return None;
            };

            if board.with_move(best_move).is_in_check(us) {
                debug!(%best_move, "best move leaves mover in check; retrying");
                invalid.push(best_move);
                continue;
            }

            debug!(
                %best_move,
                score = best_score,
                %algorithm,
                nodes = self.searcher.nodes(),
                "selected move"
            );
            return Some(best_move);
        }
    }
}

/// Select a move with the default evaluator and search limits.
pub fn get_ai_move<P: Position>(
    board: &P,
    invalid: &mut InvalidMoves,
    algorithm: Algorithm,
    side: SideAssignment,
) -> Option<Move> {
    MoveSelector::default().get_ai_move(board, invalid, algorithm, side)
}
