//! Fixed-depth game-tree search.

pub mod alphabeta;
pub mod minimax;

use spheres_core::Position;

use crate::config::{Algorithm, SearchConfig};
use crate::eval::Heuristics;
use crate::eval::score::{INFINITY, Score};

/// Search state threaded through the recursive calls.
pub(super) struct SearchContext<'a> {
    /// Leaf evaluator.
    pub heuristics: &'a Heuristics,
    /// Nodes visited by this call.
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    fn new(heuristics: &'a Heuristics) -> Self {
        Self {
            heuristics,
            nodes: 0,
        }
    }
}

/// Fixed-depth searcher: owns the evaluator and the search configuration
/// and counts visited nodes across calls.
#[derive(Debug, Clone)]
pub struct Searcher {
    heuristics: Heuristics,
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    pub fn new(heuristics: Heuristics, config: SearchConfig) -> Self {
        Self {
            heuristics,
            config,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited since construction or the last [`reset_nodes`](Self::reset_nodes).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Minimax value of `board` at `depth` plies.
    pub fn minimax<P: Position>(&mut self, board: &P, depth: u8, maximizing: bool) -> Score {
        let mut ctx = SearchContext::new(&self.heuristics);
        let score = minimax::minimax(board, depth, maximizing, &mut ctx);
        self.nodes += ctx.nodes;
        score
    }

    /// Alpha-beta value of `board` at `depth` plies within `(alpha, beta)`.
    pub fn alphabeta<P: Position>(
        &mut self,
        board: &P,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        let mut ctx = SearchContext::new(&self.heuristics);
        let score = alphabeta::alphabeta(board, depth, alpha, beta, maximizing, &mut ctx);
        self.nodes += ctx.nodes;
        score
    }

    /// Run `algorithm` on `board`; alpha-beta gets the full window.
    pub fn search<P: Position>(
        &mut self,
        algorithm: Algorithm,
        board: &P,
        depth: u8,
        maximizing: bool,
    ) -> Score {
        match algorithm {
            Algorithm::Minimax => self.minimax(board, depth, maximizing),
            Algorithm::AlphaBeta => self.alphabeta(board, depth, -INFINITY, INFINITY, maximizing),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Heuristics::default(), SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use spheres_core::{Board, Cell, Move};

    use super::Searcher;
    use crate::config::{Algorithm, SearchConfig};
    use crate::eval::Heuristics;
    use crate::eval::score::INFINITY;

    #[test]
    fn search_dispatches_to_both_algorithms() {
        let board = Board::starting_position();
        let mut searcher = Searcher::default();
        let minimax = searcher.search(Algorithm::Minimax, &board, 2, true);
        let alphabeta = searcher.search(Algorithm::AlphaBeta, &board, 2, true);
        assert_eq!(minimax, alphabeta);
    }

    #[test]
    fn keeper_material_stays_inside_bound() {
        // One Purple push, then Red's lone keeper answers: every leaf is real.
        let board: Board = "8/8/8/3S4/8/8/8/4k3".parse().unwrap();
        let heuristics = Heuristics::default();
        let after_push = board.make_move(Move::new(
            Cell::new(3, 3).unwrap(),
            Cell::new(4, 3).unwrap(),
        ));
        assert_eq!(heuristics.evaluate(&after_push), -19_875);

        let mut searcher = Searcher::default();
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            assert_eq!(searcher.search(algorithm, &board, 1, true), -19_875);
        }
    }

    #[test]
    fn empty_side_returns_infinity() {
        let mut searcher = Searcher::new(Heuristics::default(), SearchConfig::new(1));
        let board = Board::empty();
        assert_eq!(searcher.search(Algorithm::Minimax, &board, 1, true), -INFINITY);
        assert_eq!(searcher.search(Algorithm::AlphaBeta, &board, 1, false), INFINITY);
    }

    #[test]
    fn nodes_accumulate_until_reset() {
        let board = Board::starting_position();
        let mut searcher = Searcher::default();
        searcher.minimax(&board, 1, true);
        let once = searcher.nodes();
        assert_eq!(once, 19);
        searcher.minimax(&board, 1, true);
        assert_eq!(searcher.nodes(), 2 * once);
        searcher.reset_nodes();
        assert_eq!(searcher.nodes(), 0);
    }
}
