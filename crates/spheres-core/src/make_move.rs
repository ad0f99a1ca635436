//! Move execution.

use tracing::warn;

use crate::board::Board;
use crate::game_move::Move;

impl Board {
    /// Play `mv` in place: the moving piece replaces whatever stood on the
    /// destination, and the side to move flips.
    ///
    /// Moving from an empty cell leaves the board untouched.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(piece) = self.remove(mv.from()) else {
            warn!(%mv, "apply_move from an empty cell ignored");
            return;
        };
        self.put(mv.to(), piece);
        self.set_side_to_move(self.side_to_move().flip());
    }

    /// Copy-make: return a new board with `mv` applied, leaving `self` intact.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut child = *self;
        child.apply_move(mv);
        child
    }
}
