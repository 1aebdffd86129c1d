//! Material counting and a one-ply greedy move choice.

use super::{Board, Color, Modifier, Move};

impl Board {
    /// Sum of piece values for `color` (pawn 1, minor 3, rook 5, queen 9).
    #[must_use]
    pub fn material(&self, color: Color) -> u32 {
        self.pieces(color).iter().map(|(piece, _)| piece.value()).sum()
    }

    /// Material of `color` minus material of its opponent.
    #[must_use]
    pub fn material_balance(&self, color: Color) -> i32 {
        self.material(color) as i32 - self.material(color.opponent()) as i32
    }

    /// The valid move that leaves the mover with the best material balance.
    ///
    /// A mating move is taken at once. Among equal balances the first move
    /// in generation order wins. Returns `None` when there is no valid move.
    #[must_use]
    pub fn best_move_one_ply(&self) -> Option<Move> {
        let mover = self.side_to_move();
        let mut best: Option<(i32, Move)> = None;

        for mv in self.valid_moves(true) {
            if mv.has_modifier(Modifier::Checkmate) {
                return Some(mv);
            }
            let mut scratch = *self;
            if scratch.apply_unvalidated(&mv).is_err() {
                continue;
            }
            let score = scratch.material_balance(mover);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv)
    }
}
