//! Check detection and the legal-move filter.
//!
//! Attack detection reuses move generation: a square is covered by a color
//! when one of that color's pseudo-legal moves would capture something placed
//! there. Everything here works on copies and never touches `self`.

use super::{Board, Color, Modifier, Move, Piece, Square};

impl Board {
    /// Whether `color` could capture on `square`.
    ///
    /// A decoy of the other color is put on the square of a scratch copy, so
    /// pawns see a diagonal target and the occupant (a king, say) cannot
    /// block its own square.
    #[must_use]
    pub fn is_square_covered_by(&self, square: Square, color: Color) -> bool {
        let mut scratch = *self;
        scratch.set_piece(square, color.opponent(), Piece::Decoy);
        scratch.set_side_to_move(color);
        scratch
            .potential_moves()
            .iter()
            .any(|mv| mv.to() == square && mv.is_capture())
    }

    /// Whether the side to move is in check. A side without a king is never in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        let color = self.side_to_move();
        match self.find_king(color) {
            Some(king) => self.is_square_covered_by(king, color.opponent()),
            None => false,
        }
    }

    /// Whether playing `mv` leaves the mover's king attacked.
    ///
    /// Moves that cannot be applied at all count as self-check.
    #[must_use]
    pub fn would_move_self_into_check(&self, mv: &Move) -> bool {
        let mut scratch = *self;
        if scratch.apply_unvalidated(mv).is_err() {
            return true;
        }
        match scratch.find_king(mv.color()) {
            Some(king) => scratch.is_square_covered_by(king, mv.color().opponent()),
            None => false,
        }
    }

    /// Castling may not start in check or pass over an attacked square.
    ///
    /// The landing square is left to [`Board::would_move_self_into_check`].
    /// Non-castling moves are always accepted here.
    #[must_use]
    pub fn is_castling_legal(&self, mv: &Move) -> bool {
        let Some(side) = mv.castling_side() else {
            return true;
        };
        let enemy = mv.color().opponent();
        !self.is_square_covered_by(mv.from(), enemy)
            && !self.is_square_covered_by(side.king_transit(mv.color()), enemy)
    }

    /// Legal moves of the side to move, in board scan order.
    ///
    /// With `annotate`, each move is tagged with exactly one of `Check`,
    /// `Checkmate` or `Stalemate` when the resulting position is one.
    #[must_use]
    pub fn valid_moves(&self, annotate: bool) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .potential_moves()
            .into_iter()
            .filter(|mv| self.is_castling_legal(mv) && !self.would_move_self_into_check(mv))
            .collect();

        if annotate {
            for mv in &mut moves {
                let mut scratch = *self;
                if scratch.apply_unvalidated(mv).is_err() {
                    continue;
                }
                if let Some(annotation) = scratch.outcome_annotation() {
                    mv.add_modifier(annotation);
                }
            }
        }
        moves
    }

    /// Check, checkmate or stalemate flag describing this position, if any.
    fn outcome_annotation(&self) -> Option<Modifier> {
        let in_check = self.is_check();
        let no_replies = self.valid_moves(false).is_empty();
        match (in_check, no_replies) {
            (true, true) => Some(Modifier::Checkmate),
            (true, false) => Some(Modifier::Check),
            (false, true) => Some(Modifier::Stalemate),
            (false, false) => None,
        }
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate_with_hint(false)
    }

    /// [`Board::is_checkmate`] for callers that already know the side is in
    /// check: `check_hint = true` skips the check test.
    #[must_use]
    pub fn is_checkmate_with_hint(&self, check_hint: bool) -> bool {
        (check_hint || self.is_check()) && self.valid_moves(false).is_empty()
    }

    /// Not in check and no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate_with_hint(true)
    }

    /// [`Board::is_stalemate`] with the check test made optional:
    /// `check_hint = false` skips it.
    #[must_use]
    pub fn is_stalemate_with_hint(&self, check_hint: bool) -> bool {
        !(check_hint && self.is_check()) && self.valid_moves(false).is_empty()
    }
}
