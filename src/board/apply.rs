//! Move application.
//!
//! [`Board::apply_move`] is the checked entry point: the position must be
//! legal before and after, and nothing changes on failure. Simulation paths
//! in `rules.rs` use [`Board::apply_unvalidated`], which keeps the move-shape
//! checks but skips the position validator.

use super::error::MoveError;
use super::{king_home, Board, CastlingSide, Color, Legality, Modifier, Move, Piece, Square};

/// Everything `apply_unvalidated` needs to mutate, computed up front.
struct Plan {
    placed: Piece,
    en_passant_victim: Option<Square>,
    rook_hop: Option<(Square, Square)>,
}

impl Board {
    /// Apply a move to this board.
    ///
    /// The board must validate as [`Legality::Legal`] before the move and the
    /// resulting position must too. On `Err` the board is unchanged.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let legality = self.validate();
        if legality != Legality::Legal {
            let err = MoveError::IllegalPosition { legality };
            rules_warn!("rejected {mv}: {err}");
            return Err(err);
        }

        let mut next = *self;
        if let Err(err) = next.apply_unvalidated(mv) {
            rules_warn!("rejected {mv}: {err}");
            return Err(err);
        }
        if next.validate() != Legality::Legal {
            let err = MoveError::IllegalResult { mv: *mv };
            rules_warn!("rejected {mv}: {err}");
            return Err(err);
        }

        *self = next;
        Ok(())
    }

    /// Apply a move without consulting the position validator.
    ///
    /// Structural checks still run first and leave the board untouched on
    /// `Err`: the declared piece must stand on the start square, captures
    /// must be flagged and hit the other color, and en passant, castling and
    /// promotion flags must match the board.
    pub(crate) fn apply_unvalidated(&mut self, mv: &Move) -> Result<(), MoveError> {
        let plan = self.plan(mv)?;
        let color = mv.color();

        if let Some(victim) = plan.en_passant_victim {
            self.clear_square(victim);
        }
        if let Some((rook_from, rook_to)) = plan.rook_hop {
            self.clear_square(rook_from);
            self.set_piece(rook_to, color, Piece::Rook);
        }

        self.revoke_castling_rights(mv);

        match mv.piece() {
            Piece::Pawn if mv.from().rank_distance(mv.to()) == 2 => {
                let skipped = Square::at(mv.from().file(), (mv.from().rank() + mv.to().rank()) / 2);
                self.set_en_passant_target(skipped);
            }
            _ => self.clear_en_passant_target(),
        }

        self.clear_square(mv.from());
        self.set_piece(mv.to(), color, plan.placed);
        self.set_side_to_move(self.side_to_move().opponent());

        if color == Color::Black {
            self.increment_fullmove_number();
        }
        if mv.piece() == Piece::Pawn || mv.is_capture() {
            self.reset_halfmove_clock();
        } else {
            self.increment_halfmove_clock();
        }
        Ok(())
    }

    fn plan(&self, mv: &Move) -> Result<Plan, MoveError> {
        let color = mv.color();
        let (from, to) = (mv.from(), mv.to());

        match self.piece_at(from) {
            None => return Err(MoveError::NoPieceAtStart { square: from }),
            Some(found) if found != (color, mv.piece()) => {
                return Err(MoveError::WrongPiece {
                    square: from,
                    expected: (color, mv.piece()),
                    found,
                })
            }
            Some(_) => {}
        }

        match self.piece_at(to) {
            Some(_) if !mv.is_capture() => {
                return Err(MoveError::CaptureFlagMissing { square: to })
            }
            Some((occupant, _)) if occupant == color => {
                return Err(MoveError::CaptureOwnPiece { square: to })
            }
            None if mv.is_capture() && !mv.is_en_passant() => {
                return Err(MoveError::NothingToCapture { square: to })
            }
            _ => {}
        }

        let en_passant_victim = if mv.is_en_passant() {
            Some(self.en_passant_victim(mv)?)
        } else {
            None
        };

        let rook_hop = match mv.castling_side() {
            Some(side) => Some(self.castling_rook_hop(mv, side)?),
            None => None,
        };

        let reaches_last_rank = mv.piece() == Piece::Pawn && to.rank() == color.promotion_rank();
        let placed = match (mv.promotion(), reaches_last_rank) {
            (Some(promoted), true) if mv.promotion_flag_count() == 1 => promoted,
            (None, true) => return Err(MoveError::MissingPromotion { mv: *mv }),
            (Some(_), _) => return Err(MoveError::InvalidPromotion { mv: *mv }),
            (None, false) => mv.piece(),
        };

        Ok(Plan {
            placed,
            en_passant_victim,
            rook_hop,
        })
    }

    /// Square of the pawn taken en passant.
    ///
    /// The capturing pawn must step one file sideways and one rank forward
    /// onto the board's en passant target; the victim shares the target's
    /// file and the start square's rank.
    fn en_passant_victim(&self, mv: &Move) -> Result<Square, MoveError> {
        let invalid = || MoveError::InvalidEnPassant { mv: *mv };
        let (from, to) = (mv.from(), mv.to());

        if mv.piece() != Piece::Pawn || !mv.is_capture() {
            return Err(invalid());
        }
        if self.en_passant_target() != Some(to) || !self.is_empty(to) {
            return Err(invalid());
        }
        let rank_step = to.rank() as i8 - from.rank() as i8;
        if from.file_distance(to) != 1 || rank_step != mv.color().pawn_direction() {
            return Err(invalid());
        }

        let victim = Square::at(to.file(), from.rank());
        if self.piece_at(victim) != Some((mv.color().opponent(), Piece::Pawn)) {
            return Err(invalid());
        }
        Ok(victim)
    }

    /// Rook start and landing squares for a castling move, after re-checking
    /// the right, the king and rook placement, and the empty path.
    fn castling_rook_hop(
        &self,
        mv: &Move,
        side: CastlingSide,
    ) -> Result<(Square, Square), MoveError> {
        let color = mv.color();
        let rook_from = side.rook_home(color);
        let valid = mv.piece() == Piece::King
            && self.can_castle(color, side)
            && mv.from() == king_home(color)
            && mv.to() == side.king_target(color)
            && self.piece_at(rook_from) == Some((color, Piece::Rook))
            && self.castling_path_clear(color, side);
        if valid {
            Ok((rook_from, side.rook_target(color)))
        } else {
            Err(MoveError::InvalidCastling { mv: *mv })
        }
    }

    /// King moves drop both rights, a rook leaving its corner drops that
    /// side, and a capture on an enemy rook corner drops the enemy's side.
    fn revoke_castling_rights(&mut self, mv: &Move) {
        let color = mv.color();
        let mut rights = self.castling_rights();

        match mv.piece() {
            Piece::King => rights.remove_color(color),
            Piece::Rook => {
                for side in CastlingSide::BOTH {
                    if mv.from() == side.rook_home(color) {
                        rights.remove(color, side);
                    }
                }
            }
            _ => {}
        }

        if mv.has_modifier(Modifier::Capture) {
            let enemy = color.opponent();
            for side in CastlingSide::BOTH {
                if mv.to() == side.rook_home(enemy) {
                    rights.remove(enemy, side);
                }
            }
        }

        if rights != self.castling_rights() {
            self.set_castling_rights(rights);
        }
    }
}
