//! Pseudo-legal move generation.
//!
//! Each piece kind has its own generator. None of them look at whether the
//! mover's king ends up attacked; that filter lives in `rules.rs`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Modifier, Move, Piece, Square};

/// Whether a ray may continue past the square just tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ray {
    Continue,
    Stop,
}

impl Board {
    /// Pseudo-legal moves of whatever piece stands on `from`.
    ///
    /// Empty squares yield no moves.
    #[must_use]
    pub fn generate_piece_moves(&self, from: Square) -> Vec<Move> {
        match self.piece_at(from) {
            Some((color, piece)) => self.generate_moves_for(color, piece, from),
            None => Vec::new(),
        }
    }

    pub(crate) fn generate_moves_for(&self, color: Color, piece: Piece, from: Square) -> Vec<Move> {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(color, from),
            Piece::Knight => self.generate_knight_moves(color, from),
            Piece::Bishop => self.generate_bishop_moves(color, from),
            Piece::Rook => self.generate_rook_moves(color, from),
            Piece::Queen => self.generate_queen_moves(color, from),
            Piece::King => self.generate_king_moves(color, from),
            Piece::Decoy => Vec::new(),
        }
    }

    /// Pseudo-legal moves of every piece of the side to move, in board scan order.
    #[must_use]
    pub fn potential_moves(&self) -> Vec<Move> {
        let color = self.side_to_move();
        let mut moves = Vec::new();
        for (from, c, piece) in self.occupied() {
            if c == color {
                moves.extend(self.generate_moves_for(c, piece, from));
            }
        }
        moves
    }

    /// Record a move of `piece` from `from` to `to` if the target allows it.
    ///
    /// Off the board or onto an own piece: nothing is recorded and the ray
    /// stops. Empty square: quiet move, the ray continues. Enemy piece:
    /// capture, the ray stops.
    pub(crate) fn try_destination(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        to: Option<Square>,
        moves: &mut Vec<Move>,
    ) -> Ray {
        let Some(to) = to else {
            return Ray::Stop;
        };
        match self.piece_at(to) {
            None => {
                moves.push(Move::new(color, piece, from, to));
                Ray::Continue
            }
            Some((occupant, _)) if occupant == color => Ray::Stop,
            Some(_) => {
                moves.push(Move::new(color, piece, from, to).with(Modifier::Capture));
                Ray::Stop
            }
        }
    }

    /// Walk rays in each direction until they stop.
    pub(crate) fn generate_rays(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                if self.try_destination(color, piece, from, Some(next), moves) == Ray::Stop {
                    break;
                }
                current = next;
            }
        }
    }
}
