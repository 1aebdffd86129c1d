//! Text rendering of moves and boards.
//!
//! Moves use long algebraic form: piece letter (none for pawns), start
//! square, `x` for captures, end square, then `=Q` style promotion and
//! `+`/`#` for check and mate. Castling prints as `0-0`/`0-0-0`, or as
//! `O-O`/`O-O-O` with the alternate flag (`{:#}`).

use std::fmt;

use super::{Board, CastlingSide, Modifier, Move, Piece, Square};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castling_side() {
            let text = match (side, f.alternate()) {
                (CastlingSide::Short, false) => "0-0",
                (CastlingSide::Long, false) => "0-0-0",
                (CastlingSide::Short, true) => "O-O",
                (CastlingSide::Long, true) => "O-O-O",
            };
            return f.write_str(text);
        }

        if self.piece() != Piece::Pawn {
            write!(f, "{}", self.piece().to_char())?;
        }
        write!(f, "{}", self.from())?;
        if self.is_capture() {
            f.write_str("x")?;
        }
        write!(f, "{}", self.to())?;
        if let Some(promoted) = self.promotion() {
            write!(f, "={}", promoted.to_char())?;
        }
        if self.has_modifier(Modifier::Checkmate) {
            f.write_str("#")?;
        } else if self.has_modifier(Modifier::Check) {
            f.write_str("+")?;
        }
        if self.is_en_passant() {
            f.write_str(" e.p.")?;
        }
        Ok(())
    }
}

/// Rank 8 at the top, `.` for empty squares, then the side to move.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8).rev() {
            write!(f, "{rank} ")?;
            for file in 1..=8 {
                let c = match self.piece_at(Square::at(file, rank)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")?;
        write!(f, "{} to move", self.side_to_move().name())
    }
}
