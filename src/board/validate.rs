//! Static position legality checks.

use std::fmt;

use super::{king_home, Board, CastlingSide, Color, Legality, Piece, Square};

/// Most pieces one side can have on the board
const MAX_PIECES_PER_COLOR: usize = 16;

/// The first rule a position breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A side has no king or more than one
    KingCount { color: Color, count: usize },
    /// More pieces of one kind than promotion allows
    TooManyOfKind {
        color: Color,
        piece: Piece,
        count: usize,
    },
    /// More than sixteen pieces for one side
    TooManyPieces { color: Color, count: usize },
    /// A decoy is standing on the board
    DecoyOnBoard { square: Square },
    /// A castling right is held but king or rook are not at home
    CastlingWithoutPieces { color: Color, side: CastlingSide },
    /// The en passant target is not on rank 3 or 6
    EnPassantRank { square: Square },
    /// No pawn stands in front of the en passant target
    EnPassantWithoutPawn { square: Square },
    /// The kings touch
    AdjacentKings,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::KingCount { color, count } => {
                write!(f, "{color} has {count} kings")
            }
            Violation::TooManyOfKind {
                color,
                piece,
                count,
            } => write!(f, "{color} has {count} pieces of kind {piece}"),
            Violation::TooManyPieces { color, count } => {
                write!(f, "{color} has {count} pieces")
            }
            Violation::DecoyOnBoard { square } => write!(f, "decoy on {square}"),
            Violation::CastlingWithoutPieces { color, side } => {
                write!(f, "{color} holds {side:?} castling right without king and rook at home")
            }
            Violation::EnPassantRank { square } => {
                write!(f, "en passant target {square} is not on rank 3 or 6")
            }
            Violation::EnPassantWithoutPawn { square } => {
                write!(f, "no pawn in front of en passant target {square}")
            }
            Violation::AdjacentKings => write!(f, "kings are adjacent"),
        }
    }
}

impl Board {
    /// Legality of the position, computed once and cached until the next mutation.
    pub fn validate(&mut self) -> Legality {
        if self.legality == Legality::Undetermined {
            self.legality = self.compute_legality();
        }
        self.legality
    }

    /// Legality of the position, ignoring and not touching the cache.
    #[must_use]
    pub fn compute_legality(&self) -> Legality {
        match self.violation() {
            Some(violation) => {
                rules_debug!("illegal position: {violation}");
                Legality::Illegal
            }
            None => Legality::Legal,
        }
    }

    /// The first rule this position breaks, if any.
    #[must_use]
    pub fn violation(&self) -> Option<Violation> {
        if let Some((square, _, _)) = self.occupied().find(|&(_, _, p)| p == Piece::Decoy) {
            return Some(Violation::DecoyOnBoard { square });
        }

        for color in Color::BOTH {
            if let Some(violation) = self.count_violation(color) {
                return Some(violation);
            }
        }

        for (color, side) in self.castling_rights().iter() {
            let home = self.piece_at(king_home(color)) == Some((color, Piece::King))
                && self.piece_at(side.rook_home(color)) == Some((color, Piece::Rook));
            if !home {
                return Some(Violation::CastlingWithoutPieces { color, side });
            }
        }

        if let Some(target) = self.en_passant_target() {
            if let Some(violation) = self.en_passant_violation(target) {
                return Some(violation);
            }
        }

        match (self.find_king(Color::White), self.find_king(Color::Black)) {
            (Some(white), Some(black))
                if white.file_distance(black) <= 1 && white.rank_distance(black) <= 1 =>
            {
                Some(Violation::AdjacentKings)
            }
            _ => None,
        }
    }

    fn count_violation(&self, color: Color) -> Option<Violation> {
        let mut counts = [0usize; 6];
        for (piece, _) in self.pieces(color) {
            if let Some(slot) = Piece::REAL.iter().position(|&p| p == piece) {
                counts[slot] += 1;
            }
        }

        let kings = counts[5];
        if kings != 1 {
            return Some(Violation::KingCount {
                color,
                count: kings,
            });
        }
        for (piece, count) in Piece::REAL.into_iter().zip(counts) {
            if count > piece.max_count() {
                return Some(Violation::TooManyOfKind {
                    color,
                    piece,
                    count,
                });
            }
        }
        let total: usize = counts.iter().sum();
        if total > MAX_PIECES_PER_COLOR {
            return Some(Violation::TooManyPieces {
                color,
                count: total,
            });
        }
        None
    }

    /// A rank 3 target needs a white pawn on rank 4, a rank 6 target a black pawn on rank 5.
    fn en_passant_violation(&self, target: Square) -> Option<Violation> {
        let (pawn_color, pawn_rank) = match target.rank() {
            3 => (Color::White, 4),
            6 => (Color::Black, 5),
            _ => return Some(Violation::EnPassantRank { square: target }),
        };
        let pawn_square = Square::at(target.file(), pawn_rank);
        if self.piece_at(pawn_square) == Some((pawn_color, Piece::Pawn)) {
            None
        } else {
            Some(Violation::EnPassantWithoutPawn { square: target })
        }
    }
}
