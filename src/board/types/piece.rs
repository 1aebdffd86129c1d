//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece kinds.
///
/// `Decoy` is a placeholder used by attack probing: it sits on a square so
/// that the other side's generators see something to capture, and it never
/// moves itself. It does not belong on a real board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Decoy,
}

impl Piece {
    /// The six real piece kinds
    pub const REAL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from a FEN letter, either case (p, r, n, b, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'r' => Some(Piece::Rook),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Uppercase letter for the piece kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Rook => 'R',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Queen => 'Q',
            Piece::King => 'K',
            Piece::Decoy => 'X',
        }
    }

    /// Letter with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    /// Lowercase English name, e.g. "knight"
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::Rook => "rook",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Queen => "queen",
            Piece::King => "king",
            Piece::Decoy => "decoy",
        }
    }

    /// Material value in pawns: 1, 3, 3, 5, 9. Kings and decoys count 0.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight | Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King | Piece::Decoy => 0,
        }
    }

    /// Most pieces of this kind one side may own in a legal position.
    ///
    /// Promotion can add minor and major pieces, but never beyond what the
    /// eight pawns could turn into.
    #[must_use]
    pub(crate) const fn max_count(self) -> usize {
        match self {
            Piece::Pawn => 8,
            Piece::Rook | Piece::Knight | Piece::Bishop => 10,
            Piece::Queen => 9,
            Piece::King => 1,
            Piece::Decoy => 0,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Promotion choices in generation order
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Bishop, Piece::Knight, Piece::Rook, Piece::Queen];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (1 for White, 8 for Black)
    #[inline]
    #[must_use]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank a pawn promotes on (8 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Lowercase English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
