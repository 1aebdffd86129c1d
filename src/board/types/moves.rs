//! Move and modifier types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// A single flag attached to a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    Capture,
    EnPassant,
    CastlingShort,
    CastlingLong,
    PromoteQueen,
    PromoteRook,
    PromoteBishop,
    PromoteKnight,
    Check,
    Checkmate,
    Stalemate,
}

impl Modifier {
    pub const ALL: [Modifier; 11] = [
        Modifier::Capture,
        Modifier::EnPassant,
        Modifier::CastlingShort,
        Modifier::CastlingLong,
        Modifier::PromoteQueen,
        Modifier::PromoteRook,
        Modifier::PromoteBishop,
        Modifier::PromoteKnight,
        Modifier::Check,
        Modifier::Checkmate,
        Modifier::Stalemate,
    ];

    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// The promotion modifier for a piece kind
    #[must_use]
    pub const fn promotion_to(piece: Piece) -> Option<Modifier> {
        match piece {
            Piece::Queen => Some(Modifier::PromoteQueen),
            Piece::Rook => Some(Modifier::PromoteRook),
            Piece::Bishop => Some(Modifier::PromoteBishop),
            Piece::Knight => Some(Modifier::PromoteKnight),
            _ => None,
        }
    }

    /// The castling modifier for a side
    #[must_use]
    pub const fn castling(side: CastlingSide) -> Modifier {
        match side {
            CastlingSide::Short => Modifier::CastlingShort,
            CastlingSide::Long => Modifier::CastlingLong,
        }
    }
}

const CASTLING_BITS: u16 = Modifier::CastlingShort.bit() | Modifier::CastlingLong.bit();
const PROMOTION_BITS: u16 = Modifier::PromoteQueen.bit()
    | Modifier::PromoteRook.bit()
    | Modifier::PromoteBishop.bit()
    | Modifier::PromoteKnight.bit();
const ANNOTATION_BITS: u16 =
    Modifier::Check.bit() | Modifier::Checkmate.bit() | Modifier::Stalemate.bit();
const CASTLING_EXCLUDES: u16 =
    Modifier::Capture.bit() | Modifier::EnPassant.bit() | PROMOTION_BITS;

/// Set of [`Modifier`] flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modifiers(u16);

impl Modifiers {
    #[must_use]
    pub const fn empty() -> Self {
        Modifiers(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Flags in declaration order
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = Modifiers::empty();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

/// A move: the moving piece, its start and end squares, and modifier flags.
///
/// Equality is structural, modifiers included. A move produced by
/// [`Board::valid_moves`](crate::board::Board::valid_moves) with annotation
/// carries one of `Check`, `Checkmate` or `Stalemate` when it leads there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    color: Color,
    piece: Piece,
    from: Square,
    to: Square,
    modifiers: Modifiers,
}

impl Move {
    /// Create a move without modifiers
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        Move {
            color,
            piece,
            from,
            to,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a move with an initial set of modifiers.
    ///
    /// # Panics
    /// Panics if a castling flag is combined with a capture, en passant or
    /// promotion flag.
    #[must_use]
    pub fn with_modifiers(
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        modifiers: &[Modifier],
    ) -> Self {
        let mut mv = Move::new(color, piece, from, to);
        for &modifier in modifiers {
            mv.add_modifier(modifier);
        }
        mv
    }

    /// Builder-style [`Move::add_modifier`]
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.add_modifier(modifier);
        self
    }

    /// Add a modifier flag.
    ///
    /// # Panics
    /// Panics if the result would mix castling with capture, en passant or promotion.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.insert(modifier);
        let bits = self.modifiers.0;
        assert!(
            bits & CASTLING_BITS == 0 || bits & CASTLING_EXCLUDES == 0,
            "castling move cannot carry capture, en passant or promotion flags"
        );
        assert!(
            bits & CASTLING_BITS != CASTLING_BITS,
            "castling move cannot be both short and long"
        );
    }

    /// Remove every modifier flag
    pub fn clear_modifiers(&mut self) {
        self.modifiers = Modifiers::empty();
    }

    #[inline]
    #[must_use]
    pub const fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    #[inline]
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Copy of this move with check, checkmate and stalemate flags dropped
    #[must_use]
    pub const fn without_annotations(self) -> Self {
        Move {
            modifiers: Modifiers(self.modifiers.0 & !ANNOTATION_BITS),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.has_modifier(Modifier::Capture)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.has_modifier(Modifier::EnPassant)
    }

    /// Castling side, if this is a castling move
    #[inline]
    #[must_use]
    pub const fn castling_side(&self) -> Option<CastlingSide> {
        if self.has_modifier(Modifier::CastlingShort) {
            Some(CastlingSide::Short)
        } else if self.has_modifier(Modifier::CastlingLong) {
            Some(CastlingSide::Long)
        } else {
            None
        }
    }

    /// Promotion piece, if any (queen checked first)
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        if self.has_modifier(Modifier::PromoteQueen) {
            Some(Piece::Queen)
        } else if self.has_modifier(Modifier::PromoteRook) {
            Some(Piece::Rook)
        } else if self.has_modifier(Modifier::PromoteBishop) {
            Some(Piece::Bishop)
        } else if self.has_modifier(Modifier::PromoteKnight) {
            Some(Piece::Knight)
        } else {
            None
        }
    }

    /// Number of promotion flags set. More than one is a malformed move.
    #[must_use]
    pub(crate) const fn promotion_flag_count(&self) -> u32 {
        (self.modifiers.0 & PROMOTION_BITS).count_ones()
    }
}
