//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_SHORT: u8 = 1 << 0;
const CASTLE_WHITE_LONG: u8 = 1 << 1;
const CASTLE_BLACK_SHORT: u8 = 1 << 2;
const CASTLE_BLACK_LONG: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_SHORT | CASTLE_WHITE_LONG | CASTLE_BLACK_SHORT | CASTLE_BLACK_LONG;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    /// King to the g-file, rook h -> f
    Short,
    /// King to the c-file, rook a -> d
    Long,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Short, CastlingSide::Long];

    /// Home square of the rook for this side
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastlingSide::Short => Square::at(8, color.home_rank()),
            CastlingSide::Long => Square::at(1, color.home_rank()),
        }
    }

    /// Where the rook lands
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        match self {
            CastlingSide::Short => Square::at(6, color.home_rank()),
            CastlingSide::Long => Square::at(4, color.home_rank()),
        }
    }

    /// Where the king lands
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastlingSide::Short => Square::at(7, color.home_rank()),
            CastlingSide::Long => Square::at(3, color.home_rank()),
        }
    }

    /// The square the king passes over
    #[must_use]
    pub const fn king_transit(self, color: Color) -> Square {
        self.rook_target(color)
    }

    /// Files that must be empty between king and rook
    #[must_use]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastlingSide::Short => &[6, 7],
            CastlingSide::Long => &[2, 3, 4],
        }
    }
}

/// Home square of a king
#[must_use]
pub const fn king_home(color: Color) -> Square {
    Square::at(5, color.home_rank())
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastlingSide::Short);
        self.remove(color, CastlingSide::Long);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every right that is held, as (color, side) pairs
    pub fn iter(self) -> impl Iterator<Item = (Color, CastlingSide)> {
        Color::BOTH
            .into_iter()
            .flat_map(|color| CastlingSide::BOTH.into_iter().map(move |side| (color, side)))
            .filter(move |&(color, side)| self.has(color, side))
    }

    /// FEN letter for a right: K, Q, k, q
    #[must_use]
    pub const fn fen_char(color: Color, side: CastlingSide) -> char {
        match (color, side) {
            (Color::White, CastlingSide::Short) => 'K',
            (Color::White, CastlingSide::Long) => 'Q',
            (Color::Black, CastlingSide::Short) => 'k',
            (Color::Black, CastlingSide::Long) => 'q',
        }
    }

    /// Inverse of [`CastlingRights::fen_char`]
    #[must_use]
    pub const fn from_fen_char(c: char) -> Option<(Color, CastlingSide)> {
        match c {
            'K' => Some((Color::White, CastlingSide::Short)),
            'Q' => Some((Color::White, CastlingSide::Long)),
            'k' => Some((Color::Black, CastlingSide::Short)),
            'q' => Some((Color::Black, CastlingSide::Long)),
            _ => None,
        }
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Short) => CASTLE_WHITE_SHORT,
            (Color::White, CastlingSide::Long) => CASTLE_WHITE_LONG,
            (Color::Black, CastlingSide::Short) => CASTLE_BLACK_SHORT,
            (Color::Black, CastlingSide::Long) => CASTLE_BLACK_LONG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut rights = CastlingRights::none();
        assert!(rights.is_empty());
        rights.set(Color::Black, CastlingSide::Long);
        assert!(rights.has(Color::Black, CastlingSide::Long));
        assert!(!rights.has(Color::Black, CastlingSide::Short));
        assert!(!rights.has(Color::White, CastlingSide::Long));
        rights.remove(Color::Black, CastlingSide::Long);
        assert!(rights.is_empty());
    }

    #[test]
    fn test_remove_color_keeps_other_side() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert_eq!(
            rights.iter().collect::<Vec<_>>(),
            vec![
                (Color::Black, CastlingSide::Short),
                (Color::Black, CastlingSide::Long)
            ]
        );
    }

    #[test]
    fn test_geometry() {
        assert_eq!(CastlingSide::Short.rook_home(Color::White).to_string(), "h1");
        assert_eq!(CastlingSide::Long.rook_target(Color::Black).to_string(), "d8");
        assert_eq!(CastlingSide::Long.king_target(Color::White).to_string(), "c1");
        assert_eq!(CastlingSide::Short.king_transit(Color::Black).to_string(), "f8");
        assert_eq!(king_home(Color::Black).to_string(), "e8");
    }

    #[test]
    fn test_fen_chars() {
        for (color, side) in CastlingRights::all().iter() {
            let c = CastlingRights::fen_char(color, side);
            assert_eq!(CastlingRights::from_fen_char(c), Some((color, side)));
        }
        assert_eq!(CastlingRights::from_fen_char('-'), None);
    }
}
