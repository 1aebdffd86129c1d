//! Square type and the square/index mapping.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as 1-based (file, rank).
///
/// File 1 is the a-file, rank 1 is White's back rank. A `Square` can only be
/// built in bounds, so every value indexes one of the 64 board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square, returning `None` when file or rank is outside 1..=8.
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= 1 && file <= 8 && rank >= 1 && rank <= 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Create a square that the caller knows is on the board.
    ///
    /// # Panics
    /// Panics if file or rank is outside 1..=8.
    #[must_use]
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(
            file >= 1 && file <= 8 && rank >= 1 && rank <= 8,
            "square out of bounds"
        );
        Square { file, rank }
    }

    /// File, 1 = a ... 8 = h
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank, 1 ... 8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Board index: `(rank - 1) * 8 + (file - 1)`, so a1 = 0, h1 = 7, a8 = 56, h8 = 63.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Inverse of [`Square::index`].
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index out of bounds");
        Square {
            file: (index % 8) as u8 + 1,
            rank: (index / 8) as u8 + 1,
        }
    }

    /// The square `file_delta` files and `rank_delta` ranks away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Absolute file distance to `other`.
    #[inline]
    #[must_use]
    pub const fn file_distance(self, other: Square) -> u8 {
        self.file.abs_diff(other.file)
    }

    /// Absolute rank distance to `other`.
    #[inline]
    #[must_use]
    pub const fn rank_distance(self, other: Square) -> u8 {
        self.rank.abs_diff(other.rank)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square { file, rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'0',
            _ => return Err(invalid()),
        };
        Ok(Square { file, rank })
    }
}
