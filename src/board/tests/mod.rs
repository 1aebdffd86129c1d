//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move lists of small positions
//! - `rules.rs` - Check, mate, stalemate, castling legality and annotations
//! - `apply.rs` - Move application and its rejections
//! - `proptest.rs` - Property-based tests over random games

mod movegen;
mod rules;

use super::{Color, Move, Piece, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn count_for(moves: &[Move], color: Color, piece: Piece) -> usize {
    moves
        .iter()
        .filter(|mv| mv.color() == color && mv.piece() == piece)
        .count()
}
