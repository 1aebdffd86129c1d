//! Chess board representation and rules.
//!
//! A mailbox board of 64 cells plus castling rights, en passant target, side
//! to move and move counters. Supports the full move rules including
//! castling, en passant and promotion, check and mate detection, and a
//! static validator for positions.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let moves = board.valid_moves(false);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(moves.len(), 20);
//! ```

mod apply;
mod builder;
mod error;
mod fen;
mod movegen;
mod notation;
pub mod prelude;
mod rating;
mod rules;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, GameError, MoveError, SquareError};
pub use state::{Board, Legality};
pub use types::{
    king_home, CastlingRights, CastlingSide, Color, Modifier, Modifiers, Move, Piece, Square,
};
pub use validate::Violation;

pub(crate) use types::PROMOTION_PIECES;
