//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds (including the internal `Decoy`) and colors
//! - `Square` - 1-based (file, rank) square and its board index
//! - `Move`, `Modifier` and `Modifiers` - move representation
//! - `CastlingRights` and `CastlingSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, CastlingRights, CastlingSide};
pub use moves::{Modifier, Modifiers, Move};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
