//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q -");
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, CastlingSide, Color, FenError, Legality, Modifier, Move,
    MoveError, Piece, Square, SquareError,
};
