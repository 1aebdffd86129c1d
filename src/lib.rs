#[macro_use]
mod logging;

pub mod board;
pub mod game;

pub use board::{Board, Color, Legality, Modifier, Move, Piece, Square};
pub use game::{Game, GameState, GameStatus, MovePicker};
