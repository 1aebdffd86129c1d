//! Error types for board operations.

use std::fmt;

use super::{Color, Legality, Move, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Input has no placement field
    EmptyInput,
    /// More than six whitespace-separated fields
    TooManyParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// More than eight ranks in the placement field
    TooManyRanks { found: usize },
    /// Fewer than eight ranks in the placement field
    TooFewRanks { found: usize },
    /// A rank describes more than eight files
    TooManyFiles { rank: u8, files: usize },
    /// A rank describes fewer than eight files
    TooFewFiles { rank: u8, files: usize },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::EmptyInput => write!(f, "FEN string is empty"),
            FenError::TooManyParts { found } => {
                write!(f, "FEN must have at most 6 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { found } => {
                write!(f, "FEN placement has {found} ranks, expected 8")
            }
            FenError::TooFewRanks { found } => {
                write!(f, "FEN placement has {found} ranks, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why [`Board::apply_move`](crate::board::Board::apply_move) rejected a move.
///
/// The board is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The board was not a legal position before the move
    IllegalPosition { legality: Legality },
    /// Nothing stands on the start square
    NoPieceAtStart { square: Square },
    /// The start square holds a different piece than the move declares
    WrongPiece {
        square: Square,
        expected: (Color, Piece),
        found: (Color, Piece),
    },
    /// The end square is occupied but the move is not flagged as a capture
    CaptureFlagMissing { square: Square },
    /// The end square holds a piece of the mover's own color
    CaptureOwnPiece { square: Square },
    /// A capture (other than en passant) onto an empty square
    NothingToCapture { square: Square },
    /// En passant flags, geometry or victim do not match the board
    InvalidEnPassant { mv: Move },
    /// Castling right, king, rook or path do not allow the castling move
    InvalidCastling { mv: Move },
    /// Promotion flag on a move that does not bring a pawn to its last rank
    InvalidPromotion { mv: Move },
    /// A pawn reaches its last rank without a promotion flag
    MissingPromotion { mv: Move },
    /// The position after the move would not be legal
    IllegalResult { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalPosition { legality } => {
                write!(f, "Board position is {legality:?}, expected Legal")
            }
            MoveError::NoPieceAtStart { square } => write!(f, "No piece on {square}"),
            MoveError::WrongPiece {
                square,
                expected,
                found,
            } => write!(
                f,
                "Expected {} {} on {square}, found {} {}",
                expected.0.name(),
                expected.1,
                found.0.name(),
                found.1
            ),
            MoveError::CaptureFlagMissing { square } => {
                write!(f, "{square} is occupied but the move is not a capture")
            }
            MoveError::CaptureOwnPiece { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
            MoveError::NothingToCapture { square } => {
                write!(f, "Capture onto empty square {square}")
            }
            MoveError::InvalidEnPassant { mv } => write!(f, "Invalid en passant move {mv}"),
            MoveError::InvalidCastling { mv } => write!(f, "Invalid castling move {mv}"),
            MoveError::InvalidPromotion { mv } => write!(f, "Invalid promotion in {mv}"),
            MoveError::MissingPromotion { mv } => {
                write!(f, "Pawn move {mv} reaches the last rank without promotion")
            }
            MoveError::IllegalResult { mv } => {
                write!(f, "Move {mv} would lead to an illegal position")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for moves submitted to a [`Game`](crate::game::Game)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has not been started or is already finished
    NotRunning,
    /// The submitting color is not the side to move
    NotYourTurn { color: Color },
    /// The move is not among the valid moves of the position
    NotAValidMove { mv: Move },
    /// The board rejected the move
    Rejected(MoveError),
    /// A move picker returned nothing although moves were available
    NoMovePicked { color: Color },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotRunning => write!(f, "Game is not running"),
            GameError::NotYourTurn { color } => write!(f, "It is not {color}'s turn"),
            GameError::NotAValidMove { mv } => write!(f, "{mv} is not a valid move"),
            GameError::Rejected(err) => write!(f, "Move rejected: {err}"),
            GameError::NoMovePicked { color } => write!(f, "{color} picked no move"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Rejected(err)
    }
}
