//! FEN parsing and serialization.
//!
//! Only the placement field is required. Missing fields default to White to
//! move, no castling, no en passant target, halfmove clock 0 and fullmove 1.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, CastlingSide, Color, Piece, Square};

/// Castling letters in serialization order
const CASTLING_ORDER: [(Color, CastlingSide); 4] = [
    (Color::White, CastlingSide::Long),
    (Color::White, CastlingSide::Short),
    (Color::Black, CastlingSide::Long),
    (Color::Black, CastlingSide::Short),
];

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = parse_fen(fen);
        if let Err(err) = &result {
            rules_debug!("failed to parse FEN '{fen}': {err}");
        }
        result
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// FEN without move counters: placement, side, castling, en passant.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (1..=8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 1..=8 {
                if let Some((color, piece)) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING_ORDER
            .iter()
            .filter(|&&(color, side)| self.can_castle(color, side))
            .map(|&(color, side)| CastlingRights::fen_char(color, side))
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {}", rows.join("/"), active, castling, ep)
    }

    /// FEN with halfmove clock and fullmove number appended.
    #[must_use]
    pub fn to_fen_full(&self) -> String {
        format!(
            "{} {} {}",
            self.to_fen(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.is_empty() {
        return Err(FenError::EmptyInput);
    }
    if parts.len() > 6 {
        return Err(FenError::TooManyParts { found: parts.len() });
    }

    let mut board = Board::empty();
    parse_placement(&mut board, parts[0])?;

    if let Some(&side) = parts.get(1) {
        match side {
            "w" => board.set_side_to_move(Color::White),
            "b" => board.set_side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }
    }

    if let Some(&castling) = parts.get(2) {
        if castling != "-" {
            for c in castling.chars() {
                let (color, side) =
                    CastlingRights::from_fen_char(c).ok_or(FenError::InvalidCastling { char: c })?;
                board.set_castling(color, side);
            }
        }
    }

    if let Some(&ep) = parts.get(3) {
        if ep != "-" {
            let target: Square = ep.parse().map_err(|_| FenError::InvalidEnPassant {
                found: ep.to_string(),
            })?;
            board.set_en_passant_target(target);
        }
    }

    if let Some(&halfmove) = parts.get(4) {
        board.set_halfmove_clock(parse_counter(halfmove)?);
    }
    if let Some(&fullmove) = parts.get(5) {
        board.set_fullmove_number(parse_counter(fullmove)?);
    }

    Ok(board)
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() > 8 {
        return Err(FenError::TooManyRanks { found: rows.len() });
    }
    if rows.len() < 8 {
        return Err(FenError::TooFewRanks { found: rows.len() });
    }

    for (rank, row) in (1..=8u8).rev().zip(rows) {
        let mut files = 0usize;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                files += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            files += 1;
            if files > 8 {
                return Err(FenError::TooManyFiles { rank, files });
            }
            board.set_piece(Square::at(files as u8, rank), color, piece);
        }
        if files > 8 {
            return Err(FenError::TooManyFiles { rank, files });
        }
        if files < 8 {
            return Err(FenError::TooFewFiles { rank, files });
        }
    }
    Ok(())
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}
