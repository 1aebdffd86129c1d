//! Board state: the 64-cell grid plus castling, en passant, turn and counters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, CastlingSide, Color, Piece, Square};

/// Cached verdict of the position validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Legality {
    /// Not computed since the last mutation
    #[default]
    Undetermined,
    Legal,
    Illegal,
}

/// A chess position.
///
/// `Board` is `Copy`: simulating a move means copying the board and
/// mutating the copy. Every mutator resets the cached [`Legality`] to
/// `Undetermined`; only [`Board::set_legality`] and the validator write it.
///
/// Equality compares the grid, castling rights, en passant target and side
/// to move. Move counters and the legality cache are ignored.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) legality: Legality,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard initial position, already known to be legal.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in (1..=8).zip(BACK_RANK) {
            board.set_piece(Square::at(file, 1), Color::White, piece);
            board.set_piece(Square::at(file, 2), Color::White, Piece::Pawn);
            board.set_piece(Square::at(file, 7), Color::Black, Piece::Pawn);
            board.set_piece(Square::at(file, 8), Color::Black, piece);
        }
        board.set_castling_rights(CastlingRights::all());
        board.set_legality(Legality::Legal);
        board
    }

    /// An empty board with White to move and no castling rights.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            legality: Legality::Undetermined,
        }
    }

    #[inline]
    fn mark_dirty(&mut self) {
        self.legality = Legality::Undetermined;
    }

    // Grid

    /// Piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.index()]
    }

    /// Piece at a board index, if any.
    ///
    /// # Panics
    /// Panics if `index >= 64`.
    #[inline]
    #[must_use]
    pub fn piece_at_index(&self, index: usize) -> Option<(Color, Piece)> {
        assert!(index < 64, "square index out of bounds");
        self.squares[index]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Place a piece, replacing whatever stood there
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.index()] = Some((color, piece));
        self.mark_dirty();
    }

    /// Remove whatever stands on a square
    pub fn clear_square(&mut self, square: Square) {
        self.squares[square.index()] = None;
        self.mark_dirty();
    }

    /// All pieces of one color with their squares, in ascending index order
    #[must_use]
    pub fn pieces(&self, color: Color) -> Vec<(Piece, Square)> {
        self.occupied()
            .filter(|&(_, c, _)| c == color)
            .map(|(square, _, piece)| (piece, square))
            .collect()
    }

    /// Every occupied square in ascending index order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all()
            .zip(self.squares.iter())
            .filter_map(|(square, cell)| cell.map(|(color, piece)| (square, color, piece)))
    }

    /// First square, in index order, whose piece satisfies `predicate`
    pub fn find_first<F>(&self, mut predicate: F) -> Option<Square>
    where
        F: FnMut(Color, Piece) -> bool,
    {
        self.occupied()
            .find(|&(_, color, piece)| predicate(color, piece))
            .map(|(square, _, _)| square)
    }

    /// Number of pieces satisfying `predicate`
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(Color, Piece) -> bool,
    {
        self.occupied()
            .filter(|&(_, color, piece)| predicate(color, piece))
            .count()
    }

    /// Square of a color's king
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.find_first(|c, p| c == color && p == Piece::King)
    }

    // Castling

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub const fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        self.castling_rights.has(color, side)
    }

    pub fn set_castling(&mut self, color: Color, side: CastlingSide) {
        self.castling_rights.set(color, side);
        self.mark_dirty();
    }

    pub fn unset_castling(&mut self, color: Color, side: CastlingSide) {
        self.castling_rights.remove(color, side);
        self.mark_dirty();
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
        self.mark_dirty();
    }

    // En passant

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, square: Square) {
        self.en_passant_target = Some(square);
        self.mark_dirty();
    }

    pub fn clear_en_passant_target(&mut self) {
        self.en_passant_target = None;
        self.mark_dirty();
    }

    // Turn

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
        self.mark_dirty();
    }

    // Counters

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn set_halfmove_clock(&mut self, value: u32) {
        self.halfmove_clock = value;
        self.mark_dirty();
    }

    pub fn increment_halfmove_clock(&mut self) {
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.mark_dirty();
    }

    pub fn reset_halfmove_clock(&mut self) {
        self.halfmove_clock = 0;
        self.mark_dirty();
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_fullmove_number(&mut self, value: u32) {
        self.fullmove_number = value;
        self.mark_dirty();
    }

    pub fn increment_fullmove_number(&mut self) {
        self.fullmove_number = self.fullmove_number.saturating_add(1);
        self.mark_dirty();
    }

    // Legality cache

    /// Cached legality verdict. Does not compute anything, see [`Board::validate`].
    #[inline]
    #[must_use]
    pub const fn legality(&self) -> Legality {
        self.legality
    }

    /// Overwrite the cached legality verdict
    pub fn set_legality(&mut self, legality: Legality) {
        self.legality = legality;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.side_to_move == other.side_to_move
    }
}

impl Eq for Board {}
