use super::super::{Board, Color, Move, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Board {
    pub(crate) fn generate_bishop_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.generate_rays(color, Piece::Bishop, from, &BISHOP_DIRECTIONS, &mut moves);
        moves
    }

    pub(crate) fn generate_rook_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.generate_rays(color, Piece::Rook, from, &ROOK_DIRECTIONS, &mut moves);
        moves
    }

    /// Rook rays first, then bishop rays
    pub(crate) fn generate_queen_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.generate_rays(color, Piece::Queen, from, &ROOK_DIRECTIONS, &mut moves);
        self.generate_rays(color, Piece::Queen, from, &BISHOP_DIRECTIONS, &mut moves);
        moves
    }
}
