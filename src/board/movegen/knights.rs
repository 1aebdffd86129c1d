use super::super::{Board, Color, Move, Piece, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        for (df, dr) in KNIGHT_OFFSETS {
            self.try_destination(color, Piece::Knight, from, from.offset(df, dr), &mut moves);
        }
        moves
    }
}
