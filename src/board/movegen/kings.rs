use super::super::{king_home, Board, CastlingSide, Color, Modifier, Move, Piece, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        for (df, dr) in KING_OFFSETS {
            self.try_destination(color, Piece::King, from, from.offset(df, dr), &mut moves);
        }

        // Rights are trusted to imply king and rook at home; application re-checks.
        if from == king_home(color) {
            for side in [CastlingSide::Long, CastlingSide::Short] {
                if self.can_castle(color, side) && self.castling_path_clear(color, side) {
                    moves.push(
                        Move::new(color, Piece::King, from, side.king_target(color))
                            .with(Modifier::castling(side)),
                    );
                }
            }
        }

        moves
    }

    /// Whether every square between king and rook is empty
    pub(crate) fn castling_path_clear(&self, color: Color, side: CastlingSide) -> bool {
        side.between_files()
            .iter()
            .all(|&file| self.is_empty(Square::at(file, color.home_rank())))
    }
}
