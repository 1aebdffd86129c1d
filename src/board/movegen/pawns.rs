use super::super::{Board, Color, Modifier, Move, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, color: Color, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                push_pawn_move(&mut moves, Move::new(color, Piece::Pawn, from, forward));

                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(0, 2 * dir) {
                        if self.is_empty(double) {
                            moves.push(Move::new(color, Piece::Pawn, from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            match self.piece_at(target) {
                Some((occupant, _)) if occupant != color => {
                    let mv = Move::new(color, Piece::Pawn, from, target).with(Modifier::Capture);
                    push_pawn_move(&mut moves, mv);
                }
                Some(_) => {}
                None if self.en_passant_target() == Some(target) => {
                    moves.push(
                        Move::new(color, Piece::Pawn, from, target)
                            .with(Modifier::Capture)
                            .with(Modifier::EnPassant),
                    );
                }
                None => {}
            }
        }

        moves
    }
}

/// Push a pawn move, fanned out into the four promotions when it reaches the last rank.
fn push_pawn_move(moves: &mut Vec<Move>, mv: Move) {
    if mv.to().rank() != mv.color().promotion_rank() {
        moves.push(mv);
        return;
    }
    for promo in PROMOTION_PIECES {
        if let Some(modifier) = Modifier::promotion_to(promo) {
            moves.push(mv.with(modifier));
        }
    }
}
