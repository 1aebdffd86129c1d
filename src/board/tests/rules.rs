//! Check, mate and stalemate detection, castling legality and move annotations.

use super::sq;
use crate::board::{Board, CastlingSide, Color, Legality, Modifier, Move, Piece};

fn castling(color: Color, side: CastlingSide) -> Move {
    let home = if color == Color::White { "e1" } else { "e8" };
    Move::new(color, Piece::King, sq(home), side.king_target(color))
        .with(Modifier::castling(side))
}

fn has_castling(board: &Board, color: Color, side: CastlingSide) -> bool {
    board
        .valid_moves(false)
        .contains(&castling(color, side))
}

#[test]
fn test_castling_available_on_open_back_rank() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    assert!(has_castling(&board, Color::White, CastlingSide::Short));
    assert!(has_castling(&board, Color::White, CastlingSide::Long));

    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq -");
    assert!(has_castling(&board, Color::Black, CastlingSide::Short));
    assert!(has_castling(&board, Color::Black, CastlingSide::Long));
}

#[test]
fn test_castling_needs_the_right() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w K -");
    assert!(has_castling(&board, Color::White, CastlingSide::Short));
    assert!(!has_castling(&board, Color::White, CastlingSide::Long));
}

#[test]
fn test_castling_excluded_when_path_covered() {
    let board = Board::from_fen("1k1r1r2/8/8/8/8/8/8/R3K2R w QK -");
    assert!(!has_castling(&board, Color::White, CastlingSide::Short));
    assert!(!has_castling(&board, Color::White, CastlingSide::Long));

    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/3RKR2 b qk -");
    assert!(!has_castling(&board, Color::Black, CastlingSide::Short));
    assert!(!has_castling(&board, Color::Black, CastlingSide::Long));
}

#[test]
fn test_castling_excluded_when_landing_covered() {
    let board = Board::from_fen("2r1k1r1/8/8/8/8/8/8/R3K2R w KQ -");
    assert!(!has_castling(&board, Color::White, CastlingSide::Short));
    assert!(!has_castling(&board, Color::White, CastlingSide::Long));
}

#[test]
fn test_castling_excluded_when_covered_by_pawns() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3p2p1/R3K2R w KQ -");
    assert!(!has_castling(&board, Color::White, CastlingSide::Short));
    assert!(!has_castling(&board, Color::White, CastlingSide::Long));
}

#[test]
fn test_castling_out_of_check_is_illegal() {
    let board = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ -");
    assert!(board.is_check());
    assert!(!has_castling(&board, Color::White, CastlingSide::Short));
    assert!(!has_castling(&board, Color::White, CastlingSide::Long));
}

#[test]
fn test_long_castling_ignores_attack_on_b_file() {
    // b1 is crossed by the rook only, the king never passes it
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q -");
    assert!(has_castling(&board, Color::White, CastlingSide::Long));
}

#[test]
fn test_simple_check() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 w - -");
    assert!(board.is_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_simple_checkmate() {
    let board = Board::from_fen("4k3/8/8/8/8/8/r7/r3K3 w - -");
    assert!(board.is_check());
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(board.valid_moves(false).is_empty());
}

#[test]
fn test_simple_stalemate() {
    let board = Board::from_fen("4k1r1/8/8/8/8/8/r7/7K w - -");
    assert!(!board.is_check());
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
}

#[test]
fn test_block_prevents_mate() {
    let board = Board::from_fen("4k3/8/8/8/8/1R6/r7/r6K w - -");
    assert!(board.is_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());

    let moves = board.valid_moves(false);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].from(), sq("b3"));
    assert_eq!(moves[0].to(), sq("b1"));
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let board = Board::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - -");
    let moves = board.valid_moves(false);
    assert!(!moves.iter().any(|mv| mv.piece() == Piece::Knight));
}

#[test]
fn test_check_annotation() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R6K w - -");
    let moves = board.valid_moves(true);
    let rook = |to: &str| Move::new(Color::White, Piece::Rook, sq("a1"), sq(to));

    assert!(!moves.contains(&rook("a8")));
    assert!(moves.contains(&rook("a8").with(Modifier::Check)));
    assert!(!moves.contains(&rook("e1")));
    assert!(moves.contains(&rook("e1").with(Modifier::Check)));
    assert!(moves.contains(&rook("a2")));
}

#[test]
fn test_checkmate_annotation() {
    let board = Board::from_fen("4k3/1R6/8/8/8/8/8/R6K w - -");
    let moves = board.valid_moves(true);
    let mate = Move::new(Color::White, Piece::Rook, sq("a1"), sq("a8"));

    assert!(!moves.contains(&mate));
    assert!(!moves.contains(&mate.with(Modifier::Check)));
    assert!(moves.contains(&mate.with(Modifier::Checkmate)));
}

#[test]
fn test_stalemate_annotation() {
    let board = Board::from_fen("k7/8/1R6/8/8/8/8/1R5K w - -");
    let moves = board.valid_moves(true);
    let stalemating = Move::new(Color::White, Piece::Rook, sq("b6"), sq("b7"));

    assert!(!moves.contains(&stalemating));
    assert!(moves.contains(&stalemating.with(Modifier::Stalemate)));
}

#[test]
fn test_annotations_carry_one_outcome_flag() {
    let board = Board::from_fen("4k3/1R6/8/8/8/8/8/R6K w - -");
    for mv in board.valid_moves(true) {
        let flags = [Modifier::Check, Modifier::Checkmate, Modifier::Stalemate]
            .iter()
            .filter(|&&flag| mv.has_modifier(flag))
            .count();
        assert!(flags <= 1, "{mv} carries {flags} outcome flags");
    }
}

#[test]
fn test_annotated_and_plain_lists_match() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let plain = board.valid_moves(false);
    let stripped: Vec<Move> = board
        .valid_moves(true)
        .into_iter()
        .map(Move::without_annotations)
        .collect();
    assert_eq!(plain, stripped);
}

#[test]
fn test_crowded_position_does_not_panic() {
    let board = Board::from_fen("4N3/N1N3n1/8/N5K1/7R/PR3Bk1/8/6Q1 w - -");
    let _ = board.valid_moves(true);
}

#[test]
fn test_castling_right_without_rook_is_illegal_position() {
    let mut board = Board::from_fen("3nk3/5p2/1r2pb1p/1PPB3n/3pP2P/1p2P1P1/3RNP1R/B3K3 b k - -");
    assert_eq!(board.validate(), Legality::Illegal);
}

#[test]
fn test_valid_moves_leave_board_unchanged() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    let before = board;
    let _ = board.valid_moves(true);
    assert_eq!(board, before);
    assert_eq!(board.to_fen_full(), before.to_fen_full());
}
