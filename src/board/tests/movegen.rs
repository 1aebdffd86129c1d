//! Move lists of small positions, one piece kind at a time.

use super::{count_for, sq};
use crate::board::{Board, Color, Modifier, Move, Piece};

fn pawn(color: Color, from: &str, to: &str) -> Move {
    Move::new(color, Piece::Pawn, sq(from), sq(to))
}

fn king(from: &str, to: &str) -> Move {
    Move::new(Color::White, Piece::King, sq(from), sq(to))
}

#[test]
fn test_pawn_on_start_rank() {
    let board = Board::from_fen("k7/p7/8/8/8/8/P7/K7 w - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::White, "a2", "a3")));
    assert!(moves.contains(&pawn(Color::White, "a2", "a4")));
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 2);

    let board = Board::from_fen("k7/p7/8/8/8/8/P7/K7 b - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::Black, "a7", "a6")));
    assert!(moves.contains(&pawn(Color::Black, "a7", "a5")));
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 2);
}

#[test]
fn test_pawn_off_start_rank() {
    let board = Board::from_fen("k7/8/p7/8/8/P7/8/K7 w - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::White, "a3", "a4")));
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 1);

    let board = Board::from_fen("k7/8/p7/8/8/P7/8/K7 b - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::Black, "a6", "a5")));
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 1);
}

#[test]
fn test_double_step_needs_both_squares_empty() {
    let board = Board::from_fen("k7/8/8/8/8/n7/P7/K7 w - -");
    let moves = board.valid_moves(false);
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 0);

    let board = Board::from_fen("k7/8/8/8/n7/8/P7/K7 w - -");
    let moves = board.valid_moves(false);
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 1);
}

#[test]
fn test_blocked_pawns() {
    for fen in ["k7/8/8/p7/P7/8/8/K7 w - -", "k7/8/8/p7/P7/8/8/K7 b - -"] {
        let board = Board::from_fen(fen);
        let moves = board.valid_moves(false);
        assert_eq!(count_for(&moves, board.side_to_move(), Piece::Pawn), 0);
    }
}

#[test]
fn test_pawn_captures() {
    let board = Board::from_fen("k7/8/8/1p6/P7/8/8/K7 w - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::White, "a4", "a5")));
    assert!(moves.contains(&pawn(Color::White, "a4", "b5").with(Modifier::Capture)));
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 2);

    let board = Board::from_fen("k7/8/8/1p6/P7/8/8/K7 b - -");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::Black, "b5", "b4")));
    assert!(moves.contains(&pawn(Color::Black, "b5", "a4").with(Modifier::Capture)));
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 2);
}

#[test]
fn test_promotions() {
    let promotions = [
        Modifier::PromoteBishop,
        Modifier::PromoteKnight,
        Modifier::PromoteRook,
        Modifier::PromoteQueen,
    ];

    let board = Board::from_fen("8/k2P4/8/8/8/8/K2p4/8 w - -");
    let moves = board.valid_moves(false);
    for promo in promotions {
        assert!(moves.contains(&pawn(Color::White, "d7", "d8").with(promo)));
    }
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 4);

    let board = Board::from_fen("8/k2P4/8/8/8/8/K2p4/8 b - -");
    let moves = board.valid_moves(false);
    for promo in promotions {
        assert!(moves.contains(&pawn(Color::Black, "d2", "d1").with(promo)));
    }
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 4);
}

#[test]
fn test_promotion_generation_order() {
    let board = Board::from_fen("8/k2P4/8/8/8/8/K7/8 w - -");
    let promoted: Vec<Piece> = board
        .generate_piece_moves(sq("d7"))
        .iter()
        .filter_map(Move::promotion)
        .collect();
    assert_eq!(
        promoted,
        vec![Piece::Bishop, Piece::Knight, Piece::Rook, Piece::Queen]
    );
}

#[test]
fn test_promotion_by_capture() {
    let board = Board::from_fen("2rB3k/3P4/8/8/8/8/3p4/2Rb3K w - -");
    let moves = board.valid_moves(false);
    for piece in [Piece::Bishop, Piece::Knight, Piece::Rook, Piece::Queen] {
        let promo = Modifier::promotion_to(piece).unwrap();
        let mv = pawn(Color::White, "d7", "c8")
            .with(Modifier::Capture)
            .with(promo);
        assert!(moves.contains(&mv), "missing {mv}");
    }
    assert_eq!(count_for(&moves, Color::White, Piece::Pawn), 4);

    let board = Board::from_fen("2rB3k/3P4/8/8/8/8/3p4/2Rb3K b - -");
    let moves = board.valid_moves(false);
    let capturing = moves
        .iter()
        .filter(|mv| mv.piece() == Piece::Pawn && mv.to() == sq("c1") && mv.is_capture())
        .count();
    assert_eq!(capturing, 4);
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 4);
}

#[test]
fn test_en_passant_generation() {
    let board = Board::from_fen("k7/8/8/8/3Pp3/8/8/K7 b - d3");
    let moves = board.valid_moves(false);
    assert!(moves.contains(&pawn(Color::Black, "e4", "e3")));
    assert!(moves.contains(
        &pawn(Color::Black, "e4", "d3")
            .with(Modifier::Capture)
            .with(Modifier::EnPassant)
    ));
    assert_eq!(count_for(&moves, Color::Black, Piece::Pawn), 2);
}

#[test]
fn test_king_in_corner_side_and_center() {
    let board = Board::from_fen("k7/8/8/8/8/8/8/K7 w - -");
    let moves = board.valid_moves(false);
    for to in ["a2", "b1", "b2"] {
        assert!(moves.contains(&king("a1", to)));
    }
    assert_eq!(count_for(&moves, Color::White, Piece::King), 3);

    let board = Board::from_fen("k7/8/8/8/8/8/8/4K3 w - -");
    let moves = board.valid_moves(false);
    for to in ["d1", "d2", "e2", "f2", "f1"] {
        assert!(moves.contains(&king("e1", to)));
    }
    assert_eq!(count_for(&moves, Color::White, Piece::King), 5);

    let board = Board::from_fen("k7/8/8/8/8/4K3/8/8 w - -");
    let moves = board.valid_moves(false);
    for to in ["d2", "d3", "d4", "e2", "e4", "f2", "f3", "f4"] {
        assert!(moves.contains(&king("e3", to)));
    }
    assert_eq!(count_for(&moves, Color::White, Piece::King), 8);
}

#[test]
fn test_king_kept_away_from_other_king() {
    let board = Board::from_fen("8/8/8/4k3/8/4K3/8/8 w - -");
    let moves = board.valid_moves(false);
    for to in ["d2", "d3", "e2", "f2", "f3"] {
        assert!(moves.contains(&king("e3", to)));
    }
    assert_eq!(count_for(&moves, Color::White, Piece::King), 5);
}

#[test]
fn test_knight_moves() {
    let board = Board::from_fen("k7/8/8/8/3N4/8/8/K7 w - -");
    let moves = board.generate_piece_moves(sq("d4"));
    assert_eq!(moves.len(), 8);

    let board = Board::from_fen("k7/8/8/8/8/8/8/N6K w - -");
    let targets: Vec<String> = board
        .generate_piece_moves(sq("a1"))
        .iter()
        .map(|mv| mv.to().to_string())
        .collect();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&"b3".to_string()));
    assert!(targets.contains(&"c2".to_string()));
}

#[test]
fn test_slider_rays_stop_at_pieces() {
    // Rook on d4: own pawn on d6 blocks, enemy pawn on f4 is captured
    let board = Board::from_fen("k7/8/3P4/8/3R1p2/8/8/K7 w - -");
    let moves = board.generate_piece_moves(sq("d4"));
    assert_eq!(moves.len(), 9);
    assert!(moves.iter().any(|mv| mv.to() == sq("f4") && mv.is_capture()));
    assert!(!moves.iter().any(|mv| mv.to() == sq("g4")));
    assert!(!moves.iter().any(|mv| mv.to() == sq("d6")));

    let board = Board::from_fen("k7/8/8/8/3B4/8/8/K7 w - -");
    assert_eq!(board.generate_piece_moves(sq("d4")).len(), 12);

    let board = Board::from_fen("k7/8/8/8/3Q4/8/8/K7 w - -");
    assert_eq!(board.generate_piece_moves(sq("d4")).len(), 26);
}

#[test]
fn test_standard_position_move_count() {
    let board = Board::new();
    assert_eq!(board.valid_moves(false).len(), 20);
    assert_eq!(board.potential_moves().len(), 20);
}

#[test]
fn test_castling_not_generated_with_pieces_in_between() {
    let moves = Board::new().valid_moves(false);
    assert!(!moves.iter().any(|mv| mv.castling_side().is_some()));
}
