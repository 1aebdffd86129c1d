use serde::Deserialize;

use chess_rules::board::{Board, Legality};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    legal: bool,
    #[serde(default)]
    check: bool,
    #[serde(default)]
    checkmate: bool,
    #[serde(default)]
    stalemate: bool,
    valid_moves: Option<usize>,
    #[serde(default)]
    contains: Vec<String>,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn legality_suite() {
    for position in load().positions {
        let mut board = Board::from_fen(&position.fen);
        let expected = if position.legal {
            Legality::Legal
        } else {
            Legality::Illegal
        };
        assert_eq!(
            board.validate(),
            expected,
            "{}: {} ({:?})",
            position.name,
            position.fen,
            board.violation()
        );
    }
}

#[test]
fn outcome_suite() {
    for position in load().positions.iter().filter(|p| p.legal) {
        let board = Board::from_fen(&position.fen);
        assert_eq!(board.is_check(), position.check, "check: {}", position.name);
        assert_eq!(
            board.is_checkmate(),
            position.checkmate,
            "checkmate: {}",
            position.name
        );
        assert_eq!(
            board.is_stalemate(),
            position.stalemate,
            "stalemate: {}",
            position.name
        );
    }
}

#[test]
fn move_list_suite() {
    for position in load().positions.iter().filter(|p| p.legal) {
        let board = Board::from_fen(&position.fen);
        let rendered: Vec<String> = board
            .valid_moves(true)
            .iter()
            .map(ToString::to_string)
            .collect();

        if let Some(count) = position.valid_moves {
            assert_eq!(
                rendered.len(),
                count,
                "{}: {}",
                position.name,
                rendered.join(" ")
            );
        }
        for expected in &position.contains {
            assert!(
                rendered.contains(expected),
                "{}: {} missing from {}",
                position.name,
                expected,
                rendered.join(" ")
            );
        }
    }
}

#[test]
fn fen_round_trip_suite() {
    for position in load().positions {
        let board = Board::from_fen(&position.fen);
        let again = Board::from_fen(&board.to_fen_full());
        assert_eq!(board, again, "{}", position.name);
    }
}
