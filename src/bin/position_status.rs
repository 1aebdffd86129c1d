use std::env;

use chess_rules::board::Board;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: position_status <fen>");
        std::process::exit(2);
    }

    let fen = args.join(" ");
    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            std::process::exit(1);
        }
    };

    let legality = board.validate();
    let moves = board.valid_moves(true);
    println!("{board}");
    println!("side_to_move: {}", board.side_to_move().name());
    println!("legality: {legality:?}");
    if let Some(violation) = board.violation() {
        println!("violation: {violation}");
    }
    println!("check: {}", board.is_check());
    println!("checkmate: {}", board.is_checkmate());
    println!("stalemate: {}", board.is_stalemate());
    println!("status: {:?}", board.status());
    println!("valid_moves: {}", moves.len());
    for mv in &moves {
        println!("{mv}");
    }
}
