use std::env;
use std::process::ExitCode;

use chess_core::GameSession;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: position_status <san1> <san2> ...");
        return ExitCode::FAILURE;
    }

    let mut session = GameSession::new();
    for san in args.iter().skip(1) {
        if let Err(e) = session.play_san(san) {
            eprintln!("{san}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let board = session.board();
    let legal_moves = board.legal_moves();
    println!("fen: {}", session.fen());
    println!("side_to_move: {}", board.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.is_check());
    println!("checkmate: {}", board.is_checkmate());
    println!("stalemate: {}", board.is_stalemate());
    println!("status: {}", session.status());
    for mv in legal_moves.iter() {
        println!("{} {}", mv, board.move_to_san(mv));
    }
    ExitCode::SUCCESS
}
