//! Draw detection tests.

use crate::board::Board;

fn apply_uci(board: &mut Board, text: &str) {
    board.make_move_uci(text).expect("move not legal");
}

#[test]
fn test_fen_halfmove_parsing() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 57 1");
    assert_eq!(board.halfmove_clock(), 57);
}

#[test]
fn test_fifty_move_rule_draw() {
    let board = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 100 80");
    assert!(board.is_draw());
    let board = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 99 80");
    assert!(!board.is_draw());
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let mut board = Board::from_fen("r3k3/8/8/8/8/8/4P3/R3K3 w - - 99 60");
    apply_uci(&mut board, "e2e4");
    assert_eq!(board.halfmove_clock(), 0);
    assert!(!board.is_draw());
}

#[test]
fn test_halfmove_resets_on_capture() {
    let mut board = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 42 30");
    apply_uci(&mut board, "a1a8");
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_quiet_moves_reach_fifty_move_draw() {
    let mut board = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 96 50");
    for text in ["a1a2", "a8a7", "a2a1", "a7a8"] {
        assert!(!board.is_draw());
        apply_uci(&mut board, text);
    }
    assert_eq!(board.halfmove_clock(), 100);
    assert!(board.is_draw());
}

#[test]
fn test_insufficient_material() {
    for fen in [
        "8/8/8/8/8/8/8/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6N1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6b1/K1k5 w - - 0 1",
    ] {
        let board = Board::from_fen(fen);
        assert!(board.is_insufficient_material(), "{fen}");
        assert!(board.is_draw(), "{fen}");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "8/8/8/8/8/8/6Q1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6R1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/6P1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/5NN1/K1k5 w - - 0 1",
        "8/8/8/8/8/8/5Bn1/K1k5 w - - 0 1",
    ] {
        let board = Board::from_fen(fen);
        assert!(!board.is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_stalemate_is_draw() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(board.is_stalemate());
    assert!(board.is_draw());
    assert!(!board.is_checkmate());
}

#[test]
fn test_checkmate_is_not_draw() {
    let board = Board::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 0 1");
    assert!(board.is_checkmate());
    assert!(!board.is_draw());
}
