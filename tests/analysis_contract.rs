use std::sync::mpsc;
use std::thread;

use chess_core::analysis::{
    parse_info_line, stop_command, AnalysisMode, AnalysisOptions, AnalysisRequest, Bound,
    EvaluationSlot, Score,
};
use chess_core::board::Board;

const ENGINE_OUTPUT: &str = "\
id name SomeEngine
info string NNUE evaluation enabled
info depth 1 seldepth 1 multipv 1 score cp 18 nodes 20 nps 20000 time 1 pv e2e4
info depth 2 seldepth 2 multipv 1 score cp 34 lowerbound nodes 61 pv e2e4 e7e5
info depth 3 currmove d2d4 currmovenumber 2
info depth 3 seldepth 4 multipv 1 score cp 27 nodes 420 pv d2d4 d7d5 c2c4
bestmove d2d4 ponder d7d5";

#[test]
fn reader_thread_feeds_the_slot() {
    let board = Board::new();
    let request = AnalysisRequest::for_board(&board, 3);
    let fen = request.target_fen().unwrap();

    let slot = EvaluationSlot::new();
    slot.begin(&fen);

    let (tx, rx) = mpsc::channel();
    let writer = slot.clone();
    let reader_fen = fen.clone();
    let reader = thread::spawn(move || {
        let mut published = 0;
        for line in ENGINE_OUTPUT.lines() {
            if let Some(info) = parse_info_line(line) {
                if writer.publish(&reader_fen, info) {
                    published += 1;
                }
            }
        }
        tx.send(published).unwrap();
    });

    assert_eq!(rx.recv().unwrap(), 3);
    reader.join().unwrap();

    let latest = slot.latest().unwrap();
    assert_eq!(latest.depth, Some(3));
    assert_eq!(latest.score, Some(Score::Cp(27)));
    assert_eq!(latest.bound, Bound::Exact);
    assert_eq!(latest.best_move().unwrap().to_string(), "d2d4");
    assert!(board.legal_moves().contains(&latest.best_move().unwrap()));
    assert_eq!(stop_command(), "stop");
}

#[test]
fn moving_on_drops_late_results() {
    let slot = EvaluationSlot::new();
    let mut board = Board::new();
    slot.begin(&board.to_fen());
    let old_fen = board.to_fen();

    board.make_move_san("e4").unwrap();
    slot.begin(&board.to_fen());

    let late = parse_info_line("info depth 20 score cp 25 pv e2e4").unwrap();
    assert!(!slot.publish(&old_fen, late));
    assert!(slot.latest().is_none());
}

#[test]
fn scores_render_for_display() {
    let mate = parse_info_line("info depth 30 score mate -2 pv e1e2").unwrap();
    assert_eq!(mate.score.unwrap().to_string(), "#-2");
    assert_eq!(mate.score.unwrap().centipawns(), -9800);

    let cp = parse_info_line("info depth 10 score cp -150").unwrap();
    assert_eq!(cp.score.unwrap().to_string(), "-1.50");
    assert!(cp.pv.is_empty());
}

#[test]
fn options_drive_request_depth() {
    let mut options = AnalysisOptions::new();
    options.set_mode(AnalysisMode::High);
    let request = AnalysisRequest::for_board(&Board::new(), options.depth);
    assert_eq!(request.go_command(), "go depth 18");
}

#[cfg(feature = "serde")]
#[test]
fn options_serialize_with_serde() {
    let options = AnalysisOptions {
        depth: 22,
        mode: AnalysisMode::Custom,
        auto_analyse: false,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"depth":22,"mode":"Custom","auto_analyse":false}"#);
    let back: AnalysisOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[cfg(feature = "serde")]
#[test]
fn score_serializes_with_serde() {
    let json = serde_json::to_string(&Score::Mate(3)).unwrap();
    assert_eq!(json, r#"{"Mate":3}"#);
}
