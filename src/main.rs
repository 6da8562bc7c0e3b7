//! Line-oriented driver for the rules core.
//!
//! Reads commands from stdin, one per line:
//!
//! ```text
//! position startpos|fen <fen> [moves <uci>...]
//! play <san>...      pgn <movetext>      undo
//! back | forward | goto <ply>
//! moves | status | fen | movetext
//! perft <depth> | divide <depth>
//! setoption name <name> value <value> | options
//! analyse [depth]    info <engine info line>
//! quit
//! ```

use std::io::{self, BufRead, Write};
use std::time::Instant;

use chess_core::analysis::{parse_info_line, AnalysisOptions, EvaluationSlot};
use chess_core::board::{Board, Move};
use chess_core::GameSession;

fn parse_position_command(session: &mut GameSession, parts: &[&str]) {
    let mut i = 1;
    if parts.get(i) == Some(&"startpos") {
        *session = GameSession::new();
        i += 1;
    } else if parts.get(i) == Some(&"fen") {
        let end = parts
            .iter()
            .position(|&p| p == "moves")
            .unwrap_or(parts.len());
        let fen = parts
            .get(i + 1..end)
            .map(|fields| fields.join(" "))
            .unwrap_or_default();
        if let Err(e) = session.load_fen(&fen) {
            println!("error: {e}");
            return;
        }
        i = end;
    }

    if parts.get(i) == Some(&"moves") {
        for text in &parts[i + 1..] {
            let played = text
                .parse::<Move>()
                .map_err(|e| e.to_string())
                .and_then(|mv| session.play(mv).map_err(|e| e.to_string()));
            if let Err(e) = played {
                println!("error: {e}");
                break;
            }
        }
    }
}

fn print_moves(board: &Board) {
    let sans: Vec<String> = board
        .legal_moves()
        .iter()
        .map(|mv| board.move_to_san(mv))
        .collect();
    println!("{} legal: {}", sans.len(), sans.join(" "));
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = GameSession::new();
    let mut options = AnalysisOptions::new();
    let slot = EvaluationSlot::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "position" => parse_position_command(&mut session, &parts),
            "play" => {
                for san in &parts[1..] {
                    if let Err(e) = session.play_san(san) {
                        println!("error: {e}");
                        break;
                    }
                }
            }
            "pgn" => {
                let movetext = line.trim_start()["pgn".len()..].trim();
                let replay = session.load_pgn(movetext);
                println!(
                    "loaded {} moves, skipped {:?}",
                    replay.moves.len(),
                    replay.skipped
                );
            }
            "undo" | "back" => {
                if !session.step_back() {
                    println!("at start");
                }
            }
            "forward" => {
                if !session.step_forward() {
                    println!("at end");
                }
            }
            "goto" => {
                if let Some(ply) = parts.get(1).and_then(|p| p.parse().ok()) {
                    session.go_to(ply);
                }
            }
            "moves" => print_moves(session.board()),
            "status" => println!("{}", session.status()),
            "fen" => println!("{}", session.fen()),
            "movetext" => match session.movetext() {
                Ok(text) => println!("{text}"),
                Err(e) => println!("error: {e}"),
            },
            "perft" | "divide" => {
                let depth = parts.get(1).and_then(|d| d.parse().ok()).unwrap_or(1);
                let mut board = session.board().clone();
                let start = Instant::now();
                let nodes = if command == "divide" {
                    let split = board.divide(depth);
                    for (mv, count) in &split {
                        println!("{mv}: {count}");
                    }
                    split.iter().map(|(_, count)| count).sum()
                } else {
                    board.perft(depth)
                };
                let elapsed = start.elapsed();
                println!("nodes {nodes} time {}ms", elapsed.as_millis());
            }
            "setoption" => {
                // setoption name <name...> [value <value>]
                let value_at = parts.iter().position(|&p| p == "value");
                let name_end = value_at.unwrap_or(parts.len());
                let name = parts.get(2..name_end).map(|p| p.join(" ")).unwrap_or_default();
                let value = value_at.and_then(|i| parts.get(i + 1).copied());
                options.set_option(&name, value);
            }
            "options" => println!(
                "depth {} mode {:?} auto_analyse {}",
                options.depth, options.mode, options.auto_analyse
            ),
            "analyse" | "analyze" => {
                let depth = parts
                    .get(1)
                    .and_then(|d| d.parse().ok())
                    .unwrap_or(options.depth);
                let request = session.analysis_request(depth);
                if let Some(target) = request.target_fen() {
                    slot.begin(&target);
                }
                for cmd in request.commands() {
                    println!("{cmd}");
                }
            }
            "info" => {
                let current = slot.current_fen();
                if let (Some(info), Some(fen)) = (parse_info_line(&line), current.as_deref()) {
                    slot.publish(fen, info);
                }
                if let Some(info) = slot.latest() {
                    if let Some(score) = info.score {
                        println!("score {score}");
                    }
                    // Only annotate the game while it still shows the analysed position
                    if current == Some(session.fen()) {
                        session.record_evaluation(info);
                    }
                }
            }
            "quit" => break,
            _ => println!("unknown command: {command}"),
        }

        if stdout.flush().is_err() {
            break;
        }
    }
}
