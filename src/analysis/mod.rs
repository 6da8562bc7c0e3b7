//! The core's side of the external analysis engine contract.
//!
//! The engine process itself lives outside this crate. The core builds the
//! text commands that ask for an evaluation, parses the `info` lines that
//! come back, and grades played moves from consecutive evaluations.

use std::fmt::Write as _;

use crate::board::{Board, Move};

pub mod classify;
pub mod info;
pub mod options;
pub mod slot;

pub use classify::{classify, Classification};
pub use info::{parse_info_line, Bound, EngineInfo, Score};
pub use options::{AnalysisMode, AnalysisOptions};
pub use slot::EvaluationSlot;

/// "Evaluate this position to this depth."
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Position the move list starts from
    pub fen: String,
    /// Moves played from `fen`, oldest first
    pub moves: Vec<Move>,
    pub depth: u32,
}

impl AnalysisRequest {
    /// Request for exactly the position on `board`.
    #[must_use]
    pub fn for_board(board: &Board, depth: u32) -> Self {
        AnalysisRequest {
            fen: board.to_fen(),
            moves: Vec::new(),
            depth,
        }
    }

    /// `position fen <fen> [moves ...]`
    #[must_use]
    pub fn position_command(&self) -> String {
        let mut cmd = format!("position fen {}", self.fen);
        if !self.moves.is_empty() {
            cmd.push_str(" moves");
            for mv in &self.moves {
                let _ = write!(cmd, " {mv}");
            }
        }
        cmd
    }

    /// `go depth <n>`
    #[must_use]
    pub fn go_command(&self) -> String {
        format!("go depth {}", self.depth)
    }

    /// Both command lines in the order they are sent.
    #[must_use]
    pub fn commands(&self) -> [String; 2] {
        [self.position_command(), self.go_command()]
    }

    /// FEN of the position this request evaluates.
    ///
    /// Returns `None` if the FEN does not parse or a move is not legal.
    #[must_use]
    pub fn target_fen(&self) -> Option<String> {
        let mut board = Board::try_from_fen(&self.fen).ok()?;
        for &mv in &self.moves {
            board.play(mv).ok()?;
        }
        Some(board.to_fen())
    }
}

/// Command that interrupts a running search.
#[must_use]
pub fn stop_command() -> &'static str {
    "stop"
}
