//! One game as the UI drives it: a board, its start position and the
//! navigator over the moves played from there.

use std::fmt;

use log::debug;

use crate::analysis::{classify, AnalysisRequest, Classification, EngineInfo};
use crate::board::{Board, FenError, Move, MoveError, PgnReplay};
use crate::navigator::{MoveNavigator, RecordOutcome};

/// Terminal state of the current position, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    /// Fifty-move rule or insufficient material
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    start: Board,
    board: Board,
    navigator: MoveNavigator,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        GameSession {
            start: Board::new(),
            board: Board::new(),
            navigator: MoveNavigator::new(),
        }
    }

    /// Start over from a FEN position. On error the session is unchanged.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        self.start = board.clone();
        self.board = board;
        self.navigator.reset();
        Ok(())
    }

    /// Replace the game with one replayed from PGN movetext.
    ///
    /// The moves are recorded in the navigator and the board is left at the
    /// starting position with the cursor at 0, ready to step through.
    pub fn load_pgn(&mut self, pgn: &str) -> PgnReplay {
        let mut board = Board::new();
        let replay = board.load_pgn(pgn);

        self.start = Board::new();
        self.board = Board::new();
        self.navigator.reset();
        for (mv, san) in replay.moves.iter().zip(&replay.sans) {
            self.navigator.record(*mv, san.clone());
        }
        while self.navigator.prev().is_some() {}
        replay
    }

    /// Play a legal move at the cursor, truncating any recorded continuation
    /// that it departs from.
    pub fn play(&mut self, mv: Move) -> Result<RecordOutcome, MoveError> {
        let san = self.board.move_to_san(&mv);
        self.board.play(mv)?;
        let outcome = self.navigator.record(mv, san);
        if let RecordOutcome::Truncated { discarded } = outcome {
            debug!("new move {mv} discarded {discarded} recorded moves");
        }
        Ok(outcome)
    }

    /// Play a move given in SAN.
    pub fn play_san(&mut self, san: &str) -> Result<RecordOutcome, MoveError> {
        let mv = self.board.parse_san(san)?;
        self.play(mv)
    }

    /// Replay the next recorded move. Returns false at the end of the line.
    pub fn step_forward(&mut self) -> bool {
        let Some(mv) = self.navigator.next() else {
            return false;
        };
        if self.board.apply_move(mv) {
            true
        } else {
            // Recorded moves were legal when recorded; keep cursor and board in step
            self.navigator.prev();
            false
        }
    }

    /// Take back the last played move. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.navigator.prev().is_none() {
            return false;
        }
        self.board.undo_move().is_some()
    }

    /// Move the cursor to `ply`, clamped to the recorded line.
    pub fn go_to(&mut self, ply: usize) {
        let target = ply.min(self.navigator.len());
        while self.navigator.cursor() > target && self.step_back() {}
        while self.navigator.cursor() < target && self.step_forward() {}
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.board.is_checkmate() {
            GameStatus::Checkmate
        } else if self.board.is_stalemate() {
            GameStatus::Stalemate
        } else if self.board.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Evaluation request for the position at the cursor, expressed as the
    /// start position plus the moves played so far.
    #[must_use]
    pub fn analysis_request(&self, depth: u32) -> AnalysisRequest {
        AnalysisRequest {
            fen: self.start.to_fen(),
            moves: self.navigator.played().to_vec(),
            depth,
        }
    }

    /// Store an engine result for the position at the cursor.
    pub fn record_evaluation(&mut self, info: EngineInfo) {
        let ply = self.navigator.cursor();
        self.navigator.set_evaluation(ply, info);
    }

    /// Grade the `index`-th recorded move (0-based) from the evaluations of
    /// the positions before and after it.
    #[must_use]
    pub fn classification(&self, index: usize) -> Option<Classification> {
        let played = *self.navigator.moves().get(index)?;
        let before = self.navigator.evaluation(index)?;
        let after = self.navigator.evaluation(index + 1)?;
        let mover = if index % 2 == 0 {
            self.start.side_to_move()
        } else {
            self.start.side_to_move().opponent()
        };
        classify(before, after, played, mover)
    }

    /// Numbered SAN movetext of the whole recorded line.
    pub fn movetext(&self) -> Result<String, MoveError> {
        self.start.movetext(self.navigator.moves())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }

    #[must_use]
    pub fn navigator(&self) -> &MoveNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }
}
