//! Linear move list with a playback cursor.
//!
//! The navigator records moves together with their SAN text and tracks how
//! many of them are currently played on the board. Recording a move while the
//! cursor is behind the end discards the old continuation, even when the new
//! move repeats the next recorded one.

use std::collections::BTreeMap;

use crate::analysis::EngineInfo;
use crate::board::Move;

/// What `MoveNavigator::record` did with a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The cursor was at the end; the move was appended
    Appended,
    /// The recorded continuation was dropped before appending
    Truncated { discarded: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveNavigator {
    moves: Vec<Move>,
    sans: Vec<String>,
    cursor: usize,
    /// Keyed by position index: 0 is the start, n is after the n-th move
    evaluations: BTreeMap<usize, EngineInfo>,
}

impl MoveNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all moves and evaluations.
    pub fn reset(&mut self) {
        self.moves.clear();
        self.sans.clear();
        self.evaluations.clear();
        self.cursor = 0;
    }

    /// Record a move played at the cursor, dropping everything after it.
    pub fn record(&mut self, mv: Move, san: impl Into<String>) -> RecordOutcome {
        let discarded = self.moves.len() - self.cursor;
        if discarded > 0 {
            self.moves.truncate(self.cursor);
            self.sans.truncate(self.cursor);
            let cursor = self.cursor;
            self.evaluations.retain(|&ply, _| ply <= cursor);
        }

        self.moves.push(mv);
        self.sans.push(san.into());
        self.cursor += 1;

        if discarded > 0 {
            RecordOutcome::Truncated { discarded }
        } else {
            RecordOutcome::Appended
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.moves.len()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    /// Advance over the next recorded move and return it.
    pub fn next(&mut self) -> Option<Move> {
        let mv = self.moves.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(mv)
    }

    /// Step back over the last played move and return it.
    pub fn prev(&mut self) -> Option<Move> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.moves[self.cursor])
    }

    /// Moves currently played, oldest first.
    #[must_use]
    pub fn played(&self) -> &[Move] {
        &self.moves[..self.cursor]
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn sans(&self) -> &[String] {
        &self.sans
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Played moves in coordinate notation, as an engine expects them.
    #[must_use]
    pub fn coordinate_moves(&self) -> Vec<String> {
        self.played().iter().map(|mv| mv.to_coordinate()).collect()
    }

    /// Attach an evaluation to the position after `ply` moves.
    pub fn set_evaluation(&mut self, ply: usize, info: EngineInfo) {
        if ply <= self.moves.len() {
            self.evaluations.insert(ply, info);
        }
    }

    #[must_use]
    pub fn evaluation(&self, ply: usize) -> Option<&EngineInfo> {
        self.evaluations.get(&ply)
    }
}
