//! Move-quality labels from consecutive evaluations.

use std::fmt;

use crate::board::{Color, Move};

use super::info::EngineInfo;

/// Centipawn loss ceilings for each label, best first.
pub const BEST_THRESHOLD: i32 = 0;
pub const EXCELLENT_THRESHOLD: i32 = 20;
pub const GOOD_THRESHOLD: i32 = 50;
pub const INACCURACY_THRESHOLD: i32 = 100;
pub const MISTAKE_THRESHOLD: i32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Best,
    Excellent,
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl Classification {
    /// Label for a centipawn loss from the mover's point of view.
    #[must_use]
    pub fn from_loss(loss: i32) -> Self {
        match loss {
            l if l <= BEST_THRESHOLD => Classification::Best,
            l if l <= EXCELLENT_THRESHOLD => Classification::Excellent,
            l if l <= GOOD_THRESHOLD => Classification::Good,
            l if l <= INACCURACY_THRESHOLD => Classification::Inaccuracy,
            l if l <= MISTAKE_THRESHOLD => Classification::Mistake,
            _ => Classification::Blunder,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Classification::Best => "Best",
            Classification::Excellent => "Excellent",
            Classification::Good => "Good",
            Classification::Inaccuracy => "Inaccuracy",
            Classification::Mistake => "Mistake",
            Classification::Blunder => "Blunder",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade `played` by comparing the evaluation before it with the one after.
///
/// `before` was computed with `mover` to move and `after` with the opponent
/// to move; both scores are side-to-move relative as engines report them.
/// Playing the engine's first PV move is always `Best`. Returns `None` when
/// either evaluation has no score.
#[must_use]
pub fn classify(
    before: &EngineInfo,
    after: &EngineInfo,
    played: Move,
    mover: Color,
) -> Option<Classification> {
    if before.best_move() == Some(played) {
        return Some(Classification::Best);
    }

    let prev = before.score?.white_relative(mover).centipawns();
    let curr = after.score?.white_relative(mover.opponent()).centipawns();

    let loss = match mover {
        Color::White => prev.saturating_sub(curr),
        Color::Black => curr.saturating_sub(prev),
    };
    Some(Classification::from_loss(loss))
}
