//! Engine `info` line parsing and score handling.

use std::fmt;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move};

/// Centipawn value a mate-in-0 normalises to.
pub const MATE_SCORE: i32 = 10_000;

/// An engine score from the point of view of a given side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Score {
    /// Centipawns
    Cp(i32),
    /// Mate in N moves; negative when the side is getting mated
    Mate(i32),
}

impl Score {
    /// Collapse to centipawns, mapping mate in N to `±10000 - 100 * N`.
    #[must_use]
    pub fn centipawns(self) -> i32 {
        match self {
            Score::Cp(cp) => cp,
            Score::Mate(n) => {
                let sign = if n > 0 { 1 } else { -1 };
                sign * MATE_SCORE - n.saturating_mul(100)
            }
        }
    }

    /// Re-express a score given for `side_to_move` from White's point of view.
    #[must_use]
    pub fn white_relative(self, side_to_move: Color) -> Score {
        match side_to_move {
            Color::White => self,
            Color::Black => self.negate(),
        }
    }

    #[must_use]
    pub fn negate(self) -> Score {
        match self {
            Score::Cp(cp) => Score::Cp(cp.saturating_neg()),
            Score::Mate(n) => Score::Mate(n.saturating_neg()),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Cp(cp) => {
                let sign = if cp < 0 { '-' } else { '+' };
                let abs = cp.unsigned_abs();
                write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
            }
            Score::Mate(n) => write!(f, "#{n}"),
        }
    }
}

/// Whether the reported score is exact or only a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    #[default]
    Exact,
    Lower,
    Upper,
}

/// What the core keeps from one engine `info` line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EngineInfo {
    pub depth: Option<u32>,
    /// Score for the side to move in the analysed position
    pub score: Option<Score>,
    pub bound: Bound,
    /// Principal variation in coordinate notation
    pub pv: Vec<Move>,
}

impl EngineInfo {
    /// First move of the principal variation.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.pv.first().copied()
    }
}

/// Parse an engine `info` line.
///
/// Returns `None` for lines that are not `info` lines or carry neither a
/// score nor a principal variation. PV parsing stops at the first token that
/// is not a coordinate move.
#[must_use]
pub fn parse_info_line(line: &str) -> Option<EngineInfo> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.first() != Some(&"info") {
        return None;
    }

    let mut info = EngineInfo::default();

    if let Some(idx) = parts.iter().position(|&p| p == "score") {
        let value = parts.get(idx + 2).and_then(|v| v.parse::<i32>().ok());
        info.score = match (parts.get(idx + 1).copied(), value) {
            (Some("cp"), Some(v)) => Some(Score::Cp(v)),
            (Some("mate"), Some(v)) => Some(Score::Mate(v)),
            _ => {
                debug!("unparsable score in info line: {line}");
                None
            }
        };
        info.bound = match parts.get(idx + 3).copied() {
            Some("lowerbound") => Bound::Lower,
            Some("upperbound") => Bound::Upper,
            _ => Bound::Exact,
        };
    }

    if let Some(idx) = parts.iter().position(|&p| p == "depth") {
        info.depth = parts.get(idx + 1).and_then(|v| v.parse().ok());
    }

    if let Some(idx) = parts.iter().position(|&p| p == "pv") {
        info.pv = parts[idx + 1..]
            .iter()
            .map_while(|text| text.parse::<Move>().ok())
            .collect();
    }

    if info.score.is_none() && info.pv.is_empty() {
        debug!("ignoring info line without score or pv: {line}");
        return None;
    }
    Some(info)
}
