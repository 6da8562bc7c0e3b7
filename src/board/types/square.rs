//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> Option<u8> {
    ('a'..='h').contains(&file).then(|| file as u8 - b'a')
}

pub(crate) fn rank_to_index(rank: char) -> Option<u8> {
    ('1'..='8').contains(&rank).then(|| rank as u8 - b'1')
}

/// A square on the chess board, indexed rank-major from a1 = 0 to h8 = 63.
///
/// Values of 64 and above are not on the board. `Square::NONE` is the
/// canonical "no square" sentinel carried by the null move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    pub const NONE: Square = Square(64);

    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Create a square from an index, or `None` if it is off the board.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns true if the index names one of the 64 board squares.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a rank/file delta, returning `None` when the step leaves the board.
    ///
    /// The boundary is checked on both axes before moving, so a step never
    /// wraps from the h-file onto the a-file of the next rank.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, df: i8) -> Option<Self> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// All 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank * 8 + file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file_to_index(f).ok_or_else(invalid)?;
        let rank = rank_to_index(r).ok_or_else(invalid)?;
        Ok(Square(rank * 8 + file))
    }
}
