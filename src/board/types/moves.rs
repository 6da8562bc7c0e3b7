//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move as a plain (from, to, promotion) triple.
///
/// Special moves carry no flags: castling is a king move of two files and
/// en passant is a pawn landing on the en-passant square. Equality is
/// structural, so two promotions to the same square differ by piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    /// Create a move without promotion
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// The "no move" sentinel. Never applied; `apply_move` rejects it.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square::NONE,
            to: Square::NONE,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.from.0 == Square::NONE.0
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Coordinate text as exchanged with an external engine ("e2e4", "e7e8q").
    #[must_use]
    pub fn to_coordinate(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate text without consulting a position.
    ///
    /// "0000" yields the null move. Use `Board::parse_move` to also check
    /// legality.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0000" {
            return Ok(Move::null());
        }
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                let piece = Piece::from_char(c)
                    .filter(|p| p.is_promotion_target())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(piece)
            }
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// Ordered list of moves produced by the generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_coordinate_text() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.to_string(), "e2e4");
        let promo = Move::with_promotion(sq("e7"), sq("e8"), Piece::Queen);
        assert_eq!(promo.to_coordinate(), "e7e8q");
        assert_eq!(Move::null().to_string(), "0000");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("e2e4".parse::<Move>().unwrap(), Move::new(sq("e2"), sq("e4")));
        assert_eq!(
            "a7a8n".parse::<Move>().unwrap(),
            Move::with_promotion(sq("a7"), sq("a8"), Piece::Knight)
        );
        assert!("0000".parse::<Move>().unwrap().is_null());
    }

    #[test]
    fn test_parse_coordinate_errors() {
        assert_eq!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            "z9e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }

    #[test]
    fn test_promotion_is_part_of_equality() {
        let q = Move::with_promotion(sq("b7"), sq("b8"), Piece::Queen);
        let n = Move::with_promotion(sq("b7"), sq("b8"), Piece::Knight);
        assert_ne!(q, n);
        assert_ne!(q, Move::new(sq("b7"), sq("b8")));
    }
}
