//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! Parsing renders every legal move and compares text, so anything
//! `move_to_san` can produce is accepted and nothing else is.
//!
//! # Examples
//! ```
//! use chess_core::board::Board;
//!
//! let board = Board::new();
//! let mv = board.parse_san("e4").unwrap();
//! assert_eq!(board.move_to_san(&mv), "e4");
//! ```

use super::error::SanError;
use super::{Board, Move, MoveList, Piece};

impl Board {
    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nf3", "Bxc6+", "O-O-O", "e8=Q#". A move
    /// whose origin is empty falls back to coordinate text.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        if self.piece_at(mv.from()).is_none() {
            return mv.to_coordinate();
        }

        let mut san = self.san_body(*mv, &self.legal_moves());

        let mut after = self.detached();
        if after.apply_move(*mv) {
            if after.is_checkmate() {
                san.push('#');
            } else if after.is_check() {
                san.push('+');
            }
        }
        san
    }

    /// SAN text without the check or mate suffix.
    fn san_body(&self, mv: Move, legal: &MoveList) -> String {
        let Some((_, piece)) = self.piece_at(mv.from()) else {
            return mv.to_coordinate();
        };

        if piece == Piece::King && mv.from().file().abs_diff(mv.to().file()) == 2 {
            return if mv.to().file() > mv.from().file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let is_capture = !self.is_empty(mv.to())
            || (piece == Piece::Pawn && self.is_en_passant_capture(mv.from(), mv.to(), self.side_to_move));

        let mut san = String::new();
        if let Some(letter) = piece.san_letter() {
            san.push(letter);
            let (needs_file, needs_rank) = self.needs_disambiguation(mv, piece, legal);
            if needs_file {
                san.push(char::from(b'a' + mv.from().file()));
            }
            if needs_rank {
                san.push(char::from(b'1' + mv.from().rank()));
            }
        } else if is_capture {
            // Pawn captures include the file
            san.push(char::from(b'a' + mv.from().file()));
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&mv.to().to_string());

        if let Some(promo) = mv.promotion() {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }
        san
    }

    /// Determine if disambiguation is needed for a piece move.
    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: Move, piece: Piece, legal: &MoveList) -> (bool, bool) {
        let rivals: Vec<&Move> = legal
            .iter()
            .filter(|m| {
                m.to() == mv.to() && m.from() != mv.from() && self.piece_on(m.from()) == Some(piece)
            })
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|m| m.from().file() == mv.from().file());
        let same_rank = rivals.iter().any(|m| m.from().rank() == mv.from().rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Trailing check and mate markers are ignored, and "0-0" / "0-0-0" are
    /// read as castling.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let trimmed = san.trim();
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }

        let body = match trimmed.trim_end_matches(['+', '#']) {
            "0-0" => "O-O",
            "0-0-0" => "O-O-O",
            other => other,
        };

        let legal = self.legal_moves();
        legal
            .iter()
            .copied()
            .find(|&mv| self.san_body(mv, &legal) == body)
            .ok_or_else(|| SanError::NoMatchingMove {
                san: trimmed.to_string(),
            })
    }

    /// Parse a SAN move and apply it in one call.
    pub fn make_move_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        if !self.apply_move(mv) {
            return Err(SanError::NoMatchingMove {
                san: san.trim().to_string(),
            });
        }
        Ok(mv)
    }
}
