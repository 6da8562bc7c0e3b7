use std::str::FromStr;

use log::warn;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// At least the placement, side, castling and en-passant fields are
    /// required. A missing halfmove clock reads as 0 and a missing fullmove
    /// number as 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::parse_fen_fields(fen);
        if let Err(err) = &result {
            warn!("rejecting FEN '{fen}': {err}");
        }
        result
    }

    fn parse_fen_fields(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(skip @ 1..=8) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank * 8 + file as u8), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::ShortRank {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.set(Color::White, true),
                    'Q' => rights.set(Color::White, false),
                    'k' => rights.set(Color::Black, true),
                    'q' => rights.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        if let Some(text) = parts.get(4) {
            board.halfmove_clock = text.parse().map_err(|_| FenError::InvalidCounter {
                field: "halfmove clock",
                found: (*text).to_string(),
            })?;
        }
        if let Some(text) = parts.get(5) {
            board.fullmove_number = text.parse().map_err(|_| FenError::InvalidCounter {
                field: "fullmove number",
                found: (*text).to_string(),
            })?;
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to six-field FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                if let Some((color, piece)) = self.piece_at(Square(rank * 8 + file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.fen_char(),
            self.castling_rights.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if !mv.is_null() && self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse a coordinate move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        if !self.apply_move(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            });
        }
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
