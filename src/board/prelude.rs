//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, Move, MoveError, MoveList, MoveParseError, Piece,
    PgnReplay, SanError, Square, SquareError,
};
