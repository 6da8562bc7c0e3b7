//! Chess board representation and rules.
//!
//! A 64-cell mailbox position with full rules support: castling, en passant,
//! promotions, check detection, and FEN, SAN and PGN conversion. Legality is
//! decided by applying a move speculatively and rolling it back when it
//! leaves the mover's king attacked.
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod pgn;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, MoveParseError, SanError, SquareError};
pub use pgn::PgnReplay;
pub use state::{Board, UnmakeInfo};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

pub use state::STARTING_FEN;
pub(crate) use types::PROMOTION_PIECES;
