//! Chess rules core for a game viewer.
//!
//! [`board`] holds the position, move generation and notation. [`navigator`]
//! and [`game`] track a played line with a cursor, and [`analysis`] speaks
//! the text protocol of an external evaluation engine.

pub mod analysis;
pub mod board;
pub mod game;
pub mod navigator;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{GameSession, GameStatus};
pub use navigator::{MoveNavigator, RecordOutcome};
