//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-count enumeration against known node counts
//! - `draw.rs` - Draw detection (50-move, stalemate, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness and rejection side effects
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;
