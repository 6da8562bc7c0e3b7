use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
