use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(moves, from, one, color);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    push_pawn_move(moves, from, target, color);
                }
                None if self.is_en_passant_capture(from, target, color) => {
                    moves.push(Move::new(from, target));
                }
                _ => {}
            }
        }
    }

    /// A diagonal pawn step onto the empty en-passant square, with the enemy
    /// pawn that just double-stepped standing behind it.
    pub(crate) fn is_en_passant_capture(&self, from: Square, to: Square, color: Color) -> bool {
        if self.en_passant_target != Some(to) || from.file() == to.file() || !self.is_empty(to) {
            return false;
        }
        to.offset(-color.pawn_direction(), 0)
            .and_then(|sq| self.piece_at(sq))
            == Some((color.opponent(), Piece::Pawn))
    }
}

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::with_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
