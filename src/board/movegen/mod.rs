mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Candidate moves for the side to move, ignoring whether the mover's
    /// own king ends up attacked.
    ///
    /// Castling moves are included only when currently available, since
    /// their availability already depends on attacked squares.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            let Some((piece_color, piece)) = self.piece_at(from) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.generate_slider_moves(from, piece, color, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, color, &mut moves),
            }
        }
        moves
    }

    /// Legal moves for the side to move.
    ///
    /// Each pseudo-legal candidate is applied to a scratch copy of the
    /// position and kept if `apply_move` accepts it.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut scratch = self.detached();
        self.pseudo_legal_moves()
            .into_iter()
            .filter(|&mv| {
                let accepted = scratch.apply_move(mv);
                if accepted {
                    scratch.undo_move();
                }
                accepted
            })
            .collect()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Fifty-move rule, stalemate, or insufficient material.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.is_stalemate() || self.is_insufficient_material()
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            if self.apply_move(mv) {
                nodes += self.perft(depth - 1);
                self.undo_move();
            }
        }
        nodes
    }

    /// Perft split by root move, in generation order.
    pub fn divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut counts = Vec::new();
        if depth == 0 {
            return counts;
        }
        for mv in self.legal_moves() {
            if self.apply_move(mv) {
                counts.push((mv, self.perft(depth - 1)));
                self.undo_move();
            }
        }
        counts
    }
}
