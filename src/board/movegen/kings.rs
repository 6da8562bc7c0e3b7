use super::super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }

        let home = Square(color.back_rank() * 8 + 4);
        if from != home {
            return;
        }
        for kingside in [true, false] {
            if self.can_castle(color, kingside) {
                let to_file = if kingside { 6 } else { 2 };
                moves.push(Move::new(from, Square(color.back_rank() * 8 + to_file)));
            }
        }
    }

    /// Whether `color` may castle on the given wing right now.
    ///
    /// Requires the right, king and rook on their home squares, empty squares
    /// between them, and no enemy attack on the king's start, transit or
    /// destination square.
    pub(crate) fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if !self.castling_rights.has(color, kingside) {
            return false;
        }
        let rank = color.back_rank() * 8;
        let king_sq = Square(rank + 4);
        let rook_file = if kingside { 7 } else { 0 };
        let empty_files: &[u8] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        let safe_files: [u8; 3] = if kingside { [4, 5, 6] } else { [4, 3, 2] };

        if self.piece_at(king_sq) != Some((color, Piece::King))
            || self.piece_at(Square(rank + rook_file)) != Some((color, Piece::Rook))
        {
            return false;
        }
        if !empty_files.iter().all(|&f| self.is_empty(Square(rank + f))) {
            return false;
        }
        let enemy = color.opponent();
        safe_files
            .iter()
            .all(|&f| !self.is_square_attacked(Square(rank + f), enemy))
    }

    /// True if any piece of `by` could capture on `square` right now.
    ///
    /// Independent of whose turn it is: pawn attack direction follows `by`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        if !square.is_valid() {
            return false;
        }

        // Pawns of `by` stand one rank behind the square from their point of view.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(behind, df) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::Knight)))
        {
            return true;
        }

        for &dir in &ROOK_DIRECTIONS {
            if let Some(sq) = self.first_blocker(square, dir) {
                if matches!(self.piece_at(sq), Some((c, Piece::Rook | Piece::Queen)) if c == by) {
                    return true;
                }
            }
        }
        for &dir in &BISHOP_DIRECTIONS {
            if let Some(sq) = self.first_blocker(square, dir) {
                if matches!(self.piece_at(sq), Some((c, Piece::Bishop | Piece::Queen)) if c == by) {
                    return true;
                }
            }
        }

        KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::King)))
    }

    /// Whether `color`'s king is attacked. A missing king is never in check.
    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }

    /// Whether the side to move is in check.
    ///
    /// Positions without a king for the side to move report `false` rather
    /// than failing.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }
}
