use super::super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Ray-cast moves for a bishop, rook or queen.
    ///
    /// Each ray stops at the board edge or at the first occupied square; that
    /// square is included only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        color: Color,
        moves: &mut MoveList,
    ) {
        for &(dr, df) in slider_directions(piece) {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.color_on(next) {
                    None => moves.push(Move::new(from, next)),
                    Some(other) => {
                        if other != color {
                            moves.push(Move::new(from, next));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// First occupied square along a ray, if any.
    pub(crate) fn first_blocker(&self, from: Square, (dr, df): (i8, i8)) -> Option<Square> {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            if !self.is_empty(next) {
                return Some(next);
            }
            current = next;
        }
        None
    }
}

fn slider_directions(piece: Piece) -> &'static [(i8, i8)] {
    const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
        ROOK_DIRECTIONS[0],
        ROOK_DIRECTIONS[1],
        ROOK_DIRECTIONS[2],
        ROOK_DIRECTIONS[3],
        BISHOP_DIRECTIONS[0],
        BISHOP_DIRECTIONS[1],
        BISHOP_DIRECTIONS[2],
        BISHOP_DIRECTIONS[3],
    ];
    match piece {
        Piece::Bishop => &BISHOP_DIRECTIONS,
        Piece::Rook => &ROOK_DIRECTIONS,
        Piece::Queen => &QUEEN_DIRECTIONS,
        Piece::Pawn | Piece::Knight | Piece::King => &[],
    }
}
