use log::{debug, trace, warn};

use super::error::MoveError;
use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// Rook home and post-castling squares for a king move onto `king_to`.
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank() * 8;
    if king_to.file() == 6 {
        (Square(rank + 7), Square(rank + 5))
    } else {
        (Square(rank), Square(rank + 3))
    }
}

fn is_castling_shape(piece: Piece, mv: Move) -> bool {
    piece == Piece::King
        && mv.from.rank() == mv.to.rank()
        && mv.from.file().abs_diff(mv.to.file()) == 2
}

impl Board {
    /// Apply a move in place, returning whether it was accepted.
    ///
    /// Special moves are recognised from the move's shape: a king stepping two
    /// files castles and a pawn stepping diagonally onto the en-passant square
    /// captures en passant. The move is executed speculatively and undone if
    /// it leaves the mover's king attacked. A rejected move leaves the board
    /// exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            warn!("rejecting move with off-board square: {mv:?}");
            return false;
        }
        let Some((color, piece)) = self.piece_at(mv.from) else {
            debug!("rejecting {mv}: no piece on {}", mv.from);
            return false;
        };
        if color != self.side_to_move || self.color_on(mv.to) == Some(color) {
            debug!("rejecting {mv}: wrong side or own piece on target");
            return false;
        }

        let reaches_last_rank =
            piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank();
        let promotion_ok = match mv.promotion {
            Some(promo) => reaches_last_rank && promo.is_promotion_target(),
            None => !reaches_last_rank,
        };
        if !promotion_ok {
            debug!("rejecting {mv}: promotion does not match the move");
            return false;
        }

        let castling = is_castling_shape(piece, mv);
        if castling
            && (mv.from != Square(color.back_rank() * 8 + 4)
                || !self.can_castle(color, mv.to.file() > mv.from.file()))
        {
            debug!("rejecting {mv}: castling not available");
            return false;
        }

        let en_passant = piece == Piece::Pawn && self.is_en_passant_capture(mv.from, mv.to, color);
        let capture_sq = if en_passant {
            mv.to.offset(-color.pawn_direction(), 0).unwrap_or(mv.to)
        } else {
            mv.to
        };

        let captured = self.take_piece(capture_sq);
        self.take_piece(mv.from);
        self.set_piece(mv.to, color, mv.promotion.unwrap_or(piece));
        if castling {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            self.take_piece(rook_from);
            self.set_piece(rook_to, color, Piece::Rook);
        }

        if self.is_in_check(color) {
            self.take_piece(mv.to);
            self.set_piece(mv.from, color, piece);
            if let Some((cap_color, cap_piece)) = captured {
                self.set_piece(capture_sq, cap_color, cap_piece);
            }
            if castling {
                let (rook_from, rook_to) = castling_rook_squares(mv.to);
                self.take_piece(rook_to);
                self.set_piece(rook_from, color, Piece::Rook);
            }
            trace!("rejecting {mv}: leaves own king in check");
            return false;
        }

        self.history.push(UnmakeInfo {
            mv,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            captured_piece_info: captured,
            was_en_passant: en_passant,
        });

        self.castling_rights.clear_for_square(mv.from);
        self.castling_rights.clear_for_square(mv.to);

        let double_push = piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.en_passant_target = if double_push {
            mv.from.offset(color.pawn_direction(), 0)
        } else {
            None
        };

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.side_to_move = color.opponent();
        if self.side_to_move == Color::White {
            self.fullmove_number += 1;
        }

        trace!("applied {mv}");
        true
    }

    /// Revert the most recent applied move, returning it.
    ///
    /// Returns `None` and leaves the board untouched when there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let info = self.history.pop()?;
        let mv = info.mv;
        let color = self.side_to_move.opponent();

        self.side_to_move = color;
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;

        let moved = self.take_piece(mv.to).map(|(_, p)| p);
        let piece = if mv.promotion.is_some() {
            Piece::Pawn
        } else {
            moved.unwrap_or(Piece::Pawn)
        };
        self.set_piece(mv.from, color, piece);

        if is_castling_shape(piece, mv) {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            self.take_piece(rook_to);
            self.set_piece(rook_from, color, Piece::Rook);
        }

        if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            let capture_sq = if info.was_en_passant {
                mv.to.offset(-color.pawn_direction(), 0).unwrap_or(mv.to)
            } else {
                mv.to
            };
            self.set_piece(capture_sq, cap_color, cap_piece);
        }

        trace!("undid {mv}");
        Some(mv)
    }

    /// Apply a move only if it is one of the legal moves.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(&mv) || !self.apply_move(mv) {
            return Err(MoveError::Illegal { mv });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn test_rejects_null_and_off_board_moves() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(!board.apply_move(Move::null()));
        assert!(!board.apply_move(Move::new(Square(12), Square(70))));
        assert_eq!(board, before);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_rejects_wrong_side_and_empty_source() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(!board.apply_move(mv("e7e5")));
        assert!(!board.apply_move(mv("e4e5")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejects_pinned_piece_without_side_effects() {
        // Knight on e2 is pinned by the rook on e8
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 3 20");
        let before = board.to_fen();
        assert!(!board.apply_move(mv("e2c3")));
        assert_eq!(board.to_fen(), before);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_rejects_capture_that_exposes_king_and_restores_victim() {
        let mut board = Board::from_fen("4r1k1/8/8/8/8/3p4/4B3/4K3 w - - 0 1");
        let before = board.clone();
        assert!(!board.apply_move(mv("e2d3")));
        assert!(!board.apply_move(mv("e2b5")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_promotion_required_on_last_rank() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        assert!(!board.apply_move(mv("a7a8")));
        assert!(!board.apply_move(Move::with_promotion(Square(48), Square(56), Piece::King)));
        assert!(board.apply_move(mv("a7a8n")));
        assert_eq!(board.piece_at(Square::A8), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(board.apply_move(mv("e1g1")));
        assert_eq!(board.piece_at(Square::F1), Some((Color::White, Piece::Rook)));
        assert_eq!(board.piece_at(Square::H1), None);
        assert_eq!(board.castling_rights().to_fen_field(), "kq");

        assert!(board.apply_move(mv("e8c8")));
        assert_eq!(board.piece_at(Square::D8), Some((Color::Black, Piece::Rook)));
        assert_eq!(board.piece_at(Square::A8), None);
        assert_eq!(board.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");

        board.undo_move();
        board.undo_move();
        assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn test_capture_onto_occupied_ep_square_undoes_in_place() {
        // The FEN names d6 as the en-passant square although a knight stands there
        let fen = "4k3/8/3n4/4P3/8/8/8/4K3 w - d6 0 1";
        let mut board = Board::from_fen(fen);
        assert!(board.apply_move(mv("e5d6")));
        assert!(!board.history()[0].was_en_passant());
        assert_eq!(board.piece_at(Square(43)), Some((Color::White, Piece::Pawn)));

        assert_eq!(board.undo_move(), Some(mv("e5d6")));
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.piece_at(Square(43)), Some((Color::Black, Piece::Knight)));
        assert_eq!(board.piece_at(Square(35)), None);
    }

    #[test]
    fn test_castling_through_check_rejected() {
        // Black rook on f8 covers f1
        let mut board = Board::from_fen("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let before = board.clone();
        assert!(!board.apply_move(mv("e1g1")));
        assert_eq!(board, before);
        assert!(board.apply_move(mv("e1c1")));
    }

    #[test]
    fn test_rook_capture_on_home_square_clears_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1");
        assert!(board.apply_move(mv("g2h1")));
        assert_eq!(board.castling_rights().to_fen_field(), "Qkq");
    }

    #[test]
    fn test_en_passant_capture_and_undo() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        let mut board = Board::from_fen(fen);
        assert!(board.apply_move(mv("e5f6")));
        assert_eq!(board.piece_at("f5".parse().unwrap()), None);
        assert_eq!(
            board.history()[0].captured(),
            Some((Color::Black, Piece::Pawn))
        );
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.undo_move(), Some(mv("e5f6")));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_clocks_and_move_number() {
        let mut board = Board::new();
        assert!(board.apply_move(mv("g1f3")));
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (1, 1));
        assert!(board.apply_move(mv("g8f6")));
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (2, 2));
        assert!(board.apply_move(mv("e2e4")));
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 2));
        board.undo_move();
        board.undo_move();
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (1, 1));
        assert!(!board.white_to_move());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = Board::new();
        assert_eq!(board.undo_move(), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_play_rejects_pseudo_illegal_geometry() {
        let mut board = Board::new();
        // A rook jumping over its own pawn is not a legal move even though
        // it does not expose the king.
        assert_eq!(
            board.play(mv("a1a5")),
            Err(MoveError::Illegal { mv: mv("a1a5") })
        );
        assert!(board.play(mv("e2e4")).is_ok());
    }
}
