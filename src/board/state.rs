use super::{CastlingRights, Color, Move, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything needed to reverse one applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    /// Includes a pawn taken en passant, which did not stand on `mv.to`
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    /// The capture happened behind `mv.to`
    pub(crate) was_en_passant: bool,
}

impl UnmakeInfo {
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured_piece_info
    }

    #[must_use]
    pub fn was_en_passant(&self) -> bool {
        self.was_en_passant
    }
}

/// A full game position plus the undo stack of the moves that led to it.
///
/// The board is a 64-cell mailbox indexed by `Square`. It is owned by one
/// game session and mutated in place; it is not meant to be shared.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<UnmakeInfo>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.set_piece(Square(file), Color::White, piece);
            board.set_piece(Square(56 + file), Color::Black, piece);
            board.set_piece(Square(8 + file), Color::White, Piece::Pawn);
            board.set_piece(Square(48 + file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, white to move, clocks at 0 and 1.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Copy of the position without its undo history.
    #[must_use]
    pub(crate) fn detached(&self) -> Self {
        Board {
            cells: self.cells,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.index()] = Some((color, piece));
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.index()].take()
    }

    /// Piece and color on a square. Off-board squares are always empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells.get(sq.index()).copied().flatten()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Snapshots of the applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[UnmakeInfo] {
        &self.history
    }

    /// The most recently applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|info| info.mv)
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Returns true for bare kings and king plus one minor piece against a bare king.
    ///
    /// Any pawn, rook or queen, or more than one minor piece in total, means
    /// mating material may remain.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for &(_, piece) in self.cells.iter().flatten() {
            if piece.is_minor() {
                minors += 1;
            } else if piece != Piece::King {
                return false;
            }
        }
        minors <= 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Positions compare equal when every FEN-visible field matches; the undo
/// history is not part of the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}
