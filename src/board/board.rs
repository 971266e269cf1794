//! 8x8 board grid and placement primitives.
//!
//! The board exclusively owns its pieces. Slots are indexed `[file][rank]`
//! with rank 0 as Black's back rank. Invariant: a stored piece's `square`
//! field always equals the slot it occupies; `move_piece` maintains this
//! atomically. None of these primitives perform legality checks — that is
//! the move-generation pipeline's job.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board, used by tests and custom setups.
    pub fn empty() -> Self {
        Board {
            slots: [[None; 8]; 8],
        }
    }

    /// A board with the 32 standard pieces on their starting squares:
    /// pawns on ranks 1/6, back ranks 0/7, queens on file 3, kings on file 4.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as i8;
            board.place(Piece::new(kind, Color::Black, Square::new(file, 0)));
            board.place(Piece::new(kind, Color::White, Square::new(file, 7)));
        }
        for file in 0..8 {
            board.place(Piece::new(PieceKind::Pawn, Color::Black, Square::new(file, 1)));
            board.place(Piece::new(PieceKind::Pawn, Color::White, Square::new(file, 6)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.slots[square.file as usize][square.rank as usize].as_ref()
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.slots[square.file as usize][square.rank as usize].as_mut()
    }

    /// Direct slot mutation: puts `piece` on its own `square`, overwriting
    /// whatever occupied the slot.
    #[inline]
    pub fn place(&mut self, piece: Piece) {
        self.slots[piece.square.file as usize][piece.square.rank as usize] = Some(piece);
    }

    /// Clears a slot, returning the piece that occupied it.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slots[square.file as usize][square.rank as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning any captured occupant of
    /// `to`. The caller is responsible for recognizing the capture; this
    /// primitive only keeps the slot/square invariant intact.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self
            .remove(from)
            .expect("move_piece requires a piece on the source square");
        piece.square = to;
        let captured = self.remove(to);
        self.place(piece);
        captured
    }

    /// Finds the unique piece of the given kind and color, scanning the
    /// grid. Used to locate kings; result is unspecified if duplicates
    /// exist, which cannot happen for kings under legal play.
    pub fn find_by_kind_and_color(&self, kind: PieceKind, color: Color) -> Option<&Piece> {
        self.pieces()
            .find(|piece| piece.kind == kind && piece.color == color)
    }

    /// Iterates over every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten().filter_map(|slot| slot.as_ref())
    }

    /// Iterates over every piece of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color == color)
    }
}
