//! Piece identity: color, kind, and per-piece state.

use crate::board::square::Square;

/// Side to move / piece ownership.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank this color's pieces start on (kings, rooks for castling).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank delta a pawn of this color advances by. White moves toward
    /// rank 0, Black toward rank 7.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind. Movement rules are selected by exhaustive matching on this
/// enum, so adding a variant forces every dispatch site to handle it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board.
///
/// `has_moved` gates the pawn double advance and castling eligibility. It is
/// set the first time the piece moves and nothing ever clears it, even if the
/// piece later returns to its original square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn color_conventions() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::White.back_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 7);
    }
}
