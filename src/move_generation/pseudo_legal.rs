//! Pseudo-legal move dispatch by piece kind.
//!
//! A pseudo-legal destination obeys the piece's movement pattern and
//! occupancy rules but ignores whether the move would expose the mover's own
//! king. The match below is exhaustive over `PieceKind`, so every kind is
//! guaranteed a movement rule at compile time.

use crate::board::board::Board;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::sliding_moves::{
    generate_sliding_moves, DIAGONAL_DIRECTIONS, LINEAR_DIRECTIONS,
};

/// All pseudo-legal destinations for one piece. Castling is not included
/// here; attack detection depends on that exclusion to stay non-recursive.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, piece, &mut out),
        PieceKind::Bishop => generate_sliding_moves(board, piece, &DIAGONAL_DIRECTIONS, &mut out),
        PieceKind::Rook => generate_sliding_moves(board, piece, &LINEAR_DIRECTIONS, &mut out),
        PieceKind::Queen => {
            generate_sliding_moves(board, piece, &LINEAR_DIRECTIONS, &mut out);
            generate_sliding_moves(board, piece, &DIAGONAL_DIRECTIONS, &mut out);
        }
        PieceKind::King => generate_king_moves(board, piece, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Color;

    #[test]
    fn queen_combines_linear_and_diagonal_rays() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::White, Square::new(3, 3));
        board.place(queen);

        let moves = pseudo_legal_moves(&board, &queen);
        // 14 linear + 13 diagonal destinations from (3, 3).
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn no_destination_is_own_occupied_or_off_board() {
        let board = Board::standard();
        for piece in board.pieces() {
            for dest in pseudo_legal_moves(&board, piece) {
                assert!((0..=7).contains(&dest.file) && (0..=7).contains(&dest.rank));
                if let Some(occupant) = board.piece_at(dest) {
                    assert_ne!(
                        occupant.color, piece.color,
                        "{:?} at {:?} may not land on its own piece",
                        piece.kind, piece.square
                    );
                }
            }
        }
    }
}
