//! Attack and check detection.
//!
//! A square is attacked when any enemy piece has it among its pseudo-legal
//! destinations. This deliberately ignores legality filtering and castling:
//! consulting either from here would recurse back into check detection.

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::square::Square;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

/// True when any piece of `attacker_color` pseudo-legally reaches `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|piece| pseudo_legal_moves(board, piece).contains(&square))
}

/// True when `color`'s king stands on an attacked square. A board without
/// that king (custom test setups) reports no check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_by_kind_and_color(PieceKind::King, color) {
        Some(king) => is_square_attacked(board, king.square, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Piece;

    #[test]
    fn rook_attacks_along_open_lines_only() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::new(2, 2)));

        assert!(is_square_attacked(&board, Square::new(2, 7), Color::Black));
        assert!(is_square_attacked(&board, Square::new(7, 2), Color::Black));
        assert!(!is_square_attacked(&board, Square::new(3, 3), Color::Black));
    }

    #[test]
    fn pawn_controls_only_occupied_diagonals() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::Pawn, Color::Black, Square::new(3, 3)));
        // The diagonal is empty, so the pawn does not control it under the
        // pseudo-legal definition of attack.
        assert!(!is_square_attacked(&board, Square::new(2, 4), Color::Black));

        board.place(Piece::new(PieceKind::Knight, Color::White, Square::new(2, 4)));
        assert!(is_square_attacked(&board, Square::new(2, 4), Color::Black));
    }

    #[test]
    fn check_matches_direct_enumeration() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::new(4, 7)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::new(4, 0)));

        let king_square = Square::new(4, 7);
        let enumerated = board
            .pieces_of(Color::Black)
            .any(|piece| pseudo_legal_moves(&board, piece).contains(&king_square));
        assert!(enumerated);
        assert_eq!(is_king_in_check(&board, Color::White), enumerated);

        // Interpose a blocker and both answers flip together.
        board.place(Piece::new(PieceKind::Bishop, Color::White, Square::new(4, 4)));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::empty();
        assert!(!is_king_in_check(&board, Color::White));
    }
}
