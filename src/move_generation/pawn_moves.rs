//! Pawn move generation: color-directional advances and diagonal captures.
//!
//! There is no en passant in this rule set, so a diagonal square is only a
//! destination when an enemy piece stands on it. Captures and advances share
//! one output set; the game layer reads occupancy to tell them apart.

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;

pub fn generate_pawn_moves(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    let direction = piece.color.pawn_direction();

    for d_file in [-1, 1] {
        let Some(target) = piece.square.offset(d_file, direction) else {
            continue;
        };
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color != piece.color {
                out.push(target);
            }
        }
    }

    let Some(one_step) = piece.square.offset(0, direction) else {
        return;
    };
    if board.piece_at(one_step).is_some() {
        return;
    }
    out.push(one_step);

    // Double advance only from the pawn's original square, and only when the
    // single-advance square was already empty.
    if !piece.has_moved {
        if let Some(two_step) = one_step.offset(0, direction) {
            if board.piece_at(two_step).is_none() {
                out.push(two_step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};

    #[test]
    fn unmoved_pawn_has_single_and_double_advance() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 3));
        board.place(pawn);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        moves.sort_by_key(|s| (s.file, s.rank));
        assert_eq!(moves, vec![Square::new(3, 1), Square::new(3, 2)]);
    }

    #[test]
    fn moved_pawn_loses_double_advance() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 3));
        pawn.has_moved = true;
        board.place(pawn);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert_eq!(moves, vec![Square::new(3, 2)]);
    }

    #[test]
    fn blocked_first_square_suppresses_both_advances() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 6));
        board.place(pawn);
        board.place(Piece::new(PieceKind::Knight, Color::Black, Square::new(3, 5)));

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn blocked_second_square_still_allows_single_advance() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 6));
        board.place(pawn);
        board.place(Piece::new(PieceKind::Knight, Color::Black, Square::new(3, 4)));

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert_eq!(moves, vec![Square::new(3, 5)]);
    }

    #[test]
    fn diagonals_capture_enemies_only() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, Square::new(3, 3));
        board.place(pawn);
        // Black advances toward increasing rank.
        board.place(Piece::new(PieceKind::Pawn, Color::White, Square::new(2, 4)));
        board.place(Piece::new(PieceKind::Pawn, Color::Black, Square::new(4, 4)));

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        moves.sort_by_key(|s| (s.file, s.rank));
        assert_eq!(
            moves,
            vec![Square::new(2, 4), Square::new(3, 4), Square::new(3, 5)]
        );
    }

    #[test]
    fn empty_diagonal_is_not_a_destination() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 3));
        board.place(pawn);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert!(!moves.contains(&Square::new(2, 2)));
        assert!(!moves.contains(&Square::new(4, 2)));
    }
}
