//! Castling eligibility, computed from the king's perspective.
//!
//! A castling destination exists when the king is not in check, king and
//! rook are both unmoved on their original squares, every square strictly
//! between them is empty, and neither the king's step square nor its landing
//! square is attacked. Only the king's own path is attack-checked; the
//! rook's remaining path does not need to be safe.

use crate::board::board::Board;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::move_generation::attack_checks::is_square_attacked;

struct CastlingSide {
    rook_file: i8,
    between_files: &'static [i8],
    /// The king's step and landing files, both of which must be unattacked.
    king_path_files: [i8; 2],
    king_target_file: i8,
}

const KINGSIDE: CastlingSide = CastlingSide {
    rook_file: 7,
    between_files: &[5, 6],
    king_path_files: [5, 6],
    king_target_file: 6,
};

const QUEENSIDE: CastlingSide = CastlingSide {
    rook_file: 0,
    between_files: &[1, 2, 3],
    king_path_files: [3, 2],
    king_target_file: 2,
};

/// Castling destinations for a king. Empty unless every eligibility
/// condition holds for at least one side.
pub fn castling_moves(board: &Board, king: &Piece) -> Vec<Square> {
    debug_assert_eq!(king.kind, PieceKind::King);

    let mut out = Vec::new();
    let rank = king.color.back_rank();
    if king.has_moved || king.square != Square::new(4, rank) {
        return out;
    }

    let enemy = king.color.opposite();
    if is_square_attacked(board, king.square, enemy) {
        return out;
    }

    for side in [KINGSIDE, QUEENSIDE] {
        let rook_square = Square::new(side.rook_file, rank);
        let rook_eligible = matches!(
            board.piece_at(rook_square),
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        );
        if !rook_eligible {
            continue;
        }

        let path_clear = side
            .between_files
            .iter()
            .all(|&file| board.piece_at(Square::new(file, rank)).is_none());
        if !path_clear {
            continue;
        }

        let king_path_safe = side
            .king_path_files
            .iter()
            .all(|&file| !is_square_attacked(board, Square::new(file, rank), enemy));
        if king_path_safe {
            out.push(Square::new(side.king_target_file, rank));
        }
    }

    out
}

/// Rook relocation for a performed castle, keyed by the king's landing file:
/// kingside rook goes from file 7 to 5, queenside from file 0 to 3.
pub fn rook_castling_vector(king_target: Square) -> (Square, Square) {
    assert!(
        king_target.file == 6 || king_target.file == 2,
        "not a castling destination: ({}, {})",
        king_target.file,
        king_target.rank
    );
    if king_target.file == 6 {
        (
            Square::new(7, king_target.rank),
            Square::new(5, king_target.rank),
        )
    } else {
        (
            Square::new(0, king_target.rank),
            Square::new(3, king_target.rank),
        )
    }
}
