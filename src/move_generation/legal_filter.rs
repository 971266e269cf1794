//! Self-check legality filtering via copy-simulate-discard.
//!
//! Each candidate destination is simulated on an independent clone of the
//! board; the clone is dropped regardless of outcome, so no restoration
//! bookkeeping can ever leave the live board corrupted.

use crate::board::board::Board;
use crate::board::piece::{Color, Piece};
use crate::board::square::Square;
use crate::move_generation::attack_checks::is_king_in_check;

/// True when moving the piece on `from` to `to` would leave `mover`'s own
/// king in check.
pub fn would_expose_own_king(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    let mut hypothetical = board.clone();
    hypothetical.move_piece(from, to);
    is_king_in_check(&hypothetical, mover)
}

/// Narrows a pseudo-legal destination set to the legal subset. Every
/// candidate is simulated independently.
pub fn filter_self_check_moves(board: &Board, piece: &Piece, candidates: Vec<Square>) -> Vec<Square> {
    candidates
        .into_iter()
        .filter(|&dest| !would_expose_own_king(board, piece.square, dest, piece.color))
        .collect()
}
