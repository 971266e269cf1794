//! King step generation over the eight adjacent squares.
//!
//! Castling destinations are a separate concern (see `castling`); they are
//! unioned into the king's move set by the game layer only, so that attack
//! detection can reuse this generator without recursing.

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;

pub fn generate_king_moves(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    for d_file in -1..=1 {
        for d_rank in -1..=1 {
            if d_file == 0 && d_rank == 0 {
                continue;
            }
            let Some(target) = piece.square.offset(d_file, d_rank) else {
                continue;
            };
            match board.piece_at(target) {
                Some(occupant) if occupant.color == piece.color => {}
                _ => out.push(target),
            }
        }
    }
}
