//! Ray-walking generation for rooks, bishops, and queens.

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;

/// Unit directions for rook-style movement.
pub const LINEAR_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Unit directions for bishop-style movement.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks each direction from the piece's square until the board edge, an own
/// piece (excluded), or an enemy piece (included as a capture, then stop).
pub fn generate_sliding_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in directions {
        let mut current = piece.square;
        while let Some(next) = current.offset(d_file, d_rank) {
            match board.piece_at(next) {
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
                None => {
                    out.push(next);
                    current = next;
                }
            }
        }
    }
}
