//! Knight move generation over the eight fixed offsets.

use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::board::square::Square;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn generate_knight_moves(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    for &(d_file, d_rank) in &KNIGHT_OFFSETS {
        let Some(target) = piece.square.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};

    #[test]
    fn knight_in_center_has_eight_moves() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::White, Square::new(3, 3));
        board.place(knight);

        let mut moves = Vec::new();
        generate_knight_moves(&board, &knight, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_corner_is_clipped_to_two() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black, Square::new(0, 0));
        board.place(knight);

        let mut moves = Vec::new();
        generate_knight_moves(&board, &knight, &mut moves);
        moves.sort_by_key(|s| (s.file, s.rank));
        assert_eq!(moves, vec![Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn own_pieces_block_but_enemies_are_captured() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::White, Square::new(0, 0));
        board.place(knight);
        board.place(Piece::new(PieceKind::Pawn, Color::White, Square::new(1, 2)));
        board.place(Piece::new(PieceKind::Pawn, Color::Black, Square::new(2, 1)));

        let mut moves = Vec::new();
        generate_knight_moves(&board, &knight, &mut moves);
        assert_eq!(moves, vec![Square::new(2, 1)]);
    }
}
