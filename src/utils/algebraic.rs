//! Conversions between algebraic coordinates (e.g. `e4`) and `Square`.
//!
//! The engine's ranks run top-down (rank 0 is Black's back rank), so
//! algebraic rank '1' maps to internal rank 7 and '8' to rank 0.

use crate::board::square::Square;
use crate::chess_errors::ChessErrors;

/// Parse an algebraic coordinate like `"e4"`.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file_index = (file - b'a') as i8;
    let rank_index = (b'8' - rank) as i8;
    Ok(Square::new(file_index, rank_index))
}

/// Format a square as an algebraic coordinate like `"e4"`.
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file as u8);
    let rank_char = char::from(b'8' - square.rank as u8);
    format!("{file_char}{rank_char}")
}
