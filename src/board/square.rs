//! Board coordinates with bounded offset arithmetic.
//!
//! Squares follow the screen-oriented convention of the presentation shell:
//! rank 0 is Black's back rank, rank 7 is White's. Off-board coordinates are
//! never stored in a `Square`; candidate destinations are filtered through
//! `offset` during move generation.

/// A board coordinate pair. Both `file` and `rank` are always in `0..=7`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    /// Builds a square from in-range coordinates.
    ///
    /// Out-of-range coordinates are a caller contract violation, not a
    /// recoverable game condition.
    #[inline]
    pub fn new(file: i8, rank: i8) -> Self {
        assert!(
            (0..=7).contains(&file) && (0..=7).contains(&rank),
            "square coordinates out of range: ({file}, {rank})"
        );
        Square { file, rank }
    }

    /// Shifts this square by a file/rank delta, or `None` when the result
    /// would fall off the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file + d_file;
        let rank = self.rank + d_rank;
        if (0..=7).contains(&file) && (0..=7).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));

        let far = Square::new(7, 7);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-1, -1), Some(Square::new(6, 6)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn constructing_off_board_square_panics() {
        let _ = Square::new(8, 0);
    }
}
