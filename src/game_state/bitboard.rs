//! Elementary bitboard operations and square-indexing conventions.
//!
//! Bit `i` of a `u64` represents square `i`, with `0 == a1`, `7 == h1` and
//! `63 == h8`. Checked helpers reject indices outside the board before any
//! shift is performed.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

pub const EMPTY: u64 = 0;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;
pub const NOT_FILE_A: u64 = !FILE_A;
pub const NOT_FILE_H: u64 = !FILE_H;

pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Validate a raw index and narrow it to a `Square`.
#[inline]
pub fn checked_square(index: i32) -> ChessResult<Square> {
    if (0..64).contains(&index) {
        Ok(index as Square)
    } else {
        Err(ChessError::InvalidSquare(index))
    }
}

/// One-hot mask for a square that is already known to be on the board.
#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub fn set_bit(bitboard: &mut u64, square: Square) {
    *bitboard |= square_mask(square);
}

#[inline]
pub fn clear_bit(bitboard: &mut u64, square: Square) {
    *bitboard &= !square_mask(square);
}

#[inline]
pub const fn is_occupied(bitboard: u64, square: Square) -> bool {
    bitboard & square_mask(square) != 0
}

/// Lowest set square, or `None` for an empty board.
#[inline]
pub const fn first_square(bitboard: u64) -> Option<Square> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.trailing_zeros() as Square)
    }
}

/// Iterator over the set squares of a bitboard, lowest first.
#[derive(Debug, Clone, Copy)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = first_square(self.0)?;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[inline]
pub const fn squares(bitboard: u64) -> Squares {
    Squares(bitboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_square_rejects_out_of_range_indices() {
        assert_eq!(checked_square(0), Ok(0));
        assert_eq!(checked_square(63), Ok(63));
        assert_eq!(checked_square(64), Err(ChessError::InvalidSquare(64)));
        assert_eq!(checked_square(-1), Err(ChessError::InvalidSquare(-1)));
    }

    #[test]
    fn set_and_clear_bits() {
        let mut bb = EMPTY;
        set_bit(&mut bb, 28);
        assert!(is_occupied(bb, 28));
        assert!(!is_occupied(bb, 27));
        clear_bit(&mut bb, 28);
        assert_eq!(bb, EMPTY);
    }

    #[test]
    fn squares_iterates_lowest_first() {
        let bb = square_mask(63) | square_mask(0) | square_mask(12);
        assert_eq!(squares(bb).collect::<Vec<_>>(), vec![0, 12, 63]);
        assert_eq!(first_square(EMPTY), None);
    }

    #[test]
    fn file_and_rank_follow_a1_origin() {
        assert_eq!((file_of(0), rank_of(0)), (0, 0));
        assert_eq!((file_of(63), rank_of(63)), (7, 7));
        assert_eq!((file_of(12), rank_of(12)), (4, 1));
        assert_eq!(FILE_A & square_mask(56), square_mask(56));
        assert_eq!(FILE_H & square_mask(7), square_mask(7));
    }
}
