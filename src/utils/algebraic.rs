//! Square and bitboard conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square numbering, where `0 == a1` and `63 == h8`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{checked_square, file_of, rank_of, square_mask};
use crate::game_state::chess_types::Square;

/// Convert long algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let &[file, rank] = square.as_bytes() else {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

#[inline]
pub fn algebraic_to_bitboard(square: &str) -> ChessResult<u64> {
    algebraic_to_square(square).map(square_mask)
}

/// Convert a square index (`0..=63`) to long algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    let square = checked_square(i32::from(square))?;
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert a one-hot bitboard to long algebraic notation.
#[inline]
pub fn bitboard_to_algebraic(bitboard: u64) -> ChessResult<String> {
    if bitboard.count_ones() != 1 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "bitboard {bitboard:#018x} must have exactly one set bit"
        )));
    }
    square_to_algebraic(bitboard.trailing_zeros() as Square)
}
