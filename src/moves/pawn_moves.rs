use crate::game_state::bitboard::{
    NOT_FILE_A, NOT_FILE_H, RANK_1, RANK_2, RANK_3, RANK_6, RANK_7, RANK_8,
};
use crate::game_state::chess_types::Color;

/// Shift a whole bitboard by a signed square offset.
#[inline]
pub const fn shift(bitboard: u64, offset: i8) -> u64 {
    if offset >= 0 {
        bitboard << offset
    } else {
        bitboard >> (-offset)
    }
}

#[inline]
pub const fn forward_offset(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}

/// Diagonal capture shifts as `(offset, source mask)`. The mask drops pawns
/// that would wrap: the a-file before a shift toward the a-file, the h-file
/// before a shift toward the h-file.
#[inline]
pub const fn capture_shifts(color: Color) -> [(i8, u64); 2] {
    match color {
        Color::Light => [(7, NOT_FILE_A), (9, NOT_FILE_H)],
        Color::Dark => [(-9, NOT_FILE_A), (-7, NOT_FILE_H)],
    }
}

#[inline]
pub const fn home_rank(color: Color) -> u64 {
    match color {
        Color::Light => RANK_2,
        Color::Dark => RANK_7,
    }
}

/// Rank on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u64 {
    match color {
        Color::Light => RANK_8,
        Color::Dark => RANK_1,
    }
}

/// Rank an en-passant target must lie on for `color` to capture onto it.
#[inline]
pub const fn en_passant_rank(color: Color) -> u64 {
    match color {
        Color::Light => RANK_6,
        Color::Dark => RANK_3,
    }
}

#[inline]
pub const fn single_pushes(color: Color, pawns: u64, empty: u64) -> u64 {
    shift(pawns, forward_offset(color)) & empty
}

/// Two-square pushes from the home rank; both the crossed and the landing
/// squares must be empty.
#[inline]
pub const fn double_pushes(color: Color, pawns: u64, empty: u64) -> u64 {
    let crossed = single_pushes(color, pawns & home_rank(color), empty);
    shift(crossed, forward_offset(color)) & empty
}

/// Every square attacked diagonally by `pawns`.
#[inline]
pub const fn pawn_attack_span(color: Color, pawns: u64) -> u64 {
    let [(left, left_mask), (right, right_mask)] = capture_shifts(color);
    shift(pawns & left_mask, left) | shift(pawns & right_mask, right)
}
