//! Terminal-oriented board and bitboard dumps.
//!
//! Debug helpers only; nothing in move generation depends on them. Rank 8 is
//! printed first, so the output reads like a diagram from Light's side.

use crate::game_state::{board_state::BoardState, chess_types::*};

/// Render a raw bitboard as an 8x8 grid of `1` (set) and `.` (clear).
pub fn render_bitboard(bitboard: u64) -> String {
    render_grid(|square| {
        if bitboard & (1u64 << square) != 0 {
            '1'
        } else {
            '.'
        }
    })
}

/// Render the pieces of a board, uppercase for Light and lowercase for Dark.
pub fn render_board(board: &BoardState) -> String {
    render_grid(|square| match board.piece_on_square(square) {
        Some((Color::Light, piece)) => piece.letter().to_ascii_uppercase(),
        Some((Color::Dark, piece)) => piece.letter(),
        None => '.',
    })
}

fn render_grid(cell: impl Fn(Square) -> char) -> String {
    let mut out = String::with_capacity(8 * 20);

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            out.push(' ');
            out.push(cell(rank * 8 + file));
        }
        out.push('\n');
    }

    out.push_str("   a b c d e f g h");
    out
}
