//! Bishop, rook and queen generation on top of the shared ray caster.

use crate::game_state::bitboard::squares;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::legal_move_shared::{push_piece_moves, split_targets};
use crate::move_generation::move_generator::PieceTargets;
use crate::moves::chess_move::Move;
use crate::moves::ray_cast::{bishop_attacks, queen_attacks, rook_attacks};

/// Ray-cast pattern of a sliding piece standing on `from`.
///
/// Returns `0` for non-sliding kinds.
#[inline]
pub fn slider_attacks(piece: PieceKind, from: Square, occupancy: u64) -> u64 {
    match piece {
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        _ => 0,
    }
}

pub fn slider_targets(board: &BoardState, side: Color, piece: PieceKind) -> PieceTargets {
    let occupancy = board.occupancy_all();
    let attacks = squares(board.pieces(side, piece))
        .fold(0u64, |acc, from| acc | slider_attacks(piece, from, occupancy));
    split_targets(board, side, attacks)
}

pub fn generate_slider_moves(
    board: &BoardState,
    side: Color,
    piece: PieceKind,
    out: &mut Vec<Move>,
) {
    let occupancy = board.occupancy_all();
    for from in squares(board.pieces(side, piece)) {
        push_piece_moves(board, side, from, slider_attacks(piece, from, occupancy), out);
    }
}
