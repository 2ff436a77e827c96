use crate::game_state::bitboard::squares;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::move_generator::PieceTargets;
use crate::moves::chess_move::{Move, FLAG_CAPTURE};

/// Build a move stamped with the board's current en-passant target and
/// castling rights, so that `undo_move` can restore them.
#[inline]
pub(crate) fn move_for(
    board: &BoardState,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
    flags: u8,
) -> Move {
    Move::build(
        from,
        to,
        captured,
        promotion,
        flags,
        board.en_passant_square(),
        board.castling_rights(),
    )
}

/// Split a raw attack set into quiet targets and captures for `side`.
#[inline]
pub fn split_targets(board: &BoardState, side: Color, attacks: u64) -> PieceTargets {
    PieceTargets {
        quiet: attacks & board.empty_squares(),
        captures: attacks & board.occupancy(side.opposite()),
    }
}

/// Materialize the moves of a non-pawn piece standing on `from`.
///
/// Captures of the enemy king are never emitted.
pub(crate) fn push_piece_moves(
    board: &BoardState,
    side: Color,
    from: Square,
    attacks: u64,
    out: &mut Vec<Move>,
) {
    let enemy = side.opposite();
    let targets = split_targets(board, side, attacks);

    for to in squares(targets.quiet) {
        out.push(move_for(board, from, to, None, None, 0));
    }

    for to in squares(targets.captures & !board.pieces(enemy, PieceKind::King)) {
        let captured = board.piece_on_square_for_color(enemy, to);
        out.push(move_for(board, from, to, captured, None, FLAG_CAPTURE));
    }
}
