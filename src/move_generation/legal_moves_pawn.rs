use crate::game_state::bitboard::{is_occupied, square_mask, squares};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::legal_move_shared::move_for;
use crate::move_generation::move_generator::PieceTargets;
use crate::moves::chess_move::{
    Move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_PROMOTION,
};
use crate::moves::pawn_moves::{
    capture_shifts, double_pushes, en_passant_rank, forward_offset, pawn_attack_span,
    promotion_rank, shift, single_pushes,
};

/// Pushes and diagonal captures (en passant included) of all `side` pawns.
pub fn pawn_targets(board: &BoardState, side: Color) -> PieceTargets {
    let pawns = board.pieces(side, PieceKind::Pawn);
    let empty = board.empty_squares();
    let en_passant = en_passant_target(board, side).map_or(0, square_mask);

    PieceTargets {
        quiet: single_pushes(side, pawns, empty) | double_pushes(side, pawns, empty),
        captures: pawn_attack_span(side, pawns) & (board.occupancy(side.opposite()) | en_passant),
    }
}

pub fn generate_pawn_moves(board: &BoardState, side: Color, out: &mut Vec<Move>) {
    let pawns = board.pieces(side, PieceKind::Pawn);
    let empty = board.empty_squares();
    let enemy = side.opposite();
    let forward = forward_offset(side);

    for to in squares(single_pushes(side, pawns, empty)) {
        push_pawn_move(board, side, origin(to, forward), to, None, 0, out);
    }

    for to in squares(double_pushes(side, pawns, empty)) {
        let from = origin(to, 2 * forward);
        out.push(move_for(board, from, to, None, None, FLAG_DOUBLE_PAWN_PUSH));
    }

    let capturable = board.occupancy(enemy) & !board.pieces(enemy, PieceKind::King);
    let en_passant = en_passant_target(board, side);

    for (offset, source_mask) in capture_shifts(side) {
        let reach = shift(pawns & source_mask, offset);

        for to in squares(reach & capturable) {
            let captured = board.piece_on_square_for_color(enemy, to);
            push_pawn_move(board, side, origin(to, offset), to, captured, FLAG_CAPTURE, out);
        }

        if let Some(target) = en_passant {
            if is_occupied(reach, target) {
                out.push(move_for(
                    board,
                    origin(target, offset),
                    target,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_CAPTURE | FLAG_EN_PASSANT,
                ));
            }
        }
    }
}

/// The en-passant target usable by `side`: on the capturing rank, empty,
/// with an enemy pawn standing right behind it.
pub(crate) fn en_passant_target(board: &BoardState, side: Color) -> Option<Square> {
    let target = board.en_passant_square()?;
    if en_passant_rank(side) & square_mask(target) == 0 || is_occupied(board.occupancy_all(), target) {
        return None;
    }
    let victim = origin(target, forward_offset(side));
    is_occupied(board.pieces(side.opposite(), PieceKind::Pawn), victim).then_some(target)
}

#[inline]
fn origin(to: Square, offset: i8) -> Square {
    (to as i8 - offset) as Square
}

fn push_pawn_move(
    board: &BoardState,
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    flags: u8,
    out: &mut Vec<Move>,
) {
    if promotion_rank(side) & square_mask(to) != 0 {
        for promo in PROMOTION_PIECES {
            out.push(move_for(board, from, to, captured, Some(promo), flags | FLAG_PROMOTION));
        }
    } else {
        out.push(move_for(board, from, to, captured, None, flags));
    }
}
