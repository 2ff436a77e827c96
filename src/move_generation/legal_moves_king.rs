use crate::game_state::bitboard::{is_occupied, squares};
use crate::game_state::chess_rules::{CastlingPath, CASTLING_PATHS};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::attack_oracle::AttackOracle;
use crate::move_generation::legal_move_shared::{move_for, push_piece_moves, split_targets};
use crate::move_generation::move_generator::PieceTargets;
use crate::moves::attack_tables::AttackTables;
use crate::moves::chess_move::{Move, FLAG_CASTLING};

/// One-step king targets. Castling is not part of the target set.
pub fn king_targets(tables: &AttackTables, board: &BoardState, side: Color) -> PieceTargets {
    let attacks = squares(board.pieces(side, PieceKind::King))
        .fold(0u64, |acc, from| acc | tables.king_attacks(from));
    split_targets(board, side, attacks)
}

pub fn generate_king_moves(
    tables: &AttackTables,
    board: &BoardState,
    side: Color,
    out: &mut Vec<Move>,
) {
    for from in squares(board.pieces(side, PieceKind::King)) {
        push_piece_moves(board, side, from, tables.king_attacks(from), out);
    }

    let oracle = AttackOracle::new(tables);
    for path in CASTLING_PATHS.iter().filter(|path| path.color == side) {
        if can_castle(&oracle, board, path) {
            out.push(move_for(board, path.king_from, path.king_to, None, None, FLAG_CASTLING));
        }
    }
}

/// Rights, home squares, empty between-squares and an unattacked king path.
pub(crate) fn can_castle(oracle: &AttackOracle<'_>, board: &BoardState, path: &CastlingPath) -> bool {
    let side = path.color;
    if !board.has_castling_right(path.right)
        || !is_occupied(board.pieces(side, PieceKind::King), path.king_from)
        || !is_occupied(board.pieces(side, PieceKind::Rook), path.rook_from)
        || board.occupancy_all() & path.between != 0
    {
        return false;
    }

    !king_path_attacked(oracle, board, path)
}

pub(crate) fn king_path_attacked(
    oracle: &AttackOracle<'_>,
    board: &BoardState,
    path: &CastlingPath,
) -> bool {
    let enemy = path.color.opposite();
    squares(path.king_path).any(|square| oracle.is_square_attacked(board, square, enemy))
}
