use crate::game_state::bitboard::squares;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::legal_move_shared::{push_piece_moves, split_targets};
use crate::move_generation::move_generator::PieceTargets;
use crate::moves::attack_tables::AttackTables;
use crate::moves::chess_move::Move;

pub fn knight_targets(tables: &AttackTables, board: &BoardState, side: Color) -> PieceTargets {
    let attacks = squares(board.pieces(side, PieceKind::Knight))
        .fold(0u64, |acc, from| acc | tables.knight_attacks(from));
    split_targets(board, side, attacks)
}

pub fn generate_knight_moves(
    tables: &AttackTables,
    board: &BoardState,
    side: Color,
    out: &mut Vec<Move>,
) {
    for from in squares(board.pieces(side, PieceKind::Knight)) {
        push_piece_moves(board, side, from, tables.knight_attacks(from), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::attack_tables::ATTACK_TABLES;

    #[test]
    fn starting_knights_have_four_quiet_moves() {
        let board = BoardState::new_game();
        let mut moves = Vec::new();
        generate_knight_moves(&ATTACK_TABLES, &board, Color::Light, &mut moves);
        assert_eq!(moves.len(), 4);

        let targets = knight_targets(&ATTACK_TABLES, &board, Color::Light);
        assert_eq!(targets.quiet.count_ones(), 4);
        assert_eq!(targets.captures, 0);
    }

    #[test]
    fn knight_captures_are_split_from_quiet_moves() {
        let mut board = BoardState::empty();
        board
            .place_piece(Color::Dark, PieceKind::Knight, 0)
            .expect("a1 should be free");
        board
            .place_piece(Color::Light, PieceKind::Bishop, 17)
            .expect("b3 should be free");
        board
            .place_piece(Color::Dark, PieceKind::Pawn, 10)
            .expect("c2 should be free");

        let targets = knight_targets(&ATTACK_TABLES, &board, Color::Dark);
        assert_eq!(targets.quiet, 0);
        assert_eq!(targets.captures, 1u64 << 17);

        let mut moves = Vec::new();
        generate_knight_moves(&ATTACK_TABLES, &board, Color::Dark, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].captured(), Some(PieceKind::Bishop));
    }
}
