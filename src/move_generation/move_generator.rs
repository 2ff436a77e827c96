//! Pseudo-legal move generation.
//!
//! `MoveGenerator` walks every piece kind of the side to move and produces
//! moves that obey per-piece movement rules. Whether a move leaves the
//! mover's king attacked is decided afterwards by
//! [`LegalityFilter`](crate::move_generation::legality_filter::LegalityFilter).

use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::attack_oracle::AttackOracle;
use crate::move_generation::legal_moves_king::{generate_king_moves, king_targets};
use crate::move_generation::legal_moves_knight::{generate_knight_moves, knight_targets};
use crate::move_generation::legal_moves_pawn::{generate_pawn_moves, pawn_targets};
use crate::move_generation::legal_moves_sliders::{generate_slider_moves, slider_targets};
use crate::moves::attack_tables::{AttackTables, ATTACK_TABLES};
use crate::moves::chess_move::Move;

/// Target squares of one piece kind, split by whether the square is empty or
/// holds an enemy piece. The two sets are always disjoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceTargets {
    pub quiet: u64,
    pub captures: u64,
}

impl PieceTargets {
    #[inline]
    pub const fn all(&self) -> u64 {
        self.quiet | self.captures
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator<'a> {
    tables: &'a AttackTables,
}

impl Default for MoveGenerator<'static> {
    fn default() -> Self {
        Self::new(&ATTACK_TABLES)
    }
}

impl<'a> MoveGenerator<'a> {
    pub const fn new(tables: &'a AttackTables) -> Self {
        Self { tables }
    }

    pub fn piece_targets(&self, board: &BoardState, side: Color, piece: PieceKind) -> PieceTargets {
        match piece {
            PieceKind::Pawn => pawn_targets(board, side),
            PieceKind::Knight => knight_targets(self.tables, board, side),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                slider_targets(board, side, piece)
            }
            PieceKind::King => king_targets(self.tables, board, side),
        }
    }

    /// All pseudo-legal moves of `side`, castling included.
    pub fn generate_moves(&self, board: &BoardState, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        generate_pawn_moves(board, side, &mut moves);
        generate_knight_moves(self.tables, board, side, &mut moves);
        for piece in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            generate_slider_moves(board, side, piece, &mut moves);
        }
        generate_king_moves(self.tables, board, side, &mut moves);
        moves
    }

    /// Every square attacked by `side`.
    pub fn generate_opponent_attacks(&self, board: &BoardState, side: Color) -> u64 {
        AttackOracle::new(self.tables).attacked_squares(board, side)
    }
}
