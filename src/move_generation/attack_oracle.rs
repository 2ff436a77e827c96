//! Square attack detection.
//!
//! Attacks are detected from the target square outward: the knight and king
//! tables and the diagonal/orthogonal rays are cast from the square being
//! tested, and any enemy piece of the matching kind that they reach is an
//! attacker. Move generation and attack detection share the same primitives.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{square_mask, squares};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::moves::attack_tables::{AttackTables, ATTACK_TABLES};
use crate::moves::pawn_moves::pawn_attack_span;
use crate::moves::ray_cast::{bishop_attacks, queen_attacks, rook_attacks};

#[derive(Debug, Clone, Copy)]
pub struct AttackOracle<'a> {
    tables: &'a AttackTables,
}

impl Default for AttackOracle<'static> {
    fn default() -> Self {
        Self::new(&ATTACK_TABLES)
    }
}

impl<'a> AttackOracle<'a> {
    pub const fn new(tables: &'a AttackTables) -> Self {
        Self { tables }
    }

    /// Whether any piece of `attacker` attacks `square`.
    pub fn is_square_attacked(&self, board: &BoardState, square: Square, attacker: Color) -> bool {
        let occupancy = board.occupancy_all();
        let pieces = |kind| board.pieces(attacker, kind);

        // A pawn of the other color on `square` would attack exactly the
        // squares from which an `attacker` pawn attacks `square`.
        if pawn_attack_span(attacker.opposite(), square_mask(square)) & pieces(PieceKind::Pawn) != 0 {
            return true;
        }

        if self.tables.knight_attacks(square) & pieces(PieceKind::Knight) != 0 {
            return true;
        }

        if self.tables.king_attacks(square) & pieces(PieceKind::King) != 0 {
            return true;
        }

        let bishops_queens = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
        if bishop_attacks(square, occupancy) & bishops_queens != 0 {
            return true;
        }

        let rooks_queens = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);
        rook_attacks(square, occupancy) & rooks_queens != 0
    }

    /// Square of `side`'s king, taken as the exact lowest set bit.
    pub fn king_square(&self, board: &BoardState, side: Color) -> ChessResult<Square> {
        board.king_square(side).ok_or(ChessError::MissingKing(side))
    }

    /// `true` when `side`'s king is not attacked by the other side.
    pub fn is_king_safe(&self, board: &BoardState, side: Color) -> ChessResult<bool> {
        let king = self.king_square(board, side)?;
        Ok(!self.is_square_attacked(board, king, side.opposite()))
    }

    pub fn is_in_check(&self, board: &BoardState, side: Color) -> ChessResult<bool> {
        self.is_king_safe(board, side).map(|safe| !safe)
    }

    /// Every square attacked by `attacker`, whether empty or occupied.
    pub fn attacked_squares(&self, board: &BoardState, attacker: Color) -> u64 {
        let occupancy = board.occupancy_all();
        let pieces = |kind| board.pieces(attacker, kind);

        let mut attacks = pawn_attack_span(attacker, pieces(PieceKind::Pawn));
        for from in squares(pieces(PieceKind::Knight)) {
            attacks |= self.tables.knight_attacks(from);
        }
        for from in squares(pieces(PieceKind::Bishop)) {
            attacks |= bishop_attacks(from, occupancy);
        }
        for from in squares(pieces(PieceKind::Rook)) {
            attacks |= rook_attacks(from, occupancy);
        }
        for from in squares(pieces(PieceKind::Queen)) {
            attacks |= queen_attacks(from, occupancy);
        }
        for from in squares(pieces(PieceKind::King)) {
            attacks |= self.tables.king_attacks(from);
        }
        attacks
    }

    /// Pieces of `attacker` attacking `square`, for diagnostics.
    pub fn attackers_to_square(
        &self,
        board: &BoardState,
        square: Square,
        attacker: Color,
    ) -> Vec<(Square, PieceKind)> {
        let occupancy = board.occupancy_all();
        let reverse = [
            (PieceKind::Pawn, pawn_attack_span(attacker.opposite(), square_mask(square))),
            (PieceKind::Knight, self.tables.knight_attacks(square)),
            (PieceKind::Bishop, bishop_attacks(square, occupancy)),
            (PieceKind::Rook, rook_attacks(square, occupancy)),
            (PieceKind::Queen, queen_attacks(square, occupancy)),
            (PieceKind::King, self.tables.king_attacks(square)),
        ];

        reverse
            .into_iter()
            .flat_map(|(kind, pattern)| {
                squares(pattern & board.pieces(attacker, kind)).map(move |from| (from, kind))
            })
            .collect()
    }
}
