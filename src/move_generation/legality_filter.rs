//! Legal move filtering.
//!
//! A candidate is legal when, after playing it on a scratch copy of the
//! board, the mover's king is not attacked. `BoardState` is `Copy`, so the
//! caller's board is never touched.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::castling_path_for;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::attack_oracle::AttackOracle;
use crate::move_generation::legal_moves_king::king_path_attacked;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::attack_tables::{AttackTables, ATTACK_TABLES};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy)]
pub struct LegalityFilter<'a> {
    oracle: AttackOracle<'a>,
}

impl Default for LegalityFilter<'static> {
    fn default() -> Self {
        Self::new(&ATTACK_TABLES)
    }
}

impl<'a> LegalityFilter<'a> {
    pub const fn new(tables: &'a AttackTables) -> Self {
        Self {
            oracle: AttackOracle::new(tables),
        }
    }

    /// Keep the candidates that do not leave `side`'s king attacked.
    ///
    /// Fails if a candidate does not start on one of `side`'s pieces or cannot
    /// be applied to `board`.
    pub fn filter_legal_moves(
        &self,
        board: &BoardState,
        moves: &[Move],
        side: Color,
    ) -> ChessResult<Vec<Move>> {
        let mut legal = Vec::with_capacity(moves.len());
        for mv in moves {
            if self.is_move_legal(board, mv, side)? {
                legal.push(*mv);
            } else {
                log::trace!("dropping {mv}: leaves the {side:?} king attacked");
            }
        }
        log::debug!(
            "{} of {} candidate moves are legal for {side:?}",
            legal.len(),
            moves.len()
        );
        Ok(legal)
    }

    pub fn is_move_legal(&self, board: &BoardState, mv: &Move, side: Color) -> ChessResult<bool> {
        if board.color_on_square(mv.from()) != Some(side) {
            return Err(ChessError::illegal(
                mv,
                format!("source square does not hold a {side:?} piece"),
            ));
        }

        if mv.is_castling() {
            let path = castling_path_for(side, mv.from(), mv.to())
                .ok_or_else(|| ChessError::illegal(mv, "not a castling king move"))?;
            if king_path_attacked(&self.oracle, board, path) {
                return Ok(false);
            }
        }

        let mut scratch = *board;
        scratch.apply_move(mv)?;
        self.oracle.is_king_safe(&scratch, side)
    }
}

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Pseudo-legal generation followed by the legality filter.
#[derive(Debug, Clone, Copy)]
pub struct LegalMoveGenerator<'a> {
    generator: MoveGenerator<'a>,
    filter: LegalityFilter<'a>,
    oracle: AttackOracle<'a>,
}

impl Default for LegalMoveGenerator<'static> {
    fn default() -> Self {
        Self::new(&ATTACK_TABLES)
    }
}

impl<'a> LegalMoveGenerator<'a> {
    pub const fn new(tables: &'a AttackTables) -> Self {
        Self {
            generator: MoveGenerator::new(tables),
            filter: LegalityFilter::new(tables),
            oracle: AttackOracle::new(tables),
        }
    }

    pub fn legal_moves(&self, board: &BoardState, side: Color) -> ChessResult<Vec<Move>> {
        let candidates = self.generator.generate_moves(board, side);
        self.filter.filter_legal_moves(board, &candidates, side)
    }

    pub fn position_status(&self, board: &BoardState, side: Color) -> ChessResult<PositionStatus> {
        if !self.legal_moves(board, side)?.is_empty() {
            return Ok(PositionStatus::Ongoing);
        }
        if self.oracle.is_in_check(board, side)? {
            Ok(PositionStatus::Checkmate)
        } else {
            Ok(PositionStatus::Stalemate)
        }
    }
}
