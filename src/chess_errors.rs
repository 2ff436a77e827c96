//! Errors used throughout the move generator.
//!
//! `ChessError` is the single error type returned by board mutation, move
//! construction, king-safety queries and coordinate parsing. Every variant is a
//! local validation failure: nothing is retried internally and no operation
//! leaves a board half-mutated when it returns an error.

use crate::game_state::chess_types::Color;
use crate::moves::chess_move::Move;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square index outside `0..=63` reached a public entry point.
    #[error("square index out of bounds: {0}")]
    InvalidSquare(i32),

    /// The move does not fit the board it is applied to (wrong or missing
    /// piece on the source square, or flags inconsistent with the position).
    ///
    /// The board is left untouched when this is returned.
    #[error("cannot apply move {mv}: {reason}")]
    IllegalMoveApplication { mv: Move, reason: String },

    /// A promotion was requested with a piece code outside
    /// knight/bishop/rook/queen.
    #[error("promotion piece code {0} is not one of knight, bishop, rook, queen")]
    AmbiguousPromotion(u8),

    /// King lookup on a board that has no king for `Color`.
    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    /// Board invariants do not hold (overlapping bitboards, stale aggregates,
    /// wrong king count, placement onto an occupied square).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Coordinate text such as `"e4"` could not be parsed.
    #[error("invalid algebraic coordinate: {0}")]
    InvalidAlgebraic(String),
}

impl ChessError {
    pub(crate) fn illegal(mv: &Move, reason: impl Into<String>) -> Self {
        ChessError::IllegalMoveApplication {
            mv: *mv,
            reason: reason.into(),
        }
    }
}
