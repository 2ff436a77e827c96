//! Move value type.
//!
//! A `Move` is produced by the generator for a specific position and carries
//! everything `undo_move` needs to restore that position: the captured piece
//! kind and the en-passant target and castling rights in effect before the
//! move. It holds no reference to the board.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{checked_square, file_of, rank_of};
use crate::game_state::chess_types::*;

pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 1;
pub const FLAG_EN_PASSANT: u8 = 1 << 2;
pub const FLAG_CASTLING: u8 = 1 << 3;
pub const FLAG_PROMOTION: u8 = 1 << 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    captured: Option<PieceKind>,
    flags: u8,
    prev_en_passant: Option<Square>,
    prev_castling_rights: CastlingRights,
}

impl Move {
    /// Quiet move with no special flags and an empty previous state.
    pub fn new(from: Square, to: Square) -> ChessResult<Self> {
        let from = checked_square(i32::from(from))?;
        let to = checked_square(i32::from(to))?;
        Ok(Self::build(from, to, None, None, 0, None, 0))
    }

    #[inline]
    pub(crate) const fn build(
        from: Square,
        to: Square,
        captured: Option<PieceKind>,
        promotion: Option<PieceKind>,
        flags: u8,
        prev_en_passant: Option<Square>,
        prev_castling_rights: CastlingRights,
    ) -> Self {
        Self {
            from,
            to,
            promotion,
            captured,
            flags,
            prev_en_passant,
            prev_castling_rights,
        }
    }

    pub fn with_capture(mut self, captured: PieceKind) -> Self {
        self.flags |= FLAG_CAPTURE;
        self.captured = Some(captured);
        self
    }

    /// Mark as en passant; the captured piece is always a pawn.
    pub fn with_en_passant(self) -> Self {
        let mut mv = self.with_capture(PieceKind::Pawn);
        mv.flags |= FLAG_EN_PASSANT;
        mv
    }

    pub fn with_castling(mut self) -> Self {
        self.flags |= FLAG_CASTLING;
        self
    }

    pub fn with_double_pawn_push(mut self) -> Self {
        self.flags |= FLAG_DOUBLE_PAWN_PUSH;
        self
    }

    pub fn with_promotion(mut self, piece: PieceKind) -> ChessResult<Self> {
        if !piece.is_promotable() {
            return Err(ChessError::AmbiguousPromotion(piece.code()));
        }
        self.flags |= FLAG_PROMOTION;
        self.promotion = Some(piece);
        Ok(self)
    }

    /// Promotion from a wire piece code (`2..=5`, knight to queen).
    pub fn with_promotion_code(self, code: u8) -> ChessResult<Self> {
        let piece = PieceKind::from_code(code).ok_or(ChessError::AmbiguousPromotion(code))?;
        self.with_promotion(piece)
    }

    pub fn with_previous_state(
        mut self,
        en_passant: Option<Square>,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        if let Some(sq) = en_passant {
            checked_square(i32::from(sq))?;
        }
        self.prev_en_passant = en_passant;
        self.prev_castling_rights = castling_rights & CASTLE_ALL;
        Ok(self)
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Promotion wire code, `0` when the move does not promote.
    #[inline]
    pub fn promotion_code(&self) -> u8 {
        self.promotion.map_or(0, PieceKind::code)
    }

    #[inline]
    pub fn captured(&self) -> Option<PieceKind> {
        self.captured
    }

    #[inline]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub fn prev_en_passant(&self) -> Option<Square> {
        self.prev_en_passant
    }

    #[inline]
    pub fn prev_castling_rights(&self) -> CastlingRights {
        self.prev_castling_rights
    }
}

/// Long algebraic form: `e2e4`, `e7e8n`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in [self.from, self.to] {
            write!(
                f,
                "{}{}",
                char::from(b'a' + file_of(square)),
                char::from(b'1' + rank_of(square))
            )?;
        }
        if self.is_promotion() {
            if let Some(piece) = self.promotion {
                write!(f, "{}", piece.letter())?;
            }
        }
        Ok(())
    }
}
