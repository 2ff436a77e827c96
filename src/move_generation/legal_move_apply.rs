//! In-place make/unmake for `BoardState`.
//!
//! `apply_move` validates the whole move against the board before touching
//! any bitboard, so a refused move leaves the position unchanged. `undo_move`
//! is its exact inverse for the same `Move` value: the move itself carries
//! the captured piece kind and the en-passant target and castling rights that
//! were in effect before it was played.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{is_occupied, square_mask};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{castling_path_for, king_rights, rook_home_right, CastlingPath};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{double_pushes, pawn_attack_span, promotion_rank};

/// Validated effects of a move on a specific board.
struct MovePlan {
    mover: Color,
    moved: PieceKind,
    placed: PieceKind,
    capture: Option<(PieceKind, Square)>,
    castle: Option<&'static CastlingPath>,
}

impl BoardState {
    /// Play `mv` on this board.
    ///
    /// The move is checked for consistency with the position (pieces on the
    /// source and target, flags, previous state, castling geometry) but not
    /// for piece movement geometry outside pawn special moves: a knight
    /// `b1d5` built by hand is accepted. Moves from `MoveGenerator` are
    /// valid by construction.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<()> {
        let plan = match self.plan_apply(mv) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("refusing to apply {mv}: {err}");
                return Err(err);
            }
        };
        let enemy = plan.mover.opposite();

        self.take(plan.mover, plan.moved, mv.from());
        if let Some((captured, square)) = plan.capture {
            self.take(enemy, captured, square);
        }
        self.put(plan.mover, plan.placed, mv.to());

        if let Some(path) = plan.castle {
            self.take(plan.mover, PieceKind::Rook, path.rook_from);
            self.put(plan.mover, PieceKind::Rook, path.rook_to);
        }

        self.en_passant_square = if mv.is_double_pawn_push() {
            Some((mv.from() + mv.to()) / 2)
        } else {
            None
        };

        if plan.moved == PieceKind::King {
            self.castling_rights &= !king_rights(plan.mover);
        }
        self.castling_rights &= !(rook_home_right(mv.from()) | rook_home_right(mv.to()));

        Ok(())
    }

    /// Take back `mv`, which must be the last move applied to this board.
    pub fn undo_move(&mut self, mv: &Move) -> ChessResult<()> {
        let plan = match self.plan_undo(mv) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("refusing to undo {mv}: {err}");
                return Err(err);
            }
        };
        let enemy = plan.mover.opposite();

        if let Some(path) = plan.castle {
            self.take(plan.mover, PieceKind::Rook, path.rook_to);
            self.put(plan.mover, PieceKind::Rook, path.rook_from);
        }

        self.take(plan.mover, plan.placed, mv.to());
        self.put(plan.mover, plan.moved, mv.from());
        if let Some((captured, square)) = plan.capture {
            self.put(enemy, captured, square);
        }

        self.en_passant_square = mv.prev_en_passant();
        self.castling_rights = mv.prev_castling_rights();

        Ok(())
    }

    fn plan_apply(&self, mv: &Move) -> ChessResult<MovePlan> {
        let (from, to) = (mv.from(), mv.to());
        if from == to {
            return Err(ChessError::illegal(mv, "source and target are the same square"));
        }
        if mv.prev_en_passant() != self.en_passant_square
            || mv.prev_castling_rights() != self.castling_rights
        {
            return Err(ChessError::illegal(
                mv,
                "move was generated for a different en-passant or castling state",
            ));
        }

        let (mover, moved) = self
            .piece_on_square(from)
            .ok_or_else(|| ChessError::illegal(mv, "source square is empty"))?;
        let enemy = mover.opposite();

        if self.color_on_square(to) == Some(mover) {
            return Err(ChessError::illegal(mv, "target holds a friendly piece"));
        }

        let capture = if mv.is_en_passant() {
            if moved != PieceKind::Pawn {
                return Err(ChessError::illegal(mv, "only pawns capture en passant"));
            }
            if self.en_passant_square != Some(to) {
                return Err(ChessError::illegal(mv, "no en-passant target on that square"));
            }
            if pawn_attack_span(mover, square_mask(from)) & square_mask(to) == 0 {
                return Err(ChessError::illegal(mv, "en-passant target is not a diagonal step ahead"));
            }
            if is_occupied(self.occupancy_all, to) {
                return Err(ChessError::illegal(mv, "en-passant target is occupied"));
            }
            let victim = en_passant_victim(mover, to)
                .ok_or_else(|| ChessError::illegal(mv, "en-passant target on an edge rank"))?;
            if !is_occupied(self.pieces(enemy, PieceKind::Pawn), victim) {
                return Err(ChessError::illegal(mv, "no pawn to capture en passant"));
            }
            Some((PieceKind::Pawn, victim))
        } else if mv.is_capture() {
            let captured = self
                .piece_on_square_for_color(enemy, to)
                .ok_or_else(|| ChessError::illegal(mv, "capture target holds no enemy piece"))?;
            if captured == PieceKind::King {
                return Err(ChessError::illegal(mv, "kings cannot be captured"));
            }
            if mv.captured() != Some(captured) {
                return Err(ChessError::illegal(mv, "captured piece does not match the board"));
            }
            Some((captured, to))
        } else {
            if is_occupied(self.occupancy_all, to) {
                return Err(ChessError::illegal(mv, "quiet move onto an occupied square"));
            }
            None
        };

        let reaches_last_rank = promotion_rank(mover) & square_mask(to) != 0;
        let placed = if mv.is_promotion() {
            if moved != PieceKind::Pawn || !reaches_last_rank {
                return Err(ChessError::illegal(mv, "only pawns reaching the last rank promote"));
            }
            match mv.promotion() {
                Some(piece) if piece.is_promotable() => piece,
                _ => return Err(ChessError::AmbiguousPromotion(mv.promotion_code())),
            }
        } else {
            if moved == PieceKind::Pawn && reaches_last_rank {
                return Err(ChessError::illegal(mv, "pawn on the last rank must promote"));
            }
            moved
        };

        if mv.is_double_pawn_push()
            && (moved != PieceKind::Pawn
                || double_pushes(mover, square_mask(from), self.empty_squares()) & square_mask(to) == 0)
        {
            return Err(ChessError::illegal(
                mv,
                "double push must advance a home-rank pawn over an empty square",
            ));
        }

        let castle = if mv.is_castling() {
            let path = castling_path_for(mover, from, to)
                .filter(|_| moved == PieceKind::King)
                .ok_or_else(|| ChessError::illegal(mv, "not a castling king move"))?;
            if !self.has_castling_right(path.right) {
                return Err(ChessError::illegal(mv, "castling right has been lost"));
            }
            if !is_occupied(self.pieces(mover, PieceKind::Rook), path.rook_from) {
                return Err(ChessError::illegal(mv, "castling rook is missing"));
            }
            if self.occupancy_all & path.between != 0 {
                return Err(ChessError::illegal(mv, "castling path is blocked"));
            }
            Some(path)
        } else {
            None
        };

        Ok(MovePlan {
            mover,
            moved,
            placed,
            capture,
            castle,
        })
    }

    fn plan_undo(&self, mv: &Move) -> ChessResult<MovePlan> {
        let (from, to) = (mv.from(), mv.to());
        let (mover, placed) = self
            .piece_on_square(to)
            .ok_or_else(|| ChessError::illegal(mv, "target square is empty"))?;

        if is_occupied(self.occupancy_all, from) {
            return Err(ChessError::illegal(mv, "source square is occupied"));
        }

        let moved = if mv.is_promotion() {
            if mv.promotion() != Some(placed) {
                return Err(ChessError::illegal(mv, "promoted piece does not match the board"));
            }
            PieceKind::Pawn
        } else {
            placed
        };

        let capture = if mv.is_en_passant() {
            let victim = en_passant_victim(mover, to)
                .ok_or_else(|| ChessError::illegal(mv, "en-passant target on an edge rank"))?;
            if is_occupied(self.occupancy_all, victim) {
                return Err(ChessError::illegal(mv, "en-passant victim square is occupied"));
            }
            Some((PieceKind::Pawn, victim))
        } else if mv.is_capture() {
            let captured = mv
                .captured()
                .ok_or_else(|| ChessError::illegal(mv, "capture without a captured piece"))?;
            Some((captured, to))
        } else {
            None
        };

        let castle = if mv.is_castling() {
            let path = castling_path_for(mover, from, to)
                .filter(|_| moved == PieceKind::King)
                .ok_or_else(|| ChessError::illegal(mv, "not a castling king move"))?;
            if !is_occupied(self.pieces(mover, PieceKind::Rook), path.rook_to) {
                return Err(ChessError::illegal(mv, "castled rook is missing"));
            }
            if is_occupied(self.occupancy_all, path.rook_from) {
                return Err(ChessError::illegal(mv, "rook home square is occupied"));
            }
            Some(path)
        } else {
            None
        };

        Ok(MovePlan {
            mover,
            moved,
            placed,
            capture,
            castle,
        })
    }
}

/// Square of the pawn removed by an en-passant capture onto `target`: one
/// rank behind the target from the capturer's point of view.
fn en_passant_victim(capturer: Color, target: Square) -> Option<Square> {
    match capturer {
        Color::Light => target.checked_sub(8),
        Color::Dark => target.checked_add(8).filter(|sq| *sq < 64),
    }
}
