//! Bitboard position model.
//!
//! `BoardState` stores one bitboard per color and piece kind plus cached
//! occupancy aggregates, the en-passant target and the castling rights. It is
//! a plain `Copy` value: legality checks simulate moves on a scratch copy.
//! Mutation after setup goes through `apply_move`/`undo_move`
//! (see `move_generation::legal_move_apply`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{checked_square, first_square, is_occupied, square_mask};
use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) en_passant_square: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    /// Board with no pieces, no en-passant target and no castling rights.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            en_passant_square: None,
            castling_rights: 0,
        }
    }

    /// Board in the standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        board.initialize_position();
        board
    }

    /// Reset to the standard starting layout with all castling rights.
    pub fn initialize_position(&mut self) {
        self.pieces = STARTING_PIECES;
        self.en_passant_square = None;
        self.castling_rights = CASTLE_ALL;
        self.recalc_occupancy();
    }

    #[inline]
    pub fn pieces(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn empty_squares(&self) -> u64 {
        !self.occupancy_all
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Square of `color`'s king: the lowest set bit of its king board.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        first_square(self.pieces(color, PieceKind::King))
    }

    pub fn color_on_square(&self, square: Square) -> Option<Color> {
        let mask = square_mask(square);
        if self.occupancy_by_color[Color::Light.index()] & mask != 0 {
            Some(Color::Light)
        } else if self.occupancy_by_color[Color::Dark.index()] & mask != 0 {
            Some(Color::Dark)
        } else {
            None
        }
    }

    pub fn piece_on_square_for_color(&self, color: Color, square: Square) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|piece| is_occupied(self.pieces(color, *piece), square))
    }

    pub fn piece_on_square(&self, square: Square) -> Option<(Color, PieceKind)> {
        let color = self.color_on_square(square)?;
        self.piece_on_square_for_color(color, square)
            .map(|piece| (color, piece))
    }

    /// Place a piece on an empty square. Used by position loaders and tests.
    pub fn place_piece(&mut self, color: Color, piece: PieceKind, square: Square) -> ChessResult<()> {
        let square = checked_square(i32::from(square))?;
        if is_occupied(self.occupancy_all, square) {
            return Err(ChessError::InvalidPosition(format!(
                "square {square} is already occupied"
            )));
        }
        self.put(color, piece, square);
        Ok(())
    }

    /// Remove and return whatever stands on `square`.
    pub fn remove_piece(&mut self, square: Square) -> ChessResult<(Color, PieceKind)> {
        let square = checked_square(i32::from(square))?;
        let (color, piece) = self.piece_on_square(square).ok_or_else(|| {
            ChessError::InvalidPosition(format!("square {square} is empty"))
        })?;
        self.take(color, piece, square);
        Ok((color, piece))
    }

    pub fn set_en_passant_square(&mut self, square: Option<Square>) -> ChessResult<()> {
        if let Some(sq) = square {
            checked_square(i32::from(sq))?;
        }
        self.en_passant_square = square;
        Ok(())
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights & CASTLE_ALL;
    }

    /// Check every structural invariant of the position.
    pub fn validate(&self) -> ChessResult<()> {
        for color in [Color::Light, Color::Dark] {
            let mut union = 0u64;
            for piece in ALL_PIECE_KINDS {
                let bb = self.pieces(color, piece);
                if union & bb != 0 {
                    return Err(ChessError::InvalidPosition(format!(
                        "{color:?} {piece:?} board overlaps another {color:?} board"
                    )));
                }
                union |= bb;
            }
            if union != self.occupancy(color) {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} occupancy is out of sync with its piece boards"
                )));
            }
            let kings = self.pieces(color, PieceKind::King).count_ones();
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} has {kings} kings"
                )));
            }
        }

        let light = self.occupancy(Color::Light);
        let dark = self.occupancy(Color::Dark);
        if light & dark != 0 {
            return Err(ChessError::InvalidPosition(
                "light and dark occupancy intersect".to_owned(),
            ));
        }
        if light | dark != self.occupancy_all {
            return Err(ChessError::InvalidPosition(
                "total occupancy is out of sync".to_owned(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn put(&mut self, color: Color, piece: PieceKind, square: Square) {
        let mask = square_mask(square);
        self.pieces[color.index()][piece.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    #[inline]
    pub(crate) fn take(&mut self, color: Color, piece: PieceKind, square: Square) {
        let mask = !square_mask(square);
        self.pieces[color.index()][piece.index()] &= mask;
        self.occupancy_by_color[color.index()] &= mask;
        self.occupancy_all &= mask;
    }

    fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::Light.index()]
            | self.occupancy_by_color[Color::Dark.index()];
    }
}
