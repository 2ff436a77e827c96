//! Canonical chess-rule constants.
//!
//! Starting-position masks per piece and color, and the fixed geometry of the
//! four castling moves.

use crate::game_state::chess_types::*;

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_PIECES: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_FF00, // pawns, rank 2
        0x0000_0000_0000_0042, // knights b1 g1
        0x0000_0000_0000_0024, // bishops c1 f1
        0x0000_0000_0000_0081, // rooks a1 h1
        0x0000_0000_0000_0008, // queen d1
        0x0000_0000_0000_0010, // king e1
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

/// Static description of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: u64,
    /// King start, transit and landing squares; none may be attacked.
    pub king_path: u64,
}

pub const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        color: Color::Light,
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: 0x0000_0000_0000_0060,
        king_path: 0x0000_0000_0000_0070,
    },
    CastlingPath {
        color: Color::Light,
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: 0x0000_0000_0000_000E,
        king_path: 0x0000_0000_0000_001C,
    },
    CastlingPath {
        color: Color::Dark,
        right: CASTLE_DARK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: 0x6000_0000_0000_0000,
        king_path: 0x7000_0000_0000_0000,
    },
    CastlingPath {
        color: Color::Dark,
        right: CASTLE_DARK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: 0x0E00_0000_0000_0000,
        king_path: 0x1C00_0000_0000_0000,
    },
];

/// Castling geometry for a king move, if `from -> to` is one of the four castles.
pub fn castling_path_for(color: Color, from: Square, to: Square) -> Option<&'static CastlingPath> {
    CASTLING_PATHS
        .iter()
        .find(|path| path.color == color && path.king_from == from && path.king_to == to)
}

/// Castling right lost when a rook leaves or is captured on `square`.
pub const fn rook_home_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}

pub const fn king_rights(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}
