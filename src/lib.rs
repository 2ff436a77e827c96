//! Crate root module declarations for the Plum move generator.
//!
//! Bitboard position representation, pseudo-legal move generation for every
//! piece kind (en passant, promotion and castling included), square attack
//! detection and a copy-and-test legality filter. Square numbering is
//! `0 == a1` through `63 == h8`.
//!
//! ```
//! use plum_movegen::game_state::{board_state::BoardState, chess_types::Color};
//! use plum_movegen::move_generation::legality_filter::LegalMoveGenerator;
//!
//! let board = BoardState::new_game();
//! let moves = LegalMoveGenerator::default()
//!     .legal_moves(&board, Color::Light)
//!     .expect("start position has both kings");
//! assert_eq!(moves.len(), 20);
//! ```

pub mod chess_errors;

pub mod game_state {
    pub mod bitboard;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod attack_tables;
    pub mod chess_move;
    pub mod pawn_moves;
    pub mod ray_cast;
}

pub mod move_generation {
    pub mod attack_oracle;
    pub mod legal_move_apply;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod legality_filter;
    pub mod move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_bitboard;
}
