//! Precomputed knight and king attack masks.
//!
//! The tables are evaluated at compile time into the immutable
//! `ATTACK_TABLES` static and handed to the generators by reference. Sliding
//! pieces are not tabulated; they use `ray_cast` on demand.

use crate::game_state::chess_types::Square;
use crate::moves::ray_cast::{cast_rays, Reach, ALL_DIRECTIONS, KNIGHT_LEAPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTables {
    knight: [u64; 64],
    king: [u64; 64],
}

pub static ATTACK_TABLES: AttackTables = AttackTables::build();

impl AttackTables {
    pub const fn build() -> Self {
        let mut knight = [0u64; 64];
        let mut king = [0u64; 64];
        let mut sq = 0usize;

        while sq < 64 {
            knight[sq] = cast_rays(sq as Square, &KNIGHT_LEAPS, 0, Reach::Single);
            king[sq] = cast_rays(sq as Square, &ALL_DIRECTIONS, 0, Reach::Single);
            sq += 1;
        }

        Self { knight, king }
    }

    #[inline]
    pub const fn knight_attacks(&self, square: Square) -> u64 {
        self.knight[square as usize]
    }

    #[inline]
    pub const fn king_attacks(&self, square: Square) -> u64 {
        self.king[square as usize]
    }
}
