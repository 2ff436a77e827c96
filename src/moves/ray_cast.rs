//! Parameterized ray casting shared by every piece pattern.
//!
//! `cast_rays` walks each direction of a direction set from a square, one
//! step at a time, until the edge guard (`Direction::step_from`) refuses the
//! next step or a blocker is hit. The blocker square itself is included, so
//! callers split the result into quiet moves and captures with occupancy
//! masks. Knight and king tables are single-step casts of the same routine,
//! and attack detection casts from the target square outward.

use crate::game_state::chess_types::Square;

/// File/rank delta of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub file_step: i8,
    pub rank_step: i8,
}

impl Direction {
    pub const fn new(file_step: i8, rank_step: i8) -> Self {
        Self {
            file_step,
            rank_step,
        }
    }

    /// Edge guard: the square one step away, or `None` when the step would
    /// leave the board or wrap onto another rank/file.
    #[inline]
    pub const fn step_from(self, square: Square) -> Option<Square> {
        let file = (square % 8) as i8 + self.file_step;
        let rank = (square / 8) as i8 + self.rank_step;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some((rank * 8 + file) as Square)
        }
    }
}

/// How far a ray may travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Single,
    Unbounded,
}

pub const DIAGONALS: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
];

pub const ORTHOGONALS: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
];

pub const KNIGHT_LEAPS: [Direction; 8] = [
    Direction::new(1, 2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(1, -2),
    Direction::new(-1, -2),
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
];

/// Union of the squares reached along `directions` from `square`.
///
/// A ray includes the first square found in `blockers` and stops there.
pub const fn cast_rays(square: Square, directions: &[Direction], blockers: u64, reach: Reach) -> u64 {
    let mut attacks = 0u64;
    let mut i = 0;

    while i < directions.len() {
        let direction = directions[i];
        let mut current = square;

        while let Some(next) = direction.step_from(current) {
            let bit = 1u64 << next;
            attacks |= bit;

            if blockers & bit != 0 {
                break;
            }
            if let Reach::Single = reach {
                break;
            }
            current = next;
        }

        i += 1;
    }

    attacks
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    cast_rays(square, &DIAGONALS, occupancy, Reach::Unbounded)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    cast_rays(square, &ORTHOGONALS, occupancy, Reach::Unbounded)
}

/// Queen pattern: independent bishop and rook casts from the same square.
#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
