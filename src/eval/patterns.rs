//! Shape pattern table for gobang evaluation
//!
//! Each entry pairs a score with a line pattern read along 5 or 6
//! consecutive cells. Pattern slots: 0 = empty, 1 = stone of the side
//! under evaluation, 2 = stone of the other side. Matching is exact and
//! positional; there are no wildcards.
//!
//! Scores span 50 (a weak open two) up to `WIN_SCORE` for an outright
//! five. The table is small enough that a linear scan per window is fine.

/// Sentinel score for a completed five.
///
/// Scores are `i64`: a position-wide sum can hold several five-patterns
/// (one per stone of the line), which would overflow 32 bits.
pub const WIN_SCORE: i64 = 1_000_000_000;

/// One scored line shape
pub struct ShapeEntry {
    pub score: i64,
    /// Slots over {0: empty, 1: owner, 2: other}; length 5 or 6
    pub pattern: &'static [i8],
}

/// Known tactical shapes, weakest first.
///
/// Named shapes: open twos (50), a split three (200), blocked threes
/// (500), open/broken threes and blocked fours (5000), the open four
/// (50000, unstoppable next move), and the completed five (`WIN_SCORE`).
pub static SHAPE_TABLE: [ShapeEntry; 15] = [
    ShapeEntry { score: 50, pattern: &[0, 1, 1, 0, 0] },
    ShapeEntry { score: 50, pattern: &[0, 0, 1, 1, 0] },
    ShapeEntry { score: 200, pattern: &[1, 1, 0, 1, 0] },
    ShapeEntry { score: 500, pattern: &[0, 0, 1, 1, 1] },
    ShapeEntry { score: 500, pattern: &[1, 1, 1, 0, 0] },
    ShapeEntry { score: 5_000, pattern: &[0, 1, 1, 1, 0] },
    ShapeEntry { score: 5_000, pattern: &[0, 1, 0, 1, 1, 0] },
    ShapeEntry { score: 5_000, pattern: &[0, 1, 1, 0, 1, 0] },
    ShapeEntry { score: 5_000, pattern: &[1, 1, 1, 0, 1] },
    ShapeEntry { score: 5_000, pattern: &[1, 1, 0, 1, 1] },
    ShapeEntry { score: 5_000, pattern: &[1, 0, 1, 1, 1] },
    ShapeEntry { score: 5_000, pattern: &[1, 1, 1, 1, 0] },
    ShapeEntry { score: 5_000, pattern: &[0, 1, 1, 1, 1] },
    ShapeEntry { score: 50_000, pattern: &[0, 1, 1, 1, 1, 0] },
    ShapeEntry { score: WIN_SCORE, pattern: &[1, 1, 1, 1, 1] },
];
