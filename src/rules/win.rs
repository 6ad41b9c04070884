//! Win condition checking for gobang
//!
//! The only win condition is five (or more) stones of one side in a row
//! along one of the four line axes.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if the given side has 5+ in a row anywhere on the board.
///
/// Walks every stone of the side and, for each of the four axes, counts
/// contiguous same-side stones up to four steps outward in both directions.
/// O(stones x 4 x 8); called once per search node, not per candidate.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    for &pos in board.stones(stone) {
        for &(dr, dc) in &DIRECTIONS {
            let mut count = 1;
            for sign in [-1, 1] {
                for step in 1..5 {
                    let r = i32::from(pos.row) + sign * step * dr;
                    let c = i32::from(pos.col) + sign * step * dc;
                    if !Pos::is_valid(r, c) {
                        break;
                    }
                    if board.get(Pos::new(r as u8, c as u8)) != stone {
                        break;
                    }
                    count += 1;
                }
            }
            if count >= 5 {
                return true;
            }
        }
    }
    false
}
