//! Heuristic evaluation for gobang positions
//!
//! A position is scored by sliding a 6-cell window along every line
//! through every stone and matching the window against the shape pattern
//! table. The evaluation is the side-to-move's total minus a damped
//! fraction of the other side's total, so opponent threats weigh in
//! without full lookahead.

use crate::board::{Board, Pos, Stone};

use super::patterns::SHAPE_TABLE;

/// Direction vectors for line scoring (4 axes)
/// Each axis is scanned once per stone; the sliding window covers both
/// sides of the stone, so no reverse directions are needed.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Score a stone's line through `pos` along one direction.
///
/// Slides a 6-cell window through the 6 alignments that contain `pos`.
/// Each in-grid cell becomes a signature slot (0 empty, 1 `owner`,
/// 2 other side); the first off-grid cell ends the signature, and no
/// pattern may match past it. Returns the maximum table score matched
/// across all alignments, 0 if nothing matches.
pub fn line_score(board: &Board, pos: Pos, dr: i32, dc: i32, owner: Stone) -> i64 {
    let mut best = 0;

    for offset in -5..=0 {
        let mut window = [0i8; 6];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = i32::from(pos.row) + (offset + i as i32) * dr;
            let c = i32::from(pos.col) + (offset + i as i32) * dc;
            if !Pos::is_valid(r, c) {
                *slot = -1;
                break;
            }
            *slot = match board.get(Pos::new(r as u8, c as u8)) {
                Stone::Empty => 0,
                s if s == owner => 1,
                _ => 2,
            };
        }

        for entry in &SHAPE_TABLE {
            if entry
                .pattern
                .iter()
                .zip(window.iter())
                .all(|(&want, &got)| want == got)
            {
                best = best.max(entry.score);
            }
        }
    }

    best
}

/// Sum of line scores over all of one side's stones, 4 axes each.
pub fn side_score(board: &Board, owner: Stone) -> i64 {
    let mut score = 0;
    for &pos in board.stones(owner) {
        for &(dr, dc) in &DIRECTIONS {
            score += line_score(board, pos, dr, dc, owner);
        }
    }
    score
}

/// Evaluate the board from the perspective of the side to move.
///
/// `offensive_ratio` scales how heavily the other side's threats count
/// against the side to move; lower values play more aggressively. The
/// opponent term is further damped by a factor of 0.1, carried over from
/// the tuning of the shape table scores.
pub fn evaluate(board: &Board, to_move: Stone, offensive_ratio: f64) -> i64 {
    let own = side_score(board, to_move);
    let opp = side_score(board, to_move.other());
    own - (opp as f64 * offensive_ratio * 0.1).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::WIN_SCORE;

    fn board_with(stones: &[(u8, u8)], owner: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place(Pos::new(r, c), owner);
        }
        board
    }

    #[test]
    fn test_lone_stone_scores_zero() {
        let board = board_with(&[(7, 7)], Stone::Engine);
        assert_eq!(line_score(&board, Pos::new(7, 7), 0, 1, Stone::Engine), 0);
        assert_eq!(side_score(&board, Stone::Engine), 0);
    }

    #[test]
    fn test_open_four_scores_fifty_thousand() {
        // _XXXX_ on row 7: the 6-window (7,2)..(7,7) matches 011110
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Engine);
        assert_eq!(
            line_score(&board, Pos::new(7, 3), 0, 1, Stone::Engine),
            50_000
        );
    }

    #[test]
    fn test_five_scores_win() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], Stone::Engine);
        assert_eq!(
            line_score(&board, Pos::new(7, 3), 0, 1, Stone::Engine),
            WIN_SCORE
        );
    }

    #[test]
    fn test_blocked_four_scores_less_than_open_four() {
        // OXXXX_ : blocked on the left, only 11110 shapes match
        let mut board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Engine);
        board.place(Pos::new(7, 2), Stone::Opponent);
        assert_eq!(
            line_score(&board, Pos::new(7, 3), 0, 1, Stone::Engine),
            5_000
        );
    }

    #[test]
    fn test_edge_four_is_not_open() {
        // Four against the left edge; the window that would make it an
        // open four runs off-grid and is aborted
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::Engine);
        assert_eq!(
            line_score(&board, Pos::new(0, 0), 0, 1, Stone::Engine),
            5_000
        );
    }

    #[test]
    fn test_open_three_scores_five_thousand() {
        let board = board_with(&[(7, 4), (7, 5), (7, 6)], Stone::Engine);
        assert_eq!(
            line_score(&board, Pos::new(7, 5), 0, 1, Stone::Engine),
            5_000
        );
    }

    #[test]
    fn test_line_score_is_max_not_sum() {
        // An open four also contains blocked-three/four shapes; only the
        // strongest alignment counts
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Engine);
        let score = line_score(&board, Pos::new(7, 4), 0, 1, Stone::Engine);
        assert_eq!(score, 50_000);
    }

    #[test]
    fn test_diagonal_direction_scoring() {
        let board = board_with(&[(4, 4), (5, 5), (6, 6)], Stone::Engine);
        assert_eq!(
            line_score(&board, Pos::new(5, 5), 1, 1, Stone::Engine),
            5_000
        );
        // Wrong axis sees only a lone stone
        assert_eq!(line_score(&board, Pos::new(5, 5), 0, 1, Stone::Engine), 0);
    }

    #[test]
    fn test_evaluate_mixes_sides() {
        let mut board = board_with(&[(7, 4), (7, 5), (7, 6)], Stone::Engine);
        board.place(Pos::new(3, 3), Stone::Opponent);
        board.place(Pos::new(3, 4), Stone::Opponent);

        let own = side_score(&board, Stone::Engine);
        let opp = side_score(&board, Stone::Opponent);
        assert!(own > 0);
        assert!(opp > 0);

        assert_eq!(
            evaluate(&board, Stone::Engine, 1.0),
            own - (opp as f64 * 0.1).round() as i64
        );
        assert_eq!(
            evaluate(&board, Stone::Opponent, 1.0),
            opp - (own as f64 * 0.1).round() as i64
        );
    }

    #[test]
    fn test_evaluate_opponent_only_is_negative() {
        let board = board_with(&[(7, 4), (7, 5), (7, 6)], Stone::Opponent);
        assert!(evaluate(&board, Stone::Engine, 1.0) < 0);
        assert!(evaluate(&board, Stone::Opponent, 1.0) > 0);
    }

    #[test]
    fn test_offensive_ratio_damps_opponent_term() {
        let board = board_with(&[(7, 4), (7, 5), (7, 6)], Stone::Opponent);
        let defensive = evaluate(&board, Stone::Engine, 1.0);
        let aggressive = evaluate(&board, Stone::Engine, 0.5);
        // Lower ratio discounts opponent threats
        assert!(aggressive > defensive);
    }
}
