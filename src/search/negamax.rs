//! Depth-limited negamax search with alpha-beta pruning
//!
//! The searcher explores a fixed-depth game tree over pruned candidate
//! moves, mutating a single `Board` in place and undoing every placement
//! on the way back up. Values follow the negamax convention: always from
//! the perspective of the side to move, negated across recursion.
//!
//! No iterative deepening, no transposition table, no time budget: one
//! search runs to its fixed depth and returns. A `Searcher` holds only
//! per-search scratch state, so concurrent searches need separate
//! `Searcher`/`Board` pairs.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::{evaluate, WIN_SCORE};
use crate::rules::has_five_in_row;

use super::{DEFAULT_DEPTH, DEFAULT_OFFENSIVE_RATIO};

/// Alpha-beta infinity bound, above any reachable position-wide sum
/// (at most 225 stones x 4 axes x `WIN_SCORE`)
const INF: i64 = WIN_SCORE * 1_000;

/// Result of a search: the chosen move and basic statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax value of the root position
    pub score: i64,
    /// Total nodes visited
    pub nodes: u64,
}

/// Generate candidate moves: empty cells adjacent to at least one stone.
///
/// Cells are collected in row-major scan order, then stably sorted by
/// Manhattan distance to the most recent move so the search explores near
/// the latest action first. The ordering only helps pruning; it never
/// changes the root value. An empty board yields no candidates and must
/// be special-cased by the caller.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);

    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            let pos = Pos::new(r as u8, c as u8);
            if !board.is_empty(pos) {
                continue;
            }
            let has_neighbor = (-1..=1).any(|dr| {
                (-1..=1).any(|dc| {
                    Pos::is_valid(r + dr, c + dc)
                        && !board.is_empty(Pos::new((r + dr) as u8, (c + dc) as u8))
                })
            });
            if has_neighbor {
                moves.push(pos);
            }
        }
    }

    if let Some(last) = board.last_move() {
        moves.sort_by_key(|pos| pos.manhattan(last));
    }

    moves
}

/// Fixed-depth negamax alpha-beta searcher.
///
/// Holds the configured depth and offensive ratio plus per-search scratch
/// (node counter, root best move). Reusable across searches; not shareable
/// across threads mid-search (`&mut self`).
pub struct Searcher {
    max_depth: u8,
    offensive_ratio: f64,
    nodes: u64,
    best_move: Option<Pos>,
}

impl Searcher {
    /// Create a searcher with the default depth (3) and ratio (1.0).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, DEFAULT_OFFENSIVE_RATIO)
    }

    /// Create a searcher with a custom depth and offensive ratio.
    #[must_use]
    pub fn with_config(max_depth: u8, offensive_ratio: f64) -> Self {
        Self {
            max_depth,
            offensive_ratio,
            nodes: 0,
            best_move: None,
        }
    }

    /// Search for the best move for `to_move` on the given board.
    ///
    /// The board is mutated during exploration and restored to its entry
    /// state before this returns, including on beta-cutoff paths. An empty
    /// board short-circuits to the center opening.
    pub fn search(&mut self, board: &mut Board, to_move: Stone) -> SearchResult {
        self.nodes = 0;
        self.best_move = None;

        if board.is_board_empty() {
            // No candidates exist without neighbors; open at the center
            return SearchResult {
                best_move: Some(Pos::center()),
                score: 0,
                nodes: 0,
            };
        }

        let score = self.negamax(board, self.max_depth, -INF, INF, to_move);

        SearchResult {
            best_move: self.best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Recursive fail-hard negamax with alpha-beta pruning.
    ///
    /// Terminal at depth 0 or when either side already has five in a row;
    /// both return the static evaluation for the side to move. The root
    /// call (depth == configured maximum) records the candidate behind the
    /// best alpha seen so far; ties keep the first-found candidate.
    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        beta: i64,
        to_move: Stone,
    ) -> i64 {
        self.nodes += 1;

        if depth == 0
            || has_five_in_row(board, Stone::Engine)
            || has_five_in_row(board, Stone::Opponent)
        {
            return evaluate(board, to_move, self.offensive_ratio);
        }

        for pos in candidate_moves(board) {
            board.place(pos, to_move);
            let value = -self.negamax(board, depth - 1, -beta, -alpha, to_move.other());
            board.undo(pos, to_move);

            if value > alpha {
                alpha = value;
                if depth == self.max_depth {
                    self.best_move = Some(pos);
                }
                if alpha >= beta {
                    return beta;
                }
            }
        }

        alpha
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
