//! Gobang (five-in-a-row) AI engine
//!
//! A search-and-evaluation engine for gobang on a fixed 15x15 board:
//! depth-limited negamax with alpha-beta pruning over a shape-pattern
//! static evaluation.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with per-side stone lists
//! - [`rules`]: Win detection (five in a row)
//! - [`eval`]: Shape pattern table and position evaluation
//! - [`search`]: Candidate generation and negamax alpha-beta
//! - [`engine`]: The `AiEngine` facade the host calls
//!
//! # Quick Start
//!
//! ```
//! use gobang::{AiEngine, Snapshot, Stone, BOARD_SIZE};
//!
//! let mut snapshot: Snapshot = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
//! snapshot[7][7] = Stone::Opponent;
//!
//! let mut engine = AiEngine::new();
//! let result = engine.compute_move(&snapshot);
//! println!("AI plays at ({}, {})", result.best_move.row, result.best_move.col);
//! ```
//!
//! # Scope
//!
//! The engine is deliberately small: fixed board size and win length,
//! fixed search depth (default 3 plies), no opening book, no iterative
//! deepening, no transposition table, no threading. One search runs to
//! completion on the calling thread; the hosting application owns the
//! visual board and player input.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Snapshot, Stone, BOARD_SIZE};
pub use engine::{AiEngine, MoveResult};
