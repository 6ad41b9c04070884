//! Adversarial search: candidate generation and negamax alpha-beta

pub mod negamax;

pub use negamax::{candidate_moves, SearchResult, Searcher};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 3;

/// Default weighting of opponent threats in the evaluation
pub const DEFAULT_OFFENSIVE_RATIO: f64 = 1.0;
