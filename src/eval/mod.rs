//! Position evaluation: shape pattern table and heuristic scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, line_score, side_score};
pub use patterns::{ShapeEntry, SHAPE_TABLE, WIN_SCORE};
