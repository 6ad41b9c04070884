//! Engine facade: snapshot in, chosen move out
//!
//! This is the boundary the hosting application calls. Every invocation is
//! self-contained: the internal board is rebuilt from the supplied
//! snapshot, searched, and left restored; nothing carries over between
//! calls. The host guarantees the snapshot is a legal, consistent board.

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Snapshot, Stone};
use crate::search::{Searcher, DEFAULT_DEPTH, DEFAULT_OFFENSIVE_RATIO};

/// Result of a move computation.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// The chosen cell
    pub best_move: Pos,
    /// Negamax value of the root position
    pub score: i64,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock time taken
    pub time_ms: u64,
}

/// The gobang AI engine.
///
/// Owns the board state and the searcher; one instance serves one search
/// at a time (`&mut self`), so concurrent move requests need either
/// separate engines or external serialization.
pub struct AiEngine {
    board: Board,
    searcher: Searcher,
}

impl AiEngine {
    /// Create an engine with the default configuration
    /// (depth 3, offensive ratio 1.0).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, DEFAULT_OFFENSIVE_RATIO)
    }

    /// Create an engine with a custom search depth and offensive ratio.
    #[must_use]
    pub fn with_config(depth: u8, offensive_ratio: f64) -> Self {
        Self {
            board: Board::new(),
            searcher: Searcher::with_config(depth, offensive_ratio),
        }
    }

    /// Compute the engine's next move for the given board snapshot.
    ///
    /// Degenerate inputs still yield a move: an empty board opens at the
    /// center, and a board with no searchable move (already full or
    /// already won) falls back to the first empty cell in scan order, or
    /// the center if none. The caller is expected to check game-over
    /// status before asking for a move.
    pub fn compute_move(&mut self, snapshot: &Snapshot) -> MoveResult {
        let start = Instant::now();

        self.board.reset(snapshot);
        let result = self.searcher.search(&mut self.board, Stone::Engine);

        let best_move = result
            .best_move
            .or_else(|| self.board.first_empty())
            .unwrap_or_else(Pos::center);

        let time_ms = start.elapsed().as_millis() as u64;
        info!("AI choose ({},{})", best_move.row, best_move.col);
        debug!(
            "search finished: score={} nodes={} time={}ms",
            result.score, result.nodes, time_ms
        );

        MoveResult {
            best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
