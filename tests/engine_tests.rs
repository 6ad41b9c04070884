//! End-to-end scenarios against the engine boundary

use gobang::board::Board;
use gobang::search::{candidate_moves, Searcher};
use gobang::{AiEngine, Pos, Snapshot, Stone, BOARD_SIZE};

fn empty_snapshot() -> Snapshot {
    [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE]
}

#[test]
fn empty_board_opens_at_center() {
    let mut engine = AiEngine::new();
    let result = engine.compute_move(&empty_snapshot());
    assert_eq!(result.best_move, Pos::new(7, 7));
}

#[test]
fn extends_from_a_lone_stone() {
    // One engine stone at (7,7), nothing else: every candidate is one of
    // its 8 neighbors, so the chosen move must be too
    let mut snapshot = empty_snapshot();
    snapshot[7][7] = Stone::Engine;

    let mut engine = AiEngine::new();
    let m = engine.compute_move(&snapshot).best_move;

    assert!((i32::from(m.row) - 7).abs() <= 1);
    assert!((i32::from(m.col) - 7).abs() <= 1);
    assert_ne!(m, Pos::new(7, 7));
}

#[test]
fn blocks_opponent_four() {
    // Opponent four at (7,3)..(7,6), open only toward (7,7); failing to
    // block loses within the search horizon
    let mut snapshot = empty_snapshot();
    for c in 3..7 {
        snapshot[7][c] = Stone::Opponent;
    }
    snapshot[7][2] = Stone::Engine;

    let mut engine = AiEngine::new();
    assert_eq!(engine.compute_move(&snapshot).best_move, Pos::new(7, 7));
}

#[test]
fn completes_own_five() {
    // Engine four at (7,3)..(7,6) blocked at (7,2); (7,7) wins outright
    let mut snapshot = empty_snapshot();
    for c in 3..7 {
        snapshot[7][c] = Stone::Engine;
    }
    snapshot[7][2] = Stone::Opponent;
    snapshot[3][3] = Stone::Opponent;

    let mut engine = AiEngine::new();
    assert_eq!(engine.compute_move(&snapshot).best_move, Pos::new(7, 7));
}

#[test]
fn prefers_winning_over_blocking() {
    // Both sides have a four; completing our own five beats defending
    let mut snapshot = empty_snapshot();
    for c in 3..7 {
        snapshot[7][c] = Stone::Engine; // open toward (7,7)
    }
    snapshot[7][2] = Stone::Opponent;
    for r in 2..6 {
        snapshot[r][11] = Stone::Opponent; // threatens (6,11) / (1,11)
    }

    let mut engine = AiEngine::new();
    assert_eq!(engine.compute_move(&snapshot).best_move, Pos::new(7, 7));
}

#[test]
fn candidates_are_empty_and_adjacent() {
    let mut snapshot = empty_snapshot();
    snapshot[7][7] = Stone::Engine;
    snapshot[8][8] = Stone::Opponent;
    snapshot[2][12] = Stone::Engine;

    let mut board = Board::new();
    board.reset(&snapshot);

    for pos in candidate_moves(&board) {
        assert!(board.is_empty(pos), "candidate {:?} is occupied", pos);

        let has_neighbor = (-1i32..=1).any(|dr| {
            (-1i32..=1).any(|dc| {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                Pos::is_valid(r, c) && !board.is_empty(Pos::new(r as u8, c as u8))
            })
        });
        assert!(has_neighbor, "candidate {:?} has no occupied neighbor", pos);
    }
}

#[test]
fn search_leaves_board_untouched() {
    let mut snapshot = empty_snapshot();
    snapshot[7][7] = Stone::Engine;
    snapshot[7][8] = Stone::Opponent;
    snapshot[8][7] = Stone::Opponent;
    snapshot[6][6] = Stone::Engine;

    let mut board = Board::new();
    board.reset(&snapshot);
    let before = board.clone();

    let mut searcher = Searcher::new();
    let _ = searcher.search(&mut board, Stone::Engine);

    assert_eq!(board, before);
}

#[test]
fn shallower_search_still_blocks() {
    let mut snapshot = empty_snapshot();
    for c in 3..7 {
        snapshot[7][c] = Stone::Opponent;
    }
    snapshot[7][2] = Stone::Engine;

    let mut engine = AiEngine::with_config(2, 1.0);
    assert_eq!(engine.compute_move(&snapshot).best_move, Pos::new(7, 7));
}
