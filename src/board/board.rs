//! Board structure with stone-list tracking
//!
//! The board keeps the authoritative grid plus three ordered stone lists:
//! the engine's stones, the opponent's stones, and the union in placement
//! order. The lists let the win detector and evaluator iterate stones
//! without scanning the whole grid, and the last entry of the union list
//! drives move ordering in the search.
//!
//! Search mutates the board in place with `place`/`undo`; undo follows a
//! strict stack discipline (exact reverse order of placement), so after a
//! balanced sequence the board is value-identical to where it started.

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Externally supplied full-board snapshot, row-major
pub type Snapshot = [[Stone; BOARD_SIZE]; BOARD_SIZE];

/// Game board with per-side stone lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    engine_stones: Vec<Pos>,
    opponent_stones: Vec<Pos>,
    /// All stones in chronological placement order
    all_stones: Vec<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            engine_stones: Vec::with_capacity(TOTAL_CELLS / 2),
            opponent_stones: Vec::with_capacity(TOTAL_CELLS / 2),
            all_stones: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Rebuild the board from a host-supplied snapshot.
    ///
    /// Clears the grid and all three stone lists, then repopulates them in
    /// row-major scan order of the snapshot. Placement order within the
    /// lists therefore reflects scan order, not the real game history; the
    /// search only uses it as a proximity bias, so that is fine.
    pub fn reset(&mut self, snapshot: &Snapshot) {
        self.grid = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.engine_stones.clear();
        self.opponent_stones.clear();
        self.all_stones.clear();

        for (r, row) in snapshot.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell != Stone::Empty {
                    self.place(Pos::new(r as u8, c as u8), cell);
                }
            }
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone, appending to the owner's list and the union list.
    ///
    /// The cell must be empty and `stone` must not be `Empty`.
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "place on occupied cell {:?}", pos);
        debug_assert!(stone != Stone::Empty);

        self.grid[pos.row as usize][pos.col as usize] = stone;
        match stone {
            Stone::Engine => self.engine_stones.push(pos),
            Stone::Opponent => self.opponent_stones.push(pos),
            Stone::Empty => {}
        }
        self.all_stones.push(pos);
    }

    /// Undo the most recent placement.
    ///
    /// Must be called in exact reverse order of `place` calls (stack
    /// discipline); `pos` and `stone` must match the placement being
    /// undone.
    pub fn undo(&mut self, pos: Pos, stone: Stone) {
        debug_assert_eq!(self.get(pos), stone, "undo mismatch at {:?}", pos);
        debug_assert_eq!(self.all_stones.last(), Some(&pos), "undo out of order");

        self.grid[pos.row as usize][pos.col as usize] = Stone::Empty;
        match stone {
            Stone::Engine => {
                self.engine_stones.pop();
            }
            Stone::Opponent => {
                self.opponent_stones.pop();
            }
            Stone::Empty => {}
        }
        self.all_stones.pop();
    }

    /// Get the stone list for a side (empty slice for `Empty`)
    #[inline]
    pub fn stones(&self, stone: Stone) -> &[Pos] {
        match stone {
            Stone::Engine => &self.engine_stones,
            Stone::Opponent => &self.opponent_stones,
            Stone::Empty => &[],
        }
    }

    /// All stones in placement order
    #[inline]
    pub fn all_stones(&self) -> &[Pos] {
        &self.all_stones
    }

    /// Most recently placed stone, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.all_stones.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.all_stones.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.all_stones.is_empty()
    }

    /// First empty cell in row-major scan order, if any
    pub fn first_empty(&self) -> Option<Pos> {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .find(|&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
