//! Gobang AI engine CLI
//!
//! - `gobang demo` - Run scripted scenarios against the engine
//! - `gobang solve` - Read a board position and print the chosen move
//!
//! Board text format for `solve`: 15 lines of 15 cells, `.` empty,
//! `X` engine, `O` opponent; spaces between cells are ignored.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use gobang::search::{DEFAULT_DEPTH, DEFAULT_OFFENSIVE_RATIO};
use gobang::{AiEngine, Snapshot, Stone, BOARD_SIZE};

/// Gobang: a five-in-a-row AI engine
#[derive(Parser)]
#[command(name = "gobang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scripted demo scenarios
    Demo,
    /// Compute the engine's move for a board read from a file or stdin
    Solve {
        /// Board file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
        /// Weighting of opponent threats (lower = more aggressive)
        #[arg(long, default_value_t = DEFAULT_OFFENSIVE_RATIO)]
        ratio: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { file, depth, ratio }) => run_solve(file, depth, ratio),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_solve(file: Option<PathBuf>, depth: u8, ratio: f64) -> Result<()> {
    let text = match file {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading board from stdin")?;
            buf
        }
    };

    let snapshot = parse_snapshot(&text)?;
    let mut engine = AiEngine::with_config(depth, ratio);
    let result = engine.compute_move(&snapshot);

    println!(
        "AI choose ({},{})",
        result.best_move.row, result.best_move.col
    );
    println!(
        "score: {}  nodes: {}  time: {}ms",
        result.score, result.nodes, result.time_ms
    );
    Ok(())
}

/// Parse a textual board: 15 rows of `.`/`X`/`O`, spaces ignored.
fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if rows.len() != BOARD_SIZE {
        bail!("expected {} board rows, got {}", BOARD_SIZE, rows.len());
    }

    let mut snapshot: Snapshot = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != BOARD_SIZE {
            bail!(
                "row {}: expected {} cells, got {}",
                r,
                BOARD_SIZE,
                cells.len()
            );
        }
        for (c, ch) in cells.iter().enumerate() {
            snapshot[r][c] = match ch {
                '.' => Stone::Empty,
                'X' | 'x' => Stone::Engine,
                'O' | 'o' => Stone::Opponent,
                _ => bail!("row {}: invalid cell {:?}", r, ch),
            };
        }
    }
    Ok(snapshot)
}

fn run_demo() {
    println!("Gobang AI Engine v0.1.0\n");

    let mut engine = AiEngine::new();

    println!("--- Empty board ---");
    let empty: Snapshot = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
    report(engine.compute_move(&empty), "center (7,7)");

    println!("\n--- Opening response ---");
    let mut opening = empty;
    opening[7][7] = Stone::Opponent;
    report(engine.compute_move(&opening), "a neighbor of (7,7)");

    println!("\n--- Winning move ---");
    let mut winning = empty;
    for c in 3..7 {
        winning[7][c] = Stone::Engine;
    }
    winning[7][2] = Stone::Opponent;
    winning[3][3] = Stone::Opponent;
    report(engine.compute_move(&winning), "(7,7) completes five");

    println!("\n--- Blocking move ---");
    let mut blocking = empty;
    for c in 3..7 {
        blocking[7][c] = Stone::Opponent;
    }
    blocking[7][2] = Stone::Engine;
    report(engine.compute_move(&blocking), "(7,7) blocks the four");
}

fn report(result: gobang::MoveResult, expected: &str) {
    println!(
        "AI choose ({},{})  [expected: {}]",
        result.best_move.row, result.best_move.col, expected
    );
    println!(
        "score: {}  nodes: {}  time: {}ms",
        result.score, result.nodes, result.time_ms
    );
}
