//! Constants for board dimensions, win detection and the move heuristic.
//!
//! The board is a fixed N×N grid addressed by `(row, col)` pairs, both
//! 0-indexed inside the engine.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 15;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

// =============================================================================
// Win Detection
// =============================================================================

/// Length of the run that wins the game.
pub const WIN_LENGTH: usize = 5;

/// The four line directions checked for a winning run.
/// Order: horizontal, vertical, diagonal, anti-diagonal
pub const LINES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// =============================================================================
// Heuristic Evaluation
// =============================================================================

/// How many cells the evaluator walks along each direction.
pub const EVAL_REACH: usize = 4;

/// Offsets to the eight neighbouring cells.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DELTA: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Single extension point, nothing around it.
pub const SCORE_ISOLATED: u32 = 10;

/// Blocked two potential.
pub const SCORE_BLOCKED_TWO: u32 = 20;

/// Semi-open two potential.
pub const SCORE_SEMI_OPEN_TWO: u32 = 50;

/// Open two potential.
pub const SCORE_OPEN_TWO: u32 = 100;

/// Blocked three potential.
pub const SCORE_BLOCKED_THREE: u32 = 30;

/// Semi-open three potential.
pub const SCORE_SEMI_OPEN_THREE: u32 = 100;

/// Open three potential. Must be contested, hence the outsized weight.
pub const SCORE_OPEN_THREE: u32 = 1000;
