//! Constants for board geometry, game rules and search parameters.
//!
//! The board is a fixed 5x5 grid addressed by `(row, col)`. Everything that
//! depends on the grid size is derived from [`N`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Length of a winning run, and number of corners in a box.
pub const RUN: usize = 4;

/// Column labels used in coordinate text (`A` is column 0).
pub const COLUMN_LABELS: &[u8; N] = b"ABCDE";

// =============================================================================
// Game Rules
// =============================================================================

/// Pieces each side drops before the game switches to moving them.
pub const PIECES_PER_SIDE: usize = 4;

/// Total pieces on the board once the drop phase is over.
pub const DROP_PIECES: usize = 2 * PIECES_PER_SIDE;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search cutoff: one ply of opponent replies past the root.
pub const DEFAULT_DEPTH: u32 = 1;

/// Value of a position won by the searching side.
pub const WIN_SCORE: f64 = 1.0;

/// Window counts are divided by this rather than [`RUN`] so a near-complete
/// window never reaches [`WIN_SCORE`].
pub const HEURISTIC_SCALE: f64 = 5.0;

/// Initial alpha bound. Must lie below any reachable score.
pub const SCORE_NEG_INF: f64 = -100_000.0;

/// Initial beta bound. Must lie above any reachable score.
pub const SCORE_POS_INF: f64 = 100_000.0;
