//! Moves: representation, application, validation and coordinate text.
//!
//! A move always names its destination. In the drop phase that is all there
//! is; in the move phase it also names the source cell of the relocated piece.
//! Coordinates are written column letter first, then row digit, so `B3` is
//! row 3, column 1.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Cell, Phase, Piece, Point};
use crate::constants::{COLUMN_LABELS, N};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub to: Point,
    pub from: Option<Point>,
}

impl Move {
    /// A drop-phase placement onto `to`.
    pub fn place(to: Point) -> Self {
        Self { to, from: None }
    }

    /// A move-phase relocation of the piece on `from` to `to`.
    pub fn relocate(from: Point, to: Point) -> Self {
        Self { to, from: Some(from) }
    }

    pub fn is_relocation(&self) -> bool {
        self.from.is_some()
    }

    /// The move as an ordered point list: destination first, then the
    /// source for relocations.
    pub fn to_pairs(&self) -> Vec<Point> {
        std::iter::once(self.to).chain(self.from).collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "{}-{}", str_coord(from), str_coord(self.to)),
            None => write!(f, "{}", str_coord(self.to)),
        }
    }
}

/// Why a relocation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationFault {
    /// The source cell does not hold the mover's piece.
    NotOwned(Point),
    /// Source and destination are more than one step apart.
    NotAdjacent { from: Point, to: Point },
}

impl fmt::Display for RelocationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelocationFault::NotOwned(pt) => write!(f, "you don't have a piece at {}", str_coord(*pt)),
            RelocationFault::NotAdjacent { from, to } => write!(
                f,
                "can only move to an adjacent space ({} is not next to {})",
                str_coord(*to),
                str_coord(*from)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: {} is occupied", coord(.0))]
    OccupiedDestination(Point),
    #[error("illegal move: {0}")]
    IllegalRelocation(RelocationFault),
    #[error("illegal move: all pieces are down, relocate one instead")]
    PlacementInMovePhase,
    #[error("illegal move: pieces cannot be relocated during the drop phase")]
    RelocationInDropPhase,
    #[error("illegal move: the game is over")]
    GameOver,
}

fn coord(pt: &Point) -> String {
    str_coord(*pt)
}

/// Apply a move that is already known to be legal.
///
/// Writes empty to the source (if any) and `piece` to the destination.
pub fn place_piece(board: &mut Board, mv: &Move, piece: Piece) {
    if let Some(from) = mv.from {
        board.set(from, None);
    }
    board.set(mv.to, Some(piece));
}

/// The cells a move overwrote, so it can be taken back exactly.
#[derive(Copy, Clone, Debug)]
pub struct Undo {
    mv: Move,
    prior_to: Cell,
    prior_from: Cell,
}

/// Apply `mv` for `piece` and return the record that reverses it.
pub fn make_move(board: &mut Board, mv: Move, piece: Piece) -> Undo {
    let undo = Undo {
        mv,
        prior_to: board.get(mv.to),
        prior_from: mv.from.and_then(|from| board.get(from)),
    };
    place_piece(board, &mv, piece);
    undo
}

/// Restore the cells changed by the move `undo` was recorded for.
pub fn undo_move(board: &mut Board, undo: Undo) {
    board.set(undo.mv.to, undo.prior_to);
    if let Some(from) = undo.mv.from {
        board.set(from, undo.prior_from);
    }
}

/// Check a move made by `piece` against the current board.
///
/// # Errors
/// - [`MoveError::OccupiedDestination`] if the destination is not empty
/// - [`MoveError::IllegalRelocation`] if the source is not `piece`'s or is
///   not adjacent to the destination
/// - [`MoveError::PlacementInMovePhase`] / [`MoveError::RelocationInDropPhase`]
///   if the move kind does not match the board's phase
pub fn validate_move(board: &Board, mv: &Move, piece: Piece) -> Result<(), MoveError> {
    match (board.phase(), mv.from) {
        (Phase::Drop, Some(_)) => return Err(MoveError::RelocationInDropPhase),
        (Phase::Move, None) => return Err(MoveError::PlacementInMovePhase),
        _ => {}
    }
    if let Some(from) = mv.from {
        if board.get(from) != Some(piece) {
            return Err(MoveError::IllegalRelocation(RelocationFault::NotOwned(from)));
        }
        if !is_adjacent(from, mv.to) {
            return Err(MoveError::IllegalRelocation(RelocationFault::NotAdjacent {
                from,
                to: mv.to,
            }));
        }
    }
    if !board.is_empty_at(mv.to) {
        return Err(MoveError::OccupiedDestination(mv.to));
    }
    Ok(())
}

/// Chebyshev distance of at most one.
pub fn is_adjacent(a: Point, b: Point) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// Parse a coordinate such as `B3` (column letter, row digit).
///
/// Returns `None` for anything that is not on the board.
pub fn parse_coord(s: &str) -> Option<Point> {
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = COLUMN_LABELS
        .iter()
        .position(|&c| c == bytes[0].to_ascii_uppercase())?;
    let row = (bytes[1] as char).to_digit(10)? as usize;
    (row < N).then_some((row, col))
}

/// Convert a point to coordinate text (e.g. `(3, 1)` is `B3`).
pub fn str_coord((row, col): Point) -> String {
    format!("{}{row}", COLUMN_LABELS[col] as char)
}

/// Parse move text: `C2` for a placement, `B3-C4` (or `B3 C4`) for a
/// relocation from B3 to C4.
pub fn parse_move(s: &str) -> Option<Move> {
    let parts: Vec<&str> = s
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [to] => Some(Move::place(parse_coord(to)?)),
        [from, to] => Some(Move::relocate(parse_coord(from)?, parse_coord(to)?)),
        _ => None,
    }
}
