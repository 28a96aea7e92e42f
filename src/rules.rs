//! Win detection.
//!
//! Every winning shape is a set of four cells that must hold the same piece:
//!
//! 1. `Horizontal` - four in a row
//! 2. `Vertical` - four in a column
//! 3. `Diagonal` - four along a `\` diagonal
//! 4. `AntiDiagonal` - four along a `/` diagonal
//! 5. `Box` - the four diagonal corners of an interior cell, which itself
//!    must be empty for the box to count as a win
//!
//! All shape locations are enumerated once into a [`Window`] table which the
//! heuristic evaluator scans as well.

use std::sync::OnceLock;

use crate::board::{Board, Piece, Point};
use crate::constants::{N, RUN, WIN_SCORE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
    Box,
}

/// One location of a shape on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub shape: Shape,
    pub cells: [Point; RUN],
    /// For boxes, the cell that has to stay empty.
    pub center: Option<Point>,
}

impl Window {
    /// The piece occupying all four cells, if there is one.
    fn owner(&self, board: &Board) -> Option<Piece> {
        let first = board.get(self.cells[0])?;
        self.cells[1..]
            .iter()
            .all(|&pt| board.get(pt) == Some(first))
            .then_some(first)
    }

    pub fn count(&self, board: &Board, piece: Piece) -> usize {
        self.cells
            .iter()
            .filter(|&&pt| board.get(pt) == Some(piece))
            .count()
    }
}

/// A completed winning shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Win {
    pub piece: Piece,
    pub shape: Shape,
    pub cells: [Point; RUN],
}

static WINDOWS: OnceLock<Vec<Window>> = OnceLock::new();

/// All shape locations, grouped by shape in scan order and row-major
/// within each shape.
pub fn windows() -> &'static [Window] {
    WINDOWS.get_or_init(build_windows)
}

fn build_windows() -> Vec<Window> {
    let span = N - RUN + 1;
    let mut out = Vec::new();

    for row in 0..N {
        for col in 0..span {
            out.push(line(Shape::Horizontal, |i| (row, col + i)));
        }
    }
    for col in 0..N {
        for row in 0..span {
            out.push(line(Shape::Vertical, |i| (row + i, col)));
        }
    }
    for row in 0..span {
        for col in 0..span {
            out.push(line(Shape::Diagonal, |i| (row + i, col + i)));
        }
    }
    for row in 0..span {
        for col in RUN - 1..N {
            out.push(line(Shape::AntiDiagonal, |i| (row + i, col - i)));
        }
    }
    for row in 1..N - 1 {
        for col in 1..N - 1 {
            out.push(Window {
                shape: Shape::Box,
                cells: [
                    (row - 1, col - 1),
                    (row - 1, col + 1),
                    (row + 1, col - 1),
                    (row + 1, col + 1),
                ],
                center: Some((row, col)),
            });
        }
    }
    out
}

fn line(shape: Shape, cell: impl Fn(usize) -> Point) -> Window {
    Window {
        shape,
        cells: std::array::from_fn(cell),
        center: None,
    }
}

/// Find the first completed shape in scan order.
pub fn find_win(board: &Board) -> Option<Win> {
    windows().iter().find_map(|w| {
        if w.center.is_some_and(|c| !board.is_empty_at(c)) {
            return None;
        }
        w.owner(board).map(|piece| Win {
            piece,
            shape: w.shape,
            cells: w.cells,
        })
    })
}

pub fn winner(board: &Board) -> Option<Piece> {
    find_win(board).map(|w| w.piece)
}

/// Terminal value from `me`'s side: `1.0` if `me` has won, `-1.0` if the
/// opponent has, `0.0` otherwise.
pub fn game_value(board: &Board, me: Piece) -> f64 {
    match winner(board) {
        Some(p) if p == me => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0.0,
    }
}
