use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{COLUMN_LABELS, DROP_PIECES, N};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Black,
    Red,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::Black, Piece::Red];

    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'b' => Some(Piece::Black),
            'r' => Some(Piece::Red),
            _ => None,
        }
    }

    /// Parse a color name as used on the command line and in the protocol
    /// (`b`, `black`, `r`, `red`).
    pub fn parse(s: &str) -> Option<Piece> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Piece::Black),
            "r" | "red" => Some(Piece::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board cell; `None` is empty.
pub type Cell = Option<Piece>;

/// `(row, col)`, both in `0..N`.
pub type Point = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than eight pieces on the board: moves are placements.
    Drop,
    /// All eight pieces are down: moves are one-step relocations.
    Move,
}

impl Phase {
    pub fn of(board: &Board) -> Phase {
        if board.piece_count() < DROP_PIECES {
            Phase::Drop
        } else {
            Phase::Move
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, (row, col): Point) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, (row, col): Point, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.get(pt).is_none()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(piece))
            .count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self)
    }

    /// All points in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }

    /// In-bounds points at Chebyshev distance exactly 1 from `pt`.
    pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < N && c < N).then_some((r, c))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 5 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} must have 5 cells, found {len}")]
    RowLength { row: usize, len: usize },
    #[error("unknown cell symbol '{0}'")]
    Symbol(char),
}

/// Parses five whitespace-separated rows of `b`, `r` and `.`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.len() != N {
            return Err(ParseBoardError::RowCount(rows.len()));
        }
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != N {
                return Err(ParseBoardError::RowLength { row, len });
            }
            for (col, ch) in text.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(Piece::from_symbol(other).ok_or(ParseBoardError::Symbol(other))?),
                };
                board.set((row, col), cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            write!(f, "{row}: ")?;
            for col in 0..N {
                let ch = self.get((row, col)).map_or('.', Piece::symbol);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for &label in COLUMN_LABELS {
            write!(f, " {}", label as char)?;
        }
        writeln!(f)
    }
}
