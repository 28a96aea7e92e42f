//! Successor generation.
//!
//! Candidates are produced in row-major order and then handed to a
//! [`MoveOrder`] policy. The engine normally shuffles them with a
//! `fastrand::Rng`, which changes which of several equal-valued moves is
//! picked but never whether the chosen move is legal. Tests use [`InOrder`].

use crate::board::{Board, Phase, Piece};
use crate::moves::Move;

/// Ordering policy applied to a freshly generated candidate list.
pub trait MoveOrder {
    fn arrange(&mut self, moves: &mut [Move]);
}

/// Leaves candidates in generation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InOrder;

impl MoveOrder for InOrder {
    fn arrange(&mut self, _moves: &mut [Move]) {}
}

impl MoveOrder for fastrand::Rng {
    fn arrange(&mut self, moves: &mut [Move]) {
        self.shuffle(moves);
    }
}

/// Generate the legal moves for `piece` under `phase`, arranged by `order`.
///
/// - Drop phase: one placement per empty cell.
/// - Move phase: one relocation per (own piece, empty neighbor) pair.
pub fn successors(board: &Board, piece: Piece, phase: Phase, order: &mut impl MoveOrder) -> Vec<Move> {
    let mut moves = match phase {
        Phase::Drop => placements(board),
        Phase::Move => relocations(board, piece),
    };
    order.arrange(&mut moves);
    moves
}

fn placements(board: &Board) -> Vec<Move> {
    Board::points()
        .filter(|&pt| board.is_empty_at(pt))
        .map(Move::place)
        .collect()
}

fn relocations(board: &Board, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Board::points().filter(|&pt| board.get(pt) == Some(piece)) {
        for to in Board::neighbors(from) {
            if board.is_empty_at(to) {
                moves.push(Move::relocate(from, to));
            }
        }
    }
    moves
}
