//! Depth-limited alpha-beta minimax.
//!
//! Two node kinds alternate: maximizing nodes where the engine's own piece
//! (`me`) moves, and minimizing nodes where the opponent moves. At every node
//! a decided game is scored first; otherwise the depth cutoff returns the
//! heuristic, and only then are successors expanded.
//!
//! The search never touches the caller's board. It copies it once into a
//! scratch board and walks the tree with make/undo, so every branch starts
//! from exactly its parent's position.

use crate::board::{Board, Phase, Piece};
use crate::constants::{DEFAULT_DEPTH, SCORE_NEG_INF, SCORE_POS_INF};
use crate::eval::heuristic;
use crate::movegen::{MoveOrder, successors};
use crate::moves::{Move, Undo, make_move, undo_move};
use crate::rules::game_value;

/// Which phase interior nodes generate moves for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PhasePolicy {
    /// Use the phase of the board the search started from at every node,
    /// even if the lookahead has filled the board past the drop phase.
    #[default]
    FixedAtRoot,
    /// Derive the phase from each node's own piece count.
    PerNode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the first opponent reply node before the
    /// heuristic is applied.
    pub depth: u32,
    pub phase_policy: PhasePolicy,
    /// Stop expanding a node once its window is strictly inverted. Scores
    /// equal to a bound are always searched out, so the chosen move does
    /// not depend on this flag.
    pub prune: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            phase_policy: PhasePolicy::default(),
            prune: true,
        }
    }
}

/// A single search from one root position.
pub struct Search<'o, O: MoveOrder> {
    me: Piece,
    root_phase: Phase,
    config: SearchConfig,
    order: &'o mut O,
    board: Board,
    nodes: u64,
}

impl<'o, O: MoveOrder> Search<'o, O> {
    pub fn new(board: &Board, me: Piece, config: SearchConfig, order: &'o mut O) -> Self {
        Self {
            me,
            root_phase: board.phase(),
            config,
            order,
            board: *board,
            nodes: 0,
        }
    }

    /// The scratch board at the current node.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Play a move on the scratch board.
    pub fn apply(&mut self, mv: Move, piece: Piece) -> Undo {
        make_move(&mut self.board, mv, piece)
    }

    /// Take back a move played with [`Search::apply`].
    pub fn retract(&mut self, undo: Undo) {
        undo_move(&mut self.board, undo);
    }

    fn node_phase(&self) -> Phase {
        match self.config.phase_policy {
            PhasePolicy::FixedAtRoot => self.root_phase,
            PhasePolicy::PerNode => self.board.phase(),
        }
    }

    /// Shared prologue: terminal value, then depth cutoff.
    fn leaf_value(&mut self, depth: u32) -> Option<f64> {
        self.nodes += 1;
        let value = game_value(&self.board, self.me);
        if value != 0.0 {
            return Some(value);
        }
        (depth >= self.config.depth).then(|| heuristic(&self.board, self.me))
    }

    /// Value of the current node with `me` to move.
    pub fn max_value(&mut self, depth: u32, mut alpha: f64, beta: f64) -> f64 {
        if let Some(value) = self.leaf_value(depth) {
            return value;
        }
        let moves = successors(&self.board, self.me, self.node_phase(), &mut *self.order);
        for mv in moves {
            let undo = self.apply(mv, self.me);
            let score = self.min_value(depth + 1, alpha, beta);
            self.retract(undo);
            alpha = alpha.max(score);
            if self.config.prune && alpha > beta {
                break;
            }
        }
        alpha
    }

    /// Value of the current node with the opponent to move.
    pub fn min_value(&mut self, depth: u32, alpha: f64, mut beta: f64) -> f64 {
        if let Some(value) = self.leaf_value(depth) {
            return value;
        }
        let opp = self.me.opponent();
        let moves = successors(&self.board, opp, self.node_phase(), &mut *self.order);
        for mv in moves {
            let undo = self.apply(mv, opp);
            let score = self.max_value(depth + 1, alpha, beta);
            self.retract(undo);
            beta = beta.min(score);
            if self.config.prune && alpha > beta {
                break;
            }
        }
        beta
    }
}

/// Minimax value of `board` from `me`'s side with `to_move` to play, searched
/// from depth 0 with the full window.
pub fn evaluate(board: &Board, me: Piece, to_move: Piece, config: SearchConfig, order: &mut impl MoveOrder) -> f64 {
    let mut search = Search::new(board, me, config, order);
    if to_move == me {
        search.max_value(0, SCORE_NEG_INF, SCORE_POS_INF)
    } else {
        search.min_value(0, SCORE_NEG_INF, SCORE_POS_INF)
    }
}
