//! Move selection.
//!
//! The selector scores each of its own candidate moves by searching the
//! opponent's replies and keeps the best one. Ties are resolved differently
//! per phase: in the drop phase a later candidate with an equal score replaces
//! the current choice, in the move phase only a strictly better score does.

use log::debug;

use crate::board::{Board, Phase, Piece};
use crate::constants::{SCORE_NEG_INF, SCORE_POS_INF};
use crate::movegen::{MoveOrder, successors};
use crate::moves::Move;
use crate::search::{Search, SearchConfig};

/// Choose a move for `me` on `board`.
///
/// Returns `None` only when `me` has no legal move at all (every piece is
/// boxed in during the move phase).
pub fn select_move(board: &Board, me: Piece, config: SearchConfig, order: &mut impl MoveOrder) -> Option<Move> {
    let phase = board.phase();
    let candidates = successors(board, me, phase, order);
    let mut search = Search::new(board, me, config, order);

    let mut alpha = SCORE_NEG_INF;
    let mut best = None;
    for mv in candidates {
        let undo = search.apply(mv, me);
        let value = search.min_value(0, alpha, SCORE_POS_INF);
        search.retract(undo);

        let accept = match phase {
            Phase::Drop => value >= alpha,
            Phase::Move => value > alpha,
        };
        if accept {
            alpha = value;
            best = Some(mv);
        }
    }

    match best {
        Some(mv) => debug!(
            "{me} selects {mv} (value {alpha:.3}, {} nodes)",
            search.nodes()
        ),
        None => debug!("{me} has no legal move"),
    }
    best
}

/// An engine bound to one side, with its own seedable move-ordering RNG.
pub struct AiPlayer {
    me: Piece,
    config: SearchConfig,
    rng: fastrand::Rng,
}

impl AiPlayer {
    pub fn new(me: Piece) -> Self {
        Self::with_config(me, SearchConfig::default())
    }

    pub fn with_config(me: Piece, config: SearchConfig) -> Self {
        Self {
            me,
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Fix the RNG seed so that move ordering, and with it the choice among
    /// equally valued moves, is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn piece(&self) -> Piece {
        self.me
    }

    pub fn opponent(&self) -> Piece {
        self.me.opponent()
    }

    /// Pick a move on `board`. The board is only read.
    pub fn make_move(&mut self, board: &Board) -> Option<Move> {
        select_move(board, self.me, self.config, &mut self.rng)
    }
}
