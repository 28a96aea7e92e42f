//! Game session: the authoritative board and whose turn it is.
//!
//! The engine functions are pure; a [`Game`] is what holds state between
//! turns. Every move entering the session is validated, including the
//! engine's own, so a session can never reach an illegal position.

use log::{trace, warn};

use crate::board::{Board, Phase, Piece};
use crate::moves::{Move, MoveError, place_piece, validate_move};
use crate::rules::{Win, find_win};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Piece,
    plies: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty board with black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Piece::Black)
    }

    pub fn from_board(board: Board, to_move: Piece) -> Self {
        Self {
            board,
            to_move,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    /// Moves played in this session.
    pub fn plies(&self) -> usize {
        self.plies
    }

    pub fn win(&self) -> Option<Win> {
        find_win(&self.board)
    }

    pub fn winner(&self) -> Option<Piece> {
        self.win().map(|w| w.piece)
    }

    pub fn is_over(&self) -> bool {
        self.win().is_some()
    }

    /// Validate and apply a move for the side to move, then pass the turn.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.play_as(self.to_move, mv)
    }

    /// Validate and apply a move for `piece`; the turn passes to its
    /// opponent.
    ///
    /// # Errors
    /// [`MoveError::GameOver`] once a side has won, otherwise whatever
    /// [`validate_move`] reports.
    pub fn play_as(&mut self, piece: Piece, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if let Err(err) = validate_move(&self.board, mv, piece) {
            warn!("rejected {mv} for {piece}: {err}");
            return Err(err);
        }
        place_piece(&mut self.board, mv, piece);
        self.to_move = piece.opponent();
        self.plies += 1;
        trace!("{piece} played {mv}\n{}", self.board);
        Ok(())
    }

    /// Reset to an empty board with black to move.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::RelocationFault;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Piece::Black);
        game.play(&Move::place((2, 2))).unwrap();
        assert_eq!(game.to_move(), Piece::Red);
        assert_eq!(game.board().get((2, 2)), Some(Piece::Black));
        assert_eq!(game.plies(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = Game::new();
        game.play(&Move::place((2, 2))).unwrap();
        let before = game.clone();
        assert_eq!(
            game.play(&Move::place((2, 2))),
            Err(MoveError::OccupiedDestination((2, 2)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_relocation_checks() {
        let board = "bbrr. ..... bb... rr... .....".parse().unwrap();
        let mut game = Game::from_board(board, Piece::Red);
        assert_eq!(game.phase(), Phase::Move);
        assert_eq!(
            game.play(&Move::relocate((0, 0), (1, 0))),
            Err(MoveError::IllegalRelocation(RelocationFault::NotOwned((0, 0))))
        );
        game.play(&Move::relocate((0, 2), (1, 2))).unwrap();
        assert_eq!(game.board().piece_count(), 8);
        assert_eq!(game.to_move(), Piece::Black);
    }

    #[test]
    fn test_no_moves_after_win() {
        let board = "bbb.. ..... ..... r.r.. r....".parse().unwrap();
        let mut game = Game::from_board(board, Piece::Black);
        game.play(&Move::place((0, 3))).unwrap();
        assert_eq!(game.winner(), Some(Piece::Black));
        assert_eq!(game.play(&Move::place((4, 4))), Err(MoveError::GameOver));
    }

    #[test]
    fn test_clear() {
        let mut game = Game::new();
        game.play(&Move::place((0, 0))).unwrap();
        game.clear();
        assert_eq!(game, Game::new());
    }
}
