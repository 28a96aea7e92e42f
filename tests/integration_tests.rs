//! Integration tests for teeko-rust
//!
//! End-to-end checks through the public API: board setup from text, successor
//! generation, win detection, move selection and whole games in a session.

use std::collections::HashSet;

use teeko_rust::board::{Board, Phase, Piece};
use teeko_rust::constants::{CELLS, DROP_PIECES};
use teeko_rust::eval::heuristic;
use teeko_rust::game::Game;
use teeko_rust::movegen::{InOrder, successors};
use teeko_rust::moves::{Move, MoveError, RelocationFault, parse_move, place_piece};
use teeko_rust::player::{AiPlayer, select_move};
use teeko_rust::rules::{Shape, find_win, game_value};
use teeko_rust::search::{PhasePolicy, SearchConfig};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a board from five rows of `b`, `r` and `.`.
fn setpos(rows: &str) -> Board {
    rows.parse()
        .unwrap_or_else(|e| panic!("bad test board {rows:?}: {e}"))
}

/// Play a sequence of move strings alternately, black first.
fn setup_game(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for text in moves {
        let mv = parse_move(text).unwrap_or_else(|| panic!("bad move text {text}"));
        game.play(&mv)
            .unwrap_or_else(|e| panic!("illegal move {text} in setup: {e}"));
    }
    game
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_empty_board_has_25_placements() {
    let board = Board::new();
    assert_eq!(board.phase(), Phase::Drop);
    let moves = successors(&board, Piece::Red, Phase::Drop, &mut InOrder);
    assert_eq!(moves.len(), 25);
    let cells: HashSet<_> = moves.iter().map(|m| m.to).collect();
    assert_eq!(cells.len(), CELLS);
}

#[test]
fn test_scenario_b_fourth_in_row_wins() {
    let mut board = setpos("bbb.. ..... ..r.. ..... r...r");
    assert_eq!(game_value(&board, Piece::Black), 0.0);
    place_piece(&mut board, &Move::place((0, 3)), Piece::Black);
    assert_eq!(game_value(&board, Piece::Black), 1.0);
}

#[test]
fn test_scenario_c_box_loss() {
    let board = setpos("..... .r.r. ..... .r.r. .....");
    assert!(board.is_empty_at((2, 2)));
    assert_eq!(game_value(&board, Piece::Black), -1.0);
    assert_eq!(find_win(&board).map(|w| w.shape), Some(Shape::Box));
}

#[test]
fn test_scenario_d_move_phase_selection() {
    let board = setpos("b.r.b ..... r.b.r ..... b.r..");
    assert_eq!(board.piece_count(), DROP_PIECES);
    assert_eq!(board.phase(), Phase::Move);
    assert_eq!(game_value(&board, Piece::Black), 0.0);

    for me in Piece::ALL {
        let mv = select_move(&board, me, SearchConfig::default(), &mut InOrder).unwrap();
        assert_eq!(mv.to_pairs().len(), 2);
        assert_eq!(board.get(mv.from.unwrap()), Some(me));
        assert!(board.is_empty_at(mv.to));
    }
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_terminal_value_is_one_of_three() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..500 {
        let mut board = Board::new();
        for pt in Board::points() {
            if rng.bool() {
                board.set(pt, Some(Piece::ALL[rng.usize(..2)]));
            }
        }
        let value = game_value(&board, Piece::Black);
        assert!([-1.0, 0.0, 1.0].contains(&value));
        assert_eq!(value == 0.0, find_win(&board).is_none());
        if value == 0.0 {
            let h = heuristic(&board, Piece::Black);
            assert!(h.abs() < 1.0);
        }
    }
}

#[test]
fn test_clone_and_original_stay_in_step() {
    let game = setup_game(&["A0", "B1", "C2", "D3"]);
    let mut original = *game.board();
    let mut copy = original;
    let moves = ["E4", "A4", "E0", "B3"];
    for (i, text) in moves.iter().enumerate() {
        let mv = parse_move(text).unwrap();
        let piece = if i % 2 == 0 { Piece::Black } else { Piece::Red };
        place_piece(&mut original, &mv, piece);
        place_piece(&mut copy, &mv, piece);
    }
    assert_eq!(original, copy);
    assert_eq!(original.piece_count(), DROP_PIECES);
}

#[test]
fn test_selection_does_not_touch_board() {
    let game = setup_game(&["C2", "B1", "D3", "A0", "E4"]);
    let before = *game.board();
    let mut ai = AiPlayer::new(Piece::Red).with_seed(5);
    let mv = ai.make_move(game.board()).unwrap();
    assert_eq!(*game.board(), before);
    assert!(before.is_empty_at(mv.to));
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_opponent_move_validation() {
    let mut game = setup_game(&["A0", "B0", "A1", "B1", "C3", "D3", "E4", "E0"]);
    assert_eq!(game.phase(), Phase::Move);
    assert_eq!(game.to_move(), Piece::Black);

    assert_eq!(
        game.play(&parse_move("E3").unwrap()),
        Err(MoveError::PlacementInMovePhase)
    );
    assert_eq!(
        game.play(&parse_move("B0-C0").unwrap()),
        Err(MoveError::IllegalRelocation(RelocationFault::NotOwned((0, 1))))
    );
    assert_eq!(
        game.play(&parse_move("A0-A3").unwrap()),
        Err(MoveError::IllegalRelocation(RelocationFault::NotAdjacent {
            from: (0, 0),
            to: (3, 0)
        }))
    );
    assert_eq!(
        game.play(&parse_move("A0-B0").unwrap()),
        Err(MoveError::OccupiedDestination((0, 1)))
    );
    game.play(&parse_move("A1-A2").unwrap()).unwrap();
    assert_eq!(game.to_move(), Piece::Red);
    assert_eq!(game.board().piece_count(), DROP_PIECES);
}

#[test]
fn test_engine_games_stay_legal() {
    for (seed, policy) in [
        (1, PhasePolicy::FixedAtRoot),
        (2, PhasePolicy::FixedAtRoot),
        (3, PhasePolicy::PerNode),
    ] {
        let config = SearchConfig {
            phase_policy: policy,
            ..SearchConfig::default()
        };
        let mut black = AiPlayer::with_config(Piece::Black, config).with_seed(seed);
        let mut red = AiPlayer::with_config(Piece::Red, config).with_seed(seed + 100);
        let mut game = Game::new();

        while !game.is_over() && game.plies() < 40 {
            let player = if game.to_move() == Piece::Black { &mut black } else { &mut red };
            let Some(mv) = player.make_move(game.board()) else {
                break;
            };
            assert!(game.board().is_empty_at(mv.to));
            assert_eq!(mv.is_relocation(), game.phase() == Phase::Move);
            game.play(&mv).unwrap();
            assert!(game.board().piece_count() <= DROP_PIECES);
        }
    }
}
