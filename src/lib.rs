//! Teeko-Rust: an alpha-beta engine for Teeko2.
//!
//! Teeko2 is played on a 5x5 board. Each side first drops four pieces, then
//! takes turns moving one of them to an adjacent empty cell. Four in a row
//! (in any direction) wins, as do four pieces on the corners of a 3x3 square
//! whose center is empty.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, rule and search parameters
//! - [`board`] - Board state, pieces and phase
//! - [`moves`] - Move type, application, validation, coordinate text
//! - [`movegen`] - Successor generation and move ordering
//! - [`rules`] - Win detection
//! - [`eval`] - Heuristic evaluation of undecided positions
//! - [`search`] - Alpha-beta minimax
//! - [`player`] - Move selection
//! - [`game`] - Game session
//! - [`protocol`] - Text protocol front end
//!
//! ## Example
//!
//! ```
//! use teeko_rust::board::Piece;
//! use teeko_rust::game::Game;
//! use teeko_rust::moves::parse_move;
//! use teeko_rust::player::AiPlayer;
//!
//! let mut game = Game::new();
//! game.play(&parse_move("C2").unwrap()).unwrap();
//!
//! // Let the engine answer for red
//! let mut ai = AiPlayer::new(Piece::Red).with_seed(1);
//! let reply = ai.make_move(game.board()).unwrap();
//! game.play(&reply).unwrap();
//! println!("Red played {reply}");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod player;
pub mod protocol;
pub mod rules;
pub mod search;
