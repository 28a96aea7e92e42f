//! Line-oriented text protocol for driving a Teeko2 session from scripts.
//!
//! A request line is `[id] command args...`. The reply starts with `=` when
//! the command succeeded or `?` when it was rejected, carries the id if one
//! was given, and ends with an empty line. Moves use board coordinates:
//! `C2` places a piece, `B3-C4` relocates one.
//!
//! ## Commands
//!
//! - `name`, `version`, `protocol_version`: engine identification
//! - `list_commands`, `known_command <cmd>`: command discovery
//! - `clear_board`: empty board, black to move
//! - `setboard <row0> .. <row4>`: load rows of `b`, `r` and `.`; black to move
//! - `showboard`: render the current board
//! - `play <color> <move>`: apply a validated move for `color`
//! - `genmove <color>`: search, apply and print a move for `color`
//! - `winner`: `b`, `r` or `none`
//! - `quit`: end the session
//!
//! ## Example
//!
//! ```ignore
//! use teeko_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Board, Piece};
use crate::game::Game;
use crate::moves::parse_move;
use crate::player::select_move;
use crate::search::SearchConfig;

/// Commands answered by `execute`, reported by `list_commands`.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "setboard",
    "showboard",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    /// Current game
    game: Game,
    /// Search settings used by `genmove`
    config: SearchConfig,
    /// Move ordering for `genmove`
    rng: fastrand::Rng,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), fastrand::Rng::new())
    }

    pub fn with_config(config: SearchConfig, rng: fastrand::Rng) -> Self {
        Self {
            game: Game::new(),
            config,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(args: &[&str]) -> Result<Piece, String> {
        let arg = args.first().ok_or("missing argument")?;
        Piece::parse(arg).ok_or_else(|| format!("invalid color: {arg}"))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "teeko-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.clear();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "setboard" => match args.join(" ").parse::<Board>() {
                Ok(board) => {
                    self.game = Game::from_board(board, Piece::Black);
                    (true, String::new())
                }
                Err(err) => (false, err.to_string()),
            },

            "play" => {
                let color = match Self::parse_color(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let Some(mv) = args.get(1..).and_then(|rest| parse_move(&rest.join(" "))) else {
                    return (false, "invalid move".to_string());
                };
                match self.game.play_as(color, &mv) {
                    Ok(()) => (true, String::new()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "genmove" => {
                let color = match Self::parse_color(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                if self.game.is_over() {
                    return (false, "game is over".to_string());
                }
                let Some(mv) = select_move(self.game.board(), color, self.config, &mut self.rng) else {
                    return (false, format!("{color} has no legal move"));
                };
                debug!("genmove {color}: {mv}");
                match self.game.play_as(color, &mv) {
                    Ok(()) => (true, mv.to_string()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "winner" => {
                let response = self
                    .game
                    .winner()
                    .map_or("none".to_string(), |p| p.to_string());
                (true, response)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
