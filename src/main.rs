//! Teeko-Rust: play Teeko2 against the engine.
//!
//! ## Usage
//!
//! - `teeko` - Play against the engine in the terminal
//! - `teeko play --ai-color r` - Same, with the engine playing red
//! - `teeko protocol` - Start the text protocol server on stdin/stdout
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use teeko_rust::board::{Phase, Piece};
use teeko_rust::game::Game;
use teeko_rust::moves::{Move, parse_coord, str_coord};
use teeko_rust::player::AiPlayer;
use teeko_rust::protocol::ProtocolEngine;
use teeko_rust::search::{PhasePolicy, SearchConfig};

/// Teeko-Rust: an alpha-beta Teeko2 engine
#[derive(Parser)]
#[command(name = "teeko")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for move ordering (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Plies searched past the first opponent reply
    #[arg(long, global = true, default_value_t = teeko_rust::constants::DEFAULT_DEPTH)]
    depth: u32,

    /// Phase used for moves generated inside the search
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::Fixed)]
    phase_policy: PolicyArg,

    /// Search every node in full instead of cutting off refuted branches
    #[arg(long, global = true)]
    no_prune: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// Color the engine plays (random if omitted); black moves first
        #[arg(long)]
        ai_color: Option<ColorArg>,
    },
    /// Start the text protocol server for use with scripts and GUIs
    Protocol,
}

#[derive(Copy, Clone, ValueEnum)]
enum PolicyArg {
    /// Keep the phase of the root position
    Fixed,
    /// Recompute the phase at every node
    PerNode,
}

#[derive(Copy, Clone, ValueEnum)]
enum ColorArg {
    B,
    R,
}

impl From<ColorArg> for Piece {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::B => Piece::Black,
            ColorArg::R => Piece::Red,
        }
    }
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            phase_policy: match self.phase_policy {
                PolicyArg::Fixed => PhasePolicy::FixedAtRoot,
                PolicyArg::PerNode => PhasePolicy::PerNode,
            },
            prune: !self.no_prune,
        }
    }

    fn rng(&self) -> fastrand::Rng {
        self.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol) => {
            let mut engine = ProtocolEngine::with_config(cli.search_config(), cli.rng());
            engine.run().context("protocol session failed")?;
        }
        Some(Commands::Play { ai_color }) => play(&cli, ai_color.map(Piece::from))?,
        None => play(&cli, None)?,
    }
    Ok(())
}

fn play(cli: &Cli, ai_color: Option<Piece>) -> Result<()> {
    let mut rng = cli.rng();
    let me = ai_color.unwrap_or_else(|| Piece::ALL[rng.usize(..Piece::ALL.len())]);
    let mut ai = AiPlayer::with_config(me, cli.search_config()).with_seed(rng.u64(..));
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Teeko2: you are {}, the engine is {}", me.opponent(), me);

    while !game.is_over() {
        print!("{}", game.board());
        if game.to_move() == me {
            let Some(mv) = ai.make_move(game.board()) else {
                bail!("{me} has no legal move");
            };
            game.play(&mv)?;
            match mv.from {
                Some(from) => {
                    println!("{me} moved from {}", str_coord(from));
                    println!("  to {}", str_coord(mv.to));
                }
                None => println!("{me} moved at {}", str_coord(mv.to)),
            }
        } else {
            println!("{}'s turn", me.opponent());
            loop {
                let mv = read_move(&mut input, game.phase())?;
                match game.play(&mv) {
                    Ok(()) => break,
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    print!("{}", game.board());
    if game.winner() == Some(me) {
        println!("AI wins! Game over.");
    } else {
        println!("You win! Game over.");
    }
    Ok(())
}

/// Prompt until a well-formed move for `phase` is entered.
fn read_move(input: &mut impl BufRead, phase: Phase) -> Result<Move> {
    match phase {
        Phase::Drop => Ok(Move::place(read_coord(input, "Move (e.g. B3): ")?)),
        Phase::Move => {
            let from = read_coord(input, "Move from (e.g. B3): ")?;
            let to = read_coord(input, "Move to (e.g. B3): ")?;
            Ok(Move::relocate(from, to))
        }
    }
}

fn read_coord(input: &mut impl BufRead, prompt: &str) -> Result<(usize, usize)> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        if let Some(pt) = parse_coord(&line) {
            return Ok(pt);
        }
    }
}
