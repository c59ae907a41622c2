//! Fairplay CLI
//!
//! Terminal front end: parses the move list, runs rounds against the
//! computer and prints everything needed to audit them afterwards.

mod input;
mod table;
mod terminal;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use fairplay_core::{verify_disclosure, MoveSet, RoundOrchestrator};
use std::io;
use terminal::TerminalChannel;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "Example: fairplay play Rock Paper Scissors";

#[derive(Parser)]
#[command(
    name = "fairplay",
    about = "Provably fair rock-paper-scissors with any odd number of moves",
    after_help = USAGE_EXAMPLE
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log protocol steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play {
        /// Odd number (>= 3) of distinct moves, in winning order
        #[arg(required = true)]
        moves: Vec<String>,
        /// Rounds to play before exiting
        #[arg(long, env = "FAIRPLAY_ROUNDS", default_value_t = 1)]
        rounds: usize,
        /// Also print the commitment and disclosure as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Print who beats whom
    Table {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Check a disclosed key and move against a published HMAC
    Verify {
        /// Disclosed key, hex
        #[arg(long)]
        key: String,
        /// The computer's disclosed move
        #[arg(long = "move")]
        move_label: String,
        /// HMAC shown before you moved, hex
        #[arg(long)]
        hmac: String,
    },
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn load_moves(labels: &[String]) -> anyhow::Result<MoveSet> {
    MoveSet::new(labels)
        .map_err(|e| {
            warn!("refusing move set: {}", e);
            e
        })
        .with_context(|| format!("cannot start a game with these moves. {}", USAGE_EXAMPLE))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Play {
            moves,
            rounds,
            json,
        } => {
            let moves = load_moves(&moves)?;
            info!("starting session: {} moves, {} rounds", moves.len(), rounds);

            let stdin = io::stdin();
            let mut channel = TerminalChannel::new(stdin.lock(), io::stdout()).with_json(json);
            let tally = RoundOrchestrator::new(&moves).play_session(&mut channel, rounds)?;

            if rounds > 1 {
                println!(
                    "Session: {} won, {} lost, {} drawn",
                    tally.wins, tally.losses, tally.draws
                );
            }
        }
        Commands::Table { moves } => {
            let moves = load_moves(&moves)?;
            for line in table::examples(&moves) {
                println!("{}", line);
            }
            print!("{}", table::render(&moves));
        }
        Commands::Verify {
            key,
            move_label,
            hmac,
        } => {
            if !verify_disclosure(&hmac, &key, &move_label)? {
                bail!("HMAC does not match: the move {:?} was not the committed one", move_label);
            }
            println!("OK: HMAC matches {:?} under the disclosed key", move_label);
        }
    }

    Ok(())
}
