//! Spades score tracker CLI.
//!
//! Each invocation runs one command against the persisted session, so a game
//! can be kept across many short runs (or sessions days apart).

mod render;
mod telemetry;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracker::services::{continue_after_summary, pacer_for};
use tracker::{
    CommandReply, GameSession, JsonFileStore, PersistenceError, TrackerConfig, TrackerError,
};

#[derive(Parser)]
#[command(name = "spades")]
#[command(about = "Score keeper for Spades, persisted between runs")]
struct Args {
    /// Snapshot file (overrides SPADES_SAVE_FILE)
    #[arg(long, global = true)]
    save_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Configure a new table
    New {
        /// Number of players (2-8)
        #[arg(short, long)]
        players: u8,

        /// Number of decks in play
        #[arg(short, long, default_value = "1")]
        decks: u8,

        /// Play without the bag penalty
        #[arg(long)]
        no_bags: bool,
    },
    /// Enter player names in seat order; blank names become "Player N"
    Names { names: Vec<String> },
    /// Submit bids and tricks won for the current round
    Submit {
        /// Comma-separated bids in seat order
        #[arg(long, value_delimiter = ',', required = true)]
        bids: Vec<u8>,

        /// Comma-separated tricks won in seat order
        #[arg(long, value_delimiter = ',', required = true)]
        wins: Vec<u8>,

        /// Stay on the round summary instead of moving to the next round
        #[arg(long)]
        hold: bool,
    },
    /// Leave the round summary and start the next round
    Continue,
    /// Toggle the scoreboard view
    Scoreboard,
    /// Show the current game
    Show {
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recorded rounds
    History {
        /// Only this round
        #[arg(long)]
        round: Option<u8>,
    },
    /// Write the round history as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Discard the game and delete the snapshot
    Restart,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match TrackerConfig::from_env() {
        Ok(config) => config,
        Err(e) => return fail(&TrackerError::from(e)),
    };
    let config = match args.save_file {
        Some(path) => config.with_save_file(path),
        None => config,
    };

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    telemetry::init_tracing(config.log_format, filter);
    info!(save_file = %config.save_file.display(), "Starting spades tracker");

    let (mut session, warning) = GameSession::open(JsonFileStore::new(&config.save_file));
    if let Some(e) = warning {
        eprintln!("warning: saved game could not be restored ({e}); starting a new game");
    }

    match run(&mut session, args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(err: &TrackerError) -> ExitCode {
    eprintln!("error [{}]: {}", err.code(), err.detail());
    ExitCode::FAILURE
}

fn run(
    session: &mut GameSession<JsonFileStore>,
    command: Command,
    config: &TrackerConfig,
) -> Result<(), TrackerError> {
    match command {
        Command::New {
            players,
            decks,
            no_bags,
        } => {
            let reply = session.new_game(players, decks, !no_bags)?;
            report(&reply);
        }
        Command::Names { names } => report(&session.set_player_names(&names)?),
        Command::Submit { bids, wins, hold } => {
            let reply = session.submit_round(&bids, &wins)?;
            println!("Round submitted.");
            report(&reply);
            if !hold {
                let pacer = pacer_for(config.summary_delay);
                if let Some(next) = continue_after_summary(session, pacer.as_ref())? {
                    report(&next);
                }
            }
        }
        Command::Continue => report(&session.finish_summary()?),
        Command::Scoreboard => report(&session.toggle_scoreboard()?),
        Command::Show { json } => {
            let view = session.view();
            if json {
                let text = serde_json::to_string_pretty(&view)?;
                println!("{text}");
            } else {
                render::print_view(&view);
            }
        }
        Command::History { round } => {
            render::print_history(session.state(), round);
        }
        Command::Export { out } => {
            let bytes = session.export_history()?;
            match out {
                Some(path) => {
                    fs::write(&path, &bytes).map_err(|e| PersistenceError::io(&path, e))?;
                    println!("History written to {}", path.display());
                }
                None => io::stdout()
                    .write_all(&bytes)
                    .map_err(|e| PersistenceError::io("<stdout>", e))?,
            }
        }
        Command::Restart => {
            report(&session.restart()?);
            println!("Game cleared.");
        }
    }
    Ok(())
}

fn report(reply: &CommandReply) {
    if let Some(e) = &reply.warning {
        eprintln!("warning: progress was not saved ({e})");
    }
    render::print_view(&reply.view);
}
