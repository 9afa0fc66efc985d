//! Othello-Rules command line.
//!
//! ## Usage
//!
//! - `othello-rules selfplay` - Play random games and report the results
//! - `othello-rules perft <depth>` - Count game-tree leaves from the opening

use std::time::Instant;

use anyhow::ensure;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_rules::constants::{MAX_TURNS, N_GAMES};
use othello_rules::perft::run_perft;
use othello_rules::playout::run_selfplay;
use othello_rules::{EndRule, Rules, TieBreak};

/// Othello-Rules: an 8x8 Othello rules engine
#[derive(Parser)]
#[command(name = "othello-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail (repeat for trace output). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games of uniformly random legal moves and report the tally
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value_t = N_GAMES)]
        games: usize,

        /// Seed for move selection
        #[arg(short, long, default_value_t = 1)]
        seed: u64,

        /// When a game ends
        #[arg(long, value_enum, default_value_t = EndRule::DoublePass)]
        end_rule: EndRule,

        /// How an exact tie is scored
        #[arg(long, value_enum, default_value_t = TieBreak::FavorBlack)]
        tie_break: TieBreak,

        /// Protocol steps before a game is abandoned
        #[arg(long, default_value_t = MAX_TURNS)]
        max_turns: usize,
    },
    /// Count leaf positions at the given depth from the opening
    Perft {
        depth: u32,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Selfplay {
            games,
            seed,
            end_rule,
            tie_break,
            max_turns,
        } => {
            ensure!(max_turns > 0, "--max-turns must be positive");
            let rules = Rules {
                end_rule,
                tie_break,
            };
            let summary = run_selfplay(games, seed, rules, max_turns);
            let finished = summary.games() - summary.unfinished;

            println!("games:      {}", summary.games());
            println!("black wins: {}", summary.black_wins);
            println!("white wins: {}", summary.white_wins);
            println!("draws:      {}", summary.draws);
            println!("unfinished: {}", summary.unfinished);
            if finished > 0 {
                println!(
                    "avg moves:  {:.1}",
                    summary.total_moves as f64 / finished as f64
                );
            }
        }
        Commands::Perft { depth } => {
            let start = Instant::now();
            let leaves = run_perft(depth);
            println!("perft({depth}) = {leaves} ({:.2?})", start.elapsed());
        }
    }

    Ok(())
}
