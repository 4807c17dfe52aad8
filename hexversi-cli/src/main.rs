//! Hexversi CLI - plays hexagonal Reversi matches between filter
//! pipelines
//!
//! Commands:
//! - play: run a single computer-vs-computer match

mod play;

use clap::{Parser, Subcommand};
use hexversi_core::DiscColor;

#[derive(Parser)]
#[command(name = "hexversi")]
#[command(about = "Hexagonal Reversi engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single computer-vs-computer match
    Play {
        /// Cells per edge of the hexagonal board (at least 2)
        #[arg(long, default_value = "6")]
        edge: usize,
        /// Strategy preset for Black: first, greedy, corners, cautious
        #[arg(long, default_value = "corners")]
        black: String,
        /// Strategy preset for White: first, greedy, corners, cautious
        #[arg(long, default_value = "greedy")]
        white: String,
        /// Print the match summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            edge,
            black,
            white,
            json,
        } => {
            let black_strategy = play::strategy_preset(&black)
                .ok_or_else(|| anyhow::anyhow!("unknown strategy preset: {}", black))?;
            let white_strategy = play::strategy_preset(&white)
                .ok_or_else(|| anyhow::anyhow!("unknown strategy preset: {}", white))?;

            let summary = play::run_match(edge, black_strategy, white_strategy)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Black ({}) {} - {} White ({})",
                    black, summary.black_score, summary.white_score, white
                );
                match summary.winner {
                    DiscColor::None => println!("Tie game"),
                    winner => println!("{:?} wins", winner),
                }
            }
            Ok(())
        }
    }
}
