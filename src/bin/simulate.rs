use anyhow::{Context, Result};
use clap::Parser;

use connect_four::ai::RandomAgent;
use connect_four::logging;
use connect_four::simulation::{play_game, SimulationStats};

/// Play random-vs-random games headlessly and report the results.
#[derive(Parser)]
#[command(name = "simulate", about = "Simulate random Connect Four games")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Seed for reproducible runs; player two uses seed + 1
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of the last game
    #[arg(long)]
    show_last: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr(&cli.log_level).context("setting up logging")?;

    let (mut one, mut two) = match cli.seed {
        Some(seed) => (
            RandomAgent::seeded(seed),
            RandomAgent::seeded(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::from_os_rng(), RandomAgent::from_os_rng()),
    };

    let mut stats = SimulationStats::new();
    let mut last = None;
    for game in 1..=cli.games {
        let record = play_game(&mut one, &mut two);
        stats.record(&record);
        tracing::debug!(game, length = record.length(), outcome = ?record.outcome(), "game done");
        last = Some(record);
    }

    println!("{}", stats);
    if cli.show_last {
        if let Some(record) = last {
            println!();
            println!("Last game ({} moves, columns {:?}):", record.length(), record.moves);
            print!("{}", record.final_state.board());
        }
    }
    Ok(())
}
