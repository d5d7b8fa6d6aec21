//! Hanabi CLI - run seeded random-play games and report scores.
//!
//! A single game is reproducible from its printed seed. With `--games` the
//! CLI runs a batch and reports the best score together with its seed.

use clap::Parser;
use hanabi_engine::{Game, GameSummary, HanabiConfig, HanabiRules, RulesEngine};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "hanabi")]
#[command(about = "Play Hanabi games with random controllers")]
struct Args {
    /// Seed for the first game; later games in a batch use the following seeds
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of players (2-5 use the standard hand sizes)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Stop the batch as soon as a game reaches this score
    #[arg(long)]
    target_score: Option<u32>,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HanabiConfig::standard(args.players);
    let rules = HanabiRules::new(config)?;
    debug!(config = %serde_json::to_string(rules.config())?, "Configuration");

    let first_seed = args.seed.unwrap_or_else(rand::random);
    let mut best: Option<GameSummary> = None;

    for game_num in 0..args.games {
        let seed = first_seed.wrapping_add(u64::from(game_num));
        let mut game = Game::random(rules.clone(), seed)?;
        let summary = game.run()?;

        info!(game = game_num, seed, score = summary.score, "Finished game");

        let improved = best.as_ref().map_or(true, |b| summary.score > b.score);
        if improved {
            best = Some(summary);
        }

        let reached = best
            .as_ref()
            .zip(args.target_score)
            .is_some_and(|(b, target)| b.score >= target);
        if reached {
            break;
        }
    }

    if let Some(best) = best {
        println!("best score: {}/{}", best.score, best.max_score);
        println!("best seed: {}", best.seed);
    }

    Ok(())
}
