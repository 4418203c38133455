#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictactoe::{init_logging, simulate_rounds, Game, DEFAULT_PLAYER_NAMES};

/// Play random rounds and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 100)]
    rounds: u32,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new();
    game.start(DEFAULT_PLAYER_NAMES[0], DEFAULT_PLAYER_NAMES[1]);
    let summary = simulate_rounds(&mut game, &mut rng, args.rounds)?;
    let scores = game.scores();

    let result = json!({
        "seed": args.seed,
        "summary": summary,
        "scores": scores,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
