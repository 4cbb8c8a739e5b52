use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, place_fleet, ComputerPlayer, Game, Side};
use serde_json::json;

/// Play random-vs-random games and print one JSON summary per game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Seed for the first game; later games use seed+1, seed+2, ...")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn play(seed: u64) -> anyhow::Result<serde_json::Value> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let first = place_fleet(&mut rng);
    let second = place_fleet(&mut rng);

    let mut game = Game::with_boards(
        Box::new(ComputerPlayer::named("computer-1")),
        first.board,
        Box::new(ComputerPlayer::named("computer-2")),
        second.board,
        rng,
    )?;
    let winner = game.run()?;

    Ok(json!({
        "seed": seed,
        "winner": winner,
        "restarts": [first.restarts, second.restarts],
        "human": game.stats(Side::Human),
        "computer": game.stats(Side::Computer),
    }))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let base = match cli.seed {
        Some(s) => s,
        None => rand::random(),
    };

    for i in 0..cli.games {
        let summary = play(base.wrapping_add(i))?;
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
