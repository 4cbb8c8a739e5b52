use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::prelude::*;
use seabattle::ShotReport;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against a random-firing computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show the computer's ships")]
    reveal: bool,
}

fn welcome() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    sea  battle    ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

fn print_boards(game: &Game, reveal: bool) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    println!("{}", game.board(Side::Human).render(false));
    println!("{}", "-".repeat(20));
    println!("Computer's board:");
    println!("{}", game.board(Side::Computer).render(!reveal));
    println!("{}", "-".repeat(20));
}

fn report(shot: &ShotReport) {
    if shot.shooter == Side::Computer {
        println!("Computer's move: {}", shot.target);
    }
    match shot.outcome {
        ShotOutcome::Sunk => println!("Ship sunk!"),
        ShotOutcome::Hit => println!("Ship damaged!"),
        ShotOutcome::Miss => println!("Missed!"),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut game = Game::new(
        Box::new(HumanPlayer::stdio()),
        Box::new(ComputerPlayer::new()),
        rng,
    );

    welcome();
    while game.winner().is_none() {
        print_boards(&game, cli.reveal);
        match game.turn() {
            Side::Human => println!("Your turn!"),
            Side::Computer => println!("Computer's turn!"),
        }
        let shot = game.step()?;
        report(&shot);
    }

    print_boards(&game, true);
    match game.winner() {
        Some(Side::Human) => println!("You won!"),
        Some(Side::Computer) => println!("The computer won!"),
        None => {}
    }
    Ok(())
}
