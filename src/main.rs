#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_four::{
    init_logging, CliPlayer, DiagonalMode, GameResult, Outcome, Player, RandomPlayer, Seat,
    Session,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum SeatKind {
    Human,
    Computer,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal; Red is human and Black the computer unless overridden.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = SeatKind::Human)]
        red: SeatKind,
        #[arg(long, value_enum, default_value_t = SeatKind::Computer)]
        black: SeatKind,
        #[arg(long, help = "Detect diagonals anywhere through the last piece")]
        centered_diagonals: bool,
    },
    /// Watch two computer players drop pieces at random.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Detect diagonals anywhere through the last piece")]
        centered_diagonals: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, red, black, centered) = match cli.command {
        Commands::Play {
            seed,
            red,
            black,
            centered_diagonals,
        } => (seed, red, black, centered_diagonals),
        Commands::Watch {
            seed,
            centered_diagonals,
        } => (seed, SeatKind::Computer, SeatKind::Computer, centered_diagonals),
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mode = if centered {
        DiagonalMode::Centered
    } else {
        DiagonalMode::Anchored
    };

    let mut session = Session::new(seat(red), seat(black), rng, mode, std::io::stdout());
    match session.run()? {
        Outcome::Finished(GameResult::Win { player, .. }) => {
            let kind = if player == Player::Red { red } else { black };
            println!("\nPlayer {} ({:?}) wins!", player, kind);
        }
        Outcome::Finished(_) => println!("\nNo winner this time."),
        Outcome::Resigned(player) => {
            println!("\nPlayer {} resigned; {} wins.", player, player.other());
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn seat(kind: SeatKind) -> Box<dyn Seat> {
    match kind {
        SeatKind::Human => Box::new(CliPlayer::stdio()),
        SeatKind::Computer => Box::new(RandomPlayer::new()),
    }
}
