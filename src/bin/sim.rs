use connect_four::{DiagonalMode, GameResult, Outcome, RandomPlayer, Session};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    connect_four::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [--centered-diagonals]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mode = match args.get(2).map(String::as_str) {
        None => DiagonalMode::Anchored,
        Some("--centered-diagonals") => DiagonalMode::Centered,
        Some(other) => anyhow::bail!("unknown option '{}'", other),
    };

    let rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        rng,
        mode,
        std::io::sink(),
    );
    let result = match session.run()? {
        Outcome::Finished(result) => result,
        Outcome::Resigned(player) => anyhow::bail!("{} resigned in a computer game", player),
    };

    let engine = session.engine();
    let direction = match result {
        GameResult::Win { direction, .. } => Some(direction),
        _ => None,
    };
    let summary = json!({
        "seed": seed,
        "result": result,
        "winner": result.winner(),
        "direction": direction,
        "rounds": engine.round(),
        "filled": engine.grid().filled(),
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
