use connect_four::{
    DiagonalMode, GameEngine, GameResult, MoveError, Player, RandomPlayer, Seat, Turn, CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Play a random game to completion, returning the engine and every turn.
fn random_game(seed: u64, mode: DiagonalMode) -> (GameEngine, Vec<Turn>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut red = RandomPlayer::new();
    let mut black = RandomPlayer::new();
    let mut engine = GameEngine::new(mode);
    let mut turns = Vec::new();

    while !engine.is_finished() {
        let seat: &mut dyn Seat = match engine.current_player() {
            Player::Red => &mut red,
            Player::Black => &mut black,
        };
        let col = seat.choose_column(&mut rng, engine.grid()).unwrap();
        turns.push(engine.play(col).unwrap());
        assert!(turns.len() < 10_000, "game did not terminate");
    }
    (engine, turns)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_games_terminate(seed in any::<u64>()) {
        for mode in [DiagonalMode::Anchored, DiagonalMode::Centered] {
            let (mut engine, turns) = random_game(seed, mode);
            prop_assert!(engine.result().is_terminal());
            prop_assert_eq!(engine.play(0), Err(MoveError::GameOver));

            let placed = turns.iter().filter(|t| matches!(t, Turn::Placed { .. })).count();
            prop_assert_eq!(placed, engine.grid().filled());
            prop_assert_eq!(engine.round(), placed);
            if engine.result() == GameResult::Draw {
                prop_assert_eq!(placed, CELLS);
            }
        }
    }

    #[test]
    fn only_last_turn_is_terminal(seed in any::<u64>()) {
        let (_, turns) = random_game(seed, DiagonalMode::Anchored);
        let (last, rest) = turns.split_last().unwrap();
        for turn in rest {
            if let Turn::Placed { result, .. } = turn {
                prop_assert_eq!(*result, GameResult::InProgress);
            }
        }
        match last {
            Turn::Placed { result, .. } => prop_assert!(result.is_terminal()),
            Turn::Forfeited { .. } => prop_assert!(false, "game cannot end on a forfeit"),
        }
    }

    #[test]
    fn seeded_games_are_reproducible(seed in any::<u64>()) {
        let (a, turns_a) = random_game(seed, DiagonalMode::Anchored);
        let (b, turns_b) = random_game(seed, DiagonalMode::Anchored);
        prop_assert_eq!(turns_a, turns_b);
        prop_assert_eq!(a.grid(), b.grid());
        prop_assert_eq!(a.result(), b.result());
    }
}
