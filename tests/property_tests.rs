//! Turn-level invariants checked over random layouts and seeds.
//!
//! Random layouts can contain jump cycles that never let anyone win, so
//! these tests drive a bounded number of `step()` calls instead of
//! `play()`.

use proptest::prelude::*;
use snakes_ladders::{
    Board, Dice, Game, GameError, GameRng, Player, PlayerId, TurnOutcome, TurnRecord,
};

const MAX_STEPS: usize = 400;

fn random_game(
    seed: u64,
    size: u32,
    jumps: &[(u32, u32)],
    player_count: usize,
    dice_count: u32,
    faces: u32,
) -> Game {
    let mut board = Board::new(size).unwrap();
    for &(origin, destination) in jumps {
        // Invalid and duplicate jumps are rejected; keep whatever fits.
        let _ = board.register_jump(origin, destination);
    }

    let dice = Dice::new(dice_count, faces, GameRng::new(seed)).unwrap();
    let players = (0..player_count).map(|i| Player::new(format!("P{i}"))).collect();
    Game::new(board, dice, players).unwrap()
}

/// One turn, or `None` once the game has been won.
///
/// The only error a seated game may return is `GameOver`, and only after a
/// winner was recorded.
fn next_turn(game: &mut Game) -> Result<Option<TurnRecord>, TestCaseError> {
    match game.step().map(|turn| turn.clone()) {
        Ok(turn) => Ok(Some(turn)),
        Err(GameError::GameOver) if game.winner().is_some() => Ok(None),
        Err(err) => Err(TestCaseError::fail(format!("step failed before a win: {err}"))),
    }
}

proptest! {
    #[test]
    fn test_turn_invariants(
        seed in any::<u64>(),
        size in 1u32..60,
        jumps in prop::collection::vec((0u32..64, 0u32..64), 0..12),
        player_count in 1usize..5,
        dice_count in 1u32..3,
        faces in 1u32..7,
    ) {
        let mut game = random_game(seed, size, &jumps, player_count, dice_count, faces);
        let win_score = game.win_score();

        for _ in 0..MAX_STEPS {
            let board = game.board().clone();
            let Some(turn) = next_turn(&mut game)? else {
                break;
            };

            let total = turn.roll.total();
            prop_assert!((dice_count..=dice_count * faces).contains(&total));
            prop_assert!(turn.position <= win_score);

            match turn.outcome {
                TurnOutcome::Overshoot => {
                    prop_assert!(turn.from + total > win_score);
                    prop_assert_eq!(turn.position, turn.from);
                }
                TurnOutcome::Moved => {
                    prop_assert_eq!(turn.position, turn.from + total);
                    prop_assert!(board.effect_at(turn.position).is_none());
                }
                TurnOutcome::Jumped(jump) => {
                    prop_assert_eq!(jump.origin(), turn.from + total);
                    prop_assert_eq!(turn.position, jump.destination());
                    prop_assert_eq!(board.effect_at(jump.origin()), Some(&jump));
                }
            }

            prop_assert_eq!(turn.won, turn.position == win_score);
            if turn.won {
                prop_assert_eq!(game.winner(), Some(turn.player));
                break;
            }
        }

        for player in game.players() {
            prop_assert!(player.position() <= win_score);
        }
    }

    #[test]
    fn test_round_robin_until_win(
        seed in any::<u64>(),
        size in 20u32..200,
        player_count in 1usize..7,
    ) {
        let mut game = random_game(seed, size, &[], player_count, 1, 6);

        for step in 0..MAX_STEPS {
            let Some(turn) = next_turn(&mut game)? else {
                break;
            };

            prop_assert_eq!(turn.player, PlayerId::new((step % player_count) as u8));
            prop_assert_eq!(turn.turn, step as u64 + 1);
            if turn.won {
                break;
            }
        }
    }

    #[test]
    fn test_same_seed_same_history(seed in any::<u64>(), size in 5u32..40) {
        let mut first = random_game(seed, size, &[(2, 4), (4, 1)], 3, 1, 6);
        let mut second = random_game(seed, size, &[(2, 4), (4, 1)], 3, 1, 6);

        for _ in 0..50 {
            let a = first.step().map(|turn| turn.clone());
            let b = second.step().map(|turn| turn.clone());
            prop_assert_eq!(&a, &b);
            if let Err(err) = a {
                prop_assert!(matches!(err, GameError::GameOver), "unexpected error: {}", err);
                prop_assert!(first.winner().is_some());
                break;
            }
        }
    }
}
