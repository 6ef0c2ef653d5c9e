//! Guess the Number
//!
//! Find a secret number between 1 and 100 with higher/lower hints.

use guess_games_cli::{init_tracing, play, Config};
use guess_games_core::NumberGame;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let config = Config::from_env();
    let game = NumberGame::random(&mut config.rng()).with_policy(config.number_policy());

    play(&config, game)
}
