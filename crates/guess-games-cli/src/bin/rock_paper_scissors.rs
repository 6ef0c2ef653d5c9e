//! Rock, Paper, Scissors
//!
//! One throw against a random computer choice.

use guess_games_cli::{init_tracing, play, Config};
use guess_games_core::RpsGame;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let config = Config::from_env();
    let game = RpsGame::random(&mut config.rng());

    play(&config, game)
}
