//! Guess the Word
//!
//! Reveal a programming language's name one letter at a time.

use guess_games_cli::{init_tracing, play, Config};
use guess_games_core::WordGame;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let config = Config::from_env();
    let game = WordGame::random(&mut config.rng());

    play(&config, game)
}
