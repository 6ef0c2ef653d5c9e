//! Guess Games CLI support
//!
//! Shared setup for the `guess-number`, `guess-word` and
//! `rock-paper-scissors` binaries: environment configuration, logging, and
//! running a session on stdin/stdout.

mod config;
mod logging;

pub use config::Config;
pub use logging::init_tracing;

use guess_games_core::{GuessingGame, GuessingSession, IoTerminal, SessionError, Terminal};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

/// Run `game` on the process terminal and map the result to an exit code
pub fn play<G: GuessingGame>(config: &Config, game: G) -> ExitCode {
    let result = play_on(config, IoTerminal::stdio(), game);
    exit_code(&result, &mut std::io::stderr())
}

/// Run `game` on any terminal
pub fn play_on<T, G>(config: &Config, terminal: T, game: G) -> Result<G::Outcome, SessionError>
where
    T: Terminal,
    G: GuessingGame,
{
    let session = GuessingSession::new(terminal, config.retry_policy());
    info!(id = %session.id(), "Starting session");

    let result = session.run(game);
    if let Ok(outcome) = &result {
        info!(?outcome, "Session complete");
    }
    result
}

/// Exit status for a finished session; fatal errors are reported on `err_out`
pub fn exit_code<O, W: Write>(result: &Result<O, SessionError>, err_out: &mut W) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session failed: {}", e);
            // Nothing else to report to if stderr itself is gone
            let _ = writeln!(err_out, "error: {}", e);
            ExitCode::FAILURE
        }
    }
}
