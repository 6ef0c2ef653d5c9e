//! Guess Games Core Library
//!
//! This crate provides the rules for three terminal guessing games (number,
//! word and rock-paper-scissors), the shared session loop that drives them,
//! and the terminal abstraction the loop reads from and writes to.

pub mod error;
pub mod games;
pub mod session;
pub mod terminal;

pub use error::SessionError;
pub use games::{
    Classification, GameType, GuessingGame, NumberGame, NumberInputPolicy, NumberOutcome,
    RpsChoice, RpsGame, RpsOutcome, WordGame, WordOutcome, WordPhase,
};
pub use session::{GuessingSession, RetryPolicy, SessionId, SessionReport};
pub use terminal::{IoTerminal, ScriptedTerminal, Terminal};
