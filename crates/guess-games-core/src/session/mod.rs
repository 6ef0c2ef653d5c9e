//! The interactive round-based guessing session.

mod runner;
mod types;

pub use runner::GuessingSession;
pub use types::{RetryPolicy, SessionId, SessionReport, DEFAULT_MAX_INVALID};
