//! Session error type.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that end a guessing session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid number {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("Gave up after {attempts} invalid inputs in a row")]
    RetriesExhausted { attempts: u32 },

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
