//! Session types.

use crate::games::GameType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Consecutive invalid inputs tolerated by [`RetryPolicy::default`]
pub const DEFAULT_MAX_INVALID: u32 = 20;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many rejected inputs in a row a session tolerates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// `None` reprompts forever
    pub max_invalid: Option<u32>,
}

impl RetryPolicy {
    /// Give up once more than `max_invalid` inputs in a row are rejected
    pub fn bounded(max_invalid: u32) -> Self {
        Self {
            max_invalid: Some(max_invalid),
        }
    }

    /// Reprompt forever
    pub fn unbounded() -> Self {
        Self { max_invalid: None }
    }

    /// Has a run of `streak` rejected inputs used up the policy?
    pub fn is_exhausted(&self, streak: u32) -> bool {
        matches!(self.max_invalid, Some(max) if streak > max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_INVALID)
    }
}

/// Summary of a finished session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionReport<O> {
    pub session_id: SessionId,
    pub game_type: GameType,
    /// Inputs that were played, including repeats
    pub turns: u32,
    /// Inputs rejected and reprompted
    pub invalid_inputs: u32,
    pub outcome: O,
}
