//! Guess the Number game implementation.

use super::traits::{Classification, GameType, GuessingGame};
use crate::error::SessionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use tracing::debug;

/// Range the secret number is drawn from
pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

/// What to do with input that is not an integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberInputPolicy {
    /// Abort the session with [`SessionError::InvalidNumber`]
    #[default]
    Strict,
    /// Reprompt without counting an attempt
    Lenient,
}

/// Outcome of a number game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberOutcome {
    Won { attempts: u32 },
}

/// Guess the Number game
#[derive(Clone, Debug)]
pub struct NumberGame {
    secret: u32,
    attempts: u32,
    solved: bool,
    policy: NumberInputPolicy,
}

impl NumberGame {
    /// Draw a secret uniformly from [`SECRET_RANGE`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(rng.gen_range(SECRET_RANGE))
    }

    /// Create with a specific secret number
    pub fn with_secret(secret: u32) -> Self {
        assert!(
            SECRET_RANGE.contains(&secret),
            "Secret number must be 1-100"
        );
        Self {
            secret,
            attempts: 0,
            solved: false,
            policy: NumberInputPolicy::default(),
        }
    }

    /// Set how non-numeric input is handled
    pub fn with_policy(mut self, policy: NumberInputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Guesses counted so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Compare a guess against the secret
    pub fn compare(guess: i64, secret: u32) -> Classification {
        match guess.cmp(&i64::from(secret)) {
            Ordering::Equal => Classification::Correct,
            Ordering::Less => Classification::TooLow,
            Ordering::Greater => Classification::TooHigh,
        }
    }
}

impl GuessingGame for NumberGame {
    type Outcome = NumberOutcome;

    const GAME_TYPE: GameType = GameType::GuessNumber;

    fn welcome(&self) -> &'static [&'static str] {
        &[
            "Welcome to the Number Guessing Game!",
            "I have selected a number between 1 and 100. Can you guess it?",
        ]
    }

    fn prompt(&self) -> &'static str {
        "Enter your guess: "
    }

    fn classify(&mut self, input: &str) -> Result<Classification, SessionError> {
        let classification = match input.trim().parse::<i64>() {
            Ok(guess) => Self::compare(guess, self.secret),
            // Whole numbers past i64 are still guesses, just far off
            Err(source) => match source.kind() {
                IntErrorKind::PosOverflow => Classification::TooHigh,
                IntErrorKind::NegOverflow => Classification::TooLow,
                _ => match self.policy {
                    NumberInputPolicy::Strict => {
                        return Err(SessionError::InvalidNumber {
                            input: input.to_string(),
                            source,
                        })
                    }
                    NumberInputPolicy::Lenient => {
                        debug!(input, "Not a whole number");
                        return Ok(Classification::Invalid);
                    }
                },
            },
        };

        self.attempts = self.attempts.saturating_add(1);
        if classification == Classification::Correct {
            self.solved = true;
        }
        Ok(classification)
    }

    fn feedback(&self, classification: Classification) -> Option<&'static str> {
        match classification {
            Classification::TooLow => Some("Too low! Try again."),
            Classification::TooHigh => Some("Too high! Try again."),
            Classification::Invalid => Some("Please enter a whole number."),
            _ => None,
        }
    }

    fn outcome(&self) -> Option<NumberOutcome> {
        self.solved.then_some(NumberOutcome::Won {
            attempts: self.attempts,
        })
    }

    fn report(&self, outcome: &NumberOutcome) -> Vec<String> {
        let NumberOutcome::Won { attempts } = outcome;
        vec![format!(
            "Congratulations! You've guessed the number in {} attempts.",
            attempts
        )]
    }
}
