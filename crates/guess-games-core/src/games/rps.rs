//! Rock-Paper-Scissors game implementation.

use super::traits::{Classification, GameType, GuessingGame};
use crate::error::SessionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Rock-Paper-Scissors choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpsChoice {
    Rock,
    Paper,
    Scissors,
}

/// Input that is not one of the three choices
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown choice: {0:?}")]
pub struct ParseRpsChoiceError(pub String);

impl RpsChoice {
    pub const ALL: [RpsChoice; 3] = [RpsChoice::Rock, RpsChoice::Paper, RpsChoice::Scissors];

    /// Pick one of the three choices uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RpsChoice::Rock => "rock",
            RpsChoice::Paper => "paper",
            RpsChoice::Scissors => "scissors",
        }
    }

    /// Check if this choice beats the other
    pub fn beats(&self, other: &RpsChoice) -> bool {
        matches!(
            (self, other),
            (RpsChoice::Rock, RpsChoice::Scissors)
                | (RpsChoice::Scissors, RpsChoice::Paper)
                | (RpsChoice::Paper, RpsChoice::Rock)
        )
    }
}

impl fmt::Display for RpsChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RpsChoice {
    type Err = ParseRpsChoiceError;

    /// Case-insensitive; surrounding whitespace is not stripped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(RpsChoice::Rock),
            "paper" => Ok(RpsChoice::Paper),
            "scissors" => Ok(RpsChoice::Scissors),
            _ => Err(ParseRpsChoiceError(s.to_string())),
        }
    }
}

/// Outcome of a throw, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpsOutcome {
    Win,
    Lose,
    Tie,
}

impl RpsOutcome {
    /// Judge the player's choice against the computer's
    pub fn judge(user: RpsChoice, computer: RpsChoice) -> Self {
        if user == computer {
            RpsOutcome::Tie
        } else if user.beats(&computer) {
            RpsOutcome::Win
        } else {
            RpsOutcome::Lose
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RpsOutcome::Win => "You win!",
            RpsOutcome::Lose => "You lose!",
            RpsOutcome::Tie => "It's a tie!",
        }
    }
}

impl From<RpsOutcome> for Classification {
    fn from(outcome: RpsOutcome) -> Self {
        match outcome {
            RpsOutcome::Win => Classification::Win,
            RpsOutcome::Lose => Classification::Lose,
            RpsOutcome::Tie => Classification::Tie,
        }
    }
}

/// Rock-Paper-Scissors game: one throw against the computer
#[derive(Clone, Debug)]
pub struct RpsGame {
    computer: RpsChoice,
    user: Option<RpsChoice>,
}

impl RpsGame {
    /// Let the computer pick at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::against(RpsChoice::random(rng))
    }

    /// Play against a fixed computer choice
    pub fn against(computer: RpsChoice) -> Self {
        Self {
            computer,
            user: None,
        }
    }

    pub fn computer(&self) -> RpsChoice {
        self.computer
    }

    pub fn user(&self) -> Option<RpsChoice> {
        self.user
    }
}

impl GuessingGame for RpsGame {
    type Outcome = RpsOutcome;

    const GAME_TYPE: GameType = GameType::RockPaperScissors;

    fn welcome(&self) -> &'static [&'static str] {
        &[
            "Welcome to Rock, Paper, Scissors!",
            "Make your choice: rock, paper, or scissors",
        ]
    }

    fn prompt(&self) -> &'static str {
        "Enter your choice: "
    }

    fn classify(&mut self, input: &str) -> Result<Classification, SessionError> {
        match input.parse::<RpsChoice>() {
            Ok(user) => {
                self.user = Some(user);
                Ok(RpsOutcome::judge(user, self.computer).into())
            }
            Err(err) => {
                debug!(%err, "Rejected choice");
                Ok(Classification::Invalid)
            }
        }
    }

    fn feedback(&self, _classification: Classification) -> Option<&'static str> {
        None
    }

    fn outcome(&self) -> Option<RpsOutcome> {
        self.user.map(|user| RpsOutcome::judge(user, self.computer))
    }

    fn report(&self, outcome: &RpsOutcome) -> Vec<String> {
        let user = self.user.map_or("", |u| u.as_str());
        vec![
            format!("Computer chose: {}", self.computer),
            format!("You chose: {}", user),
            outcome.as_str().to_string(),
        ]
    }
}
