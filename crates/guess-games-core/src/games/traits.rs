//! Game traits and types.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    GuessNumber,
    GuessWord,
    RockPaperScissors,
}

impl GameType {
    /// Short name used in logs and session reports
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::GuessNumber => "guess-number",
            GameType::GuessWord => "guess-word",
            GameType::RockPaperScissors => "rock-paper-scissors",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a single guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Exact number, or a letter that is in the secret word
    Correct,
    TooLow,
    TooHigh,
    /// Letter (or string) guessed before; nothing changes
    AlreadyTried,
    WrongLetter,
    Win,
    Lose,
    Tie,
    /// Input rejected and reprompted without touching game state
    Invalid,
}

impl Classification {
    /// Was this input rejected rather than played?
    pub fn is_invalid(&self) -> bool {
        matches!(self, Classification::Invalid)
    }
}

/// Trait for game rules - each game type implements this
///
/// A game owns its secret and per-run state. [`crate::GuessingSession`]
/// drives it: show `status`, read a line with `prompt`, `classify` it, print
/// `feedback`, and stop once `outcome` returns `Some`.
pub trait GuessingGame {
    /// Terminal classification of a finished game
    type Outcome: Clone + fmt::Debug + Serialize;

    /// Which game this is
    const GAME_TYPE: GameType;

    /// Lines printed once before the first turn
    fn welcome(&self) -> &'static [&'static str];

    /// Lines printed before each prompt
    fn status(&self) -> Vec<String> {
        Vec::new()
    }

    /// Prompt shown when reading a guess
    fn prompt(&self) -> &'static str;

    /// Classify one line of input and apply it to the game state
    fn classify(&mut self, input: &str) -> Result<Classification, SessionError>;

    /// Line printed after a guess, if any
    fn feedback(&self, classification: Classification) -> Option<&'static str>;

    /// `Some` once the game has reached a terminal state
    fn outcome(&self) -> Option<Self::Outcome>;

    /// Lines printed after the game ends
    fn report(&self, outcome: &Self::Outcome) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_str() {
        assert_eq!(GameType::GuessNumber.as_str(), "guess-number");
        assert_eq!(GameType::GuessWord.as_str(), "guess-word");
        assert_eq!(
            GameType::RockPaperScissors.to_string(),
            "rock-paper-scissors"
        );
    }

    #[test]
    fn test_only_invalid_is_invalid() {
        assert!(Classification::Invalid.is_invalid());
        assert!(!Classification::WrongLetter.is_invalid());
        assert!(!Classification::AlreadyTried.is_invalid());
    }
}
