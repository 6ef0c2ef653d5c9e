//! Guess the Word (hangman) game implementation.

use super::traits::{Classification, GameType, GuessingGame};
use crate::error::SessionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Words the secret is drawn from
pub const VOCABULARY: [&str; 6] = ["mavu", "python", "java", "kotlin", "javascript", "ruby"];

/// Wrong guesses allowed before the game is lost
pub const ATTEMPT_BUDGET: u32 = 6;

/// Outcome of a word game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOutcome {
    Won { word: String },
    GameOver { word: String },
}

/// Where a word game is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordPhase {
    Playing,
    Won,
    Lost,
}

/// Guess the Word game
#[derive(Clone, Debug)]
pub struct WordGame {
    word: String,
    attempts_remaining: u32,
    /// Every distinct guess so far, right or wrong
    guessed: BTreeSet<String>,
    /// Letters of the word nobody has guessed yet
    unrevealed: BTreeSet<char>,
}

impl WordGame {
    /// Draw a secret uniformly from [`VOCABULARY`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_word(VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
    }

    /// Create with a specific secret word, lower-cased to match guesses
    pub fn with_word(word: &str) -> Self {
        assert!(!word.is_empty(), "Secret word must not be empty");
        let word = word.to_lowercase();
        Self {
            unrevealed: word.chars().collect(),
            word,
            attempts_remaining: ATTEMPT_BUDGET,
            guessed: BTreeSet::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn guessed(&self) -> &BTreeSet<String> {
        &self.guessed
    }

    pub fn unrevealed(&self) -> &BTreeSet<char> {
        &self.unrevealed
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> WordPhase {
        if self.unrevealed.is_empty() {
            WordPhase::Won
        } else if self.attempts_remaining == 0 {
            WordPhase::Lost
        } else {
            WordPhase::Playing
        }
    }

    /// The word with unguessed letters replaced by `_`, space separated
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.unrevealed.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A guess naming exactly one still-hidden letter
    fn hidden_letter(&self, guess: &str) -> Option<char> {
        let mut chars = guess.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if self.unrevealed.contains(&letter) => Some(letter),
            _ => None,
        }
    }
}

impl GuessingGame for WordGame {
    type Outcome = WordOutcome;

    const GAME_TYPE: GameType = GameType::GuessWord;

    fn welcome(&self) -> &'static [&'static str] {
        &[
            "Welcome to the Word Guessing Game!",
            "I have selected a programming language. Can you guess it?",
        ]
    }

    fn status(&self) -> Vec<String> {
        let guessed: Vec<&str> = self.guessed.iter().map(String::as_str).collect();
        vec![
            String::new(),
            format!("Attempts remaining: {}", self.attempts_remaining),
            format!("Guessed letters: {}", guessed.join(" ")),
            format!("Word: {}", self.masked_word()),
        ]
    }

    fn prompt(&self) -> &'static str {
        "Enter a letter: "
    }

    fn classify(&mut self, input: &str) -> Result<Classification, SessionError> {
        let guess = input.to_lowercase();

        if self.guessed.contains(&guess) {
            return Ok(Classification::AlreadyTried);
        }

        let classification = match self.hidden_letter(&guess) {
            Some(letter) => {
                self.unrevealed.remove(&letter);
                Classification::Correct
            }
            None => {
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                Classification::WrongLetter
            }
        };
        self.guessed.insert(guess);
        Ok(classification)
    }

    fn feedback(&self, classification: Classification) -> Option<&'static str> {
        match classification {
            Classification::AlreadyTried => Some("You already guessed that letter. Try again."),
            Classification::Correct => Some("Good guess!"),
            Classification::WrongLetter => Some("Wrong guess!"),
            _ => None,
        }
    }

    fn outcome(&self) -> Option<WordOutcome> {
        let word = self.word.clone();
        match self.phase() {
            WordPhase::Playing => None,
            WordPhase::Won => Some(WordOutcome::Won { word }),
            WordPhase::Lost => Some(WordOutcome::GameOver { word }),
        }
    }

    fn report(&self, outcome: &WordOutcome) -> Vec<String> {
        let line = match outcome {
            WordOutcome::Won { word } => format!("Congratulations! You've guessed the word: {}", word),
            WordOutcome::GameOver { word } => format!("Game over! The word was: {}", word),
        };
        vec![String::new(), line]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play(game: &mut WordGame, guesses: &[&str]) -> Vec<Classification> {
        guesses
            .iter()
            .map(|g| game.classify(g).unwrap())
            .collect()
    }

    #[test]
    fn test_correct_letters_cost_nothing() {
        let mut game = WordGame::with_word("java");
        assert_eq!(
            play(&mut game, &["a", "j"]),
            [Classification::Correct, Classification::Correct]
        );
        assert_eq!(game.attempts_remaining(), ATTEMPT_BUDGET);
        assert_eq!(game.unrevealed().iter().collect::<String>(), "v");
        assert_eq!(game.masked_word(), "j a _ a");
    }

    #[test]
    fn test_wrong_letter_costs_one_attempt() {
        let mut game = WordGame::with_word("ruby");
        assert_eq!(game.classify("x").unwrap(), Classification::WrongLetter);
        assert_eq!(game.attempts_remaining(), ATTEMPT_BUDGET - 1);
        assert!(game.guessed().contains("x"));
    }

    #[test]
    fn test_repeat_guess_changes_nothing() {
        let mut game = WordGame::with_word("ruby");
        game.classify("x").unwrap();
        game.classify("r").unwrap();
        let before = game.clone();

        assert_eq!(game.classify("x").unwrap(), Classification::AlreadyTried);
        assert_eq!(game.classify("R").unwrap(), Classification::AlreadyTried);
        assert_eq!(game.attempts_remaining(), before.attempts_remaining());
        assert_eq!(game.guessed(), before.guessed());
        assert_eq!(game.unrevealed(), before.unrevealed());
    }

    #[test]
    fn test_guess_is_lower_cased() {
        let mut game = WordGame::with_word("kotlin");
        assert_eq!(game.classify("K").unwrap(), Classification::Correct);
        assert!(game.guessed().contains("k"));
    }

    #[test]
    fn test_multi_letter_guess_is_wrong() {
        let mut game = WordGame::with_word("java");
        assert_eq!(game.classify("ja").unwrap(), Classification::WrongLetter);
        assert_eq!(game.classify("").unwrap(), Classification::WrongLetter);
        assert_eq!(game.attempts_remaining(), ATTEMPT_BUDGET - 2);
        assert_eq!(game.unrevealed().len(), 3);
    }

    #[test]
    fn test_sets_are_monotonic() {
        let mut game = WordGame::with_word("python");
        let mut unrevealed = game.unrevealed().len();
        let mut guessed = game.guessed().len();
        for guess in ["p", "z", "p", "y", "q", "t", "h", "z", "o", "n"] {
            game.classify(guess).unwrap();
            assert!(game.unrevealed().len() <= unrevealed);
            assert!(game.guessed().len() >= guessed);
            unrevealed = game.unrevealed().len();
            guessed = game.guessed().len();
        }
        assert_eq!(game.phase(), WordPhase::Won);
    }

    #[test]
    fn test_budget_exhaustion_loses() {
        let mut game = WordGame::with_word("mavu");
        play(&mut game, &["b", "c", "d", "e", "f"]);
        assert_eq!(game.phase(), WordPhase::Playing);
        game.classify("g").unwrap();
        assert_eq!(game.phase(), WordPhase::Lost);
        assert_eq!(
            game.outcome(),
            Some(WordOutcome::GameOver {
                word: "mavu".to_string()
            })
        );
    }

    #[test]
    fn test_last_letter_wins() {
        let mut game = WordGame::with_word("java");
        play(&mut game, &["a", "j", "v"]);
        assert_eq!(
            game.outcome(),
            Some(WordOutcome::Won {
                word: "java".to_string()
            })
        );
    }

    #[test]
    fn test_status_lines() {
        let mut game = WordGame::with_word("java");
        play(&mut game, &["x", "a"]);
        assert_eq!(
            game.status(),
            [
                "",
                "Attempts remaining: 5",
                "Guessed letters: a x",
                "Word: _ a _ a"
            ]
        );
    }

    #[test]
    fn test_mixed_case_word_is_winnable() {
        let mut game = WordGame::with_word("Ruby");
        assert_eq!(game.word(), "ruby");
        play(&mut game, &["R", "u", "b", "y"]);
        assert_eq!(game.phase(), WordPhase::Won);
    }

    #[test]
    fn test_random_word_from_vocabulary() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let game = WordGame::random(&mut rng);
            assert!(VOCABULARY.contains(&game.word()));
        }
    }
}
