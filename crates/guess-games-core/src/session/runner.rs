//! Session loop.

use super::types::{RetryPolicy, SessionId, SessionReport};
use crate::error::SessionError;
use crate::games::GuessingGame;
use crate::terminal::Terminal;
use tracing::{debug, info, info_span, warn};

/// Drives one game from its welcome lines to a terminal outcome
pub struct GuessingSession<T> {
    id: SessionId,
    terminal: T,
    retry_policy: RetryPolicy,
}

impl<T: Terminal> GuessingSession<T> {
    pub fn new(terminal: T, retry_policy: RetryPolicy) -> Self {
        Self {
            id: SessionId::new(),
            terminal,
            retry_policy,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Play `game` to completion.
    ///
    /// Each turn prints the game's status, reads one line, classifies it and
    /// prints the feedback. The loop ends when the game reports an outcome,
    /// or with an error if the terminal fails, the game rejects the input
    /// outright, or the retry policy runs out.
    pub fn run<G: GuessingGame>(mut self, mut game: G) -> Result<G::Outcome, SessionError> {
        let game_type = G::GAME_TYPE;
        let span = info_span!("session", id = %self.id, game = %game_type);
        let _enter = span.enter();

        for line in game.welcome() {
            self.terminal.write_line(line)?;
        }

        let mut turns: u32 = 0;
        let mut invalid_inputs: u32 = 0;
        let mut streak: u32 = 0;

        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            for line in game.status() {
                self.terminal.write_line(&line)?;
            }

            let input = self.terminal.read_line(game.prompt())?;
            let classification = game.classify(&input)?;
            debug!(?classification, "Classified guess");

            if classification.is_invalid() {
                invalid_inputs = invalid_inputs.saturating_add(1);
                streak = streak.saturating_add(1);
                if self.retry_policy.is_exhausted(streak) {
                    warn!(streak, "Too many invalid inputs");
                    return Err(SessionError::RetriesExhausted { attempts: streak });
                }
            } else {
                turns = turns.saturating_add(1);
                streak = 0;
            }

            if let Some(line) = game.feedback(classification) {
                self.terminal.write_line(line)?;
            }
        };

        for line in game.report(&outcome) {
            self.terminal.write_line(&line)?;
        }

        let report = SessionReport {
            session_id: self.id,
            game_type,
            turns,
            invalid_inputs,
            outcome: outcome.clone(),
        };
        match serde_json::to_string(&report) {
            Ok(json) => info!(report = %json, "Session finished"),
            Err(e) => warn!("Could not serialize session report: {}", e),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{
        Classification, GameType, NumberGame, NumberInputPolicy, NumberOutcome, RpsChoice, RpsGame,
        RpsOutcome,
    };
    use crate::terminal::ScriptedTerminal;

    /// Game that accepts "ok" and rejects everything else
    struct Gate {
        passed: bool,
    }

    impl GuessingGame for Gate {
        type Outcome = bool;

        const GAME_TYPE: GameType = GameType::RockPaperScissors;

        fn welcome(&self) -> &'static [&'static str] {
            &["gate"]
        }

        fn prompt(&self) -> &'static str {
            "> "
        }

        fn classify(&mut self, input: &str) -> Result<Classification, SessionError> {
            if input == "ok" {
                self.passed = true;
                Ok(Classification::Correct)
            } else {
                Ok(Classification::Invalid)
            }
        }

        fn feedback(&self, classification: Classification) -> Option<&'static str> {
            classification.is_invalid().then_some("again")
        }

        fn outcome(&self) -> Option<bool> {
            self.passed.then_some(true)
        }

        fn report(&self, _outcome: &bool) -> Vec<String> {
            vec!["done".to_string()]
        }
    }

    #[test]
    fn test_session_stops_on_outcome() {
        let mut term = ScriptedTerminal::new(["50", "99"]);
        let outcome = GuessingSession::new(&mut term, RetryPolicy::default())
            .run(NumberGame::with_secret(50))
            .unwrap();

        assert_eq!(outcome, NumberOutcome::Won { attempts: 1 });
        assert_eq!(term.remaining_inputs(), 1);
    }

    #[test]
    fn test_session_transcript_order() {
        let mut term = ScriptedTerminal::new(["nope", "ok"]);
        GuessingSession::new(&mut term, RetryPolicy::default())
            .run(Gate { passed: false })
            .unwrap();

        assert_eq!(term.output(), ["gate", "again", "done"]);
        assert_eq!(term.prompts(), ["> ", "> "]);
    }

    #[test]
    fn test_streak_resets_after_valid_input() {
        let game = NumberGame::with_secret(50).with_policy(NumberInputPolicy::Lenient);
        let mut term = ScriptedTerminal::new(["x", "x", "10", "x", "x", "50"]);
        let outcome = GuessingSession::new(&mut term, RetryPolicy::bounded(2))
            .run(game)
            .unwrap();

        assert_eq!(outcome, NumberOutcome::Won { attempts: 2 });
    }

    #[test]
    fn test_retry_cap_exceeded() {
        let mut term = ScriptedTerminal::new(["a", "b", "c", "ok"]);
        let err = GuessingSession::new(&mut term, RetryPolicy::bounded(2))
            .run(Gate { passed: false })
            .unwrap_err();

        assert!(matches!(err, SessionError::RetriesExhausted { attempts: 3 }));
        assert_eq!(term.remaining_inputs(), 1);
    }

    #[test]
    fn test_unbounded_policy_keeps_reprompting() {
        let mut inputs = vec!["lizard"; 500];
        inputs.push("rock");
        let mut term = ScriptedTerminal::new(inputs);
        let outcome = GuessingSession::new(&mut term, RetryPolicy::unbounded())
            .run(RpsGame::against(RpsChoice::Rock))
            .unwrap();
        assert_eq!(outcome, RpsOutcome::Tie);
    }

    #[test]
    fn test_input_closed_propagates() {
        let mut term = ScriptedTerminal::new(["10"]);
        let err = GuessingSession::new(&mut term, RetryPolicy::default())
            .run(NumberGame::with_secret(50))
            .unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
    }
}
