//! Game definitions and logic.

mod guess_number;
mod guess_word;
mod rps;
mod traits;

pub use guess_number::{NumberGame, NumberInputPolicy, NumberOutcome, SECRET_RANGE};
pub use guess_word::{WordGame, WordOutcome, WordPhase, ATTEMPT_BUDGET, VOCABULARY};
pub use rps::{ParseRpsChoiceError, RpsChoice, RpsGame, RpsOutcome};
pub use traits::{Classification, GameType, GuessingGame};
