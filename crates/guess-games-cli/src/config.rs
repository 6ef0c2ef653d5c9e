//! Environment configuration.

use guess_games_core::session::DEFAULT_MAX_INVALID;
use guess_games_core::{NumberInputPolicy, RetryPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

/// Seed for the random source; unset means OS entropy
pub const SEED_VAR: &str = "GUESS_GAMES_SEED";
/// Cap on consecutive invalid inputs; `0` or `unbounded` disables it
pub const MAX_INVALID_VAR: &str = "GUESS_GAMES_MAX_INVALID";
/// `1`/`true` turns non-numeric number guesses into a reprompt
pub const NUMBER_LENIENT_VAR: &str = "GUESS_NUMBER_LENIENT";

/// Runtime settings shared by the three binaries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub max_invalid: Option<u32>,
    pub lenient_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_invalid: Some(DEFAULT_MAX_INVALID),
            lenient_numbers: false,
        }
    }
}

impl Config {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unparseable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => {
                    info!(seed, "Using fixed random seed");
                    config.seed = Some(seed);
                }
                Err(_) => warn!("Ignoring {}={:?}: not a u64", SEED_VAR, raw),
            }
        }

        if let Some(raw) = lookup(MAX_INVALID_VAR) {
            match raw.trim() {
                "0" | "unbounded" => config.max_invalid = None,
                value => match value.parse::<u32>() {
                    Ok(max) => config.max_invalid = Some(max),
                    Err(_) => warn!("Ignoring {}={:?}: not a count", MAX_INVALID_VAR, raw),
                },
            }
        }

        if let Some(raw) = lookup(NUMBER_LENIENT_VAR) {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => config.lenient_numbers = true,
                "0" | "false" | "no" | "" => config.lenient_numbers = false,
                _ => warn!("Ignoring {}={:?}: not a boolean", NUMBER_LENIENT_VAR, raw),
            }
        }

        config
    }

    /// Random source for one session
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_invalid {
            Some(max) => RetryPolicy::bounded(max),
            None => RetryPolicy::unbounded(),
        }
    }

    pub fn number_policy(&self) -> NumberInputPolicy {
        if self.lenient_numbers {
            NumberInputPolicy::Lenient
        } else {
            NumberInputPolicy::Strict
        }
    }
}
