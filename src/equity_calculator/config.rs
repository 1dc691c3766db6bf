use serde::{Deserialize, Serialize};

use super::EquityError;
use crate::constants::DEFAULT_RANDOM_TRIALS;

/// How unseen cards are dealt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumerationType {
    /// every legal completion exactly once
    Exhaustive,
    /// Monte Carlo sampling for a fixed number of trials
    Random,
}

impl Default for EnumerationType {
    fn default() -> Self {
        EnumerationType::Random
    }
}

/// Settings for one equity computation
///
/// # Example
///
/// ```
/// use poker_equity::equity_calculator::{EquityConfig, EnumerationType};
/// let config = EquityConfig::from_json(r#"{ "enumeration": "exhaustive", "threads": 4 }"#).unwrap();
/// assert_eq!(config.enumeration, EnumerationType::Exhaustive);
/// assert_eq!(config.trials, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    pub enumeration: EnumerationType,
    /// trial budget in random mode, ignored when exhaustive
    pub trials: u64,
    pub threads: usize,
    /// fixed seed for reproducible random runs
    pub seed: Option<u64>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        EquityConfig {
            enumeration: EnumerationType::default(),
            trials: DEFAULT_RANDOM_TRIALS,
            threads: 1,
            seed: None,
        }
    }
}

impl EquityConfig {
    pub fn from_json(text: &str) -> Result<Self, EquityError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn exhaustive(mut self) -> Self {
        self.enumeration = EnumerationType::Exhaustive;
        self
    }

    pub fn random(mut self, trials: u64) -> Self {
        self.enumeration = EnumerationType::Random;
        self.trials = trials;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
