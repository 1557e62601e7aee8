//! Learner Configuration
//!
//! Settings of the pruning run and their JSON persistence.
use crate::constants::{PAIRWISE_ROUNDS, RANDOM_ROUNDS, REFINEMENT_ROUNDS};
use crate::errors::DecisionTreeError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_seed() -> u64 {
    0
}
fn default_random_rounds() -> usize {
    RANDOM_ROUNDS
}
fn default_refinement_rounds() -> usize {
    REFINEMENT_ROUNDS
}
fn default_pairwise_rounds() -> usize {
    PAIRWISE_ROUNDS
}

/// Configuration for the `DecisionTreeLearner`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Seed for the random-order strategy.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Rounds of random pruning, each on two fresh trees.
    #[serde(default = "default_random_rounds")]
    pub random_rounds: usize,
    /// Rounds of refinement directly on the best tree.
    #[serde(default = "default_refinement_rounds")]
    pub refinement_rounds: usize,
    /// Outer rounds of the pairwise strategy.
    #[serde(default = "default_pairwise_rounds")]
    pub pairwise_rounds: usize,
    /// Log every strategy invocation at info level instead of debug.
    #[serde(default)]
    pub log_strategies: bool,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        LearnerConfig {
            seed: default_seed(),
            random_rounds: RANDOM_ROUNDS,
            refinement_rounds: REFINEMENT_ROUNDS,
            pairwise_rounds: PAIRWISE_ROUNDS,
            log_strategies: false,
        }
    }
}

/// IO
pub trait LearnerIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), DecisionTreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| DecisionTreeError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object.
    fn json_dump(&self) -> Result<String, DecisionTreeError> {
        serde_json::to_string(self).map_err(|e| DecisionTreeError::UnableToWrite(e.to_string()))
    }

    /// Load from a json string.
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, DecisionTreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| DecisionTreeError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, DecisionTreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| DecisionTreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl LearnerIO for LearnerConfig {}
