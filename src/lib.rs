// Modules
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod learner;
pub mod node;
pub mod prune;
pub mod sampler;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod testing;

// Individual classes, and functions
pub use data::{Dataset, Instance, Schema};
pub use errors::DecisionTreeError;
pub use learner::config::{LearnerConfig, LearnerIO};
pub use learner::core::DecisionTreeLearner;
