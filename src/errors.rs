//! Errors
//!
//! Custom error types used throughout the `prunetree` crate.
use thiserror::Error;

/// Errors that can occur while building a schema, fitting or querying a learner.
#[derive(Debug, Error)]
pub enum DecisionTreeError {
    /// Binary entropy needs exactly two class labels.
    #[error("Exactly two class labels are supported, {0} were declared.")]
    LabelCount(usize),
    /// Attribute, value or label names must be unique within their list.
    #[error("Duplicate {0} `{1}` in schema.")]
    DuplicateName(String, String),
    /// An attribute without legal values can never be split on.
    #[error("Attribute `{0}` declares no legal values.")]
    EmptyDomain(String),
    /// Attribute names and value lists have to line up.
    #[error("Schema declares {0} attributes but {1} value lists.")]
    DomainCount(usize, usize),
    /// Instance does not carry one value per schema attribute.
    #[error("Instance {0} has {1} attribute values, expected {2}.")]
    ShapeMismatch(usize, usize, usize),
    /// Instance label is not one of the schema's class labels.
    #[error("Label `{0}` is not one of the declared class labels.")]
    UnknownLabel(String),
    /// Datasets passed together have to share one schema.
    #[error("Training and tuning datasets were built over different schemas.")]
    SchemaMismatch,
    /// The learner has no tree yet.
    #[error("The learner has not been fitted yet.")]
    NotFitted,
    /// Error reading configuration.
    #[error("Unable to read configuration from a file {0}")]
    UnableToRead(String),
    /// Error writing configuration.
    #[error("Unable to write configuration to file: {0}")]
    UnableToWrite(String),
}
