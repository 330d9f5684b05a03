//! Error types for condition lookup and filtering.

use thiserror::Error;

/// Failures raised by the condition selector and summarizers.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// Experiment id absent from the registry.
    #[error("unknown experiment '{0}'")]
    UnknownExperiment(String),

    /// A reward/cue level selector outside the configured code list.
    /// Levels are 1-based; `available` is the number of configured codes.
    #[error("{selector} level {level} out of range (expected 1..={available})")]
    LevelOutOfRange {
        selector: &'static str,
        level: usize,
        available: usize,
    },

    /// A configured column position beyond the loaded table's width.
    /// The table layout does not match the experiment id used to pick the
    /// configuration.
    #[error("column {column} out of bounds for table with {width} columns")]
    ColumnOutOfBounds { column: usize, width: usize },

    /// A registry entry failed validation.
    #[error("invalid config for '{id}': {reason}")]
    InvalidConfig { id: String, reason: String },
}

/// Result type alias for condition operations.
pub type Result<T> = std::result::Result<T, ConditionError>;
