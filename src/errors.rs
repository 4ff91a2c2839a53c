use thiserror::Error;

use crate::domain::Period;

/// Error type that captures data-shape and IO failures in the analytic core.
///
/// Classification, advice, and intent matching are total once a dataset has
/// been validated; only loading and aggregation can fail.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("invalid budget line for {category}/{subcategory}: {reason}")]
    InvalidBudget {
        category: String,
        subcategory: String,
        reason: String,
    },
    #[error("duplicate budget line: {period} {category}/{subcategory}")]
    DuplicateLine {
        period: Period,
        category: String,
        subcategory: String,
    },
    #[error("periods are misaligned: {0}")]
    MisalignedPeriods(String),
    #[error("no budget lines match {0}")]
    EmptyGroup(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
