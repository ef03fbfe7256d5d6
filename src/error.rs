//! Per-card failure taxonomy for the extraction pipeline.

use chrono::{DateTime, FixedOffset};

/// Everything that can invalidate a single branch card.
///
/// Every variant aborts exactly the one record being built; the coordinator
/// logs it and moves on. None of these ever fail a whole extraction pass,
/// except [`ExtractError::NodeLookup`] raised for the list container itself,
/// which happens upstream of the per-card workers.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("updated timestamp is empty")]
    EmptyTimestamp,

    #[error("failed to parse updated timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("rate quote is stale, last updated {0}")]
    StaleData(DateTime<FixedOffset>),

    #[error("failed to parse rate: {0:?}")]
    InvalidRate(String),

    #[error("expected 2 rate cells, found {found}")]
    UnexpectedRateCount { found: usize },

    #[error("element not found: {selector}")]
    NodeLookup { selector: &'static str },
}
