//! Selection error types.
//!
//! Defined in `quizforge-core` so callers can match on allocation failures
//! without string matching.

use thiserror::Error;

/// Errors that can occur when allocating difficulty quotas.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The difficulty mix has no medium entry to absorb the rounding
    /// shortfall. Shortfall redistribution is hardwired to the medium
    /// bucket, so a mix without one cannot be allocated exactly.
    #[error("difficulty mix has no medium entry to absorb a shortfall of {shortfall}")]
    NoMediumBucket { shortfall: usize },
}

impl AllocationError {
    /// The number of questions left unallocated, if applicable.
    pub fn shortfall(&self) -> usize {
        match self {
            AllocationError::NoMediumBucket { shortfall } => *shortfall,
        }
    }
}
