//! Error type for selection operations.

use thiserror::Error;

/// Errors raised by [`ChaosEngine`](crate::ChaosEngine) operations.
///
/// Only argument validation fails. Picking from empty or ragged input is a
/// normal `None`, and OS randomness failure is fatal rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChaosError {
    /// An argument is outside the range the operation accepts.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// Operation that rejected the call.
        operation: &'static str,
        /// What was wrong with the arguments.
        reason: String,
    },
}

impl ChaosError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChaosError>;
