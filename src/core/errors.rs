//! Structured error taxonomy for the engine.
//!
//! Only conditions that make a query meaningless get a variant here. "No blocking coalition
//! found" and "no k-stable matching exists" are answers, not errors, and are reported as
//! `Ok(false)` / `Ok(None)` by [`crate::verifier`] and [`crate::existence`] respectively.

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, KstabError>;

/// Everything that can go wrong building or querying a matching instance.
#[derive(Debug, Error)]
pub enum KstabError {
    /// The caller's `k`, matching, or instance don't make sense together: bad size, `k` out
    /// of range, a matching shaped for a different instance, malformed CLI arguments.
    #[error("[KSTAB-1001] invalid input: {details}")]
    InvalidInput { details: String },

    /// A generator or enumerator couldn't produce what was asked.
    #[error("[KSTAB-1002] allocation failure: {details}")]
    AllocationFailure { details: String },
}

impl KstabError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "KSTAB-1001",
            Self::AllocationFailure { .. } => "KSTAB-1002",
        }
    }

    /// Builds an [`KstabError::InvalidInput`] from any displayable detail.
    #[must_use]
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput {
            details: details.into(),
        }
    }

    /// Builds an [`KstabError::AllocationFailure`] from any displayable detail.
    #[must_use]
    pub fn allocation_failure(details: impl Into<String>) -> Self {
        Self::AllocationFailure {
            details: details.into(),
        }
    }
}
