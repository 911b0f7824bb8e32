//! Error types for the algorithm library.
//!
//! The algorithms themselves have no recoverable failures; these cover the
//! budgeted search and the sampling collaborators.

use thiserror::Error;

/// Errors from the budgeted orbit search and the sampler.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AlgoError {
    /// The orbit neither left the domain nor closed within the budget.
    #[error("Orbit did not settle within {rounds} rounds")]
    RoundLimit { rounds: usize },

    /// Sampling range is empty or not finite.
    #[error("Invalid sampling range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
