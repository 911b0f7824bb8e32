//! # Error Types
//!
//! Capability violations never show up here: they are type errors and stop
//! the program from compiling. What remains are the runtime answers of the
//! optional relation-law checks in [`relation`](crate::relation).

use thiserror::Error;

use crate::relation::RelationLaw;

/// Core errors for callable classification.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A relation broke a law on the sampled values.
    #[error("Relation is not {law}: counterexample {witness}")]
    LawViolated { law: RelationLaw, witness: String },

    /// Laws cannot be checked without sample values.
    #[error("Cannot check relation laws on an empty sample set")]
    NoSamples,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_samples_message() {
        assert_eq!(
            CoreError::NoSamples.to_string(),
            "Cannot check relation laws on an empty sample set"
        );
    }
}
