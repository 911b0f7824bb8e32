//! # Relation Laws
//!
//! Strictness, reflexivity, symmetry and transitivity cannot be read off a
//! signature. Algorithms that need them take them on trust from the caller.
//! This module spot-checks a relation over a finite sample set, in the
//! spirit of checking functor laws on a finite category: a passing check is
//! evidence, a failing one is a counterexample.
//!
//! ```
//! use eop_core::relation::{check_law, RelationLaw};
//!
//! let less = |a: i32, b: i32| a < b;
//! let samples = [1, 2, 3];
//!
//! assert!(check_law(&less, RelationLaw::Strict, &samples).is_ok());
//! assert!(check_law(&less, RelationLaw::Transitive, &samples).is_ok());
//! assert!(check_law(&less, RelationLaw::Symmetric, &samples).is_err());
//! ```

use std::fmt;

use tracing::debug;

use crate::callable::Callable;
use crate::capability::Relation;
use crate::error::CoreError;
use crate::signature::Signature;

/// A property a relation may or may not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationLaw {
    /// `r(a, a)` is false for every `a`.
    Strict,
    /// `r(a, a)` is true for every `a`.
    Reflexive,
    /// `r(a, b) == r(b, a)`.
    Symmetric,
    /// `r(a, b) && r(b, c)` implies `r(a, c)`.
    Transitive,
}

impl RelationLaw {
    /// The laws that together make an equivalence.
    pub const EQUIVALENCE: [RelationLaw; 3] = [
        RelationLaw::Reflexive,
        RelationLaw::Symmetric,
        RelationLaw::Transitive,
    ];
}

impl fmt::Display for RelationLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationLaw::Strict => "strict",
            RelationLaw::Reflexive => "reflexive",
            RelationLaw::Symmetric => "symmetric",
            RelationLaw::Transitive => "transitive",
        };
        f.write_str(name)
    }
}

/// Check one law over every combination of `samples`.
///
/// Returns the first counterexample found.
pub fn check_law<R, S, T>(relation: &R, law: RelationLaw, samples: &[T]) -> Result<(), CoreError>
where
    R: Callable<S>,
    S: Relation + Signature<Params = (T, T), Return = bool>,
    T: Clone + fmt::Debug,
{
    if samples.is_empty() {
        return Err(CoreError::NoSamples);
    }
    debug!(%law, samples = samples.len(), "checking relation law");

    let holds = |a: &T, b: &T| relation.invoke((a.clone(), b.clone()));
    let violated = |witness: String| CoreError::LawViolated { law, witness };

    match law {
        RelationLaw::Strict => {
            if let Some(a) = samples.iter().find(|a| holds(*a, *a)) {
                return Err(violated(format!("r({a:?}, {a:?})")));
            }
        }
        RelationLaw::Reflexive => {
            if let Some(a) = samples.iter().find(|a| !holds(*a, *a)) {
                return Err(violated(format!("!r({a:?}, {a:?})")));
            }
        }
        RelationLaw::Symmetric => {
            for a in samples {
                for b in samples {
                    if holds(a, b) != holds(b, a) {
                        return Err(violated(format!("r({a:?}, {b:?}) != r({b:?}, {a:?})")));
                    }
                }
            }
        }
        RelationLaw::Transitive => {
            for a in samples {
                for b in samples.iter().filter(|b| holds(a, *b)) {
                    if let Some(c) = samples.iter().find(|c| holds(b, *c) && !holds(a, *c)) {
                        return Err(violated(format!(
                            "r({a:?}, {b:?}) and r({b:?}, {c:?}) but not r({a:?}, {c:?})"
                        )));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Check reflexivity, symmetry and transitivity.
pub fn check_equivalence<R, S, T>(relation: &R, samples: &[T]) -> Result<(), CoreError>
where
    R: Callable<S>,
    S: Relation + Signature<Params = (T, T), Return = bool>,
    T: Clone + fmt::Debug,
{
    for law in RelationLaw::EQUIVALENCE {
        check_law(relation, law, samples)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{FunctionObject, Functor};

    fn product_is_even(x: i64, y: i64) -> bool {
        (x * y) % 2 == 0
    }

    struct SameParity;

    impl FunctionObject for SameParity {
        type Args = (u32, u32);
        type Output = bool;

        fn call(&self, (a, b): (u32, u32)) -> bool {
            a % 2 == b % 2
        }
    }

    #[test]
    fn test_product_is_even_depends_on_samples() {
        let evens = [0, 2, 4, 8];
        let odds = [1, 3, 5, 7];
        let all = [1, 2, 3, 4];

        assert!(check_law(&product_is_even, RelationLaw::Reflexive, &evens).is_ok());
        assert!(check_law(&product_is_even, RelationLaw::Strict, &odds).is_ok());
        assert!(check_law(&product_is_even, RelationLaw::Reflexive, &all).is_err());
        assert!(check_law(&product_is_even, RelationLaw::Strict, &all).is_err());
    }

    #[test]
    fn test_violation_carries_witness() {
        let err = check_law(&product_is_even, RelationLaw::Reflexive, &[2, 3]).unwrap_err();
        assert_eq!(
            err,
            CoreError::LawViolated {
                law: RelationLaw::Reflexive,
                witness: "!r(3, 3)".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Relation is not reflexive: counterexample !r(3, 3)");
    }

    #[test]
    fn test_equivalence_through_function_object() {
        let samples: Vec<u32> = (0..10).collect();
        assert!(check_equivalence(&Functor(SameParity), &samples).is_ok());
    }

    #[test]
    fn test_less_than_is_not_an_equivalence() {
        let less = |a: i32, b: i32| a < b;
        let err = check_equivalence(&less, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::LawViolated {
                law: RelationLaw::Reflexive,
                ..
            }
        ));
    }

    #[test]
    fn test_transitivity_counterexample() {
        let adjacent = |a: i32, b: i32| (a - b).abs() == 1;
        let err = check_law(&adjacent, RelationLaw::Transitive, &[1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("but not"));
    }

    #[test]
    fn test_empty_samples_rejected() {
        let eq = |a: u8, b: u8| a == b;
        assert_eq!(
            check_law(&eq, RelationLaw::Symmetric, &[]),
            Err(CoreError::NoSamples)
        );
    }
}
