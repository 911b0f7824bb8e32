//! Collaborators for exercising the algorithms on real numbers.
//!
//! - [`sample_uniform`] draws test data from a [`SamplerConfig`]
//! - [`RealEqual`] compares within a tolerance and classifies as a relation

use std::fmt;
use std::ops::Sub;

use eop_core::callable::FunctionObject;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlgoError;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point element type: `f32` or `f64`.
pub trait Real: sealed::Sealed + Copy + PartialOrd + fmt::Debug + SampleUniform + Sub<Output = Self> {
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

// ============================================================================
// Sampling
// ============================================================================

/// How many values to draw, from which closed range, with which seed.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub count: usize,
    pub lo: f64,
    pub hi: f64,
    /// Fixed seed for reproducible draws; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count: 1024,
            lo: 0.13,
            hi: 199.17,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Parse a configuration from JSON.
    ///
    /// ```
    /// use eop_algo::support::SamplerConfig;
    ///
    /// let config = SamplerConfig::from_json(r#"{ "count": 8, "seed": 7 }"#).unwrap();
    /// assert_eq!(config.count, 8);
    /// assert_eq!(config.hi, 199.17);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, AlgoError> {
        serde_json::from_str(json).map_err(|e| AlgoError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Draw `config.count` values uniformly from `[config.lo, config.hi]`.
///
/// # Errors
///
/// [`AlgoError::InvalidRange`] when a bound is not finite in `T` or the
/// range is reversed.
pub fn sample_uniform<T: Real>(config: &SamplerConfig) -> Result<Vec<T>, AlgoError> {
    let lo = T::from_f64(config.lo);
    let hi = T::from_f64(config.hi);
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(AlgoError::InvalidRange {
            lo: config.lo,
            hi: config.hi,
        });
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values: Vec<T> = rng
        .sample_iter(Uniform::new_inclusive(lo, hi))
        .take(config.count)
        .collect();

    debug!(count = values.len(), lo = config.lo, hi = config.hi, seeded = config.seed.is_some(), "sampled values");
    Ok(values)
}

// ============================================================================
// Tolerant Equality
// ============================================================================

/// `|lhs - rhs| < delta`.
///
/// A function object, so `Functor(RealEqual::new(d))` is a relation and can
/// be law-checked. It is symmetric and reflexive for `delta > 0` but not
/// transitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealEqual<T> {
    delta: T,
}

impl<T: Real> RealEqual<T> {
    pub fn new(delta: T) -> Self {
        Self { delta }
    }

    pub fn delta(&self) -> T {
        self.delta
    }
}

impl<T: Real> FunctionObject for RealEqual<T> {
    type Args = (T, T);
    type Output = bool;

    fn call(&self, (lhs, rhs): (T, T)) -> bool {
        (lhs - rhs).abs() < self.delta
    }
}
