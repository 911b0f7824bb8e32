//! # Algo - Algorithms Constrained by Capabilities
//!
//! Generic algorithms whose requirements on their callables are stated as
//! capabilities from `eop_core`:
//!
//! - **Orbits**: collision point, terminating and circular orbits of a
//!   transformation restricted to a definition-space predicate
//! - **Reduction**: left fold with a binary operation
//! - **Argument passing**: callables may take their values as `D` or `&D`
//! - **Domain checks**: overflow-free test for signed integer addition
//!
//! ## Example: Walking Up to Overflow
//!
//! ```rust
//! use eop_algo::domain::addition_defined;
//! use eop_algo::orbit::{circular_orbit, collision_point, terminating_orbit};
//!
//! let x = i32::MAX - 133;
//! let successor = |v: i32| v + 1;
//! let defined = |v: i32| addition_defined(v, 1);
//!
//! assert!(terminating_orbit(x, successor, defined));
//! assert!(!circular_orbit(x, successor, defined));
//! assert_eq!(collision_point(x, successor, defined), i32::MAX);
//! ```
//!
//! A callable of the wrong shape is rejected when the program is compiled,
//! never while it runs.

pub mod domain;
pub mod error;
pub mod orbit;
pub mod pass;
pub mod reduce;
pub mod support;

pub use domain::{addition_defined, SignedInteger};
pub use error::AlgoError;
pub use orbit::{circular_orbit, collision_point, collision_point_within, terminating_orbit};
pub use pass::{Apply, ByRef, ByValue, Combine};
pub use reduce::{reduce, reduce_nonempty};
pub use support::{sample_uniform, Real, RealEqual, SamplerConfig};
