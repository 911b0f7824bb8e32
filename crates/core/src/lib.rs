//! # Core - Callable Classification
//!
//! This crate answers, while the program is type-checked, what shape a
//! callable has and what it may be used for:
//!
//! - **Signatures**: the canonical `Sig<R, (A0, …)>` fact, parameter
//!   queries and reference stripping
//! - **Callables**: extraction of a signature from functions, function
//!   pointers, methods, field accessors, closures and function objects
//! - **Capabilities**: predicates layered on signatures (homogeneous,
//!   operation, transformation, relation, …) used as trait bounds
//! - **Relations**: runtime spot checks of the laws a relation may obey
//!
//! ## Design Philosophy
//!
//! A generic algorithm states what it needs from its callables as
//! capabilities. A callable of the wrong shape does not produce a runtime
//! error; the call site simply does not compile.

pub mod callable;
pub mod capability;
pub mod error;
pub mod relation;
pub mod signature;

// Re-export key types at crate root for convenience
pub use callable::{arity_of, describe, has_signature, kind_of, param_type, Callable, Field, FunctionObject, Functor};
pub use capability::{
    Binary, BinaryOperation, Capabilities, Homogeneous, HomogeneousPredicate, Operation, Predicate, Relation,
    Ternary, Transformation, Unary, UnaryDomain, UnaryPredicate,
};
pub use error::CoreError;
pub use relation::{check_equivalence, check_law, RelationLaw};
pub use signature::{Bare, Codomain, Domain, ParamAt, Sig, Signature};
