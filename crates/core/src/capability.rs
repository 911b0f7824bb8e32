//! # Capabilities - What a Signature Can Do
//!
//! Every capability is a trait implemented for exactly the signatures that
//! have it. Generic algorithms put these traits in their `where` clauses, so
//! a callable with the wrong shape is rejected while type-checking, with a
//! message naming the missing capability:
//!
//! ```compile_fail
//! use eop_core::capability::Transformation;
//! use eop_core::signature::Sig;
//!
//! fn needs_transformation<S: Transformation>() {}
//!
//! // Binary, not unary.
//! needs_transformation::<Sig<i32, (i32, i32)>>();
//! ```
//!
//! ## The Layers
//!
//! | Capability | Definition |
//! |------------|------------|
//! | [`Unary`], [`Binary`], [`Ternary`] | arity 1, 2, 3 |
//! | [`Predicate`] | returns exactly `bool` |
//! | [`Homogeneous`] | all parameters equal after stripping references |
//! | [`HomogeneousPredicate`] | homogeneous and predicate |
//! | [`UnaryPredicate`] | unary and predicate |
//! | [`Operation`] | homogeneous, and the stripped return type is the stripped parameter 0 |
//! | [`Transformation`] | unary operation |
//! | [`BinaryOperation`] | binary operation |
//! | [`Relation`] | binary homogeneous predicate |
//!
//! Signatures of arity 0 and 1 are trivially homogeneous. Arity 0 has no
//! parameter 0 and is therefore never an operation.
//!
//! ## Asking Instead of Requiring
//!
//! [`satisfies!`](crate::satisfies) turns a capability into a `bool` for a
//! concrete signature type, and [`capabilities!`](crate::capabilities)
//! collects all of them:
//!
//! ```
//! use eop_core::{capabilities, satisfies};
//! use eop_core::capability::{Homogeneous, Relation};
//! use eop_core::signature::Sig;
//!
//! assert!(satisfies!(Sig<bool, (&i32, i32)>: Relation));
//! assert!(!satisfies!(Sig<i32, (i32, f64)>: Homogeneous));
//!
//! let caps = capabilities!(Sig<i32, (i32, i32)>);
//! assert!(caps.binary_operation && !caps.relation);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::signature::{Bare, Cons, Nil, Sig, Signature};

// ============================================================================
// Arity
// ============================================================================

/// Signature with exactly one parameter.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not unary")]
pub trait Unary: Signature {
    /// The single parameter type.
    type Domain;
}

impl<R, A0> Unary for Sig<R, (A0,)> {
    type Domain = A0;
}

/// Parameter type of a unary signature.
pub type UnaryDomain<S> = <S as Unary>::Domain;

/// Signature with exactly two parameters.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not binary")]
pub trait Binary: Signature {}

impl<R, A0, A1> Binary for Sig<R, (A0, A1)> {}

/// Signature with exactly three parameters.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not ternary")]
pub trait Ternary: Signature {}

impl<R, A0, A1, A2> Ternary for Sig<R, (A0, A1, A2)> {}

// ============================================================================
// Predicate
// ============================================================================

/// Signature returning exactly `bool`.
#[diagnostic::on_unimplemented(
    message = "callable `{Self}` is not a predicate",
    note = "a predicate returns `bool`"
)]
pub trait Predicate: Signature {}

impl<P> Predicate for Sig<bool, P> where Self: Signature {}

// ============================================================================
// Homogeneity
// ============================================================================

/// Parameter list whose adjacent entries are equal after stripping.
///
/// `Nil` and single-entry lists hold trivially; a longer list holds when its
/// first two entries agree and its tail holds. Equality is transitive, so
/// adjacent agreement is agreement of every pair.
#[diagnostic::on_unimplemented(message = "parameter types `{Self}` differ after stripping references")]
pub trait AdjacentEqual {}

impl AdjacentEqual for Nil {}

impl<A> AdjacentEqual for Cons<A, Nil> {}

impl<A, B, T> AdjacentEqual for Cons<A, Cons<B, T>>
where
    A: Bare,
    B: Bare<Bare = A::Bare>,
    Cons<B, T>: AdjacentEqual,
{
}

/// Signature whose parameters all share one stripped type.
#[diagnostic::on_unimplemented(
    message = "callable `{Self}` is not homogeneous",
    note = "all parameter types must be equal once references are stripped"
)]
pub trait Homogeneous: Signature {}

impl<S> Homogeneous for S
where
    S: Signature,
    S::List: AdjacentEqual,
{
}

/// Homogeneous signature returning `bool`.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not a homogeneous predicate")]
pub trait HomogeneousPredicate: Homogeneous + Predicate {}

impl<S: Homogeneous + Predicate> HomogeneousPredicate for S {}

/// Unary signature returning `bool`.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not a unary predicate")]
pub trait UnaryPredicate: Unary + Predicate {}

impl<S: Unary + Predicate> UnaryPredicate for S {}

// ============================================================================
// Operations
// ============================================================================

/// Homogeneous signature closed over its parameter type.
#[diagnostic::on_unimplemented(
    message = "callable `{Self}` is not an operation",
    note = "an operation is homogeneous and returns its own parameter type"
)]
pub trait Operation: Homogeneous {
    /// The type the operation is closed over, references stripped.
    type Domain: ?Sized;
}

impl<S, H, T> Operation for S
where
    S: Homogeneous + Signature<List = Cons<H, T>>,
    S::Return: Bare,
    H: Bare<Bare = <S::Return as Bare>::Bare>,
{
    type Domain = H::Bare;
}

/// Unary operation.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not a transformation")]
pub trait Transformation: Operation + Unary {}

impl<S: Operation + Unary> Transformation for S {}

/// Binary operation.
#[diagnostic::on_unimplemented(message = "callable `{Self}` is not a binary operation")]
pub trait BinaryOperation: Operation + Binary {}

impl<S: Operation + Binary> BinaryOperation for S {}

// ============================================================================
// Relations
// ============================================================================

/// Binary homogeneous predicate.
///
/// The signature says nothing about how a relation behaves. Properties a
/// relation `r` may or may not have:
///
/// - strict: `r(a, a)` is false for every `a`
/// - reflexive: `r(a, a)` is true for every `a`
/// - symmetric: `r(a, b) == r(b, a)`
/// - transitive: `r(a, b) && r(b, c)` implies `r(a, c)`
/// - equivalence: reflexive, symmetric and transitive
///
/// A relation can be neither strict nor reflexive: "the product is even" is
/// reflexive on even numbers, strict on odd numbers and neither on all
/// integers. Algorithms rely on these properties for correct answers, never
/// for compilation; [`relation`](crate::relation) can spot-check them.
#[diagnostic::on_unimplemented(
    message = "callable `{Self}` is not a relation",
    note = "a relation is a binary homogeneous predicate"
)]
pub trait Relation: HomogeneousPredicate + Binary {}

impl<S: HomogeneousPredicate + Binary> Relation for S {}

// ============================================================================
// Boolean Queries
// ============================================================================

#[doc(hidden)]
pub struct Query<T>(PhantomData<fn() -> T>);

impl<T> Query<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// `bool` answer to "does signature type `S` have capability `C`?".
///
/// Resolved during type-checking: the method that answers `true` only
/// exists when the bound holds, otherwise method resolution falls back to
/// the one answering `false`.
///
/// # Caveats
///
/// The answer is fixed where the macro expands. Inside a generic item the
/// signature is a type parameter whose capabilities are unknown there, so
/// the macro answers `false` for every instantiation. Use it on concrete
/// signature types only, and put the capability in a `where` clause when
/// the signature is generic.
///
/// ```
/// use eop_core::capability::Relation;
/// use eop_core::satisfies;
/// use eop_core::signature::Sig;
///
/// fn generic<S>() -> bool {
///     satisfies!(S: Relation)
/// }
///
/// assert!(satisfies!(Sig<bool, (i32, i32)>: Relation));
/// assert!(!generic::<Sig<bool, (i32, i32)>>());
/// ```
#[macro_export]
macro_rules! satisfies {
    ($sig:ty : $cap:path) => {{
        trait Holds {
            fn holds(&self) -> bool {
                true
            }
        }

        impl<T: $cap> Holds for &$crate::capability::Query<T> {}

        trait Lacks {
            fn holds(&self) -> bool {
                false
            }
        }

        impl<T> Lacks for $crate::capability::Query<T> {}

        (&&$crate::capability::Query::<$sig>::new()).holds()
    }};
}

/// Capability report for one signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub arity: usize,
    pub unary: bool,
    pub binary: bool,
    pub ternary: bool,
    pub predicate: bool,
    pub homogeneous: bool,
    pub homogeneous_predicate: bool,
    pub unary_predicate: bool,
    pub operation: bool,
    pub transformation: bool,
    pub binary_operation: bool,
    pub relation: bool,
}

impl Capabilities {
    /// Names of the capabilities that hold, most specific last.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.unary, "unary"),
            (self.binary, "binary"),
            (self.ternary, "ternary"),
            (self.predicate, "predicate"),
            (self.homogeneous, "homogeneous"),
            (self.homogeneous_predicate, "homogeneous predicate"),
            (self.unary_predicate, "unary predicate"),
            (self.operation, "operation"),
            (self.transformation, "transformation"),
            (self.binary_operation, "binary operation"),
            (self.relation, "relation"),
        ]
        .into_iter()
        .filter_map(|(holds, name)| holds.then_some(name))
        .collect()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arity {}", self.arity)?;
        for name in self.names() {
            write!(f, ", {}", name)?;
        }
        Ok(())
    }
}

/// Build the [`Capabilities`] report for a concrete signature type.
#[macro_export]
macro_rules! capabilities {
    ($sig:ty) => {
        $crate::capability::Capabilities {
            arity: <$sig as $crate::signature::Signature>::ARITY,
            unary: $crate::satisfies!($sig: $crate::capability::Unary),
            binary: $crate::satisfies!($sig: $crate::capability::Binary),
            ternary: $crate::satisfies!($sig: $crate::capability::Ternary),
            predicate: $crate::satisfies!($sig: $crate::capability::Predicate),
            homogeneous: $crate::satisfies!($sig: $crate::capability::Homogeneous),
            homogeneous_predicate: $crate::satisfies!($sig: $crate::capability::HomogeneousPredicate),
            unary_predicate: $crate::satisfies!($sig: $crate::capability::UnaryPredicate),
            operation: $crate::satisfies!($sig: $crate::capability::Operation),
            transformation: $crate::satisfies!($sig: $crate::capability::Transformation),
            binary_operation: $crate::satisfies!($sig: $crate::capability::BinaryOperation),
            relation: $crate::satisfies!($sig: $crate::capability::Relation),
        }
    };
}
