//! # Argument Passing
//!
//! The algorithms hold their values as an owned `D`. A callable may take its
//! parameters as `D` or as `&D`: both strip to the same domain, so both are
//! accepted. [`Apply`] adapts a unary callable and [`Combine`] a binary one.
//!
//! The marker parameter `M` records which form was found. Exactly one form
//! fits a given callable, so `M` is inferred and never written by callers:
//!
//! ```
//! use eop_algo::pass::Apply;
//!
//! fn holds<M>(p: impl Apply<i32, M, Output = bool>, v: i32) -> bool {
//!     p.apply(v)
//! }
//!
//! assert!(holds(|v: i32| v > 0, 5));
//! assert!(holds(|v: &i32| *v > 0, 5));
//! ```
//!
//! Both parameters of a binary callable are passed the same way; a callable
//! mixing `D` and `&D` is not adapted.

use std::marker::PhantomData;

use eop_core::callable::Callable;
use eop_core::signature::{Sig, Signature};

/// Parameters taken by value; `S` is the callable's signature.
pub struct ByValue<S>(PhantomData<S>);

/// Parameters taken by shared reference; `R` is the return type.
pub struct ByRef<'a, R>(PhantomData<(&'a (), R)>);

/// A unary callable accepting one `D`, by value or by reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to a `{D}`",
    note = "the single parameter must be `{D}` or `&{D}`"
)]
pub trait Apply<D, M> {
    /// The callable's signature as extracted.
    type Signature: Signature;
    type Output;

    fn apply(&self, value: D) -> Self::Output;

    fn apply_ref(&self, value: &D) -> Self::Output;
}

impl<F, D, S> Apply<D, ByValue<S>> for F
where
    F: Callable<S>,
    S: Signature<Params = (D,)>,
    D: Clone,
{
    type Signature = S;
    type Output = S::Return;

    fn apply(&self, value: D) -> S::Return {
        self.invoke((value,))
    }

    fn apply_ref(&self, value: &D) -> S::Return {
        self.invoke((value.clone(),))
    }
}

impl<'a, F, D: 'a, R> Apply<D, ByRef<'a, R>> for F
where
    F: for<'b> Callable<Sig<R, (&'b D,)>>,
{
    type Signature = Sig<R, (&'a D,)>;
    type Output = R;

    fn apply(&self, value: D) -> R {
        <F as Callable<Sig<R, (&D,)>>>::invoke(self, (&value,))
    }

    fn apply_ref(&self, value: &D) -> R {
        <F as Callable<Sig<R, (&D,)>>>::invoke(self, (value,))
    }
}

/// A binary callable accepting two `D`s, both by value or both by reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot combine two `{D}` values",
    note = "both parameters must be `{D}`, or both `&{D}`"
)]
pub trait Combine<D, M> {
    /// The callable's signature as extracted.
    type Signature: Signature;
    type Output;

    fn combine(&self, lhs: D, rhs: D) -> Self::Output;
}

impl<F, D, S> Combine<D, ByValue<S>> for F
where
    F: Callable<S>,
    S: Signature<Params = (D, D)>,
{
    type Signature = S;
    type Output = S::Return;

    fn combine(&self, lhs: D, rhs: D) -> S::Return {
        self.invoke((lhs, rhs))
    }
}

impl<'a, F, D: 'a, R> Combine<D, ByRef<'a, R>> for F
where
    F: for<'b, 'c> Callable<Sig<R, (&'b D, &'c D)>>,
{
    type Signature = Sig<R, (&'a D, &'a D)>;
    type Output = R;

    fn combine(&self, lhs: D, rhs: D) -> R {
        <F as Callable<Sig<R, (&D, &D)>>>::invoke(self, (&lhs, &rhs))
    }
}
