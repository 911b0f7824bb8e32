//! # Signatures - Types as Facts
//!
//! A signature is the compile-time fact "returns `R`, takes `(A0, …, An-1)`".
//! It is represented by the zero-sized marker [`Sig<R, P>`], where `P` is a
//! tuple of parameter types. Nothing about a signature exists at runtime:
//! every query below is answered by the trait solver.
//!
//! ## Design Choices
//!
//! - Parameters are stored twice: as a tuple (`Params`, used to call
//!   things) and as a cons-list (`List`, used by recursive predicates such
//!   as homogeneity).
//! - Index queries go through [`ParamAt<N>`], which is only implemented for
//!   `N < ARITY`. Asking for a parameter that does not exist is a compile
//!   error, never a runtime condition:
//!
//! ```compile_fail
//! use eop_core::signature::{Domain, Sig};
//!
//! // A two-parameter signature has no parameter 2.
//! let _: Domain<Sig<i32, (i32, i32)>, 2> = 0;
//! ```
//!
//! - Reference qualification is stripped with [`Bare`]: `&T` and `&mut T`
//!   both strip to `T`. Only one level is removed.
//! - Receiver normalization is two separate steps, [`WithReceiver`] and
//!   [`WithoutReceiver`], so each can be checked on its own.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// Signature Marker
// ============================================================================

/// Canonical signature marker: returns `R`, takes the tuple `P`.
///
/// `Sig` is never constructed by the library; it only appears in types.
pub struct Sig<R, P>(PhantomData<fn() -> (R, P)>);

impl<R, P> fmt::Debug for Sig<R, P>
where
    Self: Signature,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({})", Self::describe())
    }
}

/// Empty parameter list.
pub struct Nil;

/// Parameter list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Builds the cons-list type for a sequence of parameter types.
macro_rules! list {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons<$head, list!($($tail),*)> };
}

/// The extracted signature of a callable.
///
/// Implemented for [`Sig<R, (A0, …)>`] with 0 to 8 parameters.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported signature",
    note = "signatures are `Sig<R, (A0, ...)>` with at most 8 parameters"
)]
pub trait Signature {
    /// The codomain.
    type Return;
    /// Parameter types as a tuple.
    type Params;
    /// Parameter types as a cons-list of [`Cons`] / [`Nil`].
    type List;
    /// Number of user-visible parameters.
    const ARITY: usize;

    /// Type names of the parameters, in order.
    fn param_names() -> Vec<&'static str>;

    /// Render the signature as `fn(A0, A1) -> R`.
    fn describe() -> String {
        format!(
            "fn({}) -> {}",
            Self::param_names().join(", "),
            type_name::<Self::Return>()
        )
    }
}

macro_rules! impl_signature {
    ($arity:expr; $($A:ident),*) => {
        impl<R, $($A),*> Signature for Sig<R, ($($A,)*)> {
            type Return = R;
            type Params = ($($A,)*);
            type List = list!($($A),*);
            const ARITY: usize = $arity;

            fn param_names() -> Vec<&'static str> {
                vec![$(type_name::<$A>()),*]
            }
        }
    };
}

impl_signature!(0;);
impl_signature!(1; A0);
impl_signature!(2; A0, A1);
impl_signature!(3; A0, A1, A2);
impl_signature!(4; A0, A1, A2, A3);
impl_signature!(5; A0, A1, A2, A3, A4);
impl_signature!(6; A0, A1, A2, A3, A4, A5);
impl_signature!(7; A0, A1, A2, A3, A4, A5, A6);
impl_signature!(8; A0, A1, A2, A3, A4, A5, A6, A7);

// ============================================================================
// Parameter Queries
// ============================================================================

/// Parameter type at index `N`.
///
/// Only implemented for `N < ARITY`.
#[diagnostic::on_unimplemented(
    message = "invalid parameter index for signature `{Self}`",
    label = "parameter index out of range",
    note = "parameter indices must be smaller than the signature's arity"
)]
pub trait ParamAt<const N: usize>: Signature {
    type Type;
}

macro_rules! impl_param_at {
    (@one ($($A:ident),*), $idx:literal, $T:ident) => {
        impl<R, $($A),*> ParamAt<$idx> for Sig<R, ($($A,)*)> {
            type Type = $T;
        }
    };
    ($params:tt; $($idx:literal => $T:ident),*) => {
        $(impl_param_at!(@one $params, $idx, $T);)*
    };
}

impl_param_at!((A0); 0 => A0);
impl_param_at!((A0, A1); 0 => A0, 1 => A1);
impl_param_at!((A0, A1, A2); 0 => A0, 1 => A1, 2 => A2);
impl_param_at!((A0, A1, A2, A3); 0 => A0, 1 => A1, 2 => A2, 3 => A3);
impl_param_at!((A0, A1, A2, A3, A4); 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4);
impl_param_at!(
    (A0, A1, A2, A3, A4, A5);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5
);
impl_param_at!(
    (A0, A1, A2, A3, A4, A5, A6);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6
);
impl_param_at!(
    (A0, A1, A2, A3, A4, A5, A6, A7);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7
);

/// Return type of a signature.
pub type Codomain<S> = <S as Signature>::Return;

/// Parameter type at index `N` of a signature.
pub type Domain<S, const N: usize> = <S as ParamAt<N>>::Type;

/// Parameter type at index `N` with one level of reference stripped.
pub type BareDomain<S, const N: usize> = <Domain<S, N> as Bare>::Bare;

/// Arity of a signature, usable in const contexts.
pub const fn arity<S: Signature>() -> usize {
    S::ARITY
}

// ============================================================================
// Qualifier Stripping
// ============================================================================

/// Strips one level of reference from a type.
///
/// `&T` and `&mut T` strip to `T`; owned types strip to themselves. Owned
/// types have to opt in. Primitives, tuples up to twelve elements and the
/// common `std` types are covered by the impls below. Types defined in the
/// calling crate use [`bare!`].
///
/// [`bare!`]: crate::bare
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be compared after stripping references",
    note = "types defined in your crate register with `eop_core::bare!({Self})`",
    note = "foreign types cannot be registered from outside this crate; wrap them in a local newtype"
)]
pub trait Bare {
    type Bare: ?Sized;
}

impl<T: ?Sized> Bare for &T {
    type Bare = T;
}

impl<T: ?Sized> Bare for &mut T {
    type Bare = T;
}

/// Register owned types as their own stripped form.
///
/// The expansion is a plain trait impl, so the orphan rule applies: only
/// types local to the calling crate can be registered.
///
/// ```
/// struct Meters(f64);
/// eop_core::bare!(Meters);
///
/// use eop_core::capability::Homogeneous;
/// use eop_core::signature::Sig;
///
/// fn homogeneous<S: Homogeneous>() {}
/// homogeneous::<Sig<f64, (&Meters, Meters)>>();
/// ```
#[macro_export]
macro_rules! bare {
    ($($t:ty),+ $(,)?) => {
        $(impl $crate::signature::Bare for $t {
            type Bare = $t;
        })+
    };
}

bare!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    std::time::Duration,
    std::time::Instant,
    std::time::SystemTime,
    std::path::Path,
    std::path::PathBuf,
    std::ffi::OsStr,
    std::ffi::OsString,
);

/// Owned generic types, each stripping to itself.
macro_rules! bare_generic {
    ($([$($g:tt)*] $t:ty;)+) => {
        $(impl<$($g)*> Bare for $t {
            type Bare = $t;
        })+
    };
}

bare_generic! {
    [T] [T];
    [T, const N: usize] [T; N];
    [T] Vec<T>;
    [T] Option<T>;
    [T, E] Result<T, E>;
    [T: ?Sized] Box<T>;
    [T: ?Sized] std::rc::Rc<T>;
    [T: ?Sized] std::sync::Arc<T>;
    [T: ?Sized] std::sync::Mutex<T>;
    [T: ?Sized] std::cell::RefCell<T>;
    [T: ?Sized] std::marker::PhantomData<T>;
    [T] std::cell::Cell<T>;
    [T] std::cmp::Reverse<T>;
    [T] std::num::Wrapping<T>;
    [T] std::ops::Range<T>;
    [T] std::ops::RangeInclusive<T>;
    [T] std::collections::VecDeque<T>;
    [T] std::collections::LinkedList<T>;
    [T] std::collections::BinaryHeap<T>;
    [T] std::collections::BTreeSet<T>;
    [K, V] std::collections::BTreeMap<K, V>;
    [T, H] std::collections::HashSet<T, H>;
    [K, V, H] std::collections::HashMap<K, V, H>;
    ['a, B: ?Sized + ToOwned] std::borrow::Cow<'a, B>;
}

macro_rules! bare_tuple {
    ($($t:ident),+) => {
        impl<$($t),+> Bare for ($($t,)+) {
            type Bare = ($($t,)+);
        }
    };
}

bare_tuple!(A);
bare_tuple!(A, B);
bare_tuple!(A, B, C);
bare_tuple!(A, B, C, D);
bare_tuple!(A, B, C, D, E);
bare_tuple!(A, B, C, D, E, F);
bare_tuple!(A, B, C, D, E, F, G);
bare_tuple!(A, B, C, D, E, F, G, H);
bare_tuple!(A, B, C, D, E, F, G, H, I);
bare_tuple!(A, B, C, D, E, F, G, H, I, J);
bare_tuple!(A, B, C, D, E, F, G, H, I, J, K);
bare_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

// ============================================================================
// Receiver Normalization
// ============================================================================

/// Type-level stand-in for the `&self` receiver of a call operator.
///
/// Strips to `T`, like `&T` would.
pub struct SelfRef<T: ?Sized>(PhantomData<fn() -> PhantomData<T>>);

impl<T: ?Sized> Bare for SelfRef<T> {
    type Bare = T;
}

/// Prepend a receiver `C` as parameter 0: `R(A0..)` becomes `R(C, A0..)`.
pub trait WithReceiver<C> {
    type Output: Signature;
}

/// Consume parameter 0 as the receiver: `R(C, A0..)` becomes `R(A0..)`.
///
/// Parameter `N` of the output is parameter `N + 1` of the input.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no receiver parameter to consume",
    note = "only signatures with at least one parameter carry a receiver"
)]
pub trait WithoutReceiver: Signature {
    type Receiver;
    type Output: Signature;
}

macro_rules! impl_receiver {
    ($($A:ident),*) => {
        impl<R, C, $($A),*> WithReceiver<C> for Sig<R, ($($A,)*)> {
            type Output = Sig<R, (C, $($A,)*)>;
        }

        impl<R, C, $($A),*> WithoutReceiver for Sig<R, (C, $($A,)*)> {
            type Receiver = C;
            type Output = Sig<R, ($($A,)*)>;
        }
    };
}

impl_receiver!();
impl_receiver!(A0);
impl_receiver!(A0, A1);
impl_receiver!(A0, A1, A2);
impl_receiver!(A0, A1, A2, A3);
impl_receiver!(A0, A1, A2, A3, A4);
impl_receiver!(A0, A1, A2, A3, A4, A5);
impl_receiver!(A0, A1, A2, A3, A4, A5, A6);
