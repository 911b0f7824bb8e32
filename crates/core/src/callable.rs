//! # Callables - Extracting Signatures
//!
//! [`Callable<S>`] is the extractor: `F: Callable<S>` says "the canonical
//! signature of `F` is `S`". `S` is never written by the caller; the trait
//! solver infers it from `F` at the generic boundary, the same way a
//! morphism carries its own domain and codomain.
//!
//! ## Shapes
//!
//! | Rust shape | Reaches the extractor as | Kind |
//! |------------|--------------------------|------|
//! | free function `fn f(A0) -> R` | `Fn(A0) -> R` | [`kind::Function`] |
//! | function pointer `fn(A0) -> R` | `Fn(A0) -> R` | [`kind::Function`] |
//! | method `C::m(&mut self, A0)` | `Fn(&mut C, A0) -> R` | [`kind::Function`] |
//! | const method `C::m(&self, A0)` | `Fn(&C, A0) -> R` | [`kind::Function`] |
//! | closure | `Fn(A0) -> R` | [`kind::Function`] |
//! | field accessor [`Field<C, R>`] | `R(&C)` | [`kind::FieldAccess`] |
//! | function object [`Functor<T>`] | call operator minus receiver | [`kind::CallOperator`] |
//!
//! Methods already carry their receiver as parameter 0 when named through
//! their type (`Counter::bump`), so they classify exactly like a free
//! function taking the receiver first.
//!
//! A borrowed callable classifies like the callable itself: `&F` has the
//! signature and kind of `F` for every shape in the table.
//!
//! ## Example
//!
//! ```
//! use eop_core::callable::{arity_of, has_signature};
//! use eop_core::signature::Sig;
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//!
//! assert_eq!(arity_of(&add), 2);
//! assert_eq!(arity_of(&|x: i32| x * 2), 1);
//! has_signature::<Sig<i32, (i32, i32)>, _>(&add);
//! ```

use crate::signature::{Domain, ParamAt, SelfRef, Sig, Signature, WithReceiver, WithoutReceiver};

// ============================================================================
// Kinds
// ============================================================================

/// The closed set of callable kinds.
pub mod kind {
    mod sealed {
        pub trait Sealed {}
    }

    /// Marker for a callable kind.
    pub trait CallableKind: sealed::Sealed {
        const NAME: &'static str;
    }

    /// Anything implementing `Fn`: free functions, function pointers,
    /// methods named through their type, and closures.
    pub enum Function {}

    /// A field projection built with [`field!`](crate::field).
    pub enum FieldAccess {}

    /// A [`FunctionObject`](super::FunctionObject) called through its
    /// call operator.
    pub enum CallOperator {}

    impl sealed::Sealed for Function {}
    impl sealed::Sealed for FieldAccess {}
    impl sealed::Sealed for CallOperator {}

    impl CallableKind for Function {
        const NAME: &'static str = "function";
    }

    impl CallableKind for FieldAccess {
        const NAME: &'static str = "field accessor";
    }

    impl CallableKind for CallOperator {
        const NAME: &'static str = "call operator";
    }
}

use kind::CallableKind;

// ============================================================================
// Extractor
// ============================================================================

/// A callable whose canonical signature is `S`.
///
/// `invoke` takes the argument tuple, so every shape is called the same way.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a callable with signature `{S}`",
    note = "closures need annotated parameter types to be classified"
)]
pub trait Callable<S: Signature> {
    /// Which shape this callable came from.
    type Kind: CallableKind;

    /// Call with the full argument tuple.
    fn invoke(&self, args: S::Params) -> S::Return;
}

macro_rules! impl_callable_fn {
    ($($A:ident),*) => {
        impl<F, R, $($A),*> Callable<Sig<R, ($($A,)*)>> for F
        where
            F: Fn($($A),*) -> R,
        {
            type Kind = kind::Function;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($A,)*): ($($A,)*)) -> R {
                self($($A),*)
            }
        }
    };
}

impl_callable_fn!();
impl_callable_fn!(A0);
impl_callable_fn!(A0, A1);
impl_callable_fn!(A0, A1, A2);
impl_callable_fn!(A0, A1, A2, A3);
impl_callable_fn!(A0, A1, A2, A3, A4);
impl_callable_fn!(A0, A1, A2, A3, A4, A5);
impl_callable_fn!(A0, A1, A2, A3, A4, A5, A6);
impl_callable_fn!(A0, A1, A2, A3, A4, A5, A6, A7);

// ============================================================================
// Field Accessors
// ============================================================================

/// Accessor for a field of type `R` on `C`, classified as `R(&C)`.
///
/// The field is returned by value, so `R: Clone`. Build one with
/// [`field!`](crate::field).
pub struct Field<C: ?Sized, R> {
    name: &'static str,
    get: fn(&C) -> &R,
}

impl<C: ?Sized, R> Field<C, R> {
    pub fn new(name: &'static str, get: fn(&C) -> &R) -> Self {
        Self { name, get }
    }

    /// Name of the projected field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the field without cloning it.
    pub fn get<'a>(&self, obj: &'a C) -> &'a R {
        (self.get)(obj)
    }
}

impl<C: ?Sized, R> Clone for Field<C, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, R> Copy for Field<C, R> {}

impl<'a, C: ?Sized, R: Clone> Callable<Sig<R, (&'a C,)>> for Field<C, R> {
    type Kind = kind::FieldAccess;

    fn invoke(&self, (obj,): (&'a C,)) -> R {
        (self.get)(obj).clone()
    }
}

impl<'a, C: ?Sized, R: Clone> Callable<Sig<R, (&'a C,)>> for &Field<C, R> {
    type Kind = kind::FieldAccess;

    fn invoke(&self, args: (&'a C,)) -> R {
        (**self).invoke(args)
    }
}

/// Build a [`Field`] accessor: `field!(Point, x)`.
///
/// ```
/// use eop_core::callable::{arity_of, Callable};
/// use eop_core::field;
///
/// struct Point { x: f64 }
///
/// let x = field!(Point, x);
/// assert_eq!(arity_of(&x), 1);
/// assert_eq!(x.invoke((&Point { x: 2.5 },)), 2.5);
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $field:ident) => {
        $crate::callable::Field::<$ty, _>::new(stringify!($field), |obj: &$ty| &obj.$field)
    };
}

// ============================================================================
// Function Objects
// ============================================================================

/// A type with a call operator.
///
/// Stable Rust does not let user types implement `Fn`, so a function
/// object spells its operator out and is wrapped in [`Functor`] to be
/// classified.
pub trait FunctionObject {
    /// Visible parameter types as a tuple.
    type Args;
    type Output;

    fn call(&self, args: Self::Args) -> Self::Output;
}

/// The call operator of `T` viewed as a method: `Output(&T, Args..)`.
pub type OperatorSignature<T> =
    <Sig<<T as FunctionObject>::Output, <T as FunctionObject>::Args> as WithReceiver<SelfRef<T>>>::Output;

/// Adapter that classifies a [`FunctionObject`] by its call operator.
///
/// The operator signature carries the receiver as parameter 0; the adapter
/// consumes it, so arity counts only `Args`.
///
/// ```
/// use eop_core::callable::{arity_of, Callable, FunctionObject, Functor};
///
/// struct Scale(i32);
///
/// impl FunctionObject for Scale {
///     type Args = (i32,);
///     type Output = i32;
///
///     fn call(&self, (v,): (i32,)) -> i32 {
///         v * self.0
///     }
/// }
///
/// let triple = Functor(Scale(3));
/// assert_eq!(arity_of(&triple), 1);
/// assert_eq!(triple.invoke((7,)), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Functor<T>(pub T);

impl<T, S> Callable<S> for Functor<T>
where
    T: FunctionObject,
    Sig<T::Output, T::Args>: WithReceiver<SelfRef<T>>,
    OperatorSignature<T>: WithoutReceiver<Output = S>,
    S: Signature<Params = T::Args, Return = T::Output>,
{
    type Kind = kind::CallOperator;

    fn invoke(&self, args: S::Params) -> S::Return {
        self.0.call(args)
    }
}

impl<T, S> Callable<S> for &Functor<T>
where
    S: Signature,
    Functor<T>: Callable<S>,
{
    type Kind = kind::CallOperator;

    fn invoke(&self, args: S::Params) -> S::Return {
        (**self).invoke(args)
    }
}

// ============================================================================
// Value-Level Queries
// ============================================================================

/// Arity of a callable value.
pub fn arity_of<S, F>(_: &F) -> usize
where
    S: Signature,
    F: Callable<S>,
{
    S::ARITY
}

/// Rendered signature of a callable value.
pub fn describe<S, F>(_: &F) -> String
where
    S: Signature,
    F: Callable<S>,
{
    S::describe()
}

/// Name of the type of visible parameter `N` of a callable value.
///
/// An index past the arity does not compile, whatever the shape:
///
/// ```
/// use eop_core::callable::param_type;
///
/// fn scale(v: i64, by: u8) -> i64 { v * i64::from(by) }
///
/// assert_eq!(param_type::<1, _, _>(&scale), "u8");
/// ```
///
/// Free function:
///
/// ```compile_fail
/// fn scale(v: i64, by: u8) -> i64 { v * i64::from(by) }
/// eop_core::callable::param_type::<2, _, _>(&scale);
/// ```
///
/// Function pointer:
///
/// ```compile_fail
/// let neg: fn(i32) -> i32 = |v| -v;
/// eop_core::callable::param_type::<1, _, _>(&neg);
/// ```
///
/// Method named through its type, receiver counted:
///
/// ```compile_fail
/// struct Tank { level: u32 }
/// impl Tank { fn level(&self) -> u32 { self.level } }
/// eop_core::callable::param_type::<1, _, _>(&Tank::level);
/// ```
///
/// Closure:
///
/// ```compile_fail
/// eop_core::callable::param_type::<2, _, _>(&|a: u8, b: u8| a < b);
/// ```
///
/// Field accessor:
///
/// ```compile_fail
/// struct Tank { level: u32 }
/// eop_core::callable::param_type::<1, _, _>(&eop_core::field!(Tank, level));
/// ```
///
/// Function object:
///
/// ```compile_fail
/// use eop_core::callable::{FunctionObject, Functor};
///
/// struct Twice;
/// impl FunctionObject for Twice {
///     type Args = (u16,);
///     type Output = u16;
///     fn call(&self, (v,): (u16,)) -> u16 { v * 2 }
/// }
///
/// eop_core::callable::param_type::<1, _, _>(&Functor(Twice));
/// ```
pub fn param_type<const N: usize, S, F>(_: &F) -> &'static str
where
    S: ParamAt<N>,
    F: Callable<S>,
{
    std::any::type_name::<Domain<S, N>>()
}

/// Kind name of a callable value.
pub fn kind_of<S, F>(_: &F) -> &'static str
where
    S: Signature,
    F: Callable<S>,
{
    <F::Kind as CallableKind>::NAME
}

/// Compiles only when `f` has exactly the signature `S`.
///
/// Useful to get a readable error when a generic parameter must match a
/// signature without implicit conversion:
///
/// ```compile_fail
/// use eop_core::callable::has_signature;
/// use eop_core::signature::Sig;
///
/// fn flag(b: bool) -> i32 { if b { 0 } else { 1 } }
///
/// has_signature::<Sig<i32, (char,)>, _>(&flag);
/// ```
pub fn has_signature<S, F>(_: &F)
where
    S: Signature,
    F: Callable<S>,
{
}

/// Assert a callable's signature: `assert_signature!(f => (i32, i32) -> i32)`.
#[macro_export]
macro_rules! assert_signature {
    ($f:expr => ($($arg:ty),* $(,)?) -> $ret:ty) => {
        $crate::callable::has_signature::<$crate::signature::Sig<$ret, ($($arg,)*)>, _>(&$f)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gauge {
        level: i64,
    }

    crate::bare!(Gauge);

    impl Gauge {
        fn raise(&mut self, by: i64) -> i64 {
            self.level += by;
            self.level
        }

        fn peek(&self, offset: i64) -> i64 {
            self.level + offset
        }
    }

    fn peek_free(gauge: &Gauge, offset: i64) -> i64 {
        gauge.level + offset
    }

    struct Offset(i64);

    impl FunctionObject for Offset {
        type Args = (i64, i64);
        type Output = i64;

        fn call(&self, (a, b): (i64, i64)) -> i64 {
            a + b + self.0
        }
    }

    #[test]
    fn test_every_shape_reports_visible_arity() {
        let pointer: fn(&Gauge, i64) -> i64 = peek_free;

        assert_eq!(arity_of(&peek_free), 2);
        assert_eq!(arity_of(&pointer), 2);
        assert_eq!(arity_of(&Gauge::raise), 2);
        assert_eq!(arity_of(&Gauge::peek), 2);
        assert_eq!(arity_of(&|g: &Gauge, offset: i64| g.level - offset), 2);
        assert_eq!(arity_of(&field!(Gauge, level)), 1);
        assert_eq!(arity_of(&Functor(Offset(1))), 2);
        assert_eq!(arity_of(&|| 42u8), 0);
    }

    #[test]
    fn test_kinds_are_reported() {
        assert_eq!(kind_of(&peek_free), "function");
        assert_eq!(kind_of(&Gauge::peek), "function");
        assert_eq!(kind_of(&field!(Gauge, level)), "field accessor");
        assert_eq!(kind_of(&Functor(Offset(0))), "call operator");
    }

    #[test]
    fn test_invoke_calls_through_every_shape() {
        let mut gauge = Gauge { level: 10 };

        assert_eq!(peek_free.invoke((&gauge, 1)), 11);
        assert_eq!(Gauge::peek.invoke((&gauge, 2)), 12);
        assert_eq!(Gauge::raise.invoke((&mut gauge, 5)), 15);
        assert_eq!(field!(Gauge, level).invoke((&gauge,)), 15);
        assert_eq!(Functor(Offset(100)).invoke((1, 2)), 103);
    }

    #[test]
    fn test_reference_to_callable_is_transparent() {
        let double = |x: i32| x * 2;
        let by_ref = &double;

        assert_eq!(arity_of(&double), arity_of(&by_ref));
        assert_eq!(describe(&double), describe(&by_ref));
        has_signature::<Sig<i32, (i32,)>, _>(&by_ref);

        let level = field!(Gauge, level);
        let level_ref = &level;
        let gauge = Gauge { level: 4 };
        assert_eq!(describe(&level), describe(&level_ref));
        assert_eq!(kind_of(&level_ref), "field accessor");
        assert_eq!(level_ref.invoke((&gauge,)), 4);

        let offset = Functor(Offset(1));
        let offset_ref = &offset;
        assert_eq!(arity_of(&offset), arity_of(&offset_ref));
        assert_eq!(describe(&offset), describe(&offset_ref));
        assert_eq!(kind_of(&offset_ref), "call operator");
        assert_eq!(offset_ref.invoke((2, 3)), 6);
    }

    #[test]
    fn test_param_type_names_each_visible_parameter() {
        let pointer: fn(&Gauge, i64) -> i64 = peek_free;

        assert_eq!(param_type::<1, _, _>(&peek_free), "i64");
        assert_eq!(param_type::<1, _, _>(&pointer), "i64");
        assert_eq!(param_type::<1, _, _>(&Gauge::peek), "i64");
        assert_eq!(param_type::<0, _, _>(&|v: u16| v), "u16");
        assert_eq!(param_type::<1, _, _>(&Functor(Offset(0))), "i64");
        assert!(param_type::<0, _, _>(&field!(Gauge, level)).ends_with("Gauge"));
    }

    #[test]
    fn test_describe_uses_parameter_types() {
        assert_eq!(describe(&|a: u8, b: u8| a == b), "fn(u8, u8) -> bool");
        assert_eq!(describe(&Functor(Offset(0))), "fn(i64, i64) -> i64");
    }

    #[test]
    fn test_assert_signature_macro() {
        let max = |a: i32, b: i32| a.max(b);
        assert_signature!(max => (i32, i32) -> i32);
        assert_signature!(Functor(Offset(0)) => (i64, i64) -> i64);
    }

    #[test]
    fn test_field_accessor_borrows_and_names() {
        let level = field!(Gauge, level);
        let gauge = Gauge { level: 7 };

        assert_eq!(level.name(), "level");
        assert_eq!(*level.get(&gauge), 7);
    }
}
