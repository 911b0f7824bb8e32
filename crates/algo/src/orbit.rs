//! # Orbits - Where Repeated Application Leads
//!
//! The orbit of `x` under a transformation `f` is `x, f(x), f(f(x)), …`,
//! restricted to the values where the definition-space predicate `p` holds.
//! An orbit either leaves `p` (it *terminates*), returns to `x` (it is
//! *circular*), or runs into a cycle that does not contain `x` (it is
//! *ρ-shaped*):
//!
//! ```text
//!   terminating      circular        ρ-shaped
//!
//!   x → · → · ⊥     x → · → ·       x → · → · → ·
//!                   ↑       ↓               ↑   ↓
//!                   · ← · ← ·               · ← ·
//! ```
//!
//! The collision point is found with a slow and a fast cursor, the fast one
//! moving two steps per round. `f` is applied only to values that satisfy
//! `p`.
//!
//! ## Requirements on the callables
//!
//! `f` must be a transformation and `p` a unary predicate over the same
//! domain. Anything else fails to compile. Closures need annotated
//! parameter types:
//!
//! ```
//! use eop_algo::orbit::circular_orbit;
//!
//! assert!(circular_orbit(3u32, |v: u32| (v + 1) % 5, |_: u32| true));
//! ```
//!
//! ```compile_fail
//! use eop_algo::orbit::collision_point;
//!
//! // A binary step is not a transformation.
//! collision_point(0i32, |a: i32, b: i32| a + b, |_: i32| true);
//! ```
//!
//! ```compile_fail
//! use eop_algo::orbit::collision_point;
//!
//! // The predicate must return `bool`.
//! collision_point(0i32, |v: i32| v + 1, |v: i32| v);
//! ```

use std::ops::ControlFlow;

use eop_core::capability::{Transformation, UnaryPredicate};
use tracing::{debug, trace};

use crate::error::AlgoError;
use crate::pass::Apply;

/// Slow and fast cursor between rounds.
struct Chase<D> {
    slow: D,
    fast: D,
}

impl<D: Clone + PartialEq> Chase<D> {
    /// Break with `x` itself when `x` is outside the definition space.
    fn start(x: D, f: &impl Fn(D) -> D, p: &impl Fn(&D) -> bool) -> ControlFlow<D, Self> {
        if !p(&x) {
            return ControlFlow::Break(x);
        }
        let fast = f(x.clone());
        ControlFlow::Continue(Self { slow: x, fast })
    }

    /// Advance slow by one and fast by two, stopping at a collision or
    /// where fast leaves the definition space.
    fn round(self, f: &impl Fn(D) -> D, p: &impl Fn(&D) -> bool) -> ControlFlow<D, Self> {
        let Self { slow, fast } = self;
        if slow == fast {
            return ControlFlow::Break(fast);
        }
        let slow = f(slow);
        if !p(&fast) {
            return ControlFlow::Break(fast);
        }
        let fast = f(fast);
        if !p(&fast) {
            return ControlFlow::Break(fast);
        }
        ControlFlow::Continue(Self { slow, fast: f(fast) })
    }

    fn settled(self) -> Option<D> {
        (self.slow == self.fast).then_some(self.fast)
    }
}

fn collide<D>(x: D, f: &impl Fn(D) -> D, p: &impl Fn(&D) -> bool) -> D
where
    D: Clone + PartialEq,
{
    let mut chase = match Chase::start(x, f, p) {
        ControlFlow::Break(x) => {
            debug!("start is outside the definition space");
            return x;
        }
        ControlFlow::Continue(chase) => chase,
    };
    let mut rounds: usize = 0;
    loop {
        match chase.round(f, p) {
            ControlFlow::Break(point) => {
                debug!(rounds, "orbit settled");
                return point;
            }
            ControlFlow::Continue(next) => {
                chase = next;
                rounds += 1;
                trace!(rounds, "orbit round");
            }
        }
    }
}

/// The point where the slow and fast cursors meet, or the last point of
/// the orbit inside `p` when it terminates.
///
/// Returns `x` unchanged when `p(x)` is false.
///
/// The orbit must either terminate or be eventually periodic; otherwise this
/// never returns. [`collision_point_within`] puts a bound on the search.
///
/// # Example
///
/// ```
/// use eop_algo::orbit::collision_point;
///
/// let below_ten = |v: u8| v < 10;
/// assert_eq!(collision_point(4u8, |v: u8| v + 1, below_ten), 10);
/// ```
pub fn collision_point<D, F, MF, P, MP>(x: D, f: F, p: P) -> D
where
    D: Clone + PartialEq,
    F: Apply<D, MF, Output = D>,
    <F as Apply<D, MF>>::Signature: Transformation,
    P: Apply<D, MP, Output = bool>,
    <P as Apply<D, MP>>::Signature: UnaryPredicate,
{
    collide(x, &|v: D| f.apply(v), &|v: &D| p.apply_ref(v))
}

/// `true` when the orbit of `x` leaves the definition space.
pub fn terminating_orbit<D, F, MF, P, MP>(x: D, f: F, p: P) -> bool
where
    D: Clone + PartialEq,
    F: Apply<D, MF, Output = D>,
    <F as Apply<D, MF>>::Signature: Transformation,
    P: Apply<D, MP, Output = bool>,
    <P as Apply<D, MP>>::Signature: UnaryPredicate,
{
    let defined = |v: &D| p.apply_ref(v);
    !defined(&collide(x, &|v: D| f.apply(v), &defined))
}

/// `true` when the orbit of `x` returns to `x`.
///
/// `f` is not applied to the collision point when it lies outside the
/// definition space.
pub fn circular_orbit<D, F, MF, P, MP>(x: D, f: F, p: P) -> bool
where
    D: Clone + PartialEq,
    F: Apply<D, MF, Output = D>,
    <F as Apply<D, MF>>::Signature: Transformation,
    P: Apply<D, MP, Output = bool>,
    <P as Apply<D, MP>>::Signature: UnaryPredicate,
{
    let step = |v: D| f.apply(v);
    let defined = |v: &D| p.apply_ref(v);
    let y = collide(x.clone(), &step, &defined);
    defined(&y) && x == step(y)
}

/// [`collision_point`] with at most `max_rounds` rounds of the fast cursor.
///
/// # Errors
///
/// [`AlgoError::RoundLimit`] when the orbit neither leaves `p` nor closes in
/// time.
///
/// ```
/// use eop_algo::error::AlgoError;
/// use eop_algo::orbit::collision_point_within;
///
/// let forever = collision_point_within(0u64, |v: u64| v + 1, |_: u64| true, 100);
/// assert_eq!(forever, Err(AlgoError::RoundLimit { rounds: 100 }));
/// ```
pub fn collision_point_within<D, F, MF, P, MP>(x: D, f: F, p: P, max_rounds: usize) -> Result<D, AlgoError>
where
    D: Clone + PartialEq,
    F: Apply<D, MF, Output = D>,
    <F as Apply<D, MF>>::Signature: Transformation,
    P: Apply<D, MP, Output = bool>,
    <P as Apply<D, MP>>::Signature: UnaryPredicate,
{
    let step = |v: D| f.apply(v);
    let defined = |v: &D| p.apply_ref(v);

    let mut chase = match Chase::start(x, &step, &defined) {
        ControlFlow::Break(x) => return Ok(x),
        ControlFlow::Continue(chase) => chase,
    };
    for rounds in 0..max_rounds {
        match chase.round(&step, &defined) {
            ControlFlow::Break(point) => {
                debug!(rounds, max_rounds, "orbit settled within budget");
                return Ok(point);
            }
            ControlFlow::Continue(next) => chase = next,
        }
    }
    chase.settled().ok_or_else(|| {
        debug!(max_rounds, "orbit search exhausted");
        AlgoError::RoundLimit { rounds: max_rounds }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eop_core::callable::{FunctionObject, Functor};

    fn successor(v: i32) -> i32 {
        v + 1
    }

    fn ring(v: i32) -> i32 {
        (v + 1) % 7
    }

    /// 0 → 1 → … → 4 → 5 → 6 → 4
    fn rho(v: u32) -> u32 {
        if v < 6 {
            v + 1
        } else {
            4
        }
    }

    struct Below(i32);

    impl FunctionObject for Below {
        type Args = (i32,);
        type Output = bool;

        fn call(&self, (v,): (i32,)) -> bool {
            v < self.0
        }
    }

    #[test]
    fn test_start_outside_definition_space() {
        assert_eq!(collision_point(50, successor, Functor(Below(10))), 50);
        assert!(terminating_orbit(50, successor, Functor(Below(10))));
        assert!(!circular_orbit(50, successor, Functor(Below(10))));
    }

    #[test]
    fn test_terminating_orbit_stops_at_first_undefined_point() {
        assert_eq!(collision_point(0, successor, Functor(Below(10))), 10);
        assert!(terminating_orbit(0, successor, Functor(Below(10))));
        assert!(!circular_orbit(0, successor, Functor(Below(10))));
    }

    #[test]
    fn test_circular_orbit() {
        let anything = |_: i32| true;
        for x in 0..7 {
            assert!(circular_orbit(x, ring, anything), "start {x}");
            assert!(!terminating_orbit(x, ring, anything), "start {x}");
        }
    }

    #[test]
    fn test_fixed_point_is_circular() {
        assert_eq!(collision_point(3, |v: i32| v, |_: i32| true), 3);
        assert!(circular_orbit(3, |v: i32| v, |_: i32| true));
    }

    #[test]
    fn test_rho_shaped_orbit() {
        let anything = |_: u32| true;
        let point = collision_point(0u32, rho, anything);

        assert!((4..=6).contains(&point));
        assert!(!terminating_orbit(0u32, rho, anything));
        assert!(!circular_orbit(0u32, rho, anything));
        assert!(circular_orbit(5u32, rho, anything));
    }

    #[test]
    fn test_step_never_applied_outside_definition_space() {
        // Panics on overflow in debug builds if called on i8::MAX.
        let step = |v: i8| v + 1;
        let defined = |v: i8| v < i8::MAX;
        assert_eq!(collision_point(0i8, step, defined), i8::MAX);
        assert!(!circular_orbit(100i8, step, defined));
    }

    #[test]
    fn test_budget_allows_short_orbits() {
        // The collision point of a circular orbit is the predecessor of x.
        assert_eq!(collision_point_within(0, ring, |_: i32| true, 16), Ok(6));
        assert_eq!(
            collision_point_within(0, successor, Functor(Below(10)), 16),
            Ok(10)
        );
        assert_eq!(collision_point_within(50, successor, Functor(Below(10)), 0), Ok(50));
    }

    #[test]
    fn test_budget_exhausted() {
        let unbounded = |_: i32| true;
        assert_eq!(
            collision_point_within(0, successor, unbounded, 32),
            Err(AlgoError::RoundLimit { rounds: 32 })
        );
    }

    #[test]
    fn test_budgeted_and_unbudgeted_agree() {
        for x in 0..7 {
            assert_eq!(
                collision_point_within(x, ring, |_: i32| true, 64),
                Ok(collision_point(x, ring, |_: i32| true))
            );
        }
    }

    #[test]
    fn test_predicate_by_reference() {
        let below_ten = |v: &i32| *v < 10;
        assert_eq!(collision_point(0i32, |v: i32| v + 1, below_ten), 10);
        assert!(terminating_orbit(0i32, successor, below_ten));
        assert_eq!(collision_point_within(0, successor, below_ten, 16), Ok(10));
    }

    #[test]
    fn test_step_by_reference() {
        let wrap = |v: &u32| (v + 1) % 5;
        assert!(circular_orbit(2u32, wrap, |_: &u32| true));
        assert_eq!(collision_point(0u32, wrap, |_: u32| true), 4);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Tick {
        n: u8,
        live: bool,
    }

    eop_core::bare!(Tick);

    #[test]
    fn test_field_accessor_as_definition_space() {
        let next = |t: &Tick| Tick {
            n: t.n + 1,
            live: t.n + 1 < 5,
        };
        let start = Tick { n: 0, live: true };

        assert_eq!(
            collision_point(start.clone(), next, eop_core::field!(Tick, live)),
            Tick { n: 5, live: false }
        );
        assert!(terminating_orbit(start, next, eop_core::field!(Tick, live)));
    }

    #[test]
    fn test_tuple_domain_orbit() {
        let fibonacci = |(a, b): (u8, u8)| (b, (a + b) % 10);
        let anything = |_: &(u8, u8)| true;

        assert!(circular_orbit((0u8, 1u8), fibonacci, anything));
        assert!(!terminating_orbit((0u8, 1u8), fibonacci, anything));
    }
}
