//! # Reduction
//!
//! Left fold of a sequence with a binary operation:
//! `reduce_nonempty([a, b, c], op) = op(op(a, b), c)`.
//!
//! `op` must be a binary operation, closed over the element type. It may
//! take both elements by value or both by reference:
//!
//! ```
//! use eop_algo::reduce::reduce_nonempty;
//!
//! let longer = |a: &String, b: &String| if b.len() > a.len() { b.clone() } else { a.clone() };
//! let words = ["fold", "reduce", "scan"].map(String::from);
//! assert_eq!(reduce_nonempty(words, longer), "reduce");
//! ```
//!
//! ```compile_fail
//! use eop_algo::reduce::reduce;
//!
//! // Comparison returns `bool`, not the element type.
//! reduce(vec![1, 2, 3], |a: i32, b: i32| a < b, 0);
//! ```

use eop_core::capability::BinaryOperation;
use tracing::trace;

use crate::pass::Combine;

/// Fold `seq` from its first element.
///
/// # Panics
///
/// Panics if `seq` is empty. Use [`reduce`] when an identity element is
/// available.
///
/// # Example
///
/// ```
/// use eop_algo::reduce::reduce_nonempty;
///
/// let max = |a: u32, b: u32| a.max(b);
/// assert_eq!(reduce_nonempty([3, 9, 4], max), 9);
/// ```
pub fn reduce_nonempty<I, D, Op, M>(seq: I, op: Op) -> D
where
    I: IntoIterator<Item = D>,
    Op: Combine<D, M, Output = D>,
    <Op as Combine<D, M>>::Signature: BinaryOperation,
{
    let mut iter = seq.into_iter();
    let Some(first) = iter.next() else {
        panic!("reduce_nonempty requires at least one element");
    };

    let mut folded = 1usize;
    let result = iter.fold(first, |acc, x| {
        folded += 1;
        op.combine(acc, x)
    });
    trace!(elements = folded, "reduced sequence");
    result
}

/// Fold `seq`, or return `z` when it is empty.
///
/// `z` is not combined with the elements; it is only the answer for the
/// empty sequence, so it does not have to be an identity of `op`.
///
/// ```
/// use eop_algo::reduce::reduce;
///
/// let add = |a: i64, b: i64| a + b;
/// assert_eq!(reduce(Vec::new(), add, -1), -1);
/// assert_eq!(reduce(vec![1, 2, 3], add, -1), 6);
/// ```
pub fn reduce<I, D, Op, M>(seq: I, op: Op, z: D) -> D
where
    I: IntoIterator<Item = D>,
    Op: Combine<D, M, Output = D>,
    <Op as Combine<D, M>>::Signature: BinaryOperation,
{
    let mut iter = seq.into_iter().peekable();
    if iter.peek().is_none() {
        trace!("reduced empty sequence");
        return z;
    }
    reduce_nonempty(iter, op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eop_core::callable::{FunctionObject, Functor};

    fn concat(mut a: String, b: String) -> String {
        a.push_str(&b);
        a
    }

    struct Gcd;

    impl FunctionObject for Gcd {
        type Args = (u64, u64);
        type Output = u64;

        fn call(&self, (mut a, mut b): (u64, u64)) -> u64 {
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a
        }
    }

    #[test]
    fn test_left_to_right_order() {
        let words = ["a", "b", "c"].map(String::from);
        assert_eq!(reduce_nonempty(words, concat), "abc");

        let minus = |a: i32, b: i32| a - b;
        assert_eq!(reduce_nonempty([10, 1, 2], minus), 7);
    }

    #[test]
    fn test_single_element_is_returned() {
        let minus = |a: i32, b: i32| a - b;
        assert_eq!(reduce_nonempty([42], minus), 42);
        assert_eq!(reduce(vec![42], minus, 0), 42);
    }

    #[test]
    fn test_empty_returns_z() {
        let minus = |a: i32, b: i32| a - b;
        assert_eq!(reduce(Vec::<i32>::new(), minus, 17), 17);
        assert_eq!(reduce(std::iter::empty(), Functor(Gcd), 0), 0);
    }

    #[test]
    fn test_function_object_operation() {
        assert_eq!(reduce_nonempty([84u64, 36, 120], Functor(Gcd)), 12);
    }

    #[test]
    fn test_iterator_input() {
        let add = |a: u32, b: u32| a + b;
        assert_eq!(reduce((1..=10).filter(|v| v % 2 == 0), add, 0), 30);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn test_reduce_nonempty_panics_on_empty() {
        let add = |a: u32, b: u32| a + b;
        reduce_nonempty(Vec::<u32>::new(), add);
    }

    #[test]
    fn test_operation_by_reference() {
        let join = |a: &String, b: &String| format!("{a}-{b}");
        let words = ["x", "y", "z"].map(String::from);
        assert_eq!(reduce(words, join, String::new()), "x-y-z");
    }

    #[test]
    fn test_tuple_operation() {
        let bounds = |(lo, hi): (u32, u32), (v, w): (u32, u32)| (lo.min(v), hi.max(w));
        let pairs = [(4, 6), (2, 3), (5, 9)];
        assert_eq!(reduce_nonempty(pairs, bounds), (2, 9));
    }
}
