//! Domain checks for partial operations.
//!
//! Machine addition is only defined when the mathematical sum fits the type.
//! [`addition_defined`] answers that without performing the addition, so it
//! can guard an orbit that would otherwise overflow:
//!
//! ```
//! use eop_algo::domain::addition_defined;
//! use eop_algo::orbit::terminating_orbit;
//!
//! let step = |v: i8| v + 1;
//! let defined = |v: i8| addition_defined(v, 1);
//!
//! assert!(terminating_orbit(100, step, defined));
//! ```

use std::ops::Sub;

/// Signed machine integer with its bounds.
pub trait SignedInteger: Copy + Ord + Sub<Output = Self> {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
}

macro_rules! impl_signed_integer {
    ($($t:ty),*) => {
        $(
            impl SignedInteger for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_signed_integer!(i8, i16, i32, i64, i128, isize);

/// `false` iff `lhs + rhs` overflows.
///
/// For `rhs > 0` the sum fits iff `lhs <= MAX - rhs`; for `rhs < 0` iff
/// `lhs >= MIN - rhs`. Neither subtraction can overflow.
pub fn addition_defined<T: SignedInteger>(lhs: T, rhs: T) -> bool {
    if rhs > T::ZERO {
        lhs <= T::MAX - rhs
    } else if rhs < T::ZERO {
        lhs >= T::MIN - rhs
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(addition_defined(i32::MAX - 1, 1));
        assert!(!addition_defined(i32::MAX, 1));
        assert!(addition_defined(i32::MIN + 1, -1));
        assert!(!addition_defined(i32::MIN, -1));
        assert!(addition_defined(i32::MAX, 0));
        assert!(addition_defined(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_every_width() {
        assert!(!addition_defined(i8::MAX, i8::MAX));
        assert!(!addition_defined(i16::MIN, i16::MIN));
        assert!(addition_defined(-1i64, i64::MIN + 1));
        assert!(!addition_defined(i128::MAX, 1));
        assert!(addition_defined(isize::MAX, isize::MIN));
    }

    #[test]
    fn test_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(addition_defined(a, b), a.checked_add(b).is_some(), "{a} + {b}");
            }
        }
    }
}
