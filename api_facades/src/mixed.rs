//! Mixed Integer/Float Arithmetic
//!
//! When a [`BigInteger`] meets an `f64`, the integer is promoted with
//! [`BigInteger::to_f64`] and the operation runs in floating point. The
//! result is always `f64`. Integers beyond 2^53 may lose precision in the
//! promotion; that is the documented cost of the promotion rule, not an
//! error.
//!
//! ```rust
//! use bignum_api::BigInteger;
//!
//! let x: f64 = 43.0 - BigInteger::from(1);
//! assert_eq!(x, 42.0);
//! ```
//!
//! Comparisons against `f64` do not promote. They compare the exact values,
//! so `2^53 + 1` is greater than `9007199254740992.0` even though both
//! promote to the same float. NaN is unordered with every integer and the
//! infinities order above and below all of them.

use crate::big_integer::BigInteger;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

macro_rules! promote_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for &BigInteger {
            type Output = f64;

            fn $method(self, other: f64) -> f64 {
                self.to_f64() $op other
            }
        }

        impl $trait<f64> for BigInteger {
            type Output = f64;

            fn $method(self, other: f64) -> f64 {
                self.to_f64() $op other
            }
        }

        impl $trait<&BigInteger> for f64 {
            type Output = f64;

            fn $method(self, other: &BigInteger) -> f64 {
                self $op other.to_f64()
            }
        }

        impl $trait<BigInteger> for f64 {
            type Output = f64;

            fn $method(self, other: BigInteger) -> f64 {
                self $op other.to_f64()
            }
        }
    };
}

promote_binop!(Add, add, +);
promote_binop!(Sub, sub, -);
promote_binop!(Mul, mul, *);
promote_binop!(Div, div, /);

/// Exact ordering of an integer against a float
fn compare_with_float(value: &BigInteger, other: f64) -> Option<Ordering> {
    if other.is_nan() {
        return None;
    }
    if other.is_infinite() {
        return Some(if other > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }

    // A value equal to trunc(other) is still on the far side of any fraction
    let whole = BigInteger::from_f64(other).ok()?;
    Some(value.cmp(&whole).then_with(|| {
        let fraction = other.fract();
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

impl PartialEq<f64> for BigInteger {
    fn eq(&self, other: &f64) -> bool {
        compare_with_float(self, *other) == Some(Ordering::Equal)
    }
}

impl PartialEq<BigInteger> for f64 {
    fn eq(&self, other: &BigInteger) -> bool {
        other == self
    }
}

impl PartialOrd<f64> for BigInteger {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        compare_with_float(self, *other)
    }
}

impl PartialOrd<BigInteger> for f64 {
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        compare_with_float(other, *self).map(Ordering::reverse)
    }
}
