//! Operator Surface
//!
//! `+`, `-`, `*` and unary `-` are infallible and defined for every mix of
//! owned and borrowed operands, and for an `i64` right-hand side. `/` and
//! `%` use floor semantics and yield `Result<BigInteger, BigIntError>` so
//! that division by zero stays a typed failure:
//!
//! ```rust
//! use bignum_api::BigInteger;
//!
//! let q = (BigInteger::from(85) / BigInteger::from(2)).unwrap();
//! assert_eq!(q, BigInteger::from(42));
//! assert!((BigInteger::from(1) % BigInteger::from(0)).is_err());
//! ```

use crate::big_integer::BigInteger;
use entities_bignum::Result;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use usecases_bignum_arithmetic::DivisionMode;

fn add(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_signed_magnitude(a.as_signed_magnitude().add(b.as_signed_magnitude()))
}

fn sub(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_signed_magnitude(a.as_signed_magnitude().sub(b.as_signed_magnitude()))
}

fn mul(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_signed_magnitude(a.as_signed_magnitude().mul(b.as_signed_magnitude()))
}

fn div(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    a.div_rem(b, DivisionMode::Floor).map(|(q, _)| q)
}

fn rem(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    a.div_rem(b, DivisionMode::Floor).map(|(_, r)| r)
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $func:ident, $output:ty) => {
        impl $trait<&BigInteger> for &BigInteger {
            type Output = $output;

            fn $method(self, other: &BigInteger) -> $output {
                $func(self, other)
            }
        }

        impl $trait<BigInteger> for BigInteger {
            type Output = $output;

            fn $method(self, other: BigInteger) -> $output {
                $func(&self, &other)
            }
        }

        impl $trait<&BigInteger> for BigInteger {
            type Output = $output;

            fn $method(self, other: &BigInteger) -> $output {
                $func(&self, other)
            }
        }

        impl $trait<BigInteger> for &BigInteger {
            type Output = $output;

            fn $method(self, other: BigInteger) -> $output {
                $func(self, &other)
            }
        }

        impl $trait<i64> for BigInteger {
            type Output = $output;

            fn $method(self, other: i64) -> $output {
                $func(&self, &BigInteger::from(other))
            }
        }

        impl $trait<i64> for &BigInteger {
            type Output = $output;

            fn $method(self, other: i64) -> $output {
                $func(self, &BigInteger::from(other))
            }
        }
    };
}

forward_binop!(Add, add, add, BigInteger);
forward_binop!(Sub, sub, sub, BigInteger);
forward_binop!(Mul, mul, mul, BigInteger);
forward_binop!(Div, div, div, Result<BigInteger>);
forward_binop!(Rem, rem, rem, Result<BigInteger>);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -&self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_signed_magnitude(self.as_signed_magnitude().negate())
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| &acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| &acc * x)
    }
}
