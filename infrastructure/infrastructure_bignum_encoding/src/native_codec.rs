//! Native Codec Module
//!
//! Widening from native fixed-width integers always succeeds. Narrowing
//! goes through `i128`/`u128` and fails with [`BigIntError::Overflow`]
//! naming the requested type.

use crate::common::to_u128;
use entities_bignum::{BigIntError, Result, Sign};
use usecases_bignum_arithmetic::SignedMagnitude;

/// Native integer codec
pub struct NativeCodec;

impl NativeCodec {
    pub fn from_i128(value: i128) -> SignedMagnitude {
        SignedMagnitude::from_i128(value)
    }

    pub fn from_u128(value: u128) -> SignedMagnitude {
        SignedMagnitude::from_u128(value)
    }

    /// Narrow to `i128`
    pub fn to_i128(value: &SignedMagnitude) -> Result<i128> {
        Self::to_i128_named(value, "i128")
    }

    /// Narrow to `u128`
    pub fn to_u128(value: &SignedMagnitude) -> Result<u128> {
        Self::to_u128_named(value, "u128")
    }

    /// Narrow to `i128`, reporting `target` on overflow
    pub fn to_i128_named(value: &SignedMagnitude, target: &'static str) -> Result<i128> {
        let magnitude = to_u128(value.digits()).ok_or_else(|| overflow(value, target))?;
        match value.sign() {
            Sign::Zero => Ok(0),
            Sign::Positive => i128::try_from(magnitude).map_err(|_| overflow(value, target)),
            Sign::Negative if magnitude <= i128::MIN.unsigned_abs() => {
                Ok((magnitude as i128).wrapping_neg())
            }
            Sign::Negative => Err(overflow(value, target)),
        }
    }

    /// Narrow to `u128`, reporting `target` on overflow
    pub fn to_u128_named(value: &SignedMagnitude, target: &'static str) -> Result<u128> {
        if value.sign() == Sign::Negative {
            return Err(overflow(value, target));
        }
        to_u128(value.digits()).ok_or_else(|| overflow(value, target))
    }
}

fn overflow(value: &SignedMagnitude, target: &'static str) -> BigIntError {
    tracing::debug!(
        bits = value.magnitude().bit_length(),
        negative = value.sign() == Sign::Negative,
        target_type = target,
        "narrowing conversion overflow"
    );
    BigIntError::Overflow(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i128_bounds() {
        let min = NativeCodec::from_i128(i128::MIN);
        let max = NativeCodec::from_i128(i128::MAX);
        assert_eq!(NativeCodec::to_i128(&min), Ok(i128::MIN));
        assert_eq!(NativeCodec::to_i128(&max), Ok(i128::MAX));

        let below = min.sub(&SignedMagnitude::one());
        let above = max.add(&SignedMagnitude::one());
        assert_eq!(NativeCodec::to_i128(&below), Err(BigIntError::Overflow("i128")));
        assert_eq!(NativeCodec::to_i128(&above), Err(BigIntError::Overflow("i128")));
    }

    #[test]
    fn test_u128_bounds() {
        let max = NativeCodec::from_u128(u128::MAX);
        assert_eq!(NativeCodec::to_u128(&max), Ok(u128::MAX));
        assert_eq!(
            NativeCodec::to_u128(&max.add(&SignedMagnitude::one())),
            Err(BigIntError::Overflow("u128"))
        );
        assert_eq!(
            NativeCodec::to_u128(&NativeCodec::from_i128(-1)),
            Err(BigIntError::Overflow("u128"))
        );
        assert_eq!(NativeCodec::to_u128(&SignedMagnitude::zero()), Ok(0));
    }

    #[test]
    fn test_named_target() {
        let big = NativeCodec::from_u128(u128::MAX);
        assert_eq!(
            NativeCodec::to_i128_named(&big, "i64"),
            Err(BigIntError::Overflow("i64"))
        );
    }
}
