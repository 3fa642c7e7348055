//! Exponentiation by repeated squaring.
//!
//! `pow(0, 0)` is one. A negative exponent is accepted only when the base
//! is `1` or `-1`, the only integers whose inverse is an integer; every
//! other base fails with [`BigIntError::NegativeExponent`]. Exponents above
//! `u64::MAX` are rejected with [`BigIntError::Overflow`] unless the base is
//! `0`, `1` or `-1`, since the result could not be stored.

use crate::signed::SignedMagnitude;
use entities_bignum::{BigIntError, Result, Sign};

/// `base^exponent` for a native exponent, O(log exponent) multiplications
pub fn pow_u64(base: &SignedMagnitude, mut exponent: u64) -> SignedMagnitude {
    let mut result = SignedMagnitude::one();
    let mut square = base.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.mul(&square);
        }
        exponent >>= 1;
        if exponent > 0 {
            square = square.mul(&square);
        }
    }
    result
}

/// `base^exponent` for an arbitrary precision exponent
pub fn pow(base: &SignedMagnitude, exponent: &SignedMagnitude) -> Result<SignedMagnitude> {
    if exponent.is_zero() {
        return Ok(SignedMagnitude::one());
    }

    if base.is_unit() {
        let odd = exponent.magnitude().bit(0);
        return Ok(if base.sign() == Sign::Negative && odd {
            base.clone()
        } else {
            SignedMagnitude::one()
        });
    }

    if exponent.sign() == Sign::Negative {
        tracing::debug!(base_bits = base.magnitude().bit_length(), "negative exponent");
        return Err(BigIntError::NegativeExponent);
    }

    if base.is_zero() {
        return Ok(SignedMagnitude::zero());
    }

    let exponent = exponent
        .magnitude()
        .to_u128()
        .and_then(|e| u64::try_from(e).ok())
        .ok_or(BigIntError::Overflow("u64 exponent"))?;
    Ok(pow_u64(base, exponent))
}
