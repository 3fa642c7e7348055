//! Float Codec Module
//!
//! Converts between arbitrary precision integers and `f64`.
//!
//! - [`FloatCodec::from_f64`] drops the fractional part (truncation toward
//!   zero) and decodes the IEEE-754 bits exactly, so every finite float maps
//!   to the integer it truncates to, however large.
//! - [`FloatCodec::to_f64`] rounds to the nearest representable float with
//!   ties to even, and returns a signed infinity when the magnitude exceeds
//!   the `f64` range. Overflow is not an error here.
//! - [`FloatCodec::quotient_to_f64`] divides two integers and rounds the
//!   exact rational quotient once, so operands far outside the `f64` range
//!   still give a finite result when the quotient is in range.
//!
//! The last two share one rounding step: a 64-bit window of the exact value,
//! a sticky bit for everything below it, and a power-of-two exponent.

use crate::common::{low_u64, to_u128};
use entities_bignum::{BigIntError, Result, Sign};
use usecases_bignum_arithmetic::{div_mod_magnitude, shl_magnitude, shr_magnitude, SignedMagnitude};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i64 = 1023;
const MAX_EXPONENT: i64 = 1023;
const MIN_NORMAL_EXPONENT: i64 = -1022;
const MIN_SUBNORMAL_EXPONENT: i64 = -1074;

/// Operands up to this many bits convert to `f64` exactly
const EXACT_BITS: u64 = MANTISSA_BITS as u64 + 1;

/// The scaled integer quotient has 63 or 64 bits
const QUOTIENT_BITS: i64 = 63;

/// `f64` codec
pub struct FloatCodec;

impl FloatCodec {
    /// Truncate a finite float to an integer
    pub fn from_f64(value: f64) -> Result<SignedMagnitude> {
        if !value.is_finite() {
            tracing::debug!(value, "rejected non-finite float");
            return Err(BigIntError::NotFinite);
        }
        let truncated = value.trunc();
        if truncated == 0.0 {
            return Ok(SignedMagnitude::zero());
        }

        // |truncated| >= 1, so the exponent field is normal
        let bits = truncated.to_bits();
        let sign = if bits >> 63 == 1 { Sign::Negative } else { Sign::Positive };
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i64;
        let mantissa = (bits & ((1 << MANTISSA_BITS) - 1)) | (1 << MANTISSA_BITS);
        let exponent = biased - EXPONENT_BIAS - MANTISSA_BITS as i64;

        let digits = vec![mantissa as u32, (mantissa >> 32) as u32];
        let digits = if exponent >= 0 {
            shl_magnitude(&digits, exponent as u64)
        } else {
            shr_magnitude(&digits, exponent.unsigned_abs())
        };
        Ok(SignedMagnitude::new(sign, digits))
    }

    /// Nearest `f64`, ties to even; infinite beyond the `f64` range
    pub fn to_f64(value: &SignedMagnitude) -> f64 {
        let magnitude = Self::magnitude_to_f64(value);
        with_sign(magnitude, value.sign() == Sign::Negative)
    }

    /// Nearest `f64` to the exact quotient `dividend / divisor`, ties to even
    ///
    /// Fails with `DivisionByZero` when `divisor` is zero. A zero dividend
    /// gives a zero carrying the sign of the quotient.
    pub fn quotient_to_f64(dividend: &SignedMagnitude, divisor: &SignedMagnitude) -> Result<f64> {
        if divisor.is_zero() {
            tracing::debug!("true division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        let negative = divisor.sign().is_negative() != dividend.sign().is_negative();
        if dividend.is_zero() {
            return Ok(with_sign(0.0, negative));
        }

        let dividend_bits = dividend.magnitude().bit_length();
        let divisor_bits = divisor.magnitude().bit_length();
        if dividend_bits <= EXACT_BITS && divisor_bits <= EXACT_BITS {
            // Both operands are exact, so IEEE division rounds correctly
            return Ok(Self::to_f64(dividend) / Self::to_f64(divisor));
        }

        // Scale so that floor(num / den) lands in [2^62, 2^64)
        let shift = divisor_bits as i64 - dividend_bits as i64 + QUOTIENT_BITS;
        let (num, den) = if shift >= 0 {
            (shl_magnitude(dividend.digits(), shift as u64), divisor.digits().to_vec())
        } else {
            (dividend.digits().to_vec(), shl_magnitude(divisor.digits(), shift.unsigned_abs()))
        };
        let (quotient, remainder) = div_mod_magnitude(&num, &den)?;
        tracing::trace!(shift, "scaled quotient for true division");

        let magnitude = round_to_f64(low_u64(&quotient), !remainder.is_empty(), -shift);
        Ok(with_sign(magnitude, negative))
    }

    fn magnitude_to_f64(value: &SignedMagnitude) -> f64 {
        let bit_length = value.magnitude().bit_length();
        if bit_length <= 128 {
            // Native u128 -> f64 conversion already rounds to nearest-even
            return to_u128(value.digits()).map_or(0.0, |v| v as f64);
        }

        // Keep the top 64 bits and fold every discarded bit into a sticky bit
        let shift = bit_length - 64;
        let top = low_u64(&shr_magnitude(value.digits(), shift));
        let sticky = value.magnitude().any_bit_below(shift);
        round_to_f64(top, sticky, shift as i64)
    }
}

fn with_sign(magnitude: f64, negative: bool) -> f64 {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Round `(mantissa + s) * 2^exp2` to the nearest `f64`, ties to even,
/// where `0 <= s < 1` and `sticky` says whether `s` is nonzero.
///
/// `sticky` is only honoured when `mantissa` is wider than the target
/// precision; narrower mantissas are taken as exact. Results above the
/// `f64` range are infinite and results below half the smallest subnormal
/// are zero.
fn round_to_f64(mantissa: u64, sticky: bool, exp2: i64) -> f64 {
    if mantissa == 0 {
        return 0.0;
    }
    let width = (u64::BITS - mantissa.leading_zeros()) as i64;
    let top = width - 1 + exp2;
    if top > MAX_EXPONENT {
        return f64::INFINITY;
    }

    // Weight of the last kept bit
    let lsb = if top < MIN_NORMAL_EXPONENT {
        MIN_SUBNORMAL_EXPONENT
    } else {
        top - MANTISSA_BITS as i64
    };
    let drop = lsb - exp2;
    if drop > u64::BITS as i64 {
        return 0.0;
    }

    let wide = mantissa as u128;
    let kept = if drop > 0 {
        let drop = drop as u32;
        let removed = wide & ((1u128 << drop) - 1);
        let half = 1u128 << (drop - 1);
        let kept = wide >> drop;
        let round_up = removed > half || (removed == half && (sticky || kept & 1 == 1));
        kept + round_up as u128
    } else {
        wide << drop.unsigned_abs()
    };

    // Rounding up may carry into one extra bit
    let (kept, lsb) = if kept >> (MANTISSA_BITS + 1) != 0 {
        (kept >> 1, lsb + 1)
    } else {
        (kept, lsb)
    };

    if kept >> MANTISSA_BITS == 0 {
        // Subnormal; lsb is the smallest subnormal exponent
        return f64::from_bits(kept as u64);
    }
    let biased = lsb + MANTISSA_BITS as i64 + EXPONENT_BIAS;
    if biased >= 0x7ff {
        return f64::INFINITY;
    }
    let fraction = kept as u64 & ((1 << MANTISSA_BITS) - 1);
    f64::from_bits(((biased as u64) << MANTISSA_BITS) | fraction)
}
