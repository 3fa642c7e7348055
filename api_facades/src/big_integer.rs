//! Big Integer Value Type
//!
//! [`BigInteger`] is the public arbitrary precision integer. It is an
//! immutable value: every operation returns a new `BigInteger` and no
//! operand is ever modified, so values can be shared freely between
//! threads.
//!
//! # Construction
//!
//! - From a decimal string: [`BigInteger::from_decimal_str`] or `str::parse`
//! - From any native integer: `From<i8..i128, u8..u128, isize, usize>`
//! - From a float, truncating toward zero: [`BigInteger::from_f64`]
//!
//! # Division
//!
//! `/`, `%`, [`BigInteger::floor_div`] and [`BigInteger::floor_mod`] use
//! floor semantics: the quotient rounds toward negative infinity and a
//! nonzero remainder has the divisor's sign. Truncating division is
//! available through [`BigInteger::trunc_div`], [`BigInteger::trunc_rem`]
//! and [`crate::ArithmeticContext`]. [`BigInteger::true_div`] is a separate
//! float path returning the nearest `f64` to the exact quotient.
//!
//! # Examples
//!
//! ```rust
//! use bignum_api::BigInteger;
//!
//! let a = BigInteger::from(85);
//! let b = BigInteger::from(2);
//! assert_eq!(a.floor_div(&b).unwrap(), BigInteger::from(42));
//! assert_eq!(a.floor_mod(&b).unwrap(), BigInteger::from(1));
//! assert_eq!(a.true_div(&b).unwrap(), 42.5);
//! ```

use entities_bignum::{BigIntError, Result, Sign};
use infrastructure_bignum_encoding::{DecimalCodec, FloatCodec, NativeCodec};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use usecases_bignum_arithmetic::{power, DivisionMode, SignedMagnitude};

/// Arbitrary precision signed integer
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInteger {
    value: SignedMagnitude,
}

impl BigInteger {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from_signed_magnitude(SignedMagnitude::one())
    }

    /// Parse an optionally signed base-10 digit string
    ///
    /// Fails with `InvalidFormat` on empty input, a bare sign, or any
    /// character other than ASCII digits after the sign.
    pub fn from_decimal_str(text: &str) -> Result<Self> {
        DecimalCodec::parse(text).map(Self::from_signed_magnitude)
    }

    /// Truncate a float toward zero
    ///
    /// Fails with `NotFinite` for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        FloatCodec::from_f64(value).map(Self::from_signed_magnitude)
    }

    /// Nearest `f64`, ties to even; `±inf` when out of range
    pub fn to_f64(&self) -> f64 {
        FloatCodec::to_f64(&self.value)
    }

    /// Canonical decimal rendering, same as `Display`
    pub fn to_decimal_string(&self) -> String {
        DecimalCodec::format(&self.value)
    }

    pub fn to_i64(&self) -> Result<i64> {
        i64::try_from(self)
    }

    pub fn to_u64(&self) -> Result<u64> {
        u64::try_from(self)
    }

    pub fn to_i128(&self) -> Result<i128> {
        NativeCodec::to_i128(&self.value)
    }

    pub fn to_u128(&self) -> Result<u128> {
        NativeCodec::to_u128(&self.value)
    }

    pub fn sign(&self) -> Sign {
        self.value.sign()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        self.value.sign().signum()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.sign() == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        self.value.sign() == Sign::Positive
    }

    pub fn abs(&self) -> Self {
        Self::from_signed_magnitude(self.value.abs())
    }

    /// Bits needed for the magnitude; zero for zero
    pub fn bit_length(&self) -> u64 {
        self.value.magnitude().bit_length()
    }

    /// Floor quotient
    pub fn floor_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor, DivisionMode::Floor).map(|(q, _)| q)
    }

    /// Floor remainder; nonzero results have the divisor's sign
    pub fn floor_mod(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor, DivisionMode::Floor).map(|(_, r)| r)
    }

    /// Quotient rounded toward zero
    pub fn trunc_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor, DivisionMode::Truncate).map(|(q, _)| q)
    }

    /// Remainder of truncating division; nonzero results have the dividend's sign
    pub fn trunc_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor, DivisionMode::Truncate).map(|(_, r)| r)
    }

    /// Quotient and remainder under `mode`
    pub fn div_rem(&self, divisor: &Self, mode: DivisionMode) -> Result<(Self, Self)> {
        let (q, r) = self.value.div_rem(&divisor.value, mode)?;
        Ok((Self::from_signed_magnitude(q), Self::from_signed_magnitude(r)))
    }

    /// Nearest `f64` to the exact quotient (`85 / 2 == 42.5`)
    ///
    /// The quotient is rounded once from the exact integers, so operands
    /// beyond the `f64` range still divide correctly. Fails with
    /// `DivisionByZero` when `divisor` is zero.
    pub fn true_div(&self, divisor: &Self) -> Result<f64> {
        FloatCodec::quotient_to_f64(&self.value, &divisor.value)
    }

    /// `self^exponent`
    ///
    /// `pow(0, 0)` is one. Negative exponents are only accepted for bases
    /// `1` and `-1`; otherwise the result is `NegativeExponent`.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        power::pow(&self.value, &exponent.value).map(Self::from_signed_magnitude)
    }

    pub fn pow_u32(&self, exponent: u32) -> Self {
        Self::from_signed_magnitude(power::pow_u64(&self.value, exponent as u64))
    }

    /// `self * 2^bits`
    pub fn shift_left(&self, bits: u64) -> Self {
        Self::from_signed_magnitude(self.value.shl(bits))
    }

    /// `floor(self / 2^bits)`
    pub fn shift_right(&self, bits: u64) -> Self {
        Self::from_signed_magnitude(self.value.shr(bits))
    }

    /// Get the underlying sign + magnitude (for advanced use)
    pub fn as_signed_magnitude(&self) -> &SignedMagnitude {
        &self.value
    }

    /// Create from sign + magnitude (for advanced use)
    pub fn from_signed_magnitude(value: SignedMagnitude) -> Self {
        Self { value }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.compare(&other.value)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_decimal_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        f.pad_integral(!self.is_negative(), "", digits)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_decimal_str(text)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_signed_magnitude(NativeCodec::from_i128(value as i128))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_signed_magnitude(NativeCodec::from_u128(value as u128))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_into_signed {
    ($($t:ident),*) => {
        $(
            impl TryFrom<&BigInteger> for $t {
                type Error = BigIntError;

                fn try_from(value: &BigInteger) -> Result<$t> {
                    let wide = NativeCodec::to_i128_named(&value.value, stringify!($t))?;
                    $t::try_from(wide).map_err(|_| BigIntError::Overflow(stringify!($t)))
                }
            }
        )*
    };
}

macro_rules! impl_try_into_unsigned {
    ($($t:ident),*) => {
        $(
            impl TryFrom<&BigInteger> for $t {
                type Error = BigIntError;

                fn try_from(value: &BigInteger) -> Result<$t> {
                    let wide = NativeCodec::to_u128_named(&value.value, stringify!($t))?;
                    $t::try_from(wide).map_err(|_| BigIntError::Overflow(stringify!($t)))
                }
            }
        )*
    };
}

impl_try_into_signed!(i8, i16, i32, i64, i128, isize);
impl_try_into_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for BigInteger {
    type Error = BigIntError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_integer_creation() {
        let big = BigInteger::from(12345);
        assert!(big.is_positive());
        assert!(!big.is_zero());

        let big_neg = BigInteger::from(-12345i64);
        assert!(big_neg.is_negative());
        assert_eq!(big_neg.signum(), -1);
        assert_eq!(BigInteger::zero().signum(), 0);
    }

    #[test]
    fn test_construction_paths_agree() {
        let from_str: BigInteger = "42".parse().unwrap();
        let from_float = BigInteger::from_f64(42.123).unwrap();
        let from_native = BigInteger::from(42u8);
        assert_eq!(from_str, from_native);
        assert_eq!(from_float, from_native);
    }

    #[test]
    fn test_narrowing_conversions() {
        let big = BigInteger::from(300);
        assert_eq!(u8::try_from(&big), Err(BigIntError::Overflow("u8")));
        assert_eq!(i16::try_from(&big), Ok(300));
        assert_eq!(big.to_i64(), Ok(300));

        let neg = BigInteger::from(-1);
        assert_eq!(neg.to_u64(), Err(BigIntError::Overflow("u64")));
        assert_eq!(i8::try_from(&neg), Ok(-1));

        let huge = BigInteger::from(u64::MAX).shift_left(64);
        assert_eq!(huge.to_i64(), Err(BigIntError::Overflow("i64")));
        assert_eq!(huge.to_u128(), Ok((u64::MAX as u128) << 64));
    }

    #[test]
    fn test_native_extremes() {
        assert_eq!(BigInteger::from(i64::MIN).to_i64(), Ok(i64::MIN));
        assert_eq!(BigInteger::from(i64::MAX).to_i64(), Ok(i64::MAX));
        assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInteger::from(u128::MAX).to_u128(), Ok(u128::MAX));
    }

    #[test]
    fn test_division_variants() {
        let a = BigInteger::from(-7);
        let b = BigInteger::from(2);
        assert_eq!(a.floor_div(&b), Ok(BigInteger::from(-4)));
        assert_eq!(a.floor_mod(&b), Ok(BigInteger::from(1)));
        assert_eq!(a.trunc_div(&b), Ok(BigInteger::from(-3)));
        assert_eq!(a.trunc_rem(&b), Ok(BigInteger::from(-1)));
        assert_eq!(a.true_div(&b), Ok(-3.5));
        assert_eq!(a.true_div(&BigInteger::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_pow_and_shifts() {
        let base = BigInteger::from(42);
        assert_eq!(base.pow(&BigInteger::from(2)), Ok(BigInteger::from(1764)));
        assert_eq!(base.pow_u32(0), BigInteger::one());
        assert_eq!(BigInteger::from(-5).shift_right(1), BigInteger::from(-3));
        assert_eq!(BigInteger::from(5).shift_left(3), BigInteger::from(40));
        assert_eq!(BigInteger::from(255).bit_length(), 8);
    }

    #[test]
    fn test_debug_and_display() {
        let big = BigInteger::from(-17);
        assert_eq!(format!("{}", big), "-17");
        assert_eq!(format!("{:?}", big), "BigInteger(-17)");
    }

    #[test]
    fn test_display_honours_format_flags() {
        let answer = BigInteger::from(42);
        assert_eq!(format!("{:>6}", answer), "    42");
        assert_eq!(format!("{:<6}|", answer), "42    |");
        assert_eq!(format!("{:*^6}", answer), "**42**");
        assert_eq!(format!("{:+}", answer), "+42");
        assert_eq!(format!("{:06}", BigInteger::from(-17)), "-00017");
        assert_eq!(format!("{:+}", BigInteger::zero()), "+0");
        assert_eq!(format!("{:>6}", 42), format!("{:>6}", answer));
    }

    #[test]
    fn test_true_div_beyond_float_range() {
        let ten = BigInteger::from(10);
        let a = ten.pow_u32(400);
        let b = ten.pow_u32(399);
        assert_eq!(a.true_div(&b), Ok(10.0));
        assert_eq!((-&a).true_div(&b), Ok(-10.0));
        assert!(a.to_f64().is_infinite());

        // Just inside and just past the largest finite float
        let max = BigInteger::from_f64(f64::MAX).unwrap();
        let scale = BigInteger::one().shift_left(200);
        assert_eq!((&max * &scale).true_div(&scale), Ok(f64::MAX));
        let past = (&max * &scale).shift_left(1);
        assert_eq!(past.true_div(&scale), Ok(f64::INFINITY));
    }

    #[test]
    fn test_ordering() {
        let values: Vec<BigInteger> = [5i64, -3, 0, -100, 7]
            .iter()
            .map(|&v| BigInteger::from(v))
            .collect();
        let max = values.iter().max().cloned();
        let min = values.iter().min().cloned();
        assert_eq!(max, Some(BigInteger::from(7)));
        assert_eq!(min, Some(BigInteger::from(-100)));
    }
}
