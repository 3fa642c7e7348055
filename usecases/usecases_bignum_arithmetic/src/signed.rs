//! Sign-Aware Composition
//!
//! [`SignedMagnitude`] pairs a [`Sign`] with a [`Magnitude`] and implements
//! the signed rules on top of the magnitude kernel:
//!
//! - Addition with matching signs adds magnitudes. With differing signs the
//!   smaller magnitude is subtracted from the larger and the larger operand's
//!   sign wins.
//! - Multiplication multiplies signs; a zero operand gives zero.
//! - Division follows the requested [`DivisionMode`]. Under
//!   [`DivisionMode::Floor`] the quotient rounds toward negative infinity and
//!   a nonzero remainder takes the divisor's sign. Under
//!   [`DivisionMode::Truncate`] the quotient rounds toward zero and a nonzero
//!   remainder takes the dividend's sign.
//!
//! Every operation returns a new value; operands are never modified.

use crate::additive::{add_magnitude, sub_magnitude};
use crate::division::div_mod_magnitude;
use crate::multiplication::mul_magnitude;
use crate::shift::{shl_magnitude, shr_magnitude};
use entities_bignum::{compare_magnitude, Digit, Magnitude, Result, Sign};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rounding convention for integer division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// Round toward negative infinity; remainder has the divisor's sign
    #[default]
    Floor,
    /// Round toward zero; remainder has the dividend's sign
    Truncate,
}

/// Signed integer as sign plus normalized magnitude
///
/// The sign is [`Sign::Zero`] exactly when the magnitude is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedMagnitude {
    sign: Sign,
    magnitude: Magnitude,
}

impl SignedMagnitude {
    /// Build from a sign and raw digits.
    ///
    /// A zero magnitude forces [`Sign::Zero`]; a nonzero magnitude with
    /// [`Sign::Zero`] is treated as positive.
    pub fn new(sign: Sign, digits: Vec<Digit>) -> Self {
        let magnitude = Magnitude::from_digits(digits);
        let sign = match (magnitude.is_zero(), sign) {
            (true, _) => Sign::Zero,
            (false, Sign::Zero) => Sign::Positive,
            (false, s) => s,
        };
        Self { sign, magnitude }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::new(Sign::Positive, vec![1])
    }

    pub fn from_i128(value: i128) -> Self {
        Self {
            sign: Sign::of_i128(value),
            magnitude: Magnitude::from_u128(value.unsigned_abs()),
        }
    }

    pub fn from_u128(value: u128) -> Self {
        Self::new(Sign::Positive, Magnitude::from_u128(value).into_digits())
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn digits(&self) -> &[Digit] {
        self.magnitude.digits()
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Whether the magnitude is exactly one
    pub fn is_unit(&self) -> bool {
        self.digits() == &[1]
    }

    pub fn negate(&self) -> Self {
        Self {
            sign: -self.sign,
            magnitude: self.magnitude.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        Self::new(Sign::Positive, self.digits().to_vec())
    }

    pub fn add(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Self::new(a, add_magnitude(self.digits(), other.digits())),
            _ => match compare_magnitude(self.digits(), other.digits()) {
                Ordering::Equal => Self::zero(),
                Ordering::Greater => Self::new(self.sign, sub_magnitude(self.digits(), other.digits())),
                Ordering::Less => Self::new(other.sign, sub_magnitude(other.digits(), self.digits())),
            },
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn mul(&self, other: &Self) -> Self {
        let sign = self.sign * other.sign;
        if sign == Sign::Zero {
            return Self::zero();
        }
        Self::new(sign, mul_magnitude(self.digits(), other.digits()))
    }

    /// `(quotient, remainder)` under `mode`, with
    /// `self == quotient * divisor + remainder`.
    pub fn div_rem(&self, divisor: &Self, mode: DivisionMode) -> Result<(Self, Self)> {
        let (q, r) = div_mod_magnitude(self.digits(), divisor.digits())?;
        let quotient = Self::new(self.sign * divisor.sign, q);
        let remainder = Self::new(self.sign, r);

        if mode == DivisionMode::Floor && !remainder.is_zero() && self.sign != divisor.sign {
            return Ok((quotient.sub(&Self::one()), remainder.add(divisor)));
        }
        Ok((quotient, remainder))
    }

    /// Signed comparison: signs first, then magnitudes (reversed when both
    /// are negative)
    pub fn compare(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| {
            let by_magnitude = compare_magnitude(self.digits(), other.digits());
            match self.sign {
                Sign::Negative => by_magnitude.reverse(),
                _ => by_magnitude,
            }
        })
    }

    /// `self * 2^bits`
    pub fn shl(&self, bits: u64) -> Self {
        Self::new(self.sign, shl_magnitude(self.digits(), bits))
    }

    /// `floor(self / 2^bits)`
    pub fn shr(&self, bits: u64) -> Self {
        let shifted = Self::new(self.sign, shr_magnitude(self.digits(), bits));
        if self.sign == Sign::Negative && self.magnitude.any_bit_below(bits) {
            shifted.sub(&Self::one())
        } else {
            shifted
        }
    }
}

impl PartialOrd for SignedMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignedMagnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
