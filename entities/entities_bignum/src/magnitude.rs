//! Digit-Vector Storage
//!
//! An unbounded non-negative integer stored as a vector of radix 2^32
//! digits, least significant digit first.
//!
//! # Invariants
//!
//! - Zero is the empty vector; there is no other representation of zero.
//! - The most significant digit is never zero.
//!
//! Every constructor in this module establishes both invariants, so two
//! magnitudes are numerically equal exactly when their digit vectors are
//! equal.
//!
//! # Examples
//!
//! ```rust
//! use entities_bignum::{compare_magnitude, Magnitude};
//! use std::cmp::Ordering;
//!
//! let a = Magnitude::from_digits(vec![7, 1, 0, 0]);
//! assert_eq!(a.digits(), &[7, 1]);
//! assert_eq!(compare_magnitude(a.digits(), &[u32::MAX]), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// One digit of a magnitude
pub type Digit = u32;

/// Double-width intermediate for carries, borrows and products
pub type DoubleDigit = u64;

/// Bits per digit
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Strip most significant zero digits.
///
/// The result of stripping an all-zero vector is the empty vector.
pub fn normalize(mut digits: Vec<Digit>) -> Vec<Digit> {
    while let Some(&0) = digits.last() {
        digits.pop();
    }
    digits
}

fn significant(digits: &[Digit]) -> &[Digit] {
    let len = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    &digits[..len]
}

/// Compare two magnitudes.
///
/// Length decides first; equal lengths are compared most significant digit
/// first. Non-normalized input is tolerated.
pub fn compare_magnitude(a: &[Digit], b: &[Digit]) -> Ordering {
    let a = significant(a);
    let b = significant(b);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Normalized, owned digit vector
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Magnitude {
    digits: Vec<Digit>,
}

impl Magnitude {
    /// The canonical zero
    pub fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Build from little-endian digits, normalizing
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Self {
            digits: normalize(digits),
        }
    }

    /// Build from a native unsigned value
    pub fn from_u128(mut value: u128) -> Self {
        let mut digits = Vec::with_capacity(4);
        while value != 0 {
            digits.push(value as Digit);
            value >>= DIGIT_BITS;
        }
        Self { digits }
    }

    /// Native value, if the magnitude has at most 128 bits
    pub fn to_u128(&self) -> Option<u128> {
        if self.digits.len() > 4 {
            return None;
        }
        Some(
            self.digits
                .iter()
                .rev()
                .fold(0u128, |acc, &d| (acc << DIGIT_BITS) | d as u128),
        )
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits; zero has none
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Position of the highest set bit plus one; zero for zero
    pub fn bit_length(&self) -> u64 {
        match self.digits.last() {
            None => 0,
            Some(&top) => {
                (self.digits.len() as u64 - 1) * DIGIT_BITS as u64
                    + (DIGIT_BITS - top.leading_zeros()) as u64
            }
        }
    }

    /// Whether bit `index` (0 = least significant) is set
    pub fn bit(&self, index: u64) -> bool {
        let digit = (index / DIGIT_BITS as u64) as usize;
        match self.digits.get(digit) {
            Some(&d) => (d >> (index % DIGIT_BITS as u64)) & 1 == 1,
            None => false,
        }
    }

    /// Whether any bit below `index` is set
    pub fn any_bit_below(&self, index: u64) -> bool {
        let whole = (index / DIGIT_BITS as u64) as usize;
        let rem = (index % DIGIT_BITS as u64) as u32;
        if self.digits.iter().take(whole).any(|&d| d != 0) {
            return true;
        }
        match self.digits.get(whole) {
            Some(&d) if rem > 0 => d & ((1 << rem) - 1) != 0,
            _ => false,
        }
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_magnitude(&self.digits, &other.digits)
    }
}
