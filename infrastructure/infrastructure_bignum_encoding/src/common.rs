//! Common Encoding Helpers
//!
//! Shared by the codecs: decimal chunking constants and small magnitude
//! readers.

use entities_bignum::{Digit, Magnitude};

/// Largest power of ten that fits in one digit
pub(crate) const DECIMAL_CHUNK: Digit = 1_000_000_000;

/// Decimal digits per [`DECIMAL_CHUNK`]
pub(crate) const DECIMAL_CHUNK_DIGITS: usize = 9;

/// `10^n` for `n <= DECIMAL_CHUNK_DIGITS`
pub(crate) fn pow10(n: usize) -> Digit {
    debug_assert!(n <= DECIMAL_CHUNK_DIGITS);
    10u32.pow(n as u32)
}

/// Value of a magnitude known to hold at most 64 bits
pub(crate) fn low_u64(digits: &[Digit]) -> u64 {
    digits
        .iter()
        .take(2)
        .rev()
        .fold(0u64, |acc, &d| (acc << 32) | d as u64)
}

/// Native value of a magnitude, if it fits in 128 bits
pub(crate) fn to_u128(digits: &[Digit]) -> Option<u128> {
    Magnitude::from_digits(digits.to_vec()).to_u128()
}
