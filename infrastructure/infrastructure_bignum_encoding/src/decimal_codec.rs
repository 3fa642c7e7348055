//! Decimal Codec Module
//!
//! Parses and formats signed base-10 digit strings.
//!
//! # Accepted input
//!
//! An optional `+` or `-`, then one or more ASCII digits. Leading zeros are
//! allowed and dropped. Anything else (empty input, a bare sign,
//! whitespace, separators) fails with [`BigIntError::InvalidFormat`].
//!
//! # Canonical output
//!
//! `-` only for negative values, no `+`, no leading zeros; zero is `"0"`.
//!
//! # Examples
//!
//! ```rust
//! use infrastructure_bignum_encoding::DecimalCodec;
//!
//! let value = DecimalCodec::parse("-000123").unwrap();
//! assert_eq!(DecimalCodec::format(&value), "-123");
//! assert!(DecimalCodec::parse("12a").is_err());
//! ```

use crate::common::{pow10, DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS};
use entities_bignum::{BigIntError, Digit, Result, Sign};
use usecases_bignum_arithmetic::{div_rem_small, mul_small_add, SignedMagnitude};

/// Decimal string codec
pub struct DecimalCodec;

impl DecimalCodec {
    /// Parse a signed decimal digit string
    pub fn parse(text: &str) -> Result<SignedMagnitude> {
        let (sign, body) = match text.as_bytes().first() {
            None => return Err(invalid(text, "empty string")),
            Some(b'-') => (Sign::Negative, &text[1..]),
            Some(b'+') => (Sign::Positive, &text[1..]),
            Some(_) => (Sign::Positive, text),
        };
        if body.is_empty() {
            return Err(invalid(text, "sign without digits"));
        }
        if let Some(pos) = body.bytes().position(|b| !b.is_ascii_digit()) {
            let offset = text.len() - body.len() + pos;
            let stray = text[offset..].chars().next().unwrap_or('?');
            return Err(invalid(
                text,
                &format!("unexpected character {:?} at position {}", stray, offset),
            ));
        }

        // Consume the digits in chunks of 9, most significant chunk first
        let bytes = body.as_bytes();
        let first = match bytes.len() % DECIMAL_CHUNK_DIGITS {
            0 => DECIMAL_CHUNK_DIGITS,
            n => n,
        };
        let mut digits: Vec<Digit> = Vec::with_capacity(bytes.len() / DECIMAL_CHUNK_DIGITS + 1);
        let mut start = 0;
        let mut end = first;
        while start < bytes.len() {
            let chunk = bytes[start..end]
                .iter()
                .fold(0 as Digit, |acc, &b| acc * 10 + (b - b'0') as Digit);
            digits = mul_small_add(&digits, pow10(end - start), chunk);
            start = end;
            end += DECIMAL_CHUNK_DIGITS;
        }

        Ok(SignedMagnitude::new(sign, digits))
    }

    /// Canonical decimal rendering
    pub fn format(value: &SignedMagnitude) -> String {
        if value.is_zero() {
            return "0".to_string();
        }

        let mut chunks = Vec::new();
        let mut rest = value.digits().to_vec();
        while !rest.is_empty() {
            let (quotient, chunk) = div_rem_small(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS + 1);
        if value.sign() == Sign::Negative {
            out.push('-');
        }
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            out.push_str(&top.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{:09}", chunk));
        }
        out
    }
}

fn invalid(text: &str, reason: &str) -> BigIntError {
    tracing::debug!(input = text, reason, "rejected decimal literal");
    BigIntError::InvalidFormat(format!("{} in {:?}", reason, text))
}
