//! Big Integer Errors
//!
//! Every fallible big integer operation reports one of these kinds at the
//! point of detection. None of them are recovered internally.

use std::fmt;

/// Errors raised by big integer construction, arithmetic and conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// Malformed input to the decimal parser
    InvalidFormat(String),
    /// Divisor is zero for `/` or `%`
    DivisionByZero,
    /// Negative exponent on a base whose inverse is not an integer
    NegativeExponent,
    /// Construction from NaN or an infinite float
    NotFinite,
    /// A value does not fit the named fixed-width type. Raised by narrowing
    /// conversions (`"i64"`, `"u128"`, ...) and by exponentiation when the
    /// exponent itself exceeds `u64` for a base other than 0, 1 or -1
    /// (`"u64 exponent"`).
    Overflow(&'static str),
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BigIntError::InvalidFormat(msg) => write!(f, "Invalid integer literal: {}", msg),
            BigIntError::DivisionByZero => write!(f, "Division by zero"),
            BigIntError::NegativeExponent => {
                write!(f, "Negative exponent with a base whose inverse is not an integer")
            }
            BigIntError::NotFinite => write!(f, "Cannot convert a non-finite float to an integer"),
            BigIntError::Overflow(target) => write!(f, "Value does not fit in {}", target),
        }
    }
}

impl std::error::Error for BigIntError {}

/// Result alias used across the big integer crates
pub type Result<T> = std::result::Result<T, BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BigIntError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            BigIntError::Overflow("i64").to_string(),
            "Value does not fit in i64"
        );
        assert_eq!(
            BigIntError::Overflow("u64 exponent").to_string(),
            "Value does not fit in u64 exponent"
        );
        assert!(BigIntError::InvalidFormat("empty string".to_string())
            .to_string()
            .contains("empty string"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BigIntError::NotFinite);
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(BigIntError::NegativeExponent, BigIntError::NegativeExponent);
        assert_ne!(BigIntError::Overflow("u8"), BigIntError::Overflow("u16"));
    }
}
