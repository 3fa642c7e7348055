//! Entities Layer: Big Integer Storage
//!
//! Provides the leaf representation of arbitrary precision integers:
//! - Digit vectors (magnitudes) in radix 2^32, least significant digit first
//! - Sign handling
//! - The error taxonomy shared by every layer above
//!
//! Nothing in this crate performs arithmetic beyond normalization and
//! ordering; see `usecases_bignum_arithmetic` for the kernel.

pub mod error;
pub mod magnitude;
pub mod sign;

pub use error::{BigIntError, Result};
pub use magnitude::{compare_magnitude, normalize, Digit, DoubleDigit, Magnitude, DIGIT_BITS};
pub use sign::Sign;
