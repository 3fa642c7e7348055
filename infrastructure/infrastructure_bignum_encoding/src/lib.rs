//! Infrastructure Layer: Bignum Encoding
//!
//! Converts arbitrary precision integers to and from the representations
//! callers hand us: base-10 strings, native fixed-width integers and `f64`.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate sits between the arithmetic
//! kernel and the public value type. Every codec here produces or consumes a
//! [`SignedMagnitude`](usecases_bignum_arithmetic::SignedMagnitude) and
//! reports failures with [`BigIntError`](entities_bignum::BigIntError).
//!
//! ## Codecs
//!
//! - **[`decimal_codec`](decimal_codec/index.html)**: Signed base-10 digit strings.
//!   Parsing fails with `InvalidFormat`; formatting is canonical.
//!
//! - **[`float_codec`](float_codec/index.html)**: `f64` in both directions.
//!   Construction truncates toward zero and rejects NaN/infinity with
//!   `NotFinite`; conversion back rounds to nearest-even and overflows to
//!   infinity.
//!
//! - **[`native_codec`](native_codec/index.html)**: Widening from `i128`/`u128`
//!   and narrowing back, failing with `Overflow` when out of range.
//!
//! ## See Also
//!
//! - [`usecases_bignum_arithmetic`](../../usecases/usecases_bignum_arithmetic/index.html): Kernel used for base conversion
//! - [`entities_bignum`](../../entities/entities_bignum/index.html): Storage and error types

mod common;

pub mod decimal_codec;
pub mod float_codec;
pub mod native_codec;

pub use decimal_codec::DecimalCodec;
pub use float_codec::FloatCodec;
pub use native_codec::NativeCodec;
