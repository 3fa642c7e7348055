//! API Facades Layer: Arbitrary Precision Integers
//!
//! The public surface of the workspace. [`BigInteger`] wraps the sign +
//! magnitude representation from the inner layers and exposes it as an
//! ordinary immutable number with operators, conversions and float
//! interoperability.
//!
//! ## Modules
//!
//! - **[`big_integer`](big_integer/index.html)**: The value type, construction, conversion and division variants
//! - **[`operators`](operators/index.html)**: `+ - * / %`, negation, `Sum` and `Product`
//! - **[`mixed`](mixed/index.html)**: Integer/float operators and comparisons by promotion
//! - **[`config`](config/index.html)**: Division mode configuration and contexts
//!
//! ## Example
//!
//! ```rust
//! use bignum_api::BigInteger;
//!
//! let a: BigInteger = "42".parse().unwrap();
//! let b = BigInteger::from_f64(42.123).unwrap();
//! let c = BigInteger::from(42);
//! assert!(a == b && b == c);
//!
//! let big: BigInteger = "12345678987654321234567898765432".parse().unwrap();
//! assert_eq!(big.to_string(), "12345678987654321234567898765432");
//!
//! let x: f64 = 43.0 - BigInteger::from(1);
//! assert_eq!(x, 42.0);
//!
//! let n = BigInteger::from(85);
//! let d = BigInteger::from(2);
//! assert_eq!((&n / &d).unwrap(), BigInteger::from(42));
//! assert_eq!((&n % &d).unwrap(), BigInteger::from(1));
//! assert_eq!(n.true_div(&d).unwrap(), 42.5);
//!
//! assert_eq!(BigInteger::from(42).pow_u32(2), BigInteger::from(1764));
//! ```
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): Digit storage and errors
//! - [`usecases_bignum_arithmetic`](../usecases_bignum_arithmetic/index.html): Arithmetic kernel
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Decimal, float and native conversions

pub mod big_integer;
pub mod config;
pub mod mixed;
pub mod operators;

pub use big_integer::BigInteger;
pub use config::{ArithmeticConfig, ArithmeticContext};
pub use entities_bignum::{BigIntError, Result, Sign};
pub use usecases_bignum_arithmetic::DivisionMode;
