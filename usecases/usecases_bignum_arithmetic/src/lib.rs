//! Use Cases Layer: Big Integer Arithmetic Kernel
//!
//! Exact arithmetic on digit vectors, plus the sign-aware composition that
//! turns magnitude operations into signed integer operations.
//!
//! ## Modules
//!
//! - **[`additive`](additive/index.html)**: Ripple-carry addition and borrow subtraction
//! - **[`multiplication`](multiplication/index.html)**: Schoolbook and Karatsuba products
//! - **[`division`](division/index.html)**: Long division with remainder
//! - **[`shift`](shift/index.html)**: Bit shifts on magnitudes
//! - **[`signed`](signed/index.html)**: Sign + magnitude values and division modes
//! - **[`power`](power/index.html)**: Exponentiation by repeated squaring
//!
//! ## Architecture
//!
//! Magnitude functions take and return little-endian digit slices/vectors and
//! always return normalized vectors. They never see a sign. The
//! [`SignedMagnitude`] type resolves signs before calling them, which is what
//! guarantees the `a >= b` precondition of [`sub_magnitude`].
//!
//! ## See Also
//!
//! - [`entities_bignum`](../../entities/entities_bignum/index.html): Storage types

pub mod additive;
pub mod division;
pub mod multiplication;
pub mod power;
pub mod shift;
pub mod signed;

pub use additive::{add_magnitude, sub_magnitude};
pub use division::{div_mod_magnitude, div_rem_small};
pub use multiplication::{mul_magnitude, mul_small_add};
pub use power::{pow, pow_u64};
pub use shift::{shl_magnitude, shr_magnitude};
pub use signed::{DivisionMode, SignedMagnitude};
