//! Arithmetic Configuration
//!
//! The operator surface always divides with floor semantics. Callers that
//! need truncating division everywhere can describe that once in an
//! [`ArithmeticConfig`] and route division through an [`ArithmeticContext`].
//!
//! The configuration is plain data and deserializes from JSON (or any other
//! serde format):
//!
//! ```rust
//! use bignum_api::{ArithmeticConfig, ArithmeticContext, BigInteger, DivisionMode};
//!
//! let config: ArithmeticConfig = serde_json::from_str(r#"{"divisionMode":"truncate"}"#).unwrap();
//! assert_eq!(config.division_mode, DivisionMode::Truncate);
//!
//! let ctx = ArithmeticContext::new(config);
//! let q = ctx.div(&BigInteger::from(-7), &BigInteger::from(2)).unwrap();
//! assert_eq!(q, BigInteger::from(-3));
//! ```

use crate::big_integer::BigInteger;
use entities_bignum::Result;
use serde::{Deserialize, Serialize};
use usecases_bignum_arithmetic::DivisionMode;

/// Settings that influence arithmetic results
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArithmeticConfig {
    /// Rounding rule for `div`, `rem` and `div_rem`
    #[serde(alias = "division_mode")]
    pub division_mode: DivisionMode,
}

impl ArithmeticConfig {
    pub fn with_division_mode(division_mode: DivisionMode) -> Self {
        Self { division_mode }
    }
}

/// Division bound to a fixed [`ArithmeticConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticContext {
    config: ArithmeticConfig,
}

impl ArithmeticContext {
    pub fn new(config: ArithmeticConfig) -> Self {
        tracing::debug!(division_mode = ?config.division_mode, "arithmetic context created");
        Self { config }
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    pub fn div(&self, dividend: &BigInteger, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(dividend, divisor).map(|(q, _)| q)
    }

    pub fn rem(&self, dividend: &BigInteger, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(dividend, divisor).map(|(_, r)| r)
    }

    /// Quotient and remainder; `dividend == q * divisor + r` in either mode
    pub fn div_rem(
        &self,
        dividend: &BigInteger,
        divisor: &BigInteger,
    ) -> Result<(BigInteger, BigInteger)> {
        dividend.div_rem(divisor, self.config.division_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bignum::BigIntError;

    #[test]
    fn test_default_is_floor() {
        let config = ArithmeticConfig::default();
        assert_eq!(config.division_mode, DivisionMode::Floor);

        let parsed: ArithmeticConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_serialization() {
        let config = ArithmeticConfig::with_division_mode(DivisionMode::Truncate);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"divisionMode":"truncate"}"#);

        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_snake_case_field_is_accepted() {
        let parsed: ArithmeticConfig = serde_json::from_str(r#"{"division_mode":"truncate"}"#).unwrap();
        assert_eq!(parsed.division_mode, DivisionMode::Truncate);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let parsed: std::result::Result<ArithmeticConfig, _> =
            serde_json::from_str(r#"{"divisionMode":"ceiling"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_context_uses_configured_mode() {
        let a = BigInteger::from(-7);
        let b = BigInteger::from(2);

        let floor = ArithmeticContext::new(ArithmeticConfig::default());
        assert_eq!(floor.div(&a, &b), Ok(BigInteger::from(-4)));
        assert_eq!(floor.rem(&a, &b), Ok(BigInteger::from(1)));

        let trunc = ArithmeticContext::new(ArithmeticConfig::with_division_mode(
            DivisionMode::Truncate,
        ));
        assert_eq!(trunc.div(&a, &b), Ok(BigInteger::from(-3)));
        assert_eq!(trunc.rem(&a, &b), Ok(BigInteger::from(-1)));
        assert_eq!(trunc.config().division_mode, DivisionMode::Truncate);
    }

    #[test]
    fn test_context_division_by_zero() {
        let ctx = ArithmeticContext::default();
        assert_eq!(
            ctx.div_rem(&BigInteger::one(), &BigInteger::zero()),
            Err(BigIntError::DivisionByZero)
        );
    }
}
