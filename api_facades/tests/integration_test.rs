//! Integration tests for bignum_api crate
//!
//! These tests drive the public surface the way a caller would: parsing,
//! mixed arithmetic, the two division paths and exponentiation.

use bignum_api::*;
use malachite::Integer;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

#[test]
fn test_decimal_string_round_trip() {
    let literal = "12345678987654321234567898765432";
    let value = BigInteger::from_decimal_str(literal).unwrap();
    assert_eq!(value.to_decimal_string(), literal);
    assert_eq!(value.to_string(), literal);
}

#[test]
fn test_float_construction_truncates() {
    assert_eq!(BigInteger::from_f64(42.123).unwrap(), BigInteger::from(42));
    assert_eq!(BigInteger::from_f64(-42.999).unwrap(), BigInteger::from(-42));
    assert_eq!(BigInteger::from_f64(f64::INFINITY), Err(BigIntError::NotFinite));
}

#[test]
fn test_mixed_arithmetic_produces_float() {
    let promoted: f64 = 43.0 - BigInteger::from(1);
    assert_eq!(promoted, 42.0);

    let integer = BigInteger::from(43) - 1i64;
    assert_eq!(integer, BigInteger::from(42));
    assert_eq!(integer.to_f64(), 42.0);
    assert!(integer == 42.0);
}

#[test]
fn test_floor_division_and_true_division_are_distinct() {
    let a = BigInteger::from(85);
    let b = BigInteger::from(2);

    let quotient = (&a / &b).unwrap();
    let remainder = (&a % &b).unwrap();
    assert_eq!(quotient, BigInteger::from(42));
    assert_eq!(remainder, BigInteger::from(1));

    let float_quotient = a.true_div(&b).unwrap();
    assert_eq!(float_quotient, 42.5);
    assert_eq!(a.to_f64() / b.to_f64(), 42.5);

    // The integer path never produces the fractional result
    assert!(quotient != float_quotient);
    assert!(quotient.to_f64() < float_quotient);
}

#[test]
fn test_power_of_native_values() {
    let base = BigInteger::from(42);
    let exponent = BigInteger::from(2);
    assert_eq!(base.pow(&exponent), Ok(BigInteger::from(1764)));
}

#[test]
fn test_large_values_match_malachite() {
    let a: BigInteger = "-98765432109876543210987654321098765432109876543210".parse().unwrap();
    let b: BigInteger = "12345678901234567890123".parse().unwrap();
    let ma = Integer::from_str(&a.to_string()).unwrap();
    let mb = Integer::from_str(&b.to_string()).unwrap();

    assert_eq!((&a * &b).to_string(), (&ma * &mb).to_string());
    assert_eq!((&a + &b).to_string(), (&ma + &mb).to_string());
    assert_eq!((&a - &b).to_string(), (&ma - &mb).to_string());
    assert_eq!(a.trunc_div(&b).unwrap().to_string(), (&ma / &mb).to_string());
    assert_eq!(a.trunc_rem(&b).unwrap().to_string(), (&ma % &mb).to_string());
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!("12a".parse::<BigInteger>(), Err(BigIntError::InvalidFormat(_))));
    assert!(matches!("".parse::<BigInteger>(), Err(BigIntError::InvalidFormat(_))));
    assert_eq!(BigInteger::from(1) / BigInteger::zero(), Err(BigIntError::DivisionByZero));
    assert_eq!(
        BigInteger::from(2).pow(&BigInteger::from(-1)),
        Err(BigIntError::NegativeExponent)
    );
    assert_eq!(BigInteger::from_f64(f64::NAN), Err(BigIntError::NotFinite));
    assert_eq!(
        BigInteger::from(u64::MAX).to_i64(),
        Err(BigIntError::Overflow("i64"))
    );
}

#[test]
fn test_configured_truncation() {
    let config: ArithmeticConfig =
        serde_json::from_str(r#"{"divisionMode":"truncate"}"#).unwrap();
    let ctx = ArithmeticContext::new(config);
    let a = BigInteger::from(-85);
    let b = BigInteger::from(2);

    assert_eq!(ctx.div_rem(&a, &b), Ok((BigInteger::from(-42), BigInteger::from(-1))));
    assert_eq!(&a / &b, Ok(BigInteger::from(-43)));
    assert_eq!(&a % &b, Ok(BigInteger::from(1)));
}

#[test]
fn test_values_shared_across_threads() {
    let shared = Arc::new(BigInteger::from(u128::MAX));
    let handles: Vec<_> = (1..=4u32)
        .map(|i| {
            let value = Arc::clone(&shared);
            thread::spawn(move || &*value * BigInteger::from(i))
        })
        .collect();

    let results: Vec<BigInteger> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(*shared, BigInteger::from(u128::MAX));
    assert_eq!(results[3], BigInteger::from(u128::MAX).shift_left(2));
}
