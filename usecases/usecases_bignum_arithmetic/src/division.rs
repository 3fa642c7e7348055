//! Magnitude Division
//!
//! Long division producing the unique `(quotient, remainder)` with
//! `remainder < divisor` and `dividend == quotient * divisor + remainder`.
//! Signs are resolved by the caller (see [`crate::signed`]).
//!
//! Single-digit divisors take a short-division path; longer divisors use
//! Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) with the divisor normalized so
//! its top bit is set.

use crate::shift::{shl_magnitude, shr_magnitude};
use entities_bignum::{compare_magnitude, normalize, BigIntError, Digit, DoubleDigit, Result, DIGIT_BITS};
use std::cmp::Ordering;

const BASE: DoubleDigit = 1 << DIGIT_BITS;
const LOW_MASK: DoubleDigit = BASE - 1;

/// Divide by a single nonzero digit, returning `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub fn div_rem_small(a: &[Digit], divisor: Digit) -> (Vec<Digit>, Digit) {
    assert!(divisor != 0, "short division by zero");
    let divisor = divisor as DoubleDigit;
    let mut quotient = vec![0; a.len()];
    let mut rem: DoubleDigit = 0;
    for (i, &digit) in a.iter().enumerate().rev() {
        let cur = (rem << DIGIT_BITS) | digit as DoubleDigit;
        quotient[i] = (cur / divisor) as Digit;
        rem = cur % divisor;
    }
    (normalize(quotient), rem as Digit)
}

/// `(dividend / divisor, dividend % divisor)` on magnitudes.
///
/// Fails with [`BigIntError::DivisionByZero`] if `divisor` is zero.
pub fn div_mod_magnitude(dividend: &[Digit], divisor: &[Digit]) -> Result<(Vec<Digit>, Vec<Digit>)> {
    let dividend = normalize(dividend.to_vec());
    let divisor = normalize(divisor.to_vec());

    if divisor.is_empty() {
        tracing::debug!(dividend_len = dividend.len(), "division by zero");
        return Err(BigIntError::DivisionByZero);
    }
    if compare_magnitude(&dividend, &divisor) == Ordering::Less {
        return Ok((Vec::new(), dividend));
    }
    if divisor.len() == 1 {
        tracing::trace!(dividend_len = dividend.len(), "short division");
        let (q, r) = div_rem_small(&dividend, divisor[0]);
        return Ok((q, normalize(vec![r])));
    }

    tracing::trace!(
        dividend_len = dividend.len(),
        divisor_len = divisor.len(),
        "long division"
    );
    Ok(knuth_divide(&dividend, &divisor))
}

/// Algorithm D. Requires `divisor.len() >= 2` and `dividend >= divisor`,
/// both normalized.
fn knuth_divide(dividend: &[Digit], divisor: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let shift = divisor[divisor.len() - 1].leading_zeros() as u64;
    let v = shl_magnitude(divisor, shift);
    let mut u = shl_magnitude(dividend, shift);
    u.resize(dividend.len() + 1, 0);

    let n = v.len();
    let m = u.len() - n - 1;
    let v_top = v[n - 1] as DoubleDigit;
    let v_next = v[n - 2] as DoubleDigit;
    let mut quotient = vec![0; m + 1];

    for j in (0..=m).rev() {
        // Estimate the quotient digit from the top two digits of the window
        let num = ((u[j + n] as DoubleDigit) << DIGIT_BITS) | u[j + n - 1] as DoubleDigit;
        let mut q_hat = num / v_top;
        let mut r_hat = num % v_top;
        while q_hat >= BASE || q_hat * v_next > ((r_hat << DIGIT_BITS) | u[j + n - 2] as DoubleDigit) {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= BASE {
                break;
            }
        }

        // Multiply and subtract q_hat * v from the window
        let mut k: i64 = 0;
        for i in 0..n {
            let p = q_hat * v[i] as DoubleDigit;
            let t = u[i + j] as i64 - k - (p & LOW_MASK) as i64;
            u[i + j] = t as Digit;
            k = (p >> DIGIT_BITS) as i64 - (t >> DIGIT_BITS);
        }
        let t = u[j + n] as i64 - k;
        u[j + n] = t as Digit;

        if t < 0 {
            // Estimate was one too large; add the divisor back
            q_hat -= 1;
            let mut carry: DoubleDigit = 0;
            for i in 0..n {
                let sum = u[i + j] as DoubleDigit + v[i] as DoubleDigit + carry;
                u[i + j] = sum as Digit;
                carry = sum >> DIGIT_BITS;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Digit);
        }
        quotient[j] = q_hat as Digit;
    }

    let remainder = shr_magnitude(&u[..n], shift);
    (normalize(quotient), remainder)
}
