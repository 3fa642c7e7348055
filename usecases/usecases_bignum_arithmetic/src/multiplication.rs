//! Magnitude Multiplication
//!
//! Schoolbook O(n·m) convolution for small operands and Karatsuba for
//! operands where both sides have at least [`KARATSUBA_THRESHOLD`] digits.
//! Both paths produce identical results; only the cost differs.

use crate::additive::{add_assign_at, add_magnitude, sub_magnitude};
use entities_bignum::{normalize, Digit, DoubleDigit, DIGIT_BITS};

/// Minimum digit count of the shorter operand before Karatsuba is used
pub const KARATSUBA_THRESHOLD: usize = 32;

/// `a * b` on magnitudes
pub fn mul_magnitude(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) >= KARATSUBA_THRESHOLD {
        tracing::trace!(a_len = a.len(), b_len = b.len(), "karatsuba multiplication");
    }
    normalize(karatsuba(a, b))
}

/// `a * factor + addend`, the step used when accumulating digits of a
/// different base
pub fn mul_small_add(a: &[Digit], factor: Digit, addend: Digit) -> Vec<Digit> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = addend as DoubleDigit;
    for &digit in a {
        let t = digit as DoubleDigit * factor as DoubleDigit + carry;
        out.push(t as Digit);
        carry = t >> DIGIT_BITS;
    }
    if carry != 0 {
        out.push(carry as Digit);
    }
    normalize(out)
}

fn schoolbook(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleDigit = 0;
        for (j, &y) in b.iter().enumerate() {
            // (2^32-1)^2 + 2(2^32-1) == 2^64-1, so this cannot overflow
            let t = x as DoubleDigit * y as DoubleDigit + out[i + j] as DoubleDigit + carry;
            out[i + j] = t as Digit;
            carry = t >> DIGIT_BITS;
        }
        out[i + b.len()] = carry as Digit;
    }
    out
}

fn split(x: &[Digit], at: usize) -> (&[Digit], &[Digit]) {
    x.split_at(at.min(x.len()))
}

/// Unnormalized product; `a` and `b` may carry high zero digits
fn karatsuba(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        return schoolbook(a, b);
    }

    let half = a.len().max(b.len()) / 2;
    let (a0, a1) = split(a, half);
    let (b0, b1) = split(b, half);

    let z0 = normalize(karatsuba(a0, b0));
    let z2 = normalize(karatsuba(a1, b1));
    let a_sum = add_magnitude(a0, a1);
    let b_sum = add_magnitude(b0, b1);
    let z1 = normalize(karatsuba(&a_sum, &b_sum));
    let z1 = sub_magnitude(&sub_magnitude(&z1, &z0), &z2);

    let mut out = Vec::with_capacity(a.len() + b.len());
    add_assign_at(&mut out, &z0, 0);
    add_assign_at(&mut out, &z1, half);
    add_assign_at(&mut out, &z2, 2 * half);
    out
}
