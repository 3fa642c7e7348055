//! Magnitude addition and subtraction.

use entities_bignum::{compare_magnitude, normalize, Digit, DoubleDigit, DIGIT_BITS};
use std::cmp::Ordering;

/// `a + b` on magnitudes of any lengths
pub fn add_magnitude(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleDigit = 0;
    for (i, &digit) in long.iter().enumerate() {
        let sum = digit as DoubleDigit + short.get(i).copied().unwrap_or(0) as DoubleDigit + carry;
        out.push(sum as Digit);
        carry = sum >> DIGIT_BITS;
    }
    if carry != 0 {
        out.push(carry as Digit);
    }
    normalize(out)
}

/// `a - b` on magnitudes.
///
/// # Panics
///
/// Panics if `a < b`. Callers order the operands by sign logic first, so
/// reaching the panic is a bug in the caller, not a user error.
pub fn sub_magnitude(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    assert!(
        compare_magnitude(a, b) != Ordering::Less,
        "magnitude subtraction underflow: minuend is smaller than subtrahend"
    );
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for (i, &digit) in a.iter().enumerate() {
        let (partial, under1) = digit.overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (diff, under2) = partial.overflowing_sub(borrow as Digit);
        out.push(diff);
        borrow = under1 || under2;
    }
    debug_assert!(!borrow);
    normalize(out)
}

/// In-place `acc += src << (offset digits)`, growing `acc` as needed
pub(crate) fn add_assign_at(acc: &mut Vec<Digit>, src: &[Digit], offset: usize) {
    if acc.len() < offset + src.len() {
        acc.resize(offset + src.len(), 0);
    }
    let mut carry: DoubleDigit = 0;
    let mut i = offset;
    for &digit in src {
        let sum = acc[i] as DoubleDigit + digit as DoubleDigit + carry;
        acc[i] = sum as Digit;
        carry = sum >> DIGIT_BITS;
        i += 1;
    }
    while carry != 0 {
        if i == acc.len() {
            acc.push(0);
        }
        let sum = acc[i] as DoubleDigit + carry;
        acc[i] = sum as Digit;
        carry = sum >> DIGIT_BITS;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_carry_chain() {
        assert_eq!(add_magnitude(&[u32::MAX, u32::MAX], &[1]), vec![0, 0, 1]);
        assert_eq!(add_magnitude(&[1], &[u32::MAX, u32::MAX]), vec![0, 0, 1]);
        assert_eq!(add_magnitude(&[], &[]), Vec::<Digit>::new());
        assert_eq!(add_magnitude(&[5], &[]), vec![5]);
    }

    #[test]
    fn test_sub_with_borrow_chain() {
        assert_eq!(sub_magnitude(&[0, 0, 1], &[1]), vec![u32::MAX, u32::MAX]);
        assert_eq!(sub_magnitude(&[7, 3], &[7, 3]), Vec::<Digit>::new());
        assert_eq!(sub_magnitude(&[10], &[]), vec![10]);
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn test_sub_contract_violation_panics() {
        sub_magnitude(&[1], &[2]);
    }

    #[test]
    fn test_add_assign_at_offset() {
        let mut acc = vec![u32::MAX, u32::MAX];
        add_assign_at(&mut acc, &[1], 1);
        assert_eq!(acc, vec![u32::MAX, 0, 1]);

        let mut acc = Vec::new();
        add_assign_at(&mut acc, &[3, 4], 2);
        assert_eq!(acc, vec![0, 0, 3, 4]);
    }
}
