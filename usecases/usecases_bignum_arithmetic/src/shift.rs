//! Bit shifts on magnitudes.

use entities_bignum::{normalize, Digit, DIGIT_BITS};

/// `a << bits`
pub fn shl_magnitude(a: &[Digit], bits: u64) -> Vec<Digit> {
    if a.is_empty() {
        return Vec::new();
    }
    let whole = (bits / DIGIT_BITS as u64) as usize;
    let rem = (bits % DIGIT_BITS as u64) as u32;

    let mut out = Vec::with_capacity(whole + a.len() + 1);
    out.resize(whole, 0);
    if rem == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry: Digit = 0;
        for &digit in a {
            out.push((digit << rem) | carry);
            carry = digit >> (DIGIT_BITS - rem);
        }
        out.push(carry);
    }
    normalize(out)
}

/// `a >> bits`, discarding shifted-out bits
pub fn shr_magnitude(a: &[Digit], bits: u64) -> Vec<Digit> {
    let whole = bits / DIGIT_BITS as u64;
    if whole >= a.len() as u64 {
        return Vec::new();
    }
    let src = &a[whole as usize..];
    let rem = (bits % DIGIT_BITS as u64) as u32;
    if rem == 0 {
        return normalize(src.to_vec());
    }

    let out = src
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            let high = src.get(i + 1).copied().unwrap_or(0);
            (digit >> rem) | (high << (DIGIT_BITS - rem))
        })
        .collect();
    normalize(out)
}
