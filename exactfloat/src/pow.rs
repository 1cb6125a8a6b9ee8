//! Precomputed powers of five and ten used to move between binary and decimal scales.

use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Largest exponent stored in the power tables.
pub const MAX_EXPONENT: u32 = 104;

lazy_static! {
    static ref POWERS_OF_5: Vec<BigUint> = powers(5);
    static ref POWERS_OF_10: Vec<BigUint> = powers(10);
}

fn powers(base: u32) -> Vec<BigUint> {
    let base = BigUint::from(base);
    let mut acc = BigUint::from(1u32);
    let mut table = Vec::with_capacity(MAX_EXPONENT as usize + 1);
    for _ in 0..=MAX_EXPONENT {
        table.push(acc.clone());
        acc *= &base;
    }
    table
}

/// Returns `5^n`. Callers keep `n` within `0..=MAX_EXPONENT`.
pub fn power_of_5(n: u32) -> &'static BigUint {
    debug_assert!(n <= MAX_EXPONENT);
    &POWERS_OF_5[n as usize]
}

/// Returns `10^n`. Callers keep `n` within `0..=MAX_EXPONENT`.
pub fn power_of_10(n: u32) -> &'static BigUint {
    debug_assert!(n <= MAX_EXPONENT);
    &POWERS_OF_10[n as usize]
}
