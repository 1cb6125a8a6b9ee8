//! Exact rational value of a double.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::float::FloatParts;

/// Returns the exact value of `value` as an unsigned fraction in lowest terms:
/// `(negative, numerator, log2(denominator))`.
///
/// The numerator is odd unless the denominator is 1. Zeros of either sign map to
/// `(false, 0, 0)`.
pub fn exact_ratio_parts(value: f64) -> (bool, BigUint, u32) {
    let parts = FloatParts::from(value);
    let (integer, exponent) = parts.reduced_integer();
    if integer == 0 {
        return (false, BigUint::default(), 0);
    }

    let numerator = BigUint::from(integer);
    if exponent >= 0 {
        (parts.negative, numerator << exponent as usize, 0)
    } else {
        (parts.negative, numerator, exponent.unsigned_abs())
    }
}

/// Returns `value` as an exact fraction `(numerator, denominator)`.
///
/// The denominator is always a power of two and the fraction is fully reduced, so the numerator
/// is odd whenever the denominator is greater than 1. Both `0.0` and `-0.0` give `(0, 1)`.
///
/// ```rust
/// use exactfloat::exact_ratio;
///
/// let (numerator, denominator) = exact_ratio(-0.75);
/// assert_eq!(numerator, (-3).into());
/// assert_eq!(denominator, 4u32.into());
/// ```
pub fn exact_ratio(value: f64) -> (BigInt, BigUint) {
    let (negative, numerator, shift) = exact_ratio_parts(value);
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    (
        BigInt::from_biguint(sign, numerator),
        BigUint::one() << shift as usize,
    )
}
