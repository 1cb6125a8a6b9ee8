//! Rounding doubles to a number of fractional decimal digits.
//!
//! Rounding is performed on the exact binary value of the input rather than on its shortest
//! decimal representation, which is why `floor(12.52, 2)` is `12.51`: the double closest to
//! `12.52` is `12.519999999999999573674358543939888477325439453125`. The decimal result is then
//! converted back to the nearest double with big integer arithmetic, so no precision is lost
//! along the way.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;

use crate::float::{self, FloatParts, EXPONENT_BIAS, IMPLICIT_BIT, SIGNIFICAND_BITS};
use crate::pow::{power_of_10, power_of_5};
use crate::{Error, Result};

/// Largest number of fractional decimal digits a double can be rounded to.
pub const MAX_PRECISION: u32 = 15;

/// Doubles with this many binary fractional digits or more are smaller in magnitude than half of
/// `10^-MAX_PRECISION`, so their rounded value only depends on their sign and the rounding
/// direction.
pub const MAX_DIGITS: i32 = 104;

/// The direction in which a value is rounded to the requested number of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards negative infinity
    Floor,
    /// Towards positive infinity
    Ceil,
    /// To the nearest value, with exact midpoints of the decimal expansion rounded away from
    /// zero
    HalfUp,
}

impl Rounding {
    /// Rounds `value` to an integral double in this direction.
    fn integral(self, value: f64) -> f64 {
        match self {
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
            Rounding::HalfUp => value.round(),
        }
    }

    /// Applies the direction to the magnitude truncated to the requested precision, given the
    /// next decimal digit.
    fn apply(self, negative: bool, truncated: BigUint, next_digit: &BigUint) -> BigUint {
        match (self, negative) {
            (Rounding::Floor, true) | (Rounding::Ceil, false) => truncated + 1u32,
            (Rounding::HalfUp, _) if *next_digit >= BigUint::from(5u32) => truncated + 1u32,
            _ => truncated,
        }
    }

    /// Result for a non-zero value too small to have a digit at any valid precision.
    fn tiny(self, negative: bool, precision: u32) -> f64 {
        let unit = 1.0 / 10f64.powi(precision as i32);
        match (self, negative) {
            (Rounding::Ceil, false) => unit,
            (Rounding::Floor, true) => -unit,
            (_, true) => -0.0,
            (_, false) => 0.0,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rounding::Floor => "floor",
            Rounding::Ceil => "ceil",
            Rounding::HalfUp => "half_up",
        })
    }
}

/// Error type for the [`FromStr`] implementation for [`Rounding`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rounding '{0}', expected one of 'floor', 'ceil', or 'half_up'")]
pub struct InvalidRounding(String);

impl FromStr for Rounding {
    type Err = InvalidRounding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            "half_up" => Ok(Self::HalfUp),
            _ => Err(InvalidRounding(s.to_owned())),
        }
    }
}

fn check_precision(precision: i32) -> Result<u32> {
    u32::try_from(precision)
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
        .ok_or(Error::InvalidPrecision(precision))
}

/// Rounds `value` down to `precision` fractional decimal digits.
///
/// ```rust
/// assert_eq!(exactfloat::floor(34.259, 2), Ok(34.25));
/// assert_eq!(exactfloat::floor(-56.5, 0), Ok(-57.0));
/// ```
pub fn floor(value: f64, precision: i32) -> Result<f64> {
    round(value, precision, Rounding::Floor)
}

/// Rounds `value` up to `precision` fractional decimal digits.
///
/// ```rust
/// assert_eq!(exactfloat::ceil(34.251, 2), Ok(34.26));
/// assert_eq!(exactfloat::ceil(-56.5, 0), Ok(-56.0));
/// ```
pub fn ceil(value: f64, precision: i32) -> Result<f64> {
    round(value, precision, Rounding::Ceil)
}

/// Rounds `value` to the nearest number with `precision` fractional decimal digits, rounding
/// midpoints of its exact decimal expansion away from zero.
///
/// ```rust
/// assert_eq!(exactfloat::round_half_up(5.5674, 3), Ok(5.567));
/// // The double closest to 5.5675 is slightly below it
/// assert_eq!(exactfloat::round_half_up(5.5675, 3), Ok(5.567));
/// ```
pub fn round_half_up(value: f64, precision: i32) -> Result<f64> {
    round(value, precision, Rounding::HalfUp)
}

/// Rounds `value` to `precision` fractional decimal digits in the given direction.
///
/// `precision` must be in `0..=MAX_PRECISION`, otherwise [`Error::InvalidPrecision`] is
/// returned. Zeros are returned unchanged, and a value that rounds to zero keeps its sign.
pub fn round(value: f64, precision: i32, rounding: Rounding) -> Result<f64> {
    let precision = check_precision(precision)?;

    if value == 0.0 {
        return Ok(value);
    }

    if precision == 0 {
        return Ok(rounding.integral(value));
    }

    let FloatParts {
        negative,
        exponent,
        significand,
    } = float::decompose(value);
    let (numerator, fraction_bits) = float::significand_with_implicit_bit(significand);

    // The magnitude of `value` is exactly `numerator / 2^digits`, which is also
    // `numerator * 5^digits / 10^digits`: `digits` is the number of fractional decimal digits
    // of its exact decimal expansion.
    let digits = fraction_bits as i32 - exponent as i32 + EXPONENT_BIAS;

    if digits >= MAX_DIGITS {
        trace!(value, digits, %rounding, "value below smallest decimal unit");
        return Ok(rounding.tiny(negative, precision));
    }

    if digits <= precision as i32 {
        trace!(value, digits, precision, "value already exact at precision");
        return Ok(value);
    }

    let digits = digits as u32;
    // Keep one digit past the requested precision to decide half-up rounding on
    let scaled =
        (BigUint::from(numerator) * power_of_5(digits)) / power_of_10(digits - precision - 1);
    let (truncated, next_digit) = scaled.div_rem(&BigUint::from(10u32));
    let units = rounding.apply(negative, truncated, &next_digit);

    if units.is_zero() {
        return Ok(if negative { -0.0 } else { 0.0 });
    }

    Ok(decimal_to_f64(negative, units, precision))
}

/// Returns the double nearest to `units / 10^precision`, ties to even.
///
/// `units` must be non-zero and `precision` must be non-zero.
// Scales the fraction so that its integer quotient has exactly 53 significant bits, then
// rounds on the remainder. See
// https://www.exploringbinary.com/correct-decimal-to-floating-point-using-big-integers/
fn decimal_to_f64(negative: bool, units: BigUint, precision: u32) -> f64 {
    let den = power_of_10(precision);
    let boundary: BigUint = den << SIGNIFICAND_BITS as usize;

    let (num, den, exponent) = if units >= boundary {
        let mut divisor = boundary;
        let mut exponent = SIGNIFICAND_BITS as i32;
        loop {
            let next: BigUint = &divisor << 1usize;
            if units < next {
                break;
            }
            divisor = next;
            exponent += 1;
        }
        (units, divisor >> SIGNIFICAND_BITS as usize, exponent)
    } else {
        let mut units = units;
        let mut exponent = SIGNIFICAND_BITS as i32;
        while units < boundary {
            units <<= 1usize;
            exponent -= 1;
        }
        (units, den.clone(), exponent)
    };

    let (quotient, remainder) = num.div_rem(&den);
    // `den` is a multiple of 10, so halving it is exact
    let half = &den >> 1usize;
    let mantissa = match remainder.cmp(&half) {
        Ordering::Greater => quotient + 1u32,
        Ordering::Equal if quotient.is_odd() => quotient + 1u32,
        _ => quotient,
    };

    // The quotient lies in [2^52, 2^53], so it fits in a single digit
    let mantissa = mantissa.iter_u64_digits().next().unwrap_or_default();
    trace!(mantissa, exponent, "reassembling rounded value");

    // Adding rather than or-ing the fraction carries a mantissa of 2^53 into the exponent
    let bits = ((negative as u64) << 63)
        + (((exponent + EXPONENT_BIAS) as u64) << SIGNIFICAND_BITS)
        + (mantissa - IMPLICIT_BIT);
    f64::from_bits(bits)
}
