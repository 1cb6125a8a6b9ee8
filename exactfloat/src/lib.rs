//! Correctly-rounded conversions between doubles and decimal representations.
//!
//! Naive decimal rounding of a binary double is lossy and gives results that depend on how the
//! double happens to be printed. Everything in this crate works on the exact value of a double
//! instead, using big integer arithmetic:
//!
//! * [`floor`], [`ceil`] and [`round_half_up`] round a double to a number of fractional decimal
//!   digits and return the double nearest to the result.
//! * [`exact_ratio`] returns the exact value of a double as a fraction with a power of two
//!   denominator.
//! * [`parse_decimal`] reads the decimal number at the start of a string into the nearest
//!   double.
//!
//! ```rust
//! // The double nearest to 12.52 is slightly below it
//! assert_eq!(exactfloat::floor(12.52, 2), Ok(12.51));
//! assert_eq!(exactfloat::ceil(-12.52, 2), Ok(-12.51));
//! ```
//!
//! All functions are pure and can be called concurrently from any number of threads.

mod error;
/// Float holds the functions that take a double apart into its IEEE-754 fields.
pub mod float;
mod parse;
mod pow;
mod ratio;
mod round;

pub use error::{Error, Result};
pub use float::{decompose, FloatParts};
pub use parse::parse_decimal;
pub use ratio::{exact_ratio, exact_ratio_parts};
pub use round::{
    ceil, floor, round, round_half_up, InvalidRounding, Rounding, MAX_DIGITS, MAX_PRECISION,
};
