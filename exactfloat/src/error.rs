use thiserror::Error;

use crate::round::MAX_PRECISION;

/// Errors returned by the conversions in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rounding operation was asked for a number of fractional digits outside of
    /// `0..=MAX_PRECISION`.
    ///
    /// The precision is never clamped to the nearest valid value.
    #[error("invalid precision {0}, expected an integer between 0 and {MAX_PRECISION}")]
    InvalidPrecision(i32),

    /// The input does not start with a decimal number.
    #[error("no decimal number at the start of {0:?}")]
    MalformedInput(String),

    /// The input starts with a well-formed decimal number whose magnitude is larger than the
    /// largest finite double.
    #[error("{0} is too large to be represented as a finite double")]
    MagnitudeOverflow(String),
}

/// Result alias for operations that fail with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
