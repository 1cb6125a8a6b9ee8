//! Parsing the decimal number at the start of a string into the nearest double.

use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use tracing::debug;

use crate::{Error, Result};

/// The pieces of a decimal literal, as borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decimal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: Option<&'a str>,
    exponent: Option<&'a str>,
}

impl Decimal<'_> {
    /// Writes the unsigned literal in a form that always has a fractional part.
    fn magnitude_literal(&self) -> String {
        let mut literal = String::with_capacity(
            self.integer.len()
                + self.fraction.map_or(1, str::len)
                + self.exponent.map_or(0, str::len)
                + 2,
        );
        literal.push_str(self.integer);
        literal.push('.');
        literal.push_str(self.fraction.unwrap_or("0"));
        if let Some(exponent) = self.exponent {
            literal.push('e');
            literal.push_str(exponent);
        }
        literal
    }
}

fn fraction(i: &str) -> IResult<&str, &str> {
    preceded(char('.'), digit1)(i)
}

fn exponent(i: &str) -> IResult<&str, &str> {
    preceded(one_of("eE"), recognize(pair(opt(one_of("+-")), digit1)))(i)
}

fn decimal(i: &str) -> IResult<&str, Decimal<'_>> {
    let (i, (sign, integer, fraction, exponent)) =
        tuple((opt(one_of("+-")), digit1, opt(fraction), opt(exponent)))(i)?;
    Ok((
        i,
        Decimal {
            negative: sign == Some('-'),
            integer,
            fraction,
            exponent,
        },
    ))
}

/// Parses the decimal number at the start of `text`, returning the nearest double and the
/// unconsumed rest of the input.
///
/// The accepted grammar is `["-"|"+"] digit+ ["." digit+] [("e"|"E") ["-"|"+"] digit+]`, matched
/// greedily. A decimal point or exponent marker that isn't followed by digits is left in the
/// remainder. A leading `-` is applied to the parsed magnitude, so `"-0"` is negative zero.
///
/// Returns [`Error::MalformedInput`] if `text` doesn't start with a digit (after an optional
/// sign), and [`Error::MagnitudeOverflow`] if the number is too large to be represented as a
/// finite double.
///
/// ```rust
/// use exactfloat::parse_decimal;
///
/// assert_eq!(parse_decimal("56.5xyz"), Ok((56.5, "xyz")));
/// assert_eq!(parse_decimal("1.e5"), Ok((1.0, ".e5")));
/// assert!(parse_decimal(".12").is_err());
/// ```
pub fn parse_decimal(text: &str) -> Result<(f64, &str)> {
    let (remainder, decimal) = decimal(text).map_err(|_| {
        debug!(text, "no decimal number at start of input");
        Error::MalformedInput(text.to_owned())
    })?;
    let consumed = &text[..text.len() - remainder.len()];

    let magnitude: f64 = decimal
        .magnitude_literal()
        .parse()
        .map_err(|_| Error::MalformedInput(text.to_owned()))?;

    if magnitude.is_infinite() {
        debug!(consumed, "decimal number overflows");
        return Err(Error::MagnitudeOverflow(consumed.to_owned()));
    }

    let value = if decimal.negative {
        -magnitude
    } else {
        magnitude
    };
    Ok((value, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<(f64, &str)> {
        parse_decimal(text)
    }

    #[test]
    fn integers() {
        assert_eq!(parse("34"), Ok((34.0, "")));
        assert_eq!(parse("-127"), Ok((-127.0, "")));
        assert_eq!(parse("+12"), Ok((12.0, "")));
        assert_eq!(parse("0012"), Ok((12.0, "")));
    }

    #[test]
    fn fractions() {
        assert_eq!(parse("56.5xyz"), Ok((56.5, "xyz")));
        assert_eq!(parse("-0.125"), Ok((-0.125, "")));
        assert_eq!(parse("1.500000000000000000000000000000"), Ok((1.5, "")));
        assert_eq!(parse("12.52 and more"), Ok((12.52, " and more")));
    }

    #[test]
    fn exponents() {
        assert_eq!(parse("1e3"), Ok((1000.0, "")));
        assert_eq!(parse("1.5E+2"), Ok((150.0, "")));
        assert_eq!(parse("-25e-1rest"), Ok((-2.5, "rest")));
        assert_eq!(parse("2.5e-400"), Ok((0.0, "")));
    }

    #[test]
    fn dangling_markers_are_left_in_remainder() {
        assert_eq!(parse("1."), Ok((1.0, ".")));
        assert_eq!(parse("1.x"), Ok((1.0, ".x")));
        assert_eq!(parse("1e"), Ok((1.0, "e")));
        assert_eq!(parse("1e+"), Ok((1.0, "e+")));
        assert_eq!(parse("1.5e-x"), Ok((1.5, "e-x")));
        assert_eq!(parse("3.e2"), Ok((3.0, ".e2")));
    }

    #[test]
    fn negative_zero() {
        let (value, rest) = parse("-0").unwrap();
        assert_eq!(value.to_bits(), (-0.0f64).to_bits());
        assert_eq!(rest, "");

        let (value, _) = parse("-0.0e10").unwrap();
        assert!(value.is_sign_negative());

        let (value, _) = parse("+0").unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn malformed() {
        for text in [".12", "pi", "", "-", "+.5", "-e5", " 1", "--1"] {
            assert_eq!(
                parse(text),
                Err(Error::MalformedInput(text.to_owned())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn overflow() {
        assert_eq!(
            parse("1.7976931348623159e+308"),
            Err(Error::MagnitudeOverflow("1.7976931348623159e+308".to_owned()))
        );
        assert_eq!(
            parse("-1e309 tail"),
            Err(Error::MagnitudeOverflow("-1e309".to_owned()))
        );
        assert_eq!(parse("1.7976931348623157e+308"), Ok((f64::MAX, "")));
    }

    #[test]
    fn magnitude_literal_always_has_fraction() {
        let (_, d) = decimal("-12e5").unwrap();
        assert_eq!(d.magnitude_literal(), "12.0e5");
        let (_, d) = decimal("7.25").unwrap();
        assert_eq!(d.magnitude_literal(), "7.25");
        let (_, d) = decimal("3E-2").unwrap();
        assert_eq!(d.magnitude_literal(), "3.0e-2");
    }
}
