use exactfloat::{
    ceil, exact_ratio, floor, parse_decimal, round, round_half_up, Error, Rounding,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
use test_strategy::proptest;

const ALL_ROUNDINGS: [Rounding; 3] = [Rounding::Floor, Rounding::Ceil, Rounding::HalfUp];

fn assert_same_bits(got: f64, want: f64) {
    assert_eq!(
        got.to_bits(),
        want.to_bits(),
        "expected {want:?}, got {got:?}"
    );
}

#[test]
fn literal_scenarios() {
    exactfloat_logging::init_test_logging();

    assert_eq!(floor(12.52, 2), Ok(12.51));
    assert_eq!(ceil(-12.52, 2), Ok(-12.51));
    assert_eq!(round_half_up(5.5675, 3), Ok(5.567));
    assert_same_bits(round_half_up(-0.01, 0).unwrap(), -0.0);
    assert_same_bits(ceil(-0.5, 0).unwrap(), -0.0);
    assert_same_bits(floor(-0.5, 0).unwrap(), -1.0);
}

#[test]
fn invalid_precision() {
    exactfloat_logging::init_test_logging();

    for rounding in ALL_ROUNDINGS {
        for precision in [-1, 16, i32::MIN, i32::MAX] {
            assert_eq!(
                round(12.52, precision, rounding),
                Err(Error::InvalidPrecision(precision))
            );
        }
    }
}

#[test]
fn parse_scenarios() {
    exactfloat_logging::init_test_logging();

    assert_eq!(parse_decimal("34"), Ok((34.0, "")));
    assert_eq!(parse_decimal("56.5xyz"), Ok((56.5, "xyz")));
    assert_eq!(
        parse_decimal(".12"),
        Err(Error::MalformedInput(".12".to_owned()))
    );
    assert_eq!(
        parse_decimal("pi"),
        Err(Error::MalformedInput("pi".to_owned()))
    );
    assert!(matches!(
        parse_decimal("1.7976931348623159e+308"),
        Err(Error::MagnitudeOverflow(_))
    ));
}

#[test]
fn ratio_of_zeros() {
    for zero in [0.0, -0.0] {
        assert_eq!(exact_ratio(zero), (BigInt::from(0), 1u32.into()));
    }
}

#[proptest]
fn floor_and_ceil_bracket_value(
    #[strategy(POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO)] value: f64,
    #[strategy(0i32..=15)] precision: i32,
) {
    let down = floor(value, precision).unwrap();
    let up = ceil(value, precision).unwrap();
    assert!(down <= value, "floor({value:?}, {precision}) = {down:?}");
    assert!(value <= up, "ceil({value:?}, {precision}) = {up:?}");
}

#[proptest]
fn exact_values_are_fixed_points(
    #[strategy(-(1i64 << 40)..(1i64 << 40))] mantissa: i64,
    #[strategy(0i32..=15)] precision: i32,
    #[strategy(0i32..=#precision)] shift: i32,
) {
    // A multiple of 2^-shift has exactly `shift` fractional decimal digits
    let value = mantissa as f64 / 2f64.powi(shift);
    for rounding in ALL_ROUNDINGS {
        assert_eq!(round(value, precision, rounding), Ok(value));
    }
}

#[proptest]
fn precision_zero_matches_std(#[strategy(POSITIVE | NEGATIVE | NORMAL | SUBNORMAL)] value: f64) {
    assert_same_bits(floor(value, 0).unwrap(), value.floor());
    assert_same_bits(ceil(value, 0).unwrap(), value.ceil());
    assert_same_bits(round_half_up(value, 0).unwrap(), value.round());
}

#[proptest]
fn round_half_up_is_idempotent(
    #[strategy(-1e6f64..1e6)] value: f64,
    #[strategy(0i32..=8)] precision: i32,
) {
    let once = round_half_up(value, precision).unwrap();
    let twice = round_half_up(once, precision).unwrap();
    assert_same_bits(twice, once);
}

#[proptest]
fn ratio_brackets_rounded_values(
    #[strategy(POSITIVE | NEGATIVE | NORMAL)] value: f64,
    #[strategy(1i32..=15)] precision: i32,
) {
    // Compare the exact fractions by cross-multiplication rather than as doubles
    let (n, d) = exact_ratio(value);
    let (down_n, down_d) = exact_ratio(floor(value, precision).unwrap());
    let (up_n, up_d) = exact_ratio(ceil(value, precision).unwrap());
    assert!(down_n * BigInt::from(d.clone()) <= n.clone() * BigInt::from(down_d));
    assert!(n * BigInt::from(up_d) <= up_n * BigInt::from(d));
}

#[proptest]
fn parse_reads_back_formatted_values(
    #[strategy(POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO)] value: f64,
) {
    let text = format!("{value:?}");
    let (parsed, rest) = parse_decimal(&text).unwrap();
    assert_same_bits(parsed, value);
    assert_eq!(rest, "");
}
