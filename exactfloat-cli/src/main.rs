use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use exactfloat::{exact_ratio, parse_decimal, Rounding};
use tracing::debug;

/// Exact conversions between doubles and decimal text.
///
/// Values are read as the double nearest to the given decimal, and printed using the shortest
/// representation that reads back as the same double.
#[derive(Parser, Debug)]
#[command(name = "exactfloat", version)]
struct Options {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    logging: exactfloat_logging::Options,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Round a value down to a number of fractional digits
    Floor(RoundArgs),
    /// Round a value up to a number of fractional digits
    Ceil(RoundArgs),
    /// Round a value to the nearest number with the given fractional digits, rounding halfway
    /// cases away from zero
    Round(RoundArgs),
    /// Print the exact value of a double as a fraction with a power of two denominator
    Ratio {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Parse the decimal number at the start of the text, printing its value and the rest of the
    /// text
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(Args, Debug, Clone)]
struct RoundArgs {
    /// The value to round
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Number of fractional decimal digits to keep, between 0 and 15
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    precision: i32,
}

/// Parses `text` as a decimal number, rejecting trailing input.
fn parse_value(text: &str) -> Result<f64> {
    let (value, rest) = parse_decimal(text).with_context(|| format!("Invalid value {text:?}"))?;
    if !rest.is_empty() {
        bail!("Unexpected {rest:?} after the number in {text:?}");
    }
    Ok(value)
}

fn round(args: &RoundArgs, rounding: Rounding) -> Result<String> {
    let value = parse_value(&args.value)?;
    debug!(value, precision = args.precision, %rounding, "rounding");
    let rounded = exactfloat::round(value, args.precision, rounding)
        .with_context(|| format!("Failed to round {value:?} ({rounding})"))?;
    Ok(format!("{rounded:?}"))
}

fn run(command: &Command) -> Result<String> {
    match command {
        Command::Floor(args) => round(args, Rounding::Floor),
        Command::Ceil(args) => round(args, Rounding::Ceil),
        Command::Round(args) => round(args, Rounding::HalfUp),
        Command::Ratio { value } => {
            let (numerator, denominator) = exact_ratio(parse_value(value)?);
            Ok(format!("{numerator}/{denominator}"))
        }
        Command::Parse { text } => {
            let (value, rest) = parse_decimal(text)?;
            Ok(format!("{value:?} remainder={rest:?}"))
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse();
    options.logging.init()?;

    println!("{}", run(&options.command)?);
    Ok(())
}
