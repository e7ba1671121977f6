//! numerus - Convert integers to and from base-generalized Roman numerals
//!
//! Given a decimal integer, prints its numeral rendering in the chosen base;
//! given a numeral over the digits IVXLCDM, prints its integer value. The
//! base defaults to 16, the "hex Roman" system where I = 1, V = 8, X = 16,
//! L = 128, C = 256, D = 2048 and M = 4096.

use anyhow::{bail, Context, Result};
use clap::Parser;
use numerus_core::{is_valid_alphabet, NumeralCodec, ALPHABET};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Convert integers to and from base-generalized Roman numerals
#[derive(Parser, Debug)]
#[command(name = "numerus")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
    numerus 17         prints XI
    numerus 17 -b 8    prints XXI
    numerus 17 -b 10   prints XVII
    numerus XI         prints 17
    numerus XXI -b 8   prints 17
    numerus --table -b 10    prints the classical value table")]
struct Cli {
    /// A base-10 integer to encode, or a numeral over IVXLCDM to decode
    #[arg(required_unless_present = "table")]
    input: Option<String>,

    /// Numeral base
    #[arg(short, long, default_value = "16")]
    base: u32,

    /// Print the derived value table and exit
    #[arg(long, conflicts_with = "input")]
    table: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How a raw command-line argument should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    /// All ASCII decimal digits: parse and encode
    Integer,
    /// Only numeral digits: decode
    Numeral,
    /// Neither form
    Unrecognized,
}

fn classify(input: &str) -> InputKind {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        InputKind::Integer
    } else if is_valid_alphabet(input) {
        InputKind::Numeral
    } else {
        InputKind::Unrecognized
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let codec = NumeralCodec::new(cli.base)
        .with_context(|| format!("cannot build a numeral system for base {}", cli.base))?;

    if cli.table {
        print_table(&codec);
        return Ok(());
    }

    let Some(input) = cli.input else {
        bail!("an input value is required unless --table is given");
    };

    match classify(&input) {
        InputKind::Integer => {
            let value: u64 = input
                .parse()
                .with_context(|| format!("integer '{}' does not fit in 64 bits", input))?;
            debug!("encoding {} in base {}", value, cli.base);
            let numeral = codec.encode(value)?;
            println!("{}", numeral);
        }
        InputKind::Numeral => {
            debug!("decoding '{}' in base {}", input, cli.base);
            let value = codec.decode(&input)?;
            println!("{}", value);
        }
        InputKind::Unrecognized => {
            bail!(
                "input '{}' is neither a base-10 integer nor a numeral over {}",
                input,
                ALPHABET
            );
        }
    }

    Ok(())
}

/// Print the derived value table, largest magnitude first
fn print_table(codec: &NumeralCodec) {
    println!(
        "base {} value table (encodable range 1..={}):",
        codec.base(),
        codec.max_value()
    );
    for entry in codec.table().entries() {
        println!("{:>4}  {}", entry.symbol, entry.magnitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(classify("17"), InputKind::Integer);
        assert_eq!(classify("0"), InputKind::Integer);
        assert_eq!(classify("4096"), InputKind::Integer);
    }

    #[test]
    fn test_classify_numeral() {
        assert_eq!(classify("XI"), InputKind::Numeral);
        assert_eq!(classify("MMCMXLII"), InputKind::Numeral);
        // empty input decodes to 0, as the codec does
        assert_eq!(classify(""), InputKind::Numeral);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("ABA"), InputKind::Unrecognized);
        assert_eq!(classify("10ab7"), InputKind::Unrecognized);
        assert_eq!(classify("17X"), InputKind::Unrecognized);
        assert_eq!(classify("-4"), InputKind::Unrecognized);
        assert_eq!(classify("xi"), InputKind::Unrecognized);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
