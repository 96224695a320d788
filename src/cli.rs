// ── Command-line interface ────────────────────────────────────────────────────
//
// Argument layout mirrors the tool's one job: a source platform, a target
// platform, and one number.  Unknown platform names are rejected by clap
// with usage text before anything is constructed.

use clap::Parser;

use crate::convert::convert;
use crate::error::Result;
use crate::platform::{Platform, PlatformAdapter};
use crate::report::ConversionReport;

/// Convert a mouse sensitivity value between platform-native scales.
#[derive(Parser, Debug)]
#[command(name = "sensconv", version, about)]
pub(crate) struct Cli {
    /// Source platform
    #[arg(value_enum)]
    pub(crate) from_platform: Platform,

    /// Target platform
    #[arg(value_enum)]
    pub(crate) to_platform: Platform,

    /// Sensitivity value (tick for windows, float for kde)
    // KDE's range is [-1.0, 1.0]; without this, clap reads "-0.5" as a flag.
    #[arg(allow_negative_numbers = true)]
    pub(crate) value: f64,

    /// Emit a one-line JSON report instead of the plain summary
    #[arg(long)]
    pub(crate) json: bool,
}

/// Run one conversion and print the result.
///
/// Nothing is printed before the conversion has fully succeeded, so a
/// failure never leaves partial output behind.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let source = cli.from_platform.adapter();
    let destination = cli.to_platform.adapter();
    let input = cli.from_platform.native_value(cli.value)?;

    if cli.json {
        // The report carries the intermediate multiplier, so run the two
        // steps here instead of going through `convert`.
        let multiplier = source.to_neutral(&input)?;
        let converted = destination.from_neutral(multiplier)?;
        let report =
            ConversionReport::new(cli.from_platform, cli.to_platform, &input, multiplier, &converted);
        println!("{}", serde_json::to_string(&report)?);
    } else {
        let converted = convert(source, destination, &input)?;
        println!("Converted sensitivity: {converted}");
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensError;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from(["sensconv", "windows", "kde", "12"]).expect("parse");
        assert_eq!(cli.from_platform, Platform::Windows);
        assert_eq!(cli.to_platform, Platform::Kde);
        assert_eq!(cli.value, 12.0);
        assert!(!cli.json);
    }

    #[test]
    fn parses_negative_kde_value() {
        let cli = Cli::try_parse_from(["sensconv", "kde", "windows", "-0.5"]).expect("parse");
        assert_eq!(cli.from_platform, Platform::Kde);
        assert_eq!(cli.value, -0.5);
    }

    #[test]
    fn parses_json_flag() {
        let cli = Cli::try_parse_from(["sensconv", "windows", "kde", "12", "--json"]).expect("parse");
        assert!(cli.json);
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Cli::try_parse_from(["sensconv", "macos", "kde", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_value() {
        let result = Cli::try_parse_from(["sensconv", "windows", "kde"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_numeric_value() {
        let result = Cli::try_parse_from(["sensconv", "windows", "kde", "fast"]);
        assert!(result.is_err());
    }

    /// Range validation happens in `run`, after parsing: tick 25 parses fine
    /// as a number but fails construction before any conversion runs.
    #[test]
    fn run_fails_on_out_of_range_input() {
        let cli = Cli::try_parse_from(["sensconv", "windows", "kde", "25"]).expect("parse");
        let err = run(&cli).expect_err("tick 25 is out of range");
        assert!(matches!(err, SensError::Validation { platform: "windows", .. }));
    }

    #[test]
    fn run_succeeds_on_valid_input() {
        let cli = Cli::try_parse_from(["sensconv", "windows", "kde", "12"]).expect("parse");
        run(&cli).expect("tick 12 converts cleanly");
    }
}
