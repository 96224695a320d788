// ── JSON conversion report ────────────────────────────────────────────────────
//
// Machine-readable output for `--json`.  Pure safe Rust + serde; carries the
// same values the default one-line output is derived from, plus the
// intermediate multiplier.

use serde::Serialize;

use crate::multiplier::NeutralMultiplier;
use crate::platform::Platform;
use crate::sensitivity::Sensitivity;

/// Root of the `--json` output: one object, one line.
#[derive(Debug, Serialize)]
pub(crate) struct ConversionReport {
    pub(crate) from_platform: &'static str,
    pub(crate) to_platform: &'static str,
    /// The input in source-native units (integer tick or float acceleration).
    pub(crate) input: NativeValue,
    /// The neutral pivot the conversion went through.
    pub(crate) multiplier: f64,
    /// The result in destination-native units.
    pub(crate) converted: NativeValue,
}

/// A native value as it appears in JSON: a bare number, integral for
/// Windows ticks and fractional for KDE acceleration.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum NativeValue {
    Tick(u8),
    Accel(f64),
}

impl From<&Sensitivity> for NativeValue {
    fn from(s: &Sensitivity) -> Self {
        match s {
            Sensitivity::Windows(w) => Self::Tick(w.tick()),
            Sensitivity::Kde(k) => Self::Accel(k.value()),
        }
    }
}

impl ConversionReport {
    pub(crate) fn new(
        from_platform: Platform,
        to_platform: Platform,
        input: &Sensitivity,
        multiplier: NeutralMultiplier,
        converted: &Sensitivity,
    ) -> Self {
        Self {
            from_platform: from_platform.as_str(),
            to_platform: to_platform.as_str(),
            input: input.into(),
            multiplier: multiplier.value(),
            converted: converted.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
