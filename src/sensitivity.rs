// ── Native sensitivity values ─────────────────────────────────────────────────
//
// One type per platform, each validating its platform's legal range at
// construction.  Values are immutable once built: construct → convert →
// discard.  The `Sensitivity` sum type is what adapters and the converter
// pass around; its `Display` form is the CLI's output representation.

use std::fmt;

use crate::error::{Result, SensError};

// ── Windows ───────────────────────────────────────────────────────────────────

/// A Windows pointer-speed setting: one of 20 discrete ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowsTick {
    tick: u8,
}

impl WindowsTick {
    /// Build a tick value, rejecting anything outside 1..=20.
    pub(crate) fn new(tick: i32) -> Result<Self> {
        if !(1..=20).contains(&tick) {
            return Err(SensError::Validation {
                platform: "windows",
                detail: format!("tick must be 1-20, got {tick}"),
            });
        }
        Ok(Self { tick: tick as u8 })
    }

    pub(crate) fn tick(self) -> u8 {
        self.tick
    }
}

// ── KDE ───────────────────────────────────────────────────────────────────────

/// A KDE/libinput pointer-acceleration setting in [-1.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KdeAccel {
    value: f64,
}

impl KdeAccel {
    /// Build an acceleration value, rejecting anything outside [-1.0, 1.0].
    /// NaN never satisfies the range check and is rejected too.
    pub(crate) fn new(value: f64) -> Result<Self> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(SensError::Validation {
                platform: "kde",
                detail: format!("pointer acceleration must be in [-1.0, 1.0], got {value}"),
            });
        }
        Ok(Self { value })
    }

    pub(crate) fn value(self) -> f64 {
        self.value
    }
}

// ── Sum type ──────────────────────────────────────────────────────────────────

/// A sensitivity value in some platform's native units.
///
/// Adapters are selected at runtime from CLI strings, so all of them share
/// this one sum type; an adapter given the wrong variant reports
/// `SensError::TypeMismatch` (see `platform::PlatformAdapter`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Sensitivity {
    Windows(WindowsTick),
    Kde(KdeAccel),
}

impl Sensitivity {
    /// The variant name used in `Display` output and mismatch errors.
    pub(crate) fn variant_name(self) -> &'static str {
        match self {
            Self::Windows(_) => "WindowsTick",
            Self::Kde(_) => "KdeAccel",
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows(w) => write!(f, "WindowsTick(tick={})", w.tick()),
            Self::Kde(k) => write!(f, "KdeAccel(value={})", k.value()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
