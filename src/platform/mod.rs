// ── Platform adapters ─────────────────────────────────────────────────────────
//
// One adapter per supported platform, each translating between that
// platform's native units and the neutral multiplier.  Adapters are
// stateless (or hold an immutable constant table), so the `'static`
// references handed out by `Platform::adapter` are safe to share freely.

mod kde;
mod windows;

pub(crate) use kde::KdeAdapter;
pub(crate) use windows::WindowsAdapter;

use crate::error::Result;
use crate::multiplier::NeutralMultiplier;
use crate::sensitivity::{KdeAccel, Sensitivity, WindowsTick};

// ── Adapter contract ──────────────────────────────────────────────────────────

/// Translates between one platform's native units and the neutral multiplier.
///
/// Contract: `to_neutral` accepts only the adapter's own `Sensitivity`
/// variant and fails with `TypeMismatch` otherwise; `from_neutral` accepts
/// any multiplier and always lands on a legal native value (quantizing or
/// clamping as the platform requires), so a `to_neutral` → `from_neutral`
/// chain round-trips within the resolution of the lossier side.
pub(crate) trait PlatformAdapter {
    fn to_neutral(&self, sensitivity: &Sensitivity) -> Result<NeutralMultiplier>;
    fn from_neutral(&self, multiplier: NeutralMultiplier) -> Result<Sensitivity>;
}

// ── Platform tag ──────────────────────────────────────────────────────────────

/// The closed set of supported platforms, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Platform {
    Windows,
    Kde,
}

impl Platform {
    /// Lowercase name as it appears on the command line and in reports.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Kde => "kde",
        }
    }

    /// The adapter for this platform.
    pub(crate) fn adapter(self) -> &'static dyn PlatformAdapter {
        match self {
            Self::Windows => &WindowsAdapter,
            Self::Kde => &KdeAdapter,
        }
    }

    /// Build this platform's native `Sensitivity` from the raw CLI number:
    /// truncated to an integer tick for Windows, taken as-is for KDE.
    /// Out-of-range input fails validation here, before any conversion runs.
    pub(crate) fn native_value(self, raw: f64) -> Result<Sensitivity> {
        match self {
            Self::Windows => Ok(Sensitivity::Windows(WindowsTick::new(raw as i32)?)),
            Self::Kde => Ok(Sensitivity::Kde(KdeAccel::new(raw)?)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
