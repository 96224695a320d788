// ── Conversion ────────────────────────────────────────────────────────────────
//
// The whole pipeline: native → neutral → native.  Pure and stateless; any
// failure from either adapter propagates unchanged — this is a thin
// composition, not a resilience boundary.

use crate::error::Result;
use crate::platform::PlatformAdapter;
use crate::sensitivity::Sensitivity;

/// Convert `sensitivity` from the source platform's units to the
/// destination platform's units.  `sensitivity` must be the source
/// adapter's own variant or `to_neutral` fails with a type mismatch.
pub(crate) fn convert(
    source: &dyn PlatformAdapter,
    destination: &dyn PlatformAdapter,
    sensitivity: &Sensitivity,
) -> Result<Sensitivity> {
    let multiplier = source.to_neutral(sensitivity)?;
    destination.from_neutral(multiplier)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
