// ── Neutral multiplier ────────────────────────────────────────────────────────
//
// The pivot type between platform adapters.  Deliberately a dumb transport:
// range checks belong to the native value types, not here.

/// Dimensionless scale factor used as the pivot between platform scales.
///
/// `1.0` means "no scaling" on every platform.  Values outside a platform's
/// reachable range are legal here; the destination adapter decides how to
/// land them (quantization for Windows, clamping for KDE).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NeutralMultiplier {
    multiplier: f64,
}

impl NeutralMultiplier {
    pub(crate) fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// The wrapped factor, unchanged.
    pub(crate) fn value(self) -> f64 {
        self.multiplier
    }
}
