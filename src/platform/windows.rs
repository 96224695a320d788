// ── Windows adapter ───────────────────────────────────────────────────────────
//
// Windows exposes pointer speed as 20 discrete ticks.  Tick → multiplier is
// an exact table lookup; multiplier → tick is nearest-neighbour quantization
// over the same table, so any multiplier lands on a legal tick.

use crate::error::{Result, SensError};
use crate::multiplier::NeutralMultiplier;
use crate::sensitivity::{Sensitivity, WindowsTick};

use super::PlatformAdapter;

/// Tick → multiplier mapping, ordered by ascending tick.
///
/// Dense over 1..=20, so `tick - 1` indexes directly.
const TICK_MULTIPLIERS: [(u8, f64); 20] = [
    (1, 1.0 / 32.0),
    (2, 1.0 / 16.0),
    (3, 1.0 / 8.0),
    (4, 2.0 / 8.0),
    (5, 3.0 / 8.0),
    (6, 4.0 / 8.0),
    (7, 5.0 / 8.0),
    (8, 6.0 / 8.0),
    (9, 7.0 / 8.0),
    (10, 1.0),
    (11, 1.25),
    (12, 1.5),
    (13, 1.75),
    (14, 2.0),
    (15, 2.25),
    (16, 2.5),
    (17, 2.75),
    (18, 3.0),
    (19, 3.25),
    (20, 3.5),
];

pub(crate) struct WindowsAdapter;

impl PlatformAdapter for WindowsAdapter {
    /// Exact lookup: the tick is already validated to 1..=20, which indexes
    /// the dense table directly.  No interpolation.
    fn to_neutral(&self, sensitivity: &Sensitivity) -> Result<NeutralMultiplier> {
        let Sensitivity::Windows(tick) = sensitivity else {
            return Err(SensError::TypeMismatch {
                adapter: "windows",
                expected: "WindowsTick",
                got: sensitivity.variant_name(),
            });
        };
        let (_, multiplier) = TICK_MULTIPLIERS[usize::from(tick.tick()) - 1];
        Ok(NeutralMultiplier::new(multiplier))
    }

    /// Nearest tick wins.  The scan runs in ascending tick order with a
    /// strictly-less comparison, so a multiplier exactly between two ticks
    /// resolves to the lower one — the tie-break is deterministic, not an
    /// accident of iteration order.
    fn from_neutral(&self, multiplier: NeutralMultiplier) -> Result<Sensitivity> {
        let target = multiplier.value();
        let (mut best_tick, first) = TICK_MULTIPLIERS[0];
        let mut best_diff = (first - target).abs();
        for &(tick, m) in &TICK_MULTIPLIERS[1..] {
            let diff = (m - target).abs();
            if diff < best_diff {
                best_tick = tick;
                best_diff = diff;
            }
        }
        Ok(Sensitivity::Windows(WindowsTick::new(i32::from(best_tick))?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
