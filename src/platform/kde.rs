// ── KDE adapter ───────────────────────────────────────────────────────────────
//
// KDE/libinput pointer acceleration lives in [-1.0, 1.0].  The affine map
// (-1.0 → 0×, 0.0 → 1×, +1.0 → 2×) is a linear approximation of the real
// libinput acceleration curve.  It is kept as-is on purpose: every profile
// already converted with this formula would shift if it changed.

use crate::error::{Result, SensError};
use crate::multiplier::NeutralMultiplier;
use crate::sensitivity::{KdeAccel, Sensitivity};

use super::PlatformAdapter;

pub(crate) struct KdeAdapter;

impl PlatformAdapter for KdeAdapter {
    fn to_neutral(&self, sensitivity: &Sensitivity) -> Result<NeutralMultiplier> {
        let Sensitivity::Kde(accel) = sensitivity else {
            return Err(SensError::TypeMismatch {
                adapter: "kde",
                expected: "KdeAccel",
                got: sensitivity.variant_name(),
            });
        };
        Ok(NeutralMultiplier::new(1.0 + accel.value()))
    }

    /// Inverts the affine map, then clamps to [-1.0, 1.0] before
    /// constructing.  Multipliers outside [0.0, 2.0] — reachable from a
    /// source platform with a wider range, e.g. Windows ticks above 14 —
    /// are silently flattened onto the nearest endpoint rather than
    /// rejected.  Lossy by contract; see the tests.
    fn from_neutral(&self, multiplier: NeutralMultiplier) -> Result<Sensitivity> {
        let value = (multiplier.value() - 1.0).clamp(-1.0, 1.0);
        Ok(Sensitivity::Kde(KdeAccel::new(value)?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitivity::WindowsTick;

    const TOLERANCE: f64 = 1e-12;

    fn accel(v: f64) -> Sensitivity {
        Sensitivity::Kde(KdeAccel::new(v).expect("valid acceleration"))
    }

    #[test]
    fn to_neutral_applies_affine_map() {
        let cases = [(-1.0, 0.0), (0.0, 1.0), (0.5, 1.5), (1.0, 2.0)];
        for (value, expected) in cases {
            let m = KdeAdapter.to_neutral(&accel(value)).expect("to_neutral");
            assert_eq!(m.value(), expected, "accel {value}");
        }
    }

    #[test]
    fn to_neutral_rejects_foreign_variant() {
        let win = Sensitivity::Windows(WindowsTick::new(10).expect("tick 10"));
        let err = KdeAdapter.to_neutral(&win).expect_err("wrong variant");
        assert!(matches!(
            err,
            SensError::TypeMismatch {
                adapter: "kde",
                expected: "KdeAccel",
                got: "WindowsTick",
            }
        ));
    }

    /// The affine map is exactly invertible inside the native range, so a
    /// round trip recovers the input up to one rounding step.
    #[test]
    fn round_trip_recovers_input_within_tolerance() {
        for value in [-1.0, -0.7, -0.1, 0.0, 0.1, 0.3, 0.5, 0.9, 1.0] {
            let m = KdeAdapter.to_neutral(&accel(value)).expect("to_neutral");
            let back = KdeAdapter.from_neutral(m).expect("from_neutral");
            let Sensitivity::Kde(k) = back else {
                panic!("kde adapter must produce a KdeAccel");
            };
            assert!(
                (k.value() - value).abs() < TOLERANCE,
                "accel {value} came back as {}",
                k.value()
            );
        }
    }

    /// Out-of-domain multipliers are clamped, not rejected — construction in
    /// `from_neutral` can never fail.
    #[test]
    fn out_of_domain_multiplier_clamps_to_endpoint() {
        let back = KdeAdapter
            .from_neutral(NeutralMultiplier::new(2.5))
            .expect("above range");
        assert_eq!(back, accel(1.0));

        let back = KdeAdapter
            .from_neutral(NeutralMultiplier::new(-0.5))
            .expect("below range");
        assert_eq!(back, accel(-1.0));
    }

    #[test]
    fn neutral_multiplier_maps_to_zero_acceleration() {
        let back = KdeAdapter
            .from_neutral(NeutralMultiplier::new(1.0))
            .expect("neutral");
        assert_eq!(back, accel(0.0));
    }
}
