//! Spin Animation Plan
//!
//! Precomputed trajectory for one spin: how far the wheel turns in
//! total and where it is at any elapsed time. The requestAnimationFrame
//! loop in `components::wheel_canvas` only samples this; all the math
//! stays here where it can be unit tested.

use crate::store::SpinPhase;

/// Full revolutions before the wheel settles.
const FULL_SPINS: f64 = 10.0;

/// Spin duration in milliseconds.
pub const SPIN_DURATION_MS: f64 = 8000.0;

/// One spin's trajectory, fixed at the moment the spin starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Total clockwise rotation in degrees, on top of the wheel's
    /// resting angle.
    pub total_rotation: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Build a plan from one uniform sample in [0, 1): ten full turns
    /// plus a uniformly random stop angle, so every segment is equally
    /// likely regardless of count.
    pub fn new(rand01: f64) -> Self {
        SpinPlan {
            total_rotation: FULL_SPINS * 360.0 + rand01.clamp(0.0, 1.0) * 360.0,
            duration_ms: SPIN_DURATION_MS,
        }
    }

    /// Rotation at `elapsed_ms` since the spin started, eased with a
    /// cubic ease-out so the wheel decelerates into the stop.
    pub fn angle_at(&self, elapsed_ms: f64) -> f64 {
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.total_rotation * ease_out_cubic(t)
    }

    pub fn finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Single-flight spin guard: a spin request is honored only when the
/// wheel is a real one (not the placeholder) and nothing is already
/// spinning. Both the click handler and the button's disabled state go
/// through here.
pub fn spin_allowed(placeholder: bool, phase: SpinPhase) -> bool {
    !placeholder && phase == SpinPhase::Idle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_ends_at_total() {
        let plan = SpinPlan::new(0.5);
        assert_eq!(plan.angle_at(0.0), 0.0);
        assert_eq!(plan.angle_at(plan.duration_ms), plan.total_rotation);
        // Past the end the angle stays pinned.
        assert_eq!(plan.angle_at(plan.duration_ms + 500.0), plan.total_rotation);
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let plan = SpinPlan::new(0.33);
        let mut last = -1.0;
        let mut t = 0.0;
        while t <= plan.duration_ms {
            let angle = plan.angle_at(t);
            assert!(angle >= last, "angle regressed at t={}", t);
            last = angle;
            t += 16.0;
        }
    }

    #[test]
    fn test_total_rotation_covers_whole_circle() {
        let low = SpinPlan::new(0.0);
        let high = SpinPlan::new(0.999);
        assert_eq!(low.total_rotation, 3600.0);
        assert!(high.total_rotation > 3600.0 && high.total_rotation < 3960.0);
    }

    #[test]
    fn test_rand_outside_unit_interval_is_clamped() {
        assert_eq!(SpinPlan::new(-2.0).total_rotation, 3600.0);
        assert_eq!(SpinPlan::new(7.0).total_rotation, 3960.0);
    }

    #[test]
    fn test_spin_allowed_single_flight() {
        // Already spinning: a second request is a no-op.
        assert!(!spin_allowed(false, SpinPhase::Spinning));
        // Placeholder wheel: nothing to win.
        assert!(!spin_allowed(true, SpinPhase::Idle));
        assert!(!spin_allowed(true, SpinPhase::Spinning));
        // Real wheel at rest: go.
        assert!(spin_allowed(false, SpinPhase::Idle));
    }

    #[test]
    fn test_finished() {
        let plan = SpinPlan::new(0.1);
        assert!(!plan.finished(0.0));
        assert!(!plan.finished(plan.duration_ms - 1.0));
        assert!(plan.finished(plan.duration_ms));
    }
}
