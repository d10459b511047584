// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Rotational motion intensity for one tracker.
//!
//! Drives the glow highlight in the tracker table: the brighter the glow,
//! the more the tracker moved over the last few update ticks.

use crate::data_types::Quat;

/// How many per-frame deltas the rolling window holds.
///
/// Three samples is about 0.3s at the expected update cadence: enough to
/// smooth single-frame jitter while staying responsive.
const WINDOW: usize = 3;

/// Scale applied to the squared vector part of a frame delta before
/// clamping. Tuned against real tracker motion.
const DELTA_SCALE: f64 = 2.5;

/// Per-tracker rolling estimate of rotational motion, in `[0, 1]`.
///
/// One instance is owned by each tracker's display binding; state must be
/// discarded when the tracker identity changes.
#[derive(Debug, Clone)]
pub struct VelocityEstimator {
    previous: Quat,
    deltas: [f64; WINDOW],
    len: usize,
}

impl VelocityEstimator {
    /// Seed with the tracker's current orientation, or identity when the
    /// tracker has none yet.
    pub fn new(initial: Option<Quat>) -> VelocityEstimator {
        VelocityEstimator {
            previous: initial.unwrap_or_else(Quat::identity),
            deltas: [0.0; WINDOW],
            len: 0,
        }
    }

    /// Feed one update tick's orientation; returns the current intensity.
    ///
    /// The squared vector part of the frame-to-frame delta quaternion
    /// approximates the rotation angle for small angles. Summing the window
    /// (rather than averaging) biases toward sustained motion. A skipped
    /// frame (`None`) leaves state untouched.
    pub fn update(&mut self, rotation: Option<Quat>) -> f64 {
        let rotation = match rotation {
            Some(q) => q,
            None => return self.velocity(),
        };

        let delta = rotation * self.previous.inverse();
        let magnitude = (DELTA_SCALE * delta.v.magnitude2()).min(1.0);

        if self.len == WINDOW {
            // Evict the oldest sample.
            self.deltas.copy_within(1.., 0);
            self.deltas[WINDOW - 1] = magnitude;
        } else {
            self.deltas[self.len] = magnitude;
            self.len += 1;
        }

        self.previous = rotation;
        self.velocity()
    }

    /// Current intensity: the clamped sum of the window.
    pub fn velocity(&self) -> f64 {
        self.deltas[..self.len]
            .iter()
            .sum::<f64>()
            .max(0.0)
            .min(1.0)
    }
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        VelocityEstimator::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    /// Unit quaternion whose delta from identity has a squared vector part
    /// of `m2`.
    fn step_with_vector_magnitude2(m2: f64) -> Quat {
        Quat::new((1.0 - m2).sqrt(), m2.sqrt(), 0.0, 0.0)
    }

    #[test]
    fn no_motion_stays_zero() {
        let mut est = VelocityEstimator::new(None);
        for _ in 0..3 {
            assert_eq!(est.update(Some(Quat::identity())), 0.0);
        }
    }

    #[test]
    fn single_step_intensity() {
        // Squared vector part 0.1 scales to 0.25.
        let mut est = VelocityEstimator::new(None);
        let v = est.update(Some(step_with_vector_magnitude2(0.1)));
        assert!((v - 0.25).abs() < 1e-6);
    }

    #[test]
    fn sustained_motion_sums_over_window() {
        // Each tick advances by the same relative step, so each delta
        // contributes 0.25; three of them sum to 0.75.
        let mut est = VelocityEstimator::new(None);
        let step = step_with_vector_magnitude2(0.1);
        let mut orientation = Quat::identity();
        let mut v = 0.0;
        for _ in 0..3 {
            orientation = step * orientation;
            v = est.update(Some(orientation));
        }
        assert!((v - 0.75).abs() < 1e-6);
    }

    #[test]
    fn window_evicts_oldest() {
        let mut est = VelocityEstimator::new(None);
        let step = step_with_vector_magnitude2(0.1);
        let mut orientation = Quat::identity();
        for _ in 0..3 {
            orientation = step * orientation;
            est.update(Some(orientation));
        }
        // A fourth, motionless tick pushes 0 and drops one 0.25 sample.
        let v = est.update(Some(orientation));
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn decays_to_zero_after_three_still_ticks() {
        let mut est = VelocityEstimator::new(None);
        let step = step_with_vector_magnitude2(0.3);
        let orientation = step * Quat::identity();
        est.update(Some(orientation));
        let mut v = 1.0;
        for _ in 0..3 {
            v = est.update(Some(orientation));
        }
        assert!(v.abs() < TOL);
    }

    #[test]
    fn skipped_frames_leave_state_unchanged() {
        let mut est = VelocityEstimator::new(None);
        let before = est.update(Some(step_with_vector_magnitude2(0.1)));
        let during = est.update(None);
        assert_eq!(before, during);
        // The cached previous orientation also survived the skip.
        let after = est.update(Some(step_with_vector_magnitude2(0.1)));
        assert!((after - before).abs() < 1e-6);
    }

    #[test]
    fn large_motion_saturates_at_one() {
        let mut est = VelocityEstimator::new(None);
        // A half turn about X: delta vector part is (1, 0, 0).
        let v = est.update(Some(Quat::new(0.0, 1.0, 0.0, 0.0)));
        assert_eq!(v, 1.0);
    }

    fn unit_quat() -> impl Strategy<Value = Quat> {
        (
            -1.0f64..1.0,
            -1.0f64..1.0,
            -1.0f64..1.0,
            -1.0f64..1.0,
        )
            .prop_filter("magnitude too small to normalize", |(w, x, y, z)| {
                w * w + x * x + y * y + z * z > 1e-3
            })
            .prop_map(|(w, x, y, z)| Quat::new(w, x, y, z).normalize())
    }

    proptest! {
        #[test]
        fn bounded_for_any_sequence(quats in proptest::collection::vec(unit_quat(), 0..20)) {
            let mut est = VelocityEstimator::new(None);
            for q in quats {
                let v = est.update(Some(q));
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
