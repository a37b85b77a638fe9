//! Shake detection
//!
//! A shake is a single sample whose magnitude is strictly above the
//! threshold. The detector only counts; it has no notion of time or of the
//! game phase.

use serde::{Deserialize, Serialize};

use super::sample::AccelerationSample;
use crate::consts::SHAKE_THRESHOLD;

/// Counts accelerometer samples that exceed a magnitude threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShakeDetector {
    /// Magnitude a sample must exceed to count (m/s²)
    threshold: f32,
    /// Shakes counted since the last reset
    count: u32,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(SHAKE_THRESHOLD)
    }
}

impl ShakeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            count: 0,
        }
    }

    /// Feed one raw reading. Returns true if it counted as a shake.
    pub fn on_sample(&mut self, x: f32, y: f32, z: f32) -> bool {
        self.observe(AccelerationSample::new(x, y, z))
    }

    /// Feed one sample. Returns true if it counted as a shake.
    ///
    /// No input validation: a NaN magnitude never compares greater, so it is
    /// simply not counted.
    pub fn observe(&mut self, sample: AccelerationSample) -> bool {
        if sample.magnitude() > self.threshold {
            self.count = self.count.saturating_add(1);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counts_strictly_above_threshold() {
        let mut d = ShakeDetector::default();
        assert!(!d.on_sample(10.0, 0.0, 0.0));
        assert_eq!(d.count(), 0);
        assert!(d.on_sample(10.01, 0.0, 0.0));
        assert_eq!(d.count(), 1);
    }

    #[test]
    fn test_resting_phone_is_not_a_shake() {
        let mut d = ShakeDetector::default();
        for _ in 0..100 {
            d.on_sample(0.05, -0.1, 9.81);
        }
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn test_nan_and_negative_inputs() {
        let mut d = ShakeDetector::default();
        assert!(!d.on_sample(f32::NAN, 20.0, 20.0));
        assert!(d.on_sample(-12.0, 0.0, 0.0));
        assert_eq!(d.count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut d = ShakeDetector::default();
        for _ in 0..7 {
            d.on_sample(15.0, 0.0, 0.0);
        }
        assert_eq!(d.count(), 7);
        d.reset();
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut d = ShakeDetector::new(20.0);
        assert!(!d.on_sample(15.0, 0.0, 0.0));
        assert!(d.on_sample(0.0, 0.0, 25.0));
        assert_eq!(d.threshold(), 20.0);
    }

    #[test]
    fn test_count_saturates() {
        let mut d = ShakeDetector::default();
        d.count = u32::MAX;
        d.on_sample(50.0, 0.0, 0.0);
        assert_eq!(d.count(), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_gentle_samples_never_count(
            x in -5.7f32..5.7, y in -5.7f32..5.7, z in -5.7f32..5.7, start in 0u32..1000
        ) {
            let mut d = ShakeDetector { threshold: SHAKE_THRESHOLD, count: start };
            prop_assert!(!d.on_sample(x, y, z));
            prop_assert_eq!(d.count(), start);
        }

        #[test]
        fn prop_hard_samples_count_once(
            x in 10.5f32..1000.0, negate in any::<bool>(),
            y in -100f32..100.0, z in -100f32..100.0, start in 0u32..1000
        ) {
            let x = if negate { -x } else { x };
            let mut d = ShakeDetector { threshold: SHAKE_THRESHOLD, count: start };
            prop_assert!(d.on_sample(x, y, z));
            prop_assert_eq!(d.count(), start + 1);
        }

        #[test]
        fn prop_reset_always_zero(samples in proptest::collection::vec(-50f32..50.0, 0..60)) {
            let mut d = ShakeDetector::default();
            for v in samples {
                d.on_sample(v, v, v);
            }
            d.reset();
            prop_assert_eq!(d.count(), 0);
        }
    }
}
