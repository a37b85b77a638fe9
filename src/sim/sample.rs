//! Accelerometer samples

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One 3-axis accelerometer reading (m/s²)
///
/// Produced by the sensor source and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccelerationSample(pub Vec3);

impl AccelerationSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Euclidean magnitude, sqrt(x² + y² + z²). NaN components yield NaN.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }
}

impl From<Vec3> for AccelerationSample {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<[f32; 3]> for AccelerationSample {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert!((AccelerationSample::new(3.0, 4.0, 0.0).magnitude() - 5.0).abs() < 1e-6);
        assert!((AccelerationSample::new(-2.0, -3.0, -6.0).magnitude() - 7.0).abs() < 1e-6);
        assert_eq!(AccelerationSample::default().magnitude(), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(AccelerationSample::new(f32::NAN, 1.0, 1.0).magnitude().is_nan());
    }

    #[test]
    fn test_from_array() {
        let s = AccelerationSample::from([1.0, 2.0, 3.0]);
        assert_eq!((s.x(), s.y(), s.z()), (1.0, 2.0, 3.0));
    }
}
