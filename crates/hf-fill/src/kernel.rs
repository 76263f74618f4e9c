use hf_core::Point;

use crate::FillError;

/// Inverse-distance weight `1 / (|u - v|^z + epsilon)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightKernel {
    z: f64,
    epsilon: f64,
}

impl WeightKernel {
    pub fn new(z: f64, epsilon: f64) -> Result<Self, FillError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(FillError::InvalidEpsilon(epsilon));
        }
        if !z.is_finite() || z < 0.0 {
            return Err(FillError::InvalidExponent(z));
        }
        Ok(Self { z, epsilon })
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn weight(&self, u: Point, v: Point) -> f64 {
        // Squared distance to the power z/2 is distance^z without the sqrt.
        1.0 / (u.dist_sq(v).powf(0.5 * self.z) + self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use hf_core::Point;

    use super::WeightKernel;
    use crate::FillError;

    #[test]
    fn rejects_non_positive_epsilon() {
        assert_eq!(
            WeightKernel::new(2.0, 0.0),
            Err(FillError::InvalidEpsilon(0.0))
        );
        assert_eq!(
            WeightKernel::new(2.0, -1e-3),
            Err(FillError::InvalidEpsilon(-1e-3))
        );
        assert!(matches!(
            WeightKernel::new(2.0, f64::NAN),
            Err(FillError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn rejects_negative_or_non_finite_exponent() {
        assert_eq!(
            WeightKernel::new(-1.0, 0.1),
            Err(FillError::InvalidExponent(-1.0))
        );
        assert!(WeightKernel::new(f64::INFINITY, 0.1).is_err());
        assert!(WeightKernel::new(0.0, 0.1).is_ok());
    }

    #[test]
    fn weight_matches_closed_form() {
        let k = WeightKernel::new(2.0, 0.1).expect("valid kernel");
        let u = Point::new(0, 0);

        assert!((k.weight(u, u) - 10.0).abs() < 1e-12);
        assert!((k.weight(u, Point::new(3, 4)) - 1.0 / 25.1).abs() < 1e-12);

        let k3 = WeightKernel::new(3.0, 0.5).expect("valid kernel");
        let w = k3.weight(u, Point::new(1, 1));
        assert!((w - 1.0 / (2f64.powf(1.5) + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn weight_is_symmetric_and_decreasing() {
        let k = WeightKernel::new(2.5, 0.01).expect("valid kernel");
        let u = Point::new(5, 5);
        let near = Point::new(5, 6);
        let far = Point::new(9, 2);

        assert_eq!(k.weight(u, far), k.weight(far, u));
        assert!(k.weight(u, near) > k.weight(u, far));
        assert!(k.weight(u, far) > 0.0);
    }

    #[test]
    fn larger_exponent_sharpens_nearest_preference() {
        let u = Point::new(0, 0);
        let near = Point::new(0, 2);
        let far = Point::new(0, 6);

        let ratio = |z: f64| {
            let k = WeightKernel::new(z, 0.01).expect("valid kernel");
            k.weight(u, near) / k.weight(u, far)
        };

        assert!(ratio(1.0) < ratio(2.0));
        assert!(ratio(2.0) < ratio(4.0));
        assert!((ratio(0.0) - 1.0).abs() < 1e-12);
    }
}
