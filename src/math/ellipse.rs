use std::f64::consts::TAU;

use nalgebra::Point3;

/// An axis-aligned ellipse centered at the origin of its own plane.
///
/// Only the two axes are stored; everything else is derived. In particular,
/// the semi-minor axis is always recomputed from the semi-major axis and
/// eccentricity at construction, so the two can never drift apart.
#[derive(Debug, Clone, Copy)]
pub struct Ellipse {
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    /// Builds an ellipse from its semi-major axis and eccentricity.
    ///
    /// Inputs must already be validated (see `model::BadParameter`); an
    /// eccentricity of 1 or more has no closed curve to speak of.
    pub fn from_shape(semi_major: f64, eccentricity: f64) -> Self {
        assert!(semi_major > 0.0);
        assert!((0.0..1.0).contains(&eccentricity));

        Ellipse {
            semi_major,
            semi_minor: semi_major * (1.0 - eccentricity * eccentricity).sqrt(),
        }
    }

    /// Builds an ellipse directly from its two axes.
    pub fn from_axes(semi_major: f64, semi_minor: f64) -> Self {
        assert!(semi_major > 0.0 && semi_minor > 0.0);
        assert!(semi_minor <= semi_major);

        Ellipse {
            semi_major,
            semi_minor,
        }
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor
    }

    pub fn eccentricity(&self) -> f64 {
        // b = a sqrt(1 - e^2), so e^2 = 1 - (b/a)^2
        let ratio = self.semi_minor / self.semi_major;
        (1.0 - ratio * ratio).max(0.0).sqrt()
    }

    /// The point at parametric angle `theta`, in the ellipse's own plane
    /// (z = 0). The plane's orientation is its owner's business.
    pub fn point_at(&self, theta: f64) -> Point3<f64> {
        Point3::new(
            self.semi_major * theta.cos(),
            self.semi_minor * theta.sin(),
            0.0,
        )
    }

    /// Samples the full ellipse as a closed loop: `segments + 1` points,
    /// with the first and last coincident up to floating error.
    pub fn sample_loop(&self, segments: usize) -> Vec<Point3<f64>> {
        assert!(segments >= 3, "a loop needs at least 3 segments");
        (0..=segments)
            .map(|i| self.point_at(TAU * (i as f64) / (segments as f64)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_axes_from_shape() {
        // Circle
        let circle = Ellipse::from_shape(10.0, 0.0);
        assert_relative_eq!(circle.semi_minor_axis(), 10.0);
        assert_relative_eq!(circle.eccentricity(), 0.0);

        // e = 3/5 gives b = 4a/5
        let ellipse = Ellipse::from_shape(10.0, 0.6);
        assert_relative_eq!(ellipse.semi_major_axis(), 10.0);
        assert_relative_eq!(ellipse.semi_minor_axis(), 8.0);
        assert_relative_eq!(ellipse.eccentricity(), 0.6);

        // The semi-minor axis never exceeds the semi-major axis, and only
        // matches it for a circle.
        for e in [0.0, 0.1, 0.5, 0.9, 0.99] {
            let ellipse = Ellipse::from_shape(7.0, e);
            assert!(ellipse.semi_minor_axis() <= ellipse.semi_major_axis());
            assert_eq!(
                ellipse.semi_minor_axis() == ellipse.semi_major_axis(),
                e == 0.0
            );
            assert_relative_eq!(ellipse.eccentricity(), e, max_relative = 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn test_open_curve_rejected() {
        Ellipse::from_shape(10.0, 1.0);
    }

    #[test]
    fn test_point_at_quadrants() {
        let ellipse = Ellipse::from_shape(10.0, 0.6);
        let a = ellipse.semi_major_axis();
        let b = ellipse.semi_minor_axis();

        let p = ellipse.point_at(0.0);
        assert_relative_eq!(p.x, a);
        assert_relative_eq!(p.y, 0.0);

        let p = ellipse.point_at(PI / 2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, b);

        let p = ellipse.point_at(PI);
        assert_relative_eq!(p.x, -a);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);

        // z is always zero; the tilt is someone else's job
        assert_eq!(ellipse.point_at(1.234).z, 0.0);
    }

    #[test]
    fn test_sample_loop_closes() {
        let ellipse = Ellipse::from_shape(42.0, 0.3);
        let points = ellipse.sample_loop(128);

        assert_eq!(points.len(), 129);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-9);

        // Every sample actually lies on the ellipse
        let (a, b) = (ellipse.semi_major_axis(), ellipse.semi_minor_axis());
        for p in points {
            let residual = (p.x / a).powi(2) + (p.y / b).powi(2);
            assert_relative_eq!(residual, 1.0, epsilon = 1e-9);
        }
    }
}
