use std::f64::consts::TAU;

use nalgebra::Point3;
use rand::Rng;

use super::BadParameter;
use crate::math::ellipse::Ellipse;

/// Parameters for a scattered band of asteroids between two bounding
/// ellipses.
#[derive(Debug, Clone, Copy)]
pub struct BeltParams {
    /// Semi-major axis of the inner bounding ellipse.
    pub inner_radius: f64,
    /// Semi-major axis of the outer bounding ellipse.
    pub outer_radius: f64,
    pub inner_eccentricity: f64,
    pub outer_eccentricity: f64,
    pub count: usize,
    /// Points are excluded from a half-width band at each edge, narrowing
    /// the usable radial range by this much in total.
    pub belt_width: f64,
    /// Total thickness of the belt perpendicular to its plane.
    pub vertical_spread: f64,
    pub color: Point3<f32>,
}

impl BeltParams {
    pub fn validate(&self) -> Result<(), BadParameter> {
        let radii_ok = self.inner_radius > 0.0
            && self.belt_width >= 0.0
            && self.inner_radius + self.belt_width < self.outer_radius;
        if !radii_ok {
            return Err(BadParameter::BeltRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
                width: self.belt_width,
            });
        }
        for e in [self.inner_eccentricity, self.outer_eccentricity] {
            if !(0.0..1.0).contains(&e) {
                return Err(BadParameter::Eccentricity(e));
            }
        }
        if !(self.vertical_spread >= 0.0) {
            return Err(BadParameter::VerticalSpread(self.vertical_spread));
        }
        Ok(())
    }
}

/// A static point cloud.
///
/// Every point is generated once at creation and never touched again; the
/// belt only looks like a crowd of orbiting bodies. Positions are stored
/// render-ready in `f32`, paired with a color per point.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidBelt {
    points: Vec<Point3<f32>>,
    colors: Vec<Point3<f32>>,
}

impl AsteroidBelt {
    pub fn generate(params: &BeltParams, rng: &mut impl Rng) -> Result<Self, BadParameter> {
        params.validate()?;

        let inner = Ellipse::from_shape(params.inner_radius, params.inner_eccentricity);
        let outer = Ellipse::from_shape(params.outer_radius, params.outer_eccentricity);

        let r_lo = params.inner_radius + params.belt_width / 2.0;
        let r_hi = params.outer_radius - params.belt_width / 2.0;

        let mut points = Vec::with_capacity(params.count);
        let mut colors = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let r = rng.gen_range(r_lo..r_hi);
            let theta = rng.gen_range(0.0..TAU);

            // Blend the bounding ellipses by radius fraction. Not a true
            // confocal blend; the belt is sparse visual texture, not a set
            // of simulated bodies.
            let t = (r - params.inner_radius) / (params.outer_radius - params.inner_radius);
            let blended = Ellipse::from_axes(
                lerp(inner.semi_major_axis(), outer.semi_major_axis(), t),
                lerp(inner.semi_minor_axis(), outer.semi_minor_axis(), t),
            );

            let in_plane = blended.point_at(theta);
            let z = (rng.gen::<f64>() - 0.5) * params.vertical_spread;

            points.push(Point3::new(in_plane.x as f32, in_plane.y as f32, z as f32));
            colors.push(params.color);
        }

        Ok(AsteroidBelt { points, colors })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position/color pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point3<f32>, &Point3<f32>)> + '_ {
        self.points.iter().zip(self.colors.iter())
    }
}

fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + t * (hi - lo)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn test_params() -> BeltParams {
        BeltParams {
            inner_radius: 20.0,
            outer_radius: 30.0,
            inner_eccentricity: 0.0,
            outer_eccentricity: 0.0,
            count: 1000,
            belt_width: 2.0,
            vertical_spread: 2.0,
            color: Point3::new(0.36, 0.23, 0.07),
        }
    }

    #[test]
    fn test_point_count_and_color() {
        let params = test_params();
        let belt = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(belt.len(), 1000);
        assert!(belt.iter().all(|(_, color)| *color == params.color));
    }

    #[test]
    fn test_radial_band_respected() {
        // Zero eccentricity on both bounds, so the in-plane distance is the
        // sampled radius itself: inner + w/2 <= r <= outer - w/2.
        let belt =
            AsteroidBelt::generate(&test_params(), &mut ChaCha8Rng::seed_from_u64(2)).unwrap();

        for (point, _) in belt.iter() {
            let r = (point.x as f64).hypot(point.y as f64);
            assert!((21.0 - 1e-3..=29.0 + 1e-3).contains(&r), "r = {}", r);
            assert!(point.z.abs() <= 1.0 + 1e-3, "z = {}", point.z);
        }
    }

    #[test]
    fn test_eccentric_bounds() {
        let params = BeltParams {
            inner_eccentricity: 0.2,
            outer_eccentricity: 0.1,
            ..test_params()
        };
        let belt = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();

        // Everything stays inside the outer semi-major axis and outside the
        // inner semi-minor axis, whatever the blend in between
        let b_inner = 20.0 * (1.0_f64 - 0.2 * 0.2).sqrt();
        for (point, _) in belt.iter() {
            let r = (point.x as f64).hypot(point.y as f64);
            assert!(r <= 30.0 + 1e-3, "r = {}", r);
            assert!(r >= b_inner - 1e-3, "r = {}", r);
        }
    }

    #[test]
    fn test_seeded_generation_reproduces() {
        let params = test_params();
        let a = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let c = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_vertical_spread() {
        let params = BeltParams {
            vertical_spread: 0.0,
            count: 50,
            ..test_params()
        };
        let belt = AsteroidBelt::generate(&params, &mut ChaCha8Rng::seed_from_u64(4)).unwrap();
        assert!(belt.iter().all(|(point, _)| point.z == 0.0));
    }

    #[test]
    fn test_validation() {
        let bad = [
            BeltParams {
                inner_radius: 0.0,
                ..test_params()
            },
            // Band narrower than the width exclusion
            BeltParams {
                inner_radius: 20.0,
                outer_radius: 21.0,
                belt_width: 2.0,
                ..test_params()
            },
            BeltParams {
                outer_eccentricity: 1.0,
                ..test_params()
            },
            BeltParams {
                vertical_spread: -1.0,
                ..test_params()
            },
        ];

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for params in bad {
            assert!(AsteroidBelt::generate(&params, &mut rng).is_err());
        }
    }
}
