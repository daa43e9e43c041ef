use std::f64::consts::TAU;

use nalgebra::{Point3, Rotation3, Vector3};
use rand::Rng;

use super::BadParameter;
use crate::math::ellipse::Ellipse;

/// Frames per simulated day.
///
/// The animation maps one day of source time to one minute of wall clock:
/// at the 60 fps frame limit, a body with a one-day period completes its
/// orbit in 60 frames.
pub const FRAMES_PER_DAY: f64 = 60.0;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f32,
    pub color: Point3<f32>,
    pub texture: Option<String>,
}

/// Orbital parameters as they appear in the planet table, before the
/// central-body offset is applied.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalParams {
    /// Distance from the central body's surface reference, in render units.
    pub orbit_distance: f64,
    pub eccentricity: f64,
    /// Tilt of the orbital plane, in degrees.
    pub inclination_deg: f64,
    /// Source period in days; converted to a per-frame rate at construction.
    pub period_days: f64,
    /// Axial rotation, in radians per frame.
    pub spin_rate: f64,
}

impl OrbitalParams {
    pub fn validate(&self) -> Result<(), BadParameter> {
        // Negated comparisons so that NaN fails every check
        if !(self.orbit_distance > 0.0) {
            return Err(BadParameter::OrbitDistance(self.orbit_distance));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(BadParameter::Eccentricity(self.eccentricity));
        }
        if !(self.period_days > 0.0) {
            return Err(BadParameter::Period(self.period_days));
        }
        if !self.spin_rate.is_finite() {
            return Err(BadParameter::SpinRate(self.spin_rate));
        }
        Ok(())
    }
}

/// One orbiting celestial object.
///
/// Holds the derived orbit geometry plus the only mutable state in the whole
/// model: the orbit phase and the axial spin, both advanced once per frame.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    pub id: BodyID,
    pub info: BodyInfo,
    ellipse: Ellipse,
    tilt: Rotation3<f64>,
    phase: f64,
    phase_rate: f64,
    spin: f64,
    spin_rate: f64,
}

impl OrbitalBody {
    /// `central_radius` is the render radius of the body being orbited; it
    /// is added to the orbit distance so the path clears the central sphere
    /// no matter how large that sphere is drawn.
    ///
    /// The initial phase is drawn uniformly from [0, 2π), so orbits are not
    /// phase-synchronized across runs unless the caller seeds the RNG.
    pub fn new(
        id: BodyID,
        info: BodyInfo,
        params: OrbitalParams,
        central_radius: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, BadParameter> {
        params.validate()?;

        let semi_major = params.orbit_distance + central_radius;
        Ok(OrbitalBody {
            id,
            info,
            ellipse: Ellipse::from_shape(semi_major, params.eccentricity),
            tilt: Rotation3::from_axis_angle(
                &Vector3::x_axis(),
                params.inclination_deg.to_radians(),
            ),
            phase: rng.gen_range(0.0..TAU),
            phase_rate: TAU / (params.period_days * FRAMES_PER_DAY),
            spin: 0.0,
            spin_rate: params.spin_rate,
        })
    }

    pub fn ellipse(&self) -> &Ellipse {
        &self.ellipse
    }

    /// Rotation from the orbital plane to world space.
    pub fn tilt(&self) -> Rotation3<f64> {
        self.tilt
    }

    /// Current angle along the orbit, in [0, 2π).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Radians of orbit phase per frame.
    pub fn phase_rate(&self) -> f64 {
        self.phase_rate
    }

    /// Accumulated axial rotation, in [0, 2π).
    pub fn spin(&self) -> f64 {
        self.spin
    }

    /// Advances orbit phase and axial spin by the given number of frames.
    ///
    /// Both angles are normalized back into [0, 2π) after every update, so
    /// they stay precise over arbitrarily long sessions.
    pub fn advance(&mut self, frames: f64) {
        self.phase = (self.phase + self.phase_rate * frames).rem_euclid(TAU);
        self.spin = (self.spin + self.spin_rate * frames).rem_euclid(TAU);
    }

    /// Current position in the body's own orbital plane. The inclination is
    /// applied by whoever owns the tilted frame, not here.
    pub fn position_in_plane(&self) -> Point3<f64> {
        self.ellipse.point_at(self.phase)
    }

    /// Current position with the orbital-plane tilt applied.
    pub fn position(&self) -> Point3<f64> {
        self.tilt * self.position_in_plane()
    }
}
