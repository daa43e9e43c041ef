//! The fixed in-code table the solar system is built from.
//!
//! Eccentricities, inclinations and periods are the real planetary values;
//! sizes and orbit distances are display values chosen for legibility, not
//! scale accuracy.

use nalgebra::Point3;
use rand::Rng;

use super::{BadParameter, BeltParams, BodyInfo, OrbitalParams, Orrery};

/// Render radius of the sun. Every orbit distance in the table is measured
/// from this sphere's surface, so nothing can sit inside it.
pub const SUN_RADIUS: f32 = 15.0;

pub const SUN_TEXTURE: &str = "8k_sun.jpg";

/// Axial rotation in radians per frame, shared by every planet in the table.
pub const SPIN_RATE: f64 = 0.05;

/// Default number of points in the asteroid belt; overridable from the CLI.
pub const ASTEROID_COUNT: usize = 2000;

struct PlanetRow {
    name: &'static str,
    size: f32,
    color: (f32, f32, f32),
    orbit_distance: f64,
    inclination_deg: f64,
    eccentricity: f64,
    period_days: f64,
    texture: &'static str,
}

#[rustfmt::skip]
const PLANETS: [PlanetRow; 9] = [
    PlanetRow { name: "Mercury", size: 0.35,  color: (0.67, 0.67, 0.67), orbit_distance: 3.9,       inclination_deg: 3.38,  eccentricity: 0.20563,  period_days: 88.0,      texture: "mercury.jpg" },
    PlanetRow { name: "Venus",   size: 0.87,  color: (1.0,  0.87, 0.27), orbit_distance: 7.2,       inclination_deg: 3.86,  eccentricity: 0.006772, period_days: 272.76,    texture: "venus.jpg" },
    PlanetRow { name: "Earth",   size: 0.91,  color: (0.0,  0.67, 1.0),  orbit_distance: 10.0,      inclination_deg: 7.155, eccentricity: 0.016708, period_days: 365.25638, texture: "8k_earth_daymap.jpg" },
    PlanetRow { name: "Mars",    size: 0.48,  color: (1.0,  0.27, 0.0),  orbit_distance: 15.2,      inclination_deg: 5.65,  eccentricity: 0.0934,   period_days: 686.971,   texture: "mars.jpg" },
    PlanetRow { name: "Jupiter", size: 10.0,  color: (1.0,  0.65, 0.0),  orbit_distance: 52.044,    inclination_deg: 6.09,  eccentricity: 0.0489,   period_days: 4332.59,   texture: "8k_jupiter.jpg" },
    PlanetRow { name: "Saturn",  size: 8.33,  color: (1.0,  0.84, 0.0),  orbit_distance: 95.826,    inclination_deg: 5.51,  eccentricity: 0.0565,   period_days: 10759.22,  texture: "8k_saturn.jpg" },
    PlanetRow { name: "Uranus",  size: 3.63,  color: (0.0,  1.0,  0.87), orbit_distance: 192.184,   inclination_deg: 6.48,  eccentricity: 0.046381, period_days: 30688.5,   texture: "2k_uranus.jpg" },
    PlanetRow { name: "Neptune", size: 3.52,  color: (0.0,  0.0,  1.0),  orbit_distance: 301.10388, inclination_deg: 6.43,  eccentricity: 0.009456, period_days: 60182.0,   texture: "2k_neptune.jpg" },
    PlanetRow { name: "Pluto",   size: 0.166, color: (0.0,  0.0,  1.0),  orbit_distance: 394.8,     inclination_deg: 11.88, eccentricity: 0.2488,   period_days: 90560.0,   texture: "pluto.jpg" },
];

pub fn sun_info() -> BodyInfo {
    BodyInfo {
        name: "Sun".to_owned(),
        radius: SUN_RADIUS,
        color: Point3::new(1.0, 0.85, 0.3),
        texture: Some(SUN_TEXTURE.to_owned()),
    }
}

/// The main belt, sitting between Mars and Jupiter. The bounding
/// eccentricities follow the two neighboring planets.
pub fn main_belt(count: usize) -> BeltParams {
    BeltParams {
        inner_radius: 35.0,
        outer_radius: 50.0,
        inner_eccentricity: 0.0934,
        outer_eccentricity: 0.0489,
        count,
        belt_width: 2.0,
        vertical_spread: 2.0,
        color: Point3::new(0.36, 0.23, 0.07),
    }
}

/// Builds the whole system from the table: the sun, nine planets, and the
/// main belt. The only failure mode is a bad table entry, which is worth
/// surfacing loudly rather than rendering nonsense.
pub fn build_solar_system(
    asteroid_count: usize,
    rng: &mut impl Rng,
) -> Result<Orrery, BadParameter> {
    let mut orrery = Orrery::new(sun_info());

    for row in PLANETS.iter() {
        orrery.add_body(
            BodyInfo {
                name: row.name.to_owned(),
                radius: row.size,
                color: Point3::new(row.color.0, row.color.1, row.color.2),
                texture: Some(row.texture.to_owned()),
            },
            OrbitalParams {
                orbit_distance: row.orbit_distance,
                eccentricity: row.eccentricity,
                inclination_deg: row.inclination_deg,
                period_days: row.period_days,
                spin_rate: SPIN_RATE,
            },
            rng,
        )?;
    }

    orrery.add_belt(&main_belt(asteroid_count), rng)?;
    Ok(orrery)
}
