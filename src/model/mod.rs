use thiserror::Error;

mod belt;
mod body;
mod orrery;
pub mod planets;

pub use belt::{AsteroidBelt, BeltParams};
pub use body::{BodyID, BodyInfo, OrbitalBody, OrbitalParams, FRAMES_PER_DAY};
pub use orrery::Orrery;

/// Rejected construction input.
///
/// The parameter tables live in code, so any of these is a programming
/// mistake; construction fails fast rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BadParameter {
    #[error("orbit distance must be positive, got {0}")]
    OrbitDistance(f64),
    #[error("eccentricity must lie in [0, 1), got {0}")]
    Eccentricity(f64),
    #[error("orbital period must be positive, got {0} days")]
    Period(f64),
    #[error("spin rate must be finite, got {0}")]
    SpinRate(f64),
    #[error("belt radii must satisfy 0 < inner + width < outer, got inner {inner}, outer {outer}, width {width}")]
    BeltRadii {
        inner: f64,
        outer: f64,
        width: f64,
    },
    #[error("vertical spread must be non-negative, got {0}")]
    VerticalSpread(f64),
}
