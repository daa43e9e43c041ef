use std::collections::HashMap;

use rand::Rng;

use super::{
    AsteroidBelt, BadParameter, BeltParams, BodyID, BodyInfo, OrbitalBody, OrbitalParams,
};

/// The whole model: a fixed central body, the bodies orbiting it, and any
/// asteroid belts.
///
/// Owns no rendering resources; it only supplies positions and rotations
/// for the scene layer to consume.
pub struct Orrery {
    primary: BodyInfo,
    bodies: HashMap<BodyID, OrbitalBody>,
    next_body_id: usize,
    belts: Vec<AsteroidBelt>,
}

impl Orrery {
    pub fn new(primary: BodyInfo) -> Self {
        Orrery {
            primary,
            bodies: HashMap::new(),
            next_body_id: 0,
            belts: Vec::new(),
        }
    }

    /// The central body. It doesn't orbit and it doesn't move.
    pub fn primary(&self) -> &BodyInfo {
        &self.primary
    }

    /// Validates `params` and adds a body orbiting the primary. The orbit
    /// distance is offset by the primary's render radius, so a valid body
    /// can never sit inside the central sphere.
    pub fn add_body(
        &mut self,
        info: BodyInfo,
        params: OrbitalParams,
        rng: &mut impl Rng,
    ) -> Result<BodyID, BadParameter> {
        let id = BodyID(self.next_body_id);
        let body = OrbitalBody::new(id, info, params, self.primary.radius as f64, rng)?;

        self.next_body_id += 1;
        self.bodies.insert(id, body);
        Ok(id)
    }

    pub fn add_belt(
        &mut self,
        params: &BeltParams,
        rng: &mut impl Rng,
    ) -> Result<(), BadParameter> {
        let belt = AsteroidBelt::generate(params, rng)?;
        self.belts.push(belt);
        Ok(())
    }

    pub fn bodies(&self) -> impl Iterator<Item = &OrbitalBody> + '_ {
        self.bodies.values()
    }

    pub fn get_body(&self, id: BodyID) -> &OrbitalBody {
        &self.bodies[&id]
    }

    pub fn belts(&self) -> &[AsteroidBelt] {
        &self.belts
    }

    /// Advances every body by the given number of frames. Belts are static
    /// and stay put.
    pub fn advance(&mut self, frames: f64) {
        for body in self.bodies.values_mut() {
            body.advance(frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn primary(radius: f32) -> BodyInfo {
        BodyInfo {
            name: "Star".to_owned(),
            radius,
            color: Point3::new(1.0, 0.9, 0.4),
            texture: None,
        }
    }

    fn planet(name: &str) -> BodyInfo {
        BodyInfo {
            name: name.to_owned(),
            radius: 1.0,
            color: Point3::new(0.5, 0.5, 0.5),
            texture: None,
        }
    }

    fn params(distance: f64, period: f64) -> OrbitalParams {
        OrbitalParams {
            orbit_distance: distance,
            eccentricity: 0.1,
            inclination_deg: 2.0,
            period_days: period,
            spin_rate: 0.05,
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut orrery = Orrery::new(primary(10.0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let a = orrery.add_body(planet("a"), params(5.0, 10.0), &mut rng).unwrap();
        let b = orrery.add_body(planet("b"), params(8.0, 20.0), &mut rng).unwrap();

        assert_eq!(a, BodyID(0));
        assert_eq!(b, BodyID(1));
        assert_eq!(orrery.bodies().count(), 2);
        assert_eq!(orrery.get_body(a).info.name, "a");
    }

    #[test]
    fn test_primary_radius_offsets_orbit() {
        let mut orrery = Orrery::new(primary(10.0));
        let id = orrery
            .add_body(planet("p"), params(5.0, 10.0), &mut StepRng::new(0, 0))
            .unwrap();

        assert_relative_eq!(orrery.get_body(id).ellipse().semi_major_axis(), 15.0);
    }

    #[test]
    fn test_rejected_body_allocates_no_id() {
        let mut orrery = Orrery::new(primary(10.0));
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let bad = OrbitalParams {
            eccentricity: 1.5,
            ..params(5.0, 10.0)
        };
        assert_eq!(
            orrery.add_body(planet("x"), bad, &mut rng),
            Err(BadParameter::Eccentricity(1.5))
        );

        let id = orrery.add_body(planet("y"), params(5.0, 10.0), &mut rng).unwrap();
        assert_eq!(id, BodyID(0));
    }

    #[test]
    fn test_advance_moves_every_body() {
        let mut orrery = Orrery::new(primary(10.0));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        orrery.add_body(planet("a"), params(5.0, 10.0), &mut rng).unwrap();
        orrery.add_body(planet("b"), params(8.0, 20.0), &mut rng).unwrap();

        let before: Vec<_> = orrery.bodies().map(|b| (b.id, b.phase())).collect();
        orrery.advance(10.0);

        for (id, old_phase) in before {
            let body = orrery.get_body(id);
            assert_relative_eq!(
                body.phase(),
                (old_phase + body.phase_rate() * 10.0).rem_euclid(std::f64::consts::TAU),
                epsilon = 1e-12
            );
        }
    }
}
