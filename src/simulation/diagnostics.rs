//! Conserved quantities of a body list
//!
//! Used to check the integrator drift; nothing here mutates the bodies.

use super::forces::AccelSet;
use super::states::{NVec2, SpaceObject};
use crate::error::Result;

pub fn total_mass(bodies: &[SpaceObject]) -> f64 {
    bodies.iter().map(|b| b.mass()).sum()
}

pub fn kinetic_energy(bodies: &[SpaceObject]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.mass() * b.v.norm_squared()).sum()
}

/// Kinetic energy plus the potential energy reported by `forces`
pub fn total_energy(bodies: &[SpaceObject], forces: &AccelSet) -> Result<f64> {
    Ok(kinetic_energy(bodies) + forces.potential_energy(bodies)?)
}

pub fn linear_momentum(bodies: &[SpaceObject]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |p, b| p + b.mass() * b.v)
}

/// Mass-weighted mean position, zero for an empty list
pub fn center_of_mass(bodies: &[SpaceObject]) -> NVec2 {
    let m = total_mass(bodies);
    if m == 0.0 {
        return NVec2::zeros();
    }
    bodies.iter().fold(NVec2::zeros(), |c, b| c + b.mass() * b.x) / m
}

/// Mass-weighted mean velocity, zero for an empty list
pub fn center_of_mass_velocity(bodies: &[SpaceObject]) -> NVec2 {
    let m = total_mass(bodies);
    if m == 0.0 {
        return NVec2::zeros();
    }
    linear_momentum(bodies) / m
}

/// z component of the total angular momentum about the centre of mass
pub fn angular_momentum(bodies: &[SpaceObject]) -> f64 {
    let com = center_of_mass(bodies);
    let com_v = center_of_mass_velocity(bodies);
    bodies
        .iter()
        .map(|b| {
            let r = b.x - com;
            let v = b.v - com_v;
            b.mass() * (r.x * v.y - r.y * v.x)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::forces::NewtonianGravity;
    use crate::simulation::states::Kind;

    fn pair() -> Vec<SpaceObject> {
        vec![
            SpaceObject::new(Kind::Star, "y", 1.0, 3.0, NVec2::new(0.0, 0.0), NVec2::new(0.0, -1.0)).unwrap(),
            SpaceObject::new(Kind::Planet, "b", 1.0, 1.0, NVec2::new(4.0, 0.0), NVec2::new(0.0, 3.0)).unwrap(),
        ]
    }

    #[test]
    fn center_of_mass_frame() {
        let bodies = pair();
        assert_eq!(center_of_mass(&bodies), NVec2::new(1.0, 0.0));
        assert_eq!(center_of_mass_velocity(&bodies), NVec2::zeros());
        assert_eq!(linear_momentum(&bodies), NVec2::zeros());
    }

    #[test]
    fn energies_and_angular_momentum() {
        let bodies = pair();
        let forces = AccelSet::new().with(NewtonianGravity { G: 1.0 });

        // 0.5*3*1 + 0.5*1*9 = 6, U = -3/4
        assert_eq!(kinetic_energy(&bodies), 6.0);
        assert!((total_energy(&bodies, &forces).unwrap() - 5.25).abs() < 1e-12);
        // star at -1 from com moving -1 in y: 3 * (-1 * -1) = 3; planet 1 * (3 * 3) = 9
        assert!((angular_momentum(&bodies) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(center_of_mass(&[]), NVec2::zeros());
        assert_eq!(angular_momentum(&[]), 0.0);
        assert_eq!(kinetic_energy(&[]), 0.0);
    }
}
