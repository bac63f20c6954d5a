//! Force / acceleration contributors
//!
//! Defines the acceleration trait, the set that sums its terms, and direct
//! Newtonian gravity over every pair of bodies

use crate::error::{Result, SimError};
use crate::simulation::params::G_SI;
use crate::simulation::states::{NVec2, SpaceObject};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - on error the content of `out` is unspecified
    pub fn accumulate_accels(&self, bodies: &[SpaceObject], out: &mut [NVec2]) -> Result<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out)?;
        }
        Ok(())
    }

    /// Allocating variant of [`AccelSet::accumulate_accels`], one vector per body in input order
    pub fn accelerations(&self, bodies: &[SpaceObject]) -> Result<Vec<NVec2>> {
        let mut out = vec![NVec2::zeros(); bodies.len()];
        self.accumulate_accels(bodies, &mut out)?;
        Ok(out)
    }

    /// Sum of the potential energy reported by every term
    pub fn potential_energy(&self, bodies: &[SpaceObject]) -> Result<f64> {
        let mut total = 0.0;
        for term in &self.terms {
            total += term.potential_energy(bodies)?;
        }
        Ok(total)
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new().with(NewtonianGravity::default())
    }
}

/// Acceleration sources operating on a body list
/// Implementations add their contribution into `out[i]` for each body and
/// never mutate the bodies themselves
pub trait Acceleration {
    fn acceleration(&self, bodies: &[SpaceObject], out: &mut [NVec2]) -> Result<()>;

    /// Potential energy of the configuration, zero for non-conservative terms
    fn potential_energy(&self, _bodies: &[SpaceObject]) -> Result<f64> {
        Ok(0.0)
    }
}

/// Newtonian gravity, direct sum over all pairs
///
/// No softening: two bodies at exactly the same position are reported as
/// [`SimError::DegenerateConfiguration`].
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: G_SI }
    }
}

impl NewtonianGravity {
    /// One acceleration vector per body, ordered like `bodies`
    pub fn accelerations(&self, bodies: &[SpaceObject]) -> Result<Vec<NVec2>> {
        let mut out = vec![NVec2::zeros(); bodies.len()];
        self.acceleration(bodies, &mut out)?;
        Ok(out)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[SpaceObject], out: &mut [NVec2]) -> Result<()> {
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let r2 = r.dot(&r);
                if r2 == 0.0 {
                    return Err(SimError::DegenerateConfiguration { first: i, second: j });
                }

                // |a_i| = G m_j / |r|^2 along r / |r|  =>  a_i = G m_j r / |r|^3
                let inv_r = r2.sqrt().recip();
                let coef = self.G * inv_r * inv_r * inv_r;

                // separations this small overflow 1/|r|^3 just like a zero one
                let a_i = coef * bj.mass() * r;
                let a_j = coef * bi.mass() * r;
                if !(a_i.iter().all(|c| c.is_finite()) && a_j.iter().all(|c| c.is_finite())) {
                    return Err(SimError::DegenerateConfiguration { first: i, second: j });
                }

                out[i] += a_i;
                out[j] -= a_j;
            }
        }
        Ok(())
    }

    fn potential_energy(&self, bodies: &[SpaceObject]) -> Result<f64> {
        let mut energy = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for (j, bj) in bodies.iter().enumerate().skip(i + 1) {
                let r = (bj.x - bi.x).norm();
                if r == 0.0 {
                    return Err(SimError::DegenerateConfiguration { first: i, second: j });
                }
                energy -= self.G * bi.mass() * bj.mass() / r;
            }
        }
        Ok(energy)
    }
}
