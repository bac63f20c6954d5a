//! Fixed-step time integration
//!
//! Explicit Euler driven by an [`AccelSet`]: accelerations from the frozen
//! start-of-step configuration, then velocities, then positions from the
//! updated velocities. The caller supplies `dt` on every call.

use log::trace;

use super::forces::AccelSet;
use super::states::SpaceObject;
use crate::error::{Result, SimError};

/// Advance `bodies` by one explicit Euler step of length `dt`
///
/// Both failure modes are detected before any body is touched, so on `Err`
/// the list is exactly as it was passed in:
/// - `dt <= 0` (or NaN) -> [`SimError::InvalidTimeStep`]
/// - coincident bodies -> [`SimError::DegenerateConfiguration`]
///
/// An empty list is a no-op.
pub fn euler_integrator(bodies: &mut [SpaceObject], forces: &AccelSet, dt: f64) -> Result<()> {
    if !(dt > 0.0) {
        return Err(SimError::InvalidTimeStep(dt));
    }
    if bodies.is_empty() { // no bodies, return
        return Ok(());
    }

    // a_n from x_n for every body before anything moves
    let accels = forces.accelerations(bodies)?;

    // v_n+1 = v_n + dt * a_n
    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
    }

    // x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.x += dt * b.v;
    }

    trace!("euler step dt={dt} over {} bodies", bodies.len());
    Ok(())
}

/// One step under SI Newtonian gravity
pub fn step(bodies: &mut [SpaceObject], dt: f64) -> Result<()> {
    euler_integrator(bodies, &AccelSet::default(), dt)
}

/// Run `n_steps` steps, stopping at the first failure
///
/// Steps completed before the failure stay applied; the failing step itself
/// leaves the bodies untouched.
pub fn integrate(bodies: &mut [SpaceObject], forces: &AccelSet, dt: f64, n_steps: usize) -> Result<()> {
    for _ in 0..n_steps {
        euler_integrator(bodies, forces, dt)?;
    }
    Ok(())
}
