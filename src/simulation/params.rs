//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - integration step size and number of steps,
//! - gravitational constant `G`,
//! - pacing speed for real-time runs

/// Gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const G_SI: f64 = 6.674e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // physical seconds per step
    pub steps: usize, // steps per run
    pub G: f64, // gravitational constant
    pub speed: u32, // pacing control, 0..=100
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1.0,
            steps: 1000,
            G: G_SI,
            speed: 100,
        }
    }
}
