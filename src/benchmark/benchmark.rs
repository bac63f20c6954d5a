use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Kind, NVec2, SpaceObject};

const NS: [usize; 6] = [2, 4, 8, 16, 64, 256];

/// Helper to build a manual body list of size `n`
/// Deterministic positions on a spiral, no two bodies coincide
pub fn make_bodies(n: usize) -> Vec<SpaceObject> {
    (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            let r = 1.0e9 * (1.0 + i_f);
            let x = NVec2::new(r * (i_f * 0.37).cos(), r * (i_f * 0.37).sin());
            let kind = if i == 0 { Kind::Star } else { Kind::Planet };
            SpaceObject::new(kind, "white", 1.0, 1.0e24, x, NVec2::zeros()).ok()
        })
        .collect()
}

pub fn bench_gravity() {
    let gravity = NewtonianGravity::default();

    for n in NS {
        let bodies = make_bodies(n);
        let mut out = vec![NVec2::zeros(); n];
        let reps = 10_000 / n.max(1);

        // Warm up
        let _ = gravity.acceleration(&bodies, &mut out);

        let t0 = Instant::now();
        for _ in 0..reps {
            let _ = gravity.acceleration(&bodies, &mut out);
        }
        let per_call = t0.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:5}, direct = {:10.3} us", per_call * 1.0e6);
    }
}

pub fn bench_euler() {
    let params = Parameters::default();
    let forces = AccelSet::new().with(NewtonianGravity { G: params.G });
    let steps = 1000;

    println!("N,euler_us");
    for n in NS {
        let mut bodies = make_bodies(n);

        // Warm-up
        if euler_integrator(&mut bodies, &forces, params.dt).is_err() {
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if euler_integrator(&mut bodies, &forces, params.dt).is_err() {
                break;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("{},{:.3}", n, per_step * 1.0e6);
    }
}
