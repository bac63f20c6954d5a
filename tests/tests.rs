use std::path::PathBuf;

use approx::assert_relative_eq;

use orbitsim::simulation::diagnostics::{angular_momentum, linear_momentum, total_energy};
use orbitsim::{compute_scale, euler_integrator, object_of_interest, parse, serialize, step};
use orbitsim::{AccelSet, Kind, NVec2, NewtonianGravity, Parameters, SpaceObject};
use orbitsim::{NoScreen, Scenario, ScenarioConfig, SimError, TrajectoryRecorder, TrajectorySink, Viewport};

fn body(kind: Kind, mass: f64, x: [f64; 2], v: [f64; 2]) -> SpaceObject {
    SpaceObject::new(kind, "white", 1.0, mass, x.into(), v.into()).unwrap()
}

/// Build a simple 2-body list separated along x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> Vec<SpaceObject> {
    vec![
        body(Kind::Star, m1, [-dist / 2.0, 0.0], [0.0, 0.0]),
        body(Kind::Planet, m2, [dist / 2.0, 0.0], [0.0, 0.0]),
    ]
}

/// Heavy star at the origin, 1 kg satellite at (100, 0) on a circular orbit
pub fn satellite_system(p: &Parameters) -> Vec<SpaceObject> {
    let star_mass = 1.0e10;
    let r = 100.0;
    let v_circular = (p.G * star_mass / r).sqrt();
    vec![
        body(Kind::Star, star_mass, [0.0, 0.0], [0.0, 0.0]),
        body(Kind::Planet, 1.0, [r, 0.0], [0.0, v_circular]),
    ]
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 1.0,
        steps: 1000,
        G: 6.674e-11,
        speed: 100,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity { G: p.G })
}

fn scenarios_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let bodies = two_body_system(1.0, 2.0, 3.0);
    let forces = gravity_set(&test_params());

    let acc = forces.accelerations(&bodies).unwrap();
    let net = acc[0] * bodies[0].mass() + acc[1] * bodies[1].mass();

    assert!(net.norm() < 1e-20, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let bodies = two_body_system(2.0, 1.0, 1.0);
    let forces = gravity_set(&test_params());

    let acc = forces.accelerations(&bodies).unwrap();
    let dx = bodies[1].x - bodies[0].x;

    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let forces = gravity_set(&test_params());
    let acc_r = forces.accelerations(&two_body_system(1.0, 1.0, 1.0)).unwrap();
    let acc_2r = forces.accelerations(&two_body_system(2.0, 1.0, 1.0)).unwrap();

    assert_relative_eq!(acc_r[0].norm() / acc_2r[0].norm(), 4.0, epsilon = 1e-12);
}

#[test]
fn gravity_sums_contributions_from_every_body() {
    let p = Parameters { G: 1.0, ..test_params() };
    let bodies = vec![
        body(Kind::Planet, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body(Kind::Star, 4.0, [2.0, 0.0], [0.0, 0.0]),
        body(Kind::Star, 9.0, [0.0, -3.0], [0.0, 0.0]),
    ];

    let acc = gravity_set(&p).accelerations(&bodies).unwrap();

    // 4 / 2^2 toward +x, 9 / 3^2 toward -y
    assert_relative_eq!(acc[0].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(acc[0].y, -1.0, epsilon = 1e-12);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn zero_time_step_is_rejected() {
    let mut bodies = satellite_system(&test_params());
    let before = bodies.clone();

    let err = step(&mut bodies, 0.0).unwrap_err();

    assert!(matches!(err, SimError::InvalidTimeStep(dt) if dt == 0.0));
    assert_eq!(bodies, before);
}

#[test]
fn positive_time_step_moves_bodies() {
    let mut bodies = satellite_system(&test_params());
    let before = bodies.clone();

    step(&mut bodies, 1.0e-3).unwrap();

    for (b, old) in bodies.iter().zip(before.iter()) {
        assert_ne!(b.v, old.v);
    }
    assert_ne!(bodies[1].x, before[1].x);
}

#[test]
fn coincident_bodies_fail_without_nan() {
    let mut bodies = vec![
        body(Kind::Star, 1.0e10, [5.0, 5.0], [1.0, 0.0]),
        body(Kind::Planet, 1.0, [5.0, 5.0], [0.0, 1.0]),
    ];
    let before = bodies.clone();

    let err = step(&mut bodies, 1.0).unwrap_err();

    assert!(matches!(err, SimError::DegenerateConfiguration { first: 0, second: 1 }));
    assert_eq!(bodies, before);
    assert!(bodies.iter().all(|b| b.x.iter().all(|c| c.is_finite())));
}

#[test]
fn nearly_coincident_bodies_fail_without_inf() {
    let mut bodies = vec![
        body(Kind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]),
        body(Kind::Planet, 1.0, [1e-160, 0.0], [0.0, 0.0]),
    ];
    let before = bodies.clone();

    let err = step(&mut bodies, 1.0).unwrap_err();

    assert!(matches!(err, SimError::DegenerateConfiguration { first: 0, second: 1 }));
    assert_eq!(bodies, before);
    assert!(bodies.iter().all(|b| b.x.iter().chain(b.v.iter()).all(|c| c.is_finite())));
}

#[test]
fn two_body_energy_and_angular_momentum_stay_bounded() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut bodies = satellite_system(&p);

    let e0 = total_energy(&bodies, &forces).unwrap();
    let l0 = angular_momentum(&bodies);
    let p0 = linear_momentum(&bodies);

    // ~2 orbits, period = 2 pi r / v ~ 7.7e3 s
    let mut e_prev = e0;
    for _ in 0..15_000 {
        euler_integrator(&mut bodies, &forces, p.dt).unwrap();

        let e = total_energy(&bodies, &forces).unwrap();
        assert!((e - e_prev).abs() < 1e-4 * e0.abs(), "energy jump per step too large");
        assert!((e - e0).abs() < 1e-2 * e0.abs(), "energy diverged: {e} vs {e0}");
        e_prev = e;
    }

    assert_relative_eq!(angular_momentum(&bodies), l0, max_relative = 1e-6);
    assert!((linear_momentum(&bodies) - p0).norm() < 1e-9 * p0.norm().max(1e-12));
}

#[test]
fn circular_orbit_keeps_its_radius() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut bodies = satellite_system(&p);

    for _ in 0..7_700 {
        euler_integrator(&mut bodies, &forces, p.dt).unwrap();
        let r = (bodies[1].x - bodies[0].x).norm();
        assert!((r - 100.0).abs() < 1.0, "radius drifted to {r}");
    }
}

// ==================================================================================
// Scale, selection and recording tests
// ==================================================================================

#[test]
fn single_body_at_origin_gets_default_scale() {
    let bodies = vec![body(Kind::Star, 1.0, [0.0, 0.0], [0.0, 0.0])];
    let viewport = Viewport::default();
    assert_eq!(compute_scale(&bodies, &viewport), viewport.default_scale);
}

#[test]
fn object_of_interest_selection() {
    let star = || body(Kind::Star, 1.0, [0.0, 0.0], [0.0, 0.0]);
    let planet = |x: f64| body(Kind::Planet, 1.0, [x, 0.0], [0.0, 0.0]);

    assert!(object_of_interest(&[star(), star()]).is_none());
    assert_eq!(object_of_interest(&[star(), planet(7.0)]), Some(&planet(7.0)));
    assert_eq!(object_of_interest(&[planet(1.0), planet(2.0)]), Some(&planet(1.0)));
    assert!(object_of_interest(&[star(), planet(1.0), planet(2.0)]).is_none());
}

#[test]
fn recorder_tracks_satellite_over_steps() {
    let p = test_params();
    let forces = gravity_set(&p);
    let mut bodies = satellite_system(&p);
    let mut rec = TrajectoryRecorder::new();

    let mut t = 0.0;
    for _ in 0..10 {
        euler_integrator(&mut bodies, &forces, p.dt).unwrap();
        t += p.dt;
        rec.record(object_of_interest(&bodies), t);
    }

    assert_eq!(rec.len(), 10);
    let last = rec.samples()[9];
    assert_eq!(last.t, 10.0);
    assert_relative_eq!(last.distance, 100.0, max_relative = 1e-3);
    assert_relative_eq!(last.speed, bodies[1].v.norm());
}

// ==================================================================================
// Serializer tests
// ==================================================================================

#[test]
fn seven_field_line_is_malformed() {
    let src = "# header\nstar yellow 30 2e30 0 0 0 0\nplanet blue 5 6e24 1e11 0 0\n";
    match parse(src) {
        Err(SimError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn round_trip_preserves_every_field() {
    let awkward: [f64; 6] = [1.0 / 3.0, -0.0, 1e-300, 2.5e-7, -123456.789, 1.7976931348623157e308];

    for n in 0..6 {
        let bodies: Vec<SpaceObject> = (0..n)
            .map(|i| {
                let kind = if i % 2 == 0 { Kind::Star } else { Kind::Planet };
                let f = |k: usize| awkward[(i + k) % awkward.len()];
                SpaceObject::new(
                    kind,
                    format!("color{i}"),
                    f(0).abs(),
                    1.0e24 / (i as f64 + 3.0),
                    NVec2::new(f(1), f(2)),
                    NVec2::new(f(3), f(4)),
                )
                .unwrap()
            })
            .collect();

        let first = parse(&serialize(&bodies)).unwrap();
        assert_eq!(first, bodies);
        let second = parse(&serialize(&first)).unwrap();
        assert_eq!(second, first);
    }
}

#[test]
fn unrepresentable_bodies_cannot_be_constructed() {
    let at = |x: f64| NVec2::new(x, 0.0);

    let spaced = SpaceObject::new(Kind::Planet, "light blue", 1.0, 1.0, at(1.0), at(0.0));
    assert!(matches!(spaced, Err(SimError::InvalidColor(_))));
    let blank = SpaceObject::new(Kind::Planet, "", 1.0, 1.0, at(1.0), at(0.0));
    assert!(matches!(blank, Err(SimError::InvalidColor(_))));
    let radius = SpaceObject::new(Kind::Planet, "blue", f64::NAN, 1.0, at(1.0), at(0.0));
    assert!(matches!(radius, Err(SimError::InvalidRadius(_))));
    let position = SpaceObject::new(Kind::Planet, "blue", 1.0, 1.0, at(f64::INFINITY), at(0.0));
    assert!(matches!(position, Err(SimError::InvalidState)));

    // whatever is accepted must survive a save and reload
    let bodies = vec![
        SpaceObject::new(Kind::Star, "light-blue", 0.0, 1.0, at(0.0), at(0.0)).unwrap(),
        SpaceObject::new(Kind::Planet, "#ff8800", 1e-12, 5e-324, at(-1e300), at(1e-300)).unwrap(),
    ];
    assert_eq!(parse(&serialize(&bodies)).unwrap(), bodies);
}

#[test]
fn bundled_body_files_round_trip() {
    for name in ["one_satellite.txt", "double_star.txt", "solar_system.txt"] {
        let text = std::fs::read_to_string(scenarios_dir().join(name)).unwrap();
        let bodies = parse(&text).unwrap();
        assert!(!bodies.is_empty(), "{name} is empty");
        assert_eq!(parse(&serialize(&bodies)).unwrap(), bodies);
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn default_scenario_runs() {
    let dir = scenarios_dir();
    let cfg = ScenarioConfig::from_yaml_file(dir.join("default.yaml")).unwrap();
    let bodies = orbitsim::read_bodies_from_file(cfg.bodies_path(&dir)).unwrap();
    let mut scenario = Scenario::build_scenario(&cfg, bodies).unwrap();

    assert_eq!(scenario.parameters.dt, 3600.0);
    scenario.run(24, &mut NoScreen).unwrap();

    assert_eq!(scenario.elapsed(), 24.0 * 3600.0);
    assert_eq!(scenario.recorder().len(), 24);
    assert_eq!(scenario.bodies()[0].kind(), Kind::Star);

    let saved = parse(&scenario.save()).unwrap();
    assert_eq!(saved, scenario.bodies());
}
