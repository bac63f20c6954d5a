//! Headless simulation session
//!
//! A `Scenario` bundles everything one run needs:
//! - numerical parameters (`Parameters`) and the active force set (`AccelSet`)
//! - the body list, replaced wholesale on every load
//! - the scale factor, fixed at load time
//! - elapsed physical time and the running flag
//! - the trajectory recorder for the object of interest
//!
//! The session never schedules itself: a caller drives it by calling
//! [`Scenario::tick`] at whatever cadence it likes.

use std::time::Duration;

use log::{debug, info, warn};

use crate::configuration::bodies;
use crate::configuration::config::ScenarioConfig;
use crate::error::{Result, SimError};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::SpaceObject;
use crate::simulation::trajectory::{
    object_of_interest, TrajectoryRecorder, TrajectorySink, TrajectoryViews,
};
use crate::visualization::viewport::{compute_scale, ScreenSink, Viewport};

pub struct Scenario {
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub forces: AccelSet,
    pub recording: bool,
    bodies: Vec<SpaceObject>,
    scale: f64,
    elapsed: f64,
    running: bool,
    recorder: TrajectoryRecorder,
}

impl Scenario {
    /// Empty session; call [`Scenario::load`] before ticking
    pub fn new(parameters: Parameters, viewport: Viewport) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });
        Self {
            scale: viewport.default_scale,
            parameters,
            viewport,
            forces,
            recording: true,
            bodies: Vec::new(),
            elapsed: 0.0,
            running: false,
            recorder: TrajectoryRecorder::new(),
        }
    }

    /// Session from a YAML scenario and an already parsed body list
    pub fn build_scenario(cfg: &ScenarioConfig, bodies: Vec<SpaceObject>) -> Result<Self> {
        let mut scenario = Self::new(cfg.parameters.to_parameters(), cfg.viewport.clone());
        scenario.recording = cfg.recording;
        scenario.load(bodies)?;
        Ok(scenario)
    }

    /// Replace the body list and reset everything derived from the old one
    ///
    /// Stops the run, rewinds elapsed time, recomputes the scale factor and
    /// clears recorded samples. A list with no bodies is refused and leaves
    /// the session unchanged.
    pub fn load(&mut self, bodies: Vec<SpaceObject>) -> Result<()> {
        if bodies.is_empty() {
            return Err(SimError::EmptyConfiguration);
        }
        self.running = false;
        self.scale = compute_scale(&bodies, &self.viewport);
        self.bodies = bodies;
        self.elapsed = 0.0;
        self.recorder.clear();

        debug!(
            "loaded {} bodies, scale {:e} px/unit, tracking {:?}",
            self.bodies.len(),
            self.scale,
            object_of_interest(&self.bodies).map(|b| b.kind())
        );
        Ok(())
    }

    /// Parse `text` in the body format and load it
    pub fn load_text(&mut self, text: &str) -> Result<()> {
        self.load(bodies::parse(text)?)
    }

    /// Current body list in the body format
    pub fn save(&self) -> String {
        bodies::serialize(&self.bodies)
    }

    pub fn bodies(&self) -> &[SpaceObject] {
        &self.bodies
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_label(&self) -> String {
        format!("{:.1} seconds gone", self.elapsed)
    }

    pub fn recorder(&self) -> &TrajectoryRecorder {
        &self.recorder
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        info!("Started execution...");
    }

    /// Stop the run; returns the plot series when a body is being tracked
    pub fn pause(&mut self) -> Option<TrajectoryViews> {
        self.running = false;
        info!("Paused execution.");
        object_of_interest(&self.bodies).map(|_| self.recorder.export())
    }

    /// Push every body's pixel position to `screen`
    pub fn draw(&self, screen: &mut impl ScreenSink) {
        for (i, b) in self.bodies.iter().enumerate() {
            screen.update_position(i, b, self.viewport.to_screen(b, self.scale));
        }
    }

    /// Advance one step of `parameters.dt`, redraw, and record a sample
    ///
    /// On failure nothing moves, the run is stopped and the error returned.
    pub fn tick(&mut self, screen: &mut impl ScreenSink) -> Result<()> {
        if let Err(err) = euler_integrator(&mut self.bodies, &self.forces, self.parameters.dt) {
            self.running = false;
            warn!("step failed at t = {}: {err}", self.elapsed);
            return Err(err);
        }
        self.elapsed += self.parameters.dt;
        self.draw(screen);

        if self.recording {
            self.recorder.record(object_of_interest(&self.bodies), self.elapsed);
        }
        Ok(())
    }

    /// Start, tick `n` times, then stop
    ///
    /// Samples stay in the recorder; call [`Scenario::pause`] for the plot
    /// series.
    pub fn run(&mut self, n: usize, screen: &mut impl ScreenSink) -> Result<()> {
        self.start();
        for _ in 0..n {
            if !self.running {
                break;
            }
            self.tick(screen)?;
        }
        self.running = false;
        debug!("ran to t = {}", self.elapsed);
        Ok(())
    }
}

/// Wall-clock pause between ticks for a speed control in `0..=100`
///
/// Never affects `dt`: the same physical step is taken however fast the
/// steps are issued.
pub fn delay_for_speed(speed: u32) -> Duration {
    Duration::from_millis(101 - u64::from(speed.min(100)))
}
