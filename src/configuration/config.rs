//! Configuration types for loading simulation runs from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, step count, physical constants, pacing
//! - [`Viewport`]         – viewport geometry used for the scale factor
//! - [`ScenarioConfig`]   – top-level wrapper, also naming the body file
//!
//! # YAML format
//!
//! ```yaml
//! bodies: one_satellite.txt   # body list, resolved next to this file
//!
//! parameters:
//!   dt: 1.0                   # physical seconds per step
//!   steps: 5000               # steps per run
//!   G: 6.674e-11              # gravitational constant
//!   speed: 100                # 0..=100, pacing for --realtime
//!
//! viewport:
//!   width: 800
//!   height: 800
//!   fraction: 0.4
//!   default_scale: 1.0
//!
//! recording: true             # track the object of interest
//! ```
//!
//! Every section is optional and falls back to its defaults. The body list
//! itself uses the plain-text format of [`crate::configuration::bodies`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::simulation::params::{Parameters, G_SI};
use crate::visualization::viewport::Viewport;

/// Global numerical and physical parameters for a run
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,      // time step size
    pub steps: usize, // number of steps to run
    pub G: f64,       // gravitational constant
    pub speed: u32,   // real-time pacing, 0 slowest .. 100 fastest
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            steps: 1000,
            G: G_SI,
            speed: 100,
        }
    }
}

impl ParametersConfig {
    /// Runtime parameters from the YAML-facing ones
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            dt: self.dt,
            steps: self.steps,
            G: self.G,
            speed: self.speed.min(100),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScenarioConfig {
    pub bodies: PathBuf, // body list file, relative paths resolve against the YAML's directory
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub viewport: Viewport, // Viewport used to derive the scale factor
    pub recording: bool, // Record the object of interest's trajectory
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            bodies: PathBuf::from("one_satellite.txt"),
            parameters: ParametersConfig::default(),
            viewport: Viewport::default(),
            recording: true,
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Body file path, resolved against `base` when relative
    pub fn bodies_path(&self, base: &Path) -> PathBuf {
        if self.bodies.is_absolute() {
            self.bodies.clone()
        } else {
            base.join(&self.bodies)
        }
    }
}
