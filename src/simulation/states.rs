//! Core state types for the simulation.
//!
//! Defines the body record operated on by every other module:
//! - `Kind`        star / planet tag
//! - `SpaceObject` identity (kind, color, radius, mass) + kinematic state
//!
//! Positions and velocities use `NVec2` (2d). The body list itself is a plain
//! `Vec<SpaceObject>` owned by the caller.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

/// Kind of celestial body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Star,
    Planet,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Star => "star",
            Kind::Planet => "planet",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    // case-insensitive, body files in the wild use "Star" and "Planet"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "star" => Ok(Kind::Star),
            "planet" => Ok(Kind::Planet),
            other => Err(format!("unknown body kind `{other}`")),
        }
    }
}

/// One simulated body
///
/// Identity fields are fixed at construction and only readable through
/// accessors; `x` and `v` are advanced in place by the integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceObject {
    kind: Kind,
    color: String, // opaque display token
    radius: f64,   // display radius
    mass: f64,     // > 0, constant
    pub x: NVec2,  // position
    pub v: NVec2,  // velocity
}

impl SpaceObject {
    /// Create a body that the text format can represent
    ///
    /// - mass must be positive and finite
    /// - radius must be finite and non-negative
    /// - color must be one non-empty whitespace-free token
    /// - position and velocity must be finite
    pub fn new(
        kind: Kind,
        color: impl Into<String>,
        radius: f64,
        mass: f64,
        x: NVec2,
        v: NVec2,
    ) -> Result<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(radius >= 0.0 && radius.is_finite()) {
            return Err(SimError::InvalidRadius(radius));
        }
        let color = color.into();
        if color.is_empty() || color.chars().any(char::is_whitespace) {
            return Err(SimError::InvalidColor(color));
        }
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::InvalidState);
        }
        Ok(Self {
            kind,
            color,
            radius,
            mass,
            x,
            v,
        })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_star(&self) -> bool {
        self.kind == Kind::Star
    }

    /// Distance from the coordinate origin
    pub fn distance_from_origin(&self) -> f64 {
        self.x.norm()
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Largest absolute coordinate, used to size the viewport
    pub fn extent(&self) -> f64 {
        self.x.x.abs().max(self.x.y.abs())
    }
}
