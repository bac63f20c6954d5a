//! Trajectory statistics for the tracked body
//!
//! Picks the object of interest from a body list and accumulates
//! `(t, distance, speed)` samples for the external plotting layer.

use std::io::Write;

use super::states::{Kind, SpaceObject};
use crate::error::Result;

/// Body whose trajectory is tracked, recomputed from `bodies` on every call
///
/// Only two-body configurations have one:
/// - star + star     -> none
/// - star + planet   -> the planet
/// - anything else   -> the first body
pub fn object_of_interest(bodies: &[SpaceObject]) -> Option<&SpaceObject> {
    object_of_interest_index(bodies).map(|i| &bodies[i])
}

/// Index variant of [`object_of_interest`]
pub fn object_of_interest_index(bodies: &[SpaceObject]) -> Option<usize> {
    match bodies {
        [a, b] => match (a.kind(), b.kind()) {
            (Kind::Star, Kind::Star) => None,
            (Kind::Star, Kind::Planet) => Some(1),
            _ => Some(0),
        },
        _ => None,
    }
}

/// One recorded point of the tracked body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,        // physical time
    pub distance: f64, // distance from origin
    pub speed: f64,    // |v|
}

impl Sample {
    pub fn of(body: &SpaceObject, t: f64) -> Self {
        Self {
            t,
            distance: body.distance_from_origin(),
            speed: body.speed(),
        }
    }
}

/// The three scatter series drawn by the plotting layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryViews {
    pub speed_vs_time: Vec<(f64, f64)>,
    pub distance_vs_time: Vec<(f64, f64)>,
    pub speed_vs_distance: Vec<(f64, f64)>,
}

/// Anything that accepts trajectory samples
pub trait TrajectorySink {
    /// Append a sample for `body` at time `t`; `None` means nothing is tracked
    fn record(&mut self, body: Option<&SpaceObject>, t: f64);

    /// Drop everything recorded so far
    fn clear(&mut self);
}

/// Append-only sample buffer
#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    samples: Vec<Sample>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn export(&self) -> TrajectoryViews {
        let mut views = TrajectoryViews::default();
        for s in &self.samples {
            views.speed_vs_time.push((s.t, s.speed));
            views.distance_vs_time.push((s.t, s.distance));
            views.speed_vs_distance.push((s.distance, s.speed));
        }
        views
    }

    /// Write samples as a whitespace table, one `t distance speed` row per sample
    pub fn write_table<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "# t distance speed")?;
        for s in &self.samples {
            writeln!(out, "{} {} {}", s.t, s.distance, s.speed)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl TrajectorySink for TrajectoryRecorder {
    fn record(&mut self, body: Option<&SpaceObject>, t: f64) {
        if let Some(body) = body {
            self.samples.push(Sample::of(body, t));
        }
    }

    fn clear(&mut self) {
        self.samples.clear();
    }
}
