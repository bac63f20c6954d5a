//! Physical-to-pixel mapping for a fixed-size 2D viewport
//!
//! The scale factor is derived once per load from the extent of the system
//! and then used to place every body on screen. The window itself lives
//! outside this crate; it receives pixel positions through [`ScreenSink`].

use serde::Deserialize;

use crate::simulation::states::SpaceObject;

/// Viewport geometry and scale policy
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Viewport {
    pub width: f64, // pixels
    pub height: f64, // pixels
    pub fraction: f64, // share of min(width, height) the farthest body may reach from the centre
    pub default_scale: f64, // used when every body sits at the origin
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            fraction: 0.4,
            default_scale: 1.0,
        }
    }
}

/// Pixel coordinates, origin top-left, rows growing downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl Viewport {
    /// Pixels available between the centre and the farthest body
    pub fn half_extent(&self) -> f64 {
        self.fraction * self.width.min(self.height)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Pixels per physical distance unit for a system reaching `max_distance`
    pub fn scale_for(&self, max_distance: f64) -> f64 {
        if max_distance > 0.0 {
            self.half_extent() / max_distance
        } else {
            self.default_scale
        }
    }

    /// Map a body's physical position to pixels
    ///
    /// `screen_x = cx + x * scale` and `screen_y = cy - y * scale`. Canvas
    /// rows grow downward, so the y axis is flipped relative to
    /// `center + position * scale`: physical +y is drawn above the center.
    /// Screen sinks receive points in this convention.
    pub fn to_screen(&self, body: &SpaceObject, scale: f64) -> ScreenPoint {
        let c = self.center();
        ScreenPoint {
            x: c.x + body.x.x * scale,
            y: c.y - body.x.y * scale,
        }
    }
}

/// Largest `|x|` or `|y|` over all bodies, zero for an empty list
pub fn max_distance(bodies: &[SpaceObject]) -> f64 {
    bodies.iter().map(SpaceObject::extent).fold(0.0, f64::max)
}

/// Scale factor fitting every body of `bodies` into `viewport`
pub fn compute_scale(bodies: &[SpaceObject], viewport: &Viewport) -> f64 {
    viewport.scale_for(max_distance(bodies))
}

/// Receiver of updated screen positions, one call per body per tick
pub trait ScreenSink {
    fn update_position(&mut self, index: usize, body: &SpaceObject, point: ScreenPoint);
}

/// Keeps the latest pixel position of every body
#[derive(Debug, Clone, Default)]
pub struct ScreenBuffer {
    points: Vec<ScreenPoint>,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<ScreenPoint> {
        self.points.get(index).copied()
    }
}

impl ScreenSink for ScreenBuffer {
    fn update_position(&mut self, index: usize, _body: &SpaceObject, point: ScreenPoint) {
        if index >= self.points.len() {
            self.points.resize(index + 1, ScreenPoint::default());
        }
        self.points[index] = point;
    }
}

/// Sink that drops every update, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScreen;

impl ScreenSink for NoScreen {
    fn update_position(&mut self, _index: usize, _body: &SpaceObject, _point: ScreenPoint) {}
}
