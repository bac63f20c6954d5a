//! Plain-text body list format.
//!
//! One body per line, whitespace separated, in the order
//!
//! ```text
//! # kind   color   radius  mass     x        y    Vx   Vy
//! star     yellow  30      1.99e30  0        0    0    0
//! planet   blue    5       5.97e24  1.496e11 0    0    29780
//! ```
//!
//! Blank lines and lines starting with [`COMMENT`] are skipped. There is no
//! header or count line; the number of bodies is the number of records.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::simulation::states::{Kind, NVec2, SpaceObject};

/// Marker for comment lines
pub const COMMENT: char = '#';

const FIELDS: usize = 8;

/// Parse a body list, failing on the first malformed line
pub fn parse(source: &str) -> Result<Vec<SpaceObject>> {
    let mut bodies = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        bodies.push(parse_record(line).map_err(|reason| SimError::MalformedRecord {
            line: idx + 1,
            content: raw.to_string(),
            reason,
        })?);
    }
    Ok(bodies)
}

fn parse_record(line: &str) -> std::result::Result<SpaceObject, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(format!("expected {FIELDS} fields, found {}", fields.len()));
    }

    let kind: Kind = fields[0].parse()?;
    let color = fields[1];
    let radius = number(fields[2], "radius")?;
    let mass = number(fields[3], "mass")?;
    let x = NVec2::new(number(fields[4], "x")?, number(fields[5], "y")?);
    let v = NVec2::new(number(fields[6], "Vx")?, number(fields[7], "Vy")?);

    SpaceObject::new(kind, color, radius, mass, x, v).map_err(|e| e.to_string())
}

fn number(field: &str, name: &str) -> std::result::Result<f64, String> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("{name} `{field}` is not finite")),
        Err(_) => Err(format!("{name} `{field}` is not a number")),
    }
}

/// Write `bodies` back in the same field order
///
/// Floats use Rust's shortest round-trip formatting, so
/// `parse(&serialize(&bodies))` reproduces every field exactly.
pub fn serialize(bodies: &[SpaceObject]) -> String {
    let mut out = String::new();
    for b in bodies {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {} {} {:e} {} {} {} {}",
            b.kind(),
            b.color(),
            b.radius(),
            b.mass(),
            b.x.x,
            b.x.y,
            b.v.x,
            b.v.y,
        );
    }
    out
}

pub fn read_bodies_from_file(path: impl AsRef<Path>) -> Result<Vec<SpaceObject>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn write_bodies_to_file(path: impl AsRef<Path>, bodies: &[SpaceObject]) -> Result<()> {
    fs::write(path, serialize(bodies))?;
    Ok(())
}
