//! Error type shared by the simulation, configuration and I/O layers.

use thiserror::Error;

/// Everything the core can fail with
///
/// All failures are local and synchronous: they are returned at the point
/// of detection and nothing is mutated before the check that raises them.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid time step {0}: dt must be positive")]
    InvalidTimeStep(f64),

    #[error("degenerate configuration: bodies {first} and {second} share the same position")]
    DegenerateConfiguration { first: usize, second: usize },

    #[error("malformed record on line {line} ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("invalid mass {0}: mass must be positive and finite")]
    InvalidMass(f64),

    #[error("invalid color {0:?}: color must be a single non-empty token")]
    InvalidColor(String),

    #[error("invalid radius {0}: radius must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("invalid kinematic state: position and velocity must be finite")]
    InvalidState,

    #[error("configuration contains no bodies")]
    EmptyConfiguration,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
