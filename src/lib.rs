pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Kind, NVec2, SpaceObject};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{euler_integrator, integrate, step};
pub use simulation::trajectory::{
    object_of_interest, object_of_interest_index, Sample, TrajectoryRecorder, TrajectorySink, TrajectoryViews,
};
pub use simulation::scenario::{delay_for_speed, Scenario};

pub use configuration::config::{ParametersConfig, ScenarioConfig};
pub use configuration::bodies::{parse, read_bodies_from_file, serialize, write_bodies_to_file};

pub use visualization::viewport::{compute_scale, max_distance, NoScreen, ScreenBuffer, ScreenPoint, ScreenSink, Viewport};

pub use benchmark::benchmark::{bench_euler, bench_gravity};
