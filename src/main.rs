use orbitsim::{bench_euler, bench_gravity, delay_for_speed, read_bodies_from_file, write_bodies_to_file};
use orbitsim::{Scenario, ScenarioConfig, ScreenBuffer};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Parser, Debug)]
#[command(about = "Headless two-dimensional gravity simulation")]
struct Args {
    /// Scenario YAML, looked up in `scenarios/` unless absolute
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Body list overriding the one named by the scenario
    #[arg(short, long)]
    bodies: Option<PathBuf>,

    /// Number of steps overriding the scenario
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Write the final body list here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the tracked body's samples here
    #[arg(short, long)]
    trajectory: Option<PathBuf>,

    /// Pace steps by the scenario's speed setting
    #[arg(long)]
    realtime: bool,

    /// Time the solver and integrator instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    let base = config_path.parent().unwrap_or(Path::new("."));
    let bodies_path = match &args.bodies {
        Some(path) => path.clone(),
        None => cfg.bodies_path(base),
    };
    let bodies = read_bodies_from_file(&bodies_path)
        .with_context(|| format!("failed to read bodies from {}", bodies_path.display()))?;

    Ok(Scenario::build_scenario(&cfg, bodies)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_euler();
        return Ok(());
    }

    info!("Modelling started!");
    let mut scenario = load_scenario(&args)?;
    let steps = args.steps.unwrap_or(scenario.parameters.steps);
    let delay = delay_for_speed(scenario.parameters.speed);

    let mut screen = ScreenBuffer::new();
    scenario.draw(&mut screen);
    scenario.start();

    for i in 0..steps {
        if args.realtime {
            thread::sleep(delay);
        }
        if let Err(e) = scenario.tick(&mut screen) {
            // fatal to the run, not to the process
            error!("simulation stopped after {i} steps: {e}");
            break;
        }
        debug!("{}", scenario.elapsed_label());
    }

    if let Some(views) = scenario.pause() {
        info!("recorded {} trajectory samples", views.speed_vs_time.len());
    }
    info!("{}", scenario.elapsed_label());
    for (i, p) in screen.points().iter().enumerate() {
        debug!("body {i} at pixel ({:.0}, {:.0})", p.x, p.y);
    }

    if let Some(path) = &args.output {
        write_bodies_to_file(path, scenario.bodies())
            .with_context(|| format!("failed to write bodies to {}", path.display()))?;
        info!("saved {} bodies to {}", scenario.bodies().len(), path.display());
    }

    if let Some(path) = &args.trajectory {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        scenario.recorder().write_table(BufWriter::new(file))?;
        info!("saved trajectory to {}", path.display());
    }

    info!("Modelling finished!");
    Ok(())
}
