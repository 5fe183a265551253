//! ascii-sph: animate a fluid scene in the terminal
//!
//! Reads an ASCII layout (`#` walls, any other printable character fluid)
//! from a file or stdin and runs the simulation until interrupted or until
//! the requested number of frames has been shown.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use ascii_sph::{
    load_scene_file, load_scene_reader, AsciiFrame, ExecutionMode, FluidConfig, FluidSolver,
    TerminalOutput,
};

#[derive(Parser, Debug)]
#[command(name = "ascii-sph")]
#[command(about = "2D SPH fluid toy rendered as terminal ASCII art", long_about = None)]
struct Args {
    /// Scene layout file. Reads stdin when omitted.
    scene: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many frames instead of running forever
    #[arg(long)]
    frames: Option<u64>,

    /// Run every pass on a worker pool
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Worker threads for parallel mode
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    gravity: Option<f64>,

    #[arg(long)]
    pressure: Option<f64>,

    #[arg(long)]
    viscosity: Option<f64>,

    /// Pause between frames in microseconds
    #[arg(long)]
    interval_us: Option<u64>,
}

impl Args {
    fn resolve_config(&self) -> Result<FluidConfig> {
        let mut config = match &self.config {
            Some(path) => FluidConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => FluidConfig::default(),
        };

        if self.parallel {
            config.solver.mode = ExecutionMode::Parallel;
        }
        if let Some(threads) = self.threads {
            config.solver.worker_threads = threads;
        }
        if let Some(gravity) = self.gravity {
            config.physics.gravity = gravity;
        }
        if let Some(pressure) = self.pressure {
            config.physics.pressure = pressure;
        }
        if let Some(viscosity) = self.viscosity {
            config.physics.viscosity = viscosity;
        }
        if let Some(interval) = self.interval_us {
            config.display.frame_interval_us = interval;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Keep the log quiet by default so it does not tear the animation
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    let capacity = config.solver.capacity;
    let particles = match &args.scene {
        Some(path) => load_scene_file(path, capacity)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => load_scene_reader(io::stdin().lock(), capacity).context("loading scene from stdin")?,
    };

    let mut solver = FluidSolver::new(particles, config.physics, &config.solver)
        .context("starting fluid solver")?;
    let mut frame = AsciiFrame::new();
    let mut output = TerminalOutput::new(BufWriter::new(io::stdout().lock()), config.display.clear_on_start);
    let interval = Duration::from_micros(config.display.frame_interval_us);

    let mut shown = 0u64;
    while args.frames.map_or(true, |limit| shown < limit) {
        solver.step();
        frame.draw(solver.particles());
        output.present(&frame).context("writing frame")?;

        shown += 1;
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    let physics = solver.physics();
    log::info!(
        "Physics: gravity {}, pressure {}, viscosity {}",
        physics.gravity,
        physics.pressure,
        physics.viscosity
    );

    let stats = solver.stats();
    log::info!(
        "Ran {} frames: density {}us, force {}us, integrate {}us, {:.1}us per frame",
        stats.frames,
        stats.density_time_us,
        stats.force_time_us,
        stats.integrate_time_us,
        stats.average_frame_time_us()
    );

    Ok(())
}
