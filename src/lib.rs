pub mod config;
pub mod constants;
pub mod error;
pub mod fluid;
pub mod render;
pub mod scene;

pub use config::{DisplayConfig, ExecutionMode, FluidConfig, PhysicsConfig, SolverConfig};
pub use error::{FluidError, FluidResult};
pub use fluid::{FluidSolver, FrameStage, FrameStats, Particle, ParticleSeed, ParticleSet};
pub use render::{AsciiFrame, TerminalOutput};
pub use scene::{load_scene_file, load_scene_reader, parse_scene, SceneSummary};
