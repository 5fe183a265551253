//! Brute-force 2D SPH solver
//!
//! Every frame runs three passes over all particle pairs:
//! density, then force, then integration. Each pass finishes for the whole
//! set before the next one starts.

pub mod particle_data;
pub mod kernel;
pub mod density;
pub mod force;
pub mod integrate;
pub mod solver;

pub use particle_data::{Particle, ParticleSeed, ParticleSet};
pub use density::{compute_densities, compute_densities_parallel, density_at};
pub use force::{compute_forces, compute_forces_parallel, force_at};
pub use integrate::{integrate_motion, integrate_motion_parallel};
pub use solver::{FluidSolver, FrameStage, FrameStats};
