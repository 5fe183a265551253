use glam::DVec2;
use rayon::prelude::*;

use crate::config::PhysicsConfig;
use crate::constants::physics::PRESSURE_REFERENCE;
use crate::fluid::kernel;
use crate::fluid::particle_data::Particle;

/// Force on particle `index` from the densities of a completed density pass.
///
/// Only the source particle's density divides the pair term, so forces are
/// not reciprocal between a pair. The self pair adds nothing because both
/// deltas are zero.
///
/// # Panics
///
/// Panics if `index` is out of range for `particles`.
pub fn force_at(particles: &[Particle], index: usize, physics: &PhysicsConfig) -> DVec2 {
    let source = &particles[index];
    let mut force = physics.gravity_vector();

    for other in particles {
        let delta = source.position - other.position;
        let distance = delta.length();
        if !kernel::in_support(distance) {
            continue;
        }

        let velocity_delta = source.velocity - other.velocity;
        let pressure_term =
            (PRESSURE_REFERENCE - source.density - other.density) * delta * physics.pressure;
        let viscosity_term = velocity_delta * physics.viscosity;

        force += kernel::lin(distance) * (pressure_term + viscosity_term) / source.density;
    }

    force
}

/// Force on every particle, computed into a fresh buffer
pub fn compute_forces(particles: &[Particle], physics: &PhysicsConfig) -> Vec<DVec2> {
    (0..particles.len())
        .map(|i| force_at(particles, i, physics))
        .collect()
}

/// Parallel variant of [`compute_forces`]
pub fn compute_forces_parallel(particles: &[Particle], physics: &PhysicsConfig) -> Vec<DVec2> {
    (0..particles.len())
        .into_par_iter()
        .map(|i| force_at(particles, i, physics))
        .collect()
}
