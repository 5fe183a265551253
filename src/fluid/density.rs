use rayon::prelude::*;

use crate::constants::physics::{FLUID_DENSITY_BASELINE, WALL_DENSITY_BASELINE};
use crate::fluid::kernel;
use crate::fluid::particle_data::Particle;

/// Density a particle starts from before its neighbours are summed.
/// Walls start high so fluid cannot dilute them.
#[inline]
pub fn baseline(particle: &Particle) -> f64 {
    if particle.is_wall() {
        WALL_DENSITY_BASELINE
    } else {
        FLUID_DENSITY_BASELINE
    }
}

/// Density of particle `index` from the current positions.
///
/// Sums over every particle in index order, the particle itself included,
/// so the result is at least 1 for fluid and 10 for walls.
///
/// # Panics
///
/// Panics if `index` is out of range for `particles`.
pub fn density_at(particles: &[Particle], index: usize) -> f64 {
    let source = &particles[index];
    let mut density = baseline(source);

    for other in particles {
        let distance = (source.position - other.position).length();
        if kernel::in_support(distance) {
            density += kernel::weight(distance);
        }
    }

    density
}

/// Density of every particle, computed into a fresh buffer
pub fn compute_densities(particles: &[Particle]) -> Vec<f64> {
    (0..particles.len())
        .map(|i| density_at(particles, i))
        .collect()
}

/// Parallel variant of [`compute_densities`]. Runs on the current rayon pool
/// and returns only once every particle has been computed.
pub fn compute_densities_parallel(particles: &[Particle]) -> Vec<f64> {
    (0..particles.len())
        .into_par_iter()
        .map(|i| density_at(particles, i))
        .collect()
}
