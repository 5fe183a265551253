use rayon::prelude::*;

use crate::constants::physics::VELOCITY_DIVISOR;
use crate::fluid::particle_data::Particle;

/// Advance one particle from its force. Walls are left untouched.
#[inline]
pub fn integrate_particle(particle: &mut Particle) {
    if particle.is_wall() {
        return;
    }

    particle.velocity += particle.force / VELOCITY_DIVISOR;
    particle.position += particle.velocity;
}

/// Integrate motion (velocity and position)
pub fn integrate_motion(particles: &mut [Particle]) {
    for particle in particles.iter_mut() {
        integrate_particle(particle);
    }
}

/// Integrate motion in parallel. Each particle only touches its own state.
pub fn integrate_motion_parallel(particles: &mut [Particle]) {
    particles.par_iter_mut().for_each(integrate_particle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::particle_data::{ParticleSeed, ParticleSet};
    use glam::DVec2;

    #[test]
    fn test_force_scaled_into_velocity_then_position() {
        let seeds = [ParticleSeed::fluid(DVec2::new(2.0, 3.0)).with_velocity(DVec2::new(0.5, 0.0))];
        let mut set = ParticleSet::from_seeds(&seeds, 1).unwrap();
        set.commit_forces(vec![DVec2::new(0.0, 1.0)]);

        integrate_motion(set.as_mut_slice());

        let particle = set.get(0).unwrap();
        assert_eq!(particle.velocity, DVec2::new(0.5, 0.1));
        assert_eq!(particle.position, DVec2::new(2.5, 3.1));
    }

    #[test]
    fn test_walls_do_not_move() {
        let seeds = [ParticleSeed::wall(DVec2::new(7.0, 7.0))];
        let mut set = ParticleSet::from_seeds(&seeds, 1).unwrap();
        set.commit_forces(vec![DVec2::new(100.0, -100.0)]);

        integrate_motion_parallel(set.as_mut_slice());

        let wall = set.get(0).unwrap();
        assert_eq!(wall.velocity, DVec2::ZERO);
        assert_eq!(wall.position, DVec2::new(7.0, 7.0));
    }
}
