use glam::DVec2;

use crate::error::{FluidError, FluidResult};

/// Initial state of one particle as produced by the scene loader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub position: DVec2,
    pub is_wall: bool,
    pub velocity: DVec2,
}

impl ParticleSeed {
    pub fn fluid(position: DVec2) -> Self {
        Self {
            position,
            is_wall: false,
            velocity: DVec2::ZERO,
        }
    }

    pub fn wall(position: DVec2) -> Self {
        Self {
            position,
            is_wall: true,
            velocity: DVec2::ZERO,
        }
    }

    /// Start with a velocity. Ignored for walls, which never move.
    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Physical state of a single particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Recomputed from scratch by every density pass
    pub density: f64,
    /// Recomputed from scratch by every force pass
    pub force: DVec2,
    /// Carried across frames; always zero for walls
    pub velocity: DVec2,
    is_wall: bool,
}

impl Particle {
    fn from_seed(seed: &ParticleSeed) -> Self {
        Self {
            position: seed.position,
            density: 0.0,
            force: DVec2::ZERO,
            velocity: if seed.is_wall { DVec2::ZERO } else { seed.velocity },
            is_wall: seed.is_wall,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
}

/// Fixed-capacity, fixed-length particle storage.
///
/// The length is set once when the set is built and never changes, so an
/// index names the same particle for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleSet {
    /// Empty set; every pass over it is a no-op
    pub fn empty(capacity: usize) -> Self {
        Self {
            particles: Vec::new(),
            capacity,
        }
    }

    /// Build the set from loader output, in order
    pub fn from_seeds(seeds: &[ParticleSeed], capacity: usize) -> FluidResult<Self> {
        if seeds.len() > capacity {
            return Err(FluidError::CapacityExceeded {
                count: seeds.len(),
                capacity,
            });
        }

        let mut particles = Vec::with_capacity(seeds.len());
        particles.extend(seeds.iter().map(Particle::from_seed));

        Ok(Self {
            particles,
            capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn wall_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_wall).count()
    }

    pub fn fluid_count(&self) -> usize {
        self.len() - self.wall_count()
    }

    /// Replace every density with the output of a completed pass
    pub(crate) fn commit_densities(&mut self, densities: Vec<f64>) {
        debug_assert_eq!(densities.len(), self.particles.len());
        for (particle, density) in self.particles.iter_mut().zip(densities) {
            particle.density = density;
        }
    }

    /// Replace every force with the output of a completed pass
    pub(crate) fn commit_forces(&mut self, forces: Vec<DVec2>) {
        debug_assert_eq!(forces.len(), self.particles.len());
        for (particle, force) in self.particles.iter_mut().zip(forces) {
            particle.force = force;
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
