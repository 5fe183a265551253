use std::time::Instant;

use crate::config::{ExecutionMode, PhysicsConfig, SolverConfig};
use crate::error::FluidResult;
use crate::fluid::density::{compute_densities, compute_densities_parallel};
use crate::fluid::force::{compute_forces, compute_forces_parallel};
use crate::fluid::integrate::{integrate_motion, integrate_motion_parallel};
use crate::fluid::particle_data::ParticleSet;

/// Stage the solver will run next. Rendering happens between `Integrate`
/// and the following `ComputeDensity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStage {
    ComputeDensity,
    ComputeForce,
    Integrate,
}

impl FrameStage {
    pub fn next(self) -> Self {
        match self {
            FrameStage::ComputeDensity => FrameStage::ComputeForce,
            FrameStage::ComputeForce => FrameStage::Integrate,
            FrameStage::Integrate => FrameStage::ComputeDensity,
        }
    }
}

/// Accumulated pass timings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub density_time_us: u64,
    pub force_time_us: u64,
    pub integrate_time_us: u64,
}

impl FrameStats {
    pub fn total_time_us(&self) -> u64 {
        self.density_time_us + self.force_time_us + self.integrate_time_us
    }

    pub fn average_frame_time_us(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_time_us() as f64 / self.frames as f64
        }
    }
}

/// Owns the particle set and runs the three passes in order.
///
/// Every pass writes into a fresh buffer that is committed only after the
/// whole pass has finished, so no particle ever sees a half-updated stage.
pub struct FluidSolver {
    particles: ParticleSet,
    physics: PhysicsConfig,
    mode: ExecutionMode,
    thread_pool: Option<rayon::ThreadPool>,
    stage: FrameStage,
    stats: FrameStats,
}

impl FluidSolver {
    pub fn new(
        particles: ParticleSet,
        physics: PhysicsConfig,
        config: &SolverConfig,
    ) -> FluidResult<Self> {
        let thread_pool = match config.mode {
            ExecutionMode::Sequential => None,
            ExecutionMode::Parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.worker_threads)
                    .thread_name(|i| format!("sph-worker-{}", i))
                    .build()?,
            ),
        };

        log::info!(
            "Fluid solver ready: {} particles ({} walls), {:?} mode",
            particles.len(),
            particles.wall_count(),
            config.mode
        );
        log::debug!("Physics coefficients: {:?}", physics);

        Ok(Self {
            particles,
            physics,
            mode: config.mode,
            thread_pool,
            stage: FrameStage::ComputeDensity,
            stats: FrameStats::default(),
        })
    }

    /// Single-threaded solver with the given coefficients
    pub fn sequential(particles: ParticleSet, physics: PhysicsConfig) -> Self {
        Self {
            particles,
            physics,
            mode: ExecutionMode::Sequential,
            thread_pool: None,
            stage: FrameStage::ComputeDensity,
            stats: FrameStats::default(),
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn stage(&self) -> FrameStage {
        self.stage
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run the stage the solver is currently at and move to the next one
    pub fn advance_stage(&mut self) -> FrameStage {
        let start = Instant::now();
        match self.stage {
            FrameStage::ComputeDensity => {
                self.density_pass();
                self.stats.density_time_us += start.elapsed().as_micros() as u64;
            }
            FrameStage::ComputeForce => {
                self.force_pass();
                self.stats.force_time_us += start.elapsed().as_micros() as u64;
            }
            FrameStage::Integrate => {
                self.integration_pass();
                self.stats.integrate_time_us += start.elapsed().as_micros() as u64;
                self.stats.frames += 1;
            }
        }

        self.stage = self.stage.next();
        self.stage
    }

    /// Finish the current frame: run stages until the next density pass is
    /// due. From a frame boundary this runs all three passes.
    pub fn step(&mut self) {
        loop {
            if self.advance_stage() == FrameStage::ComputeDensity {
                break;
            }
        }

        log::trace!(
            "Frame {} done, {:.1}us average",
            self.stats.frames,
            self.stats.average_frame_time_us()
        );
    }

    /// Run `frames` full frames
    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    fn density_pass(&mut self) {
        let particles = self.particles.as_slice();
        let densities = match &self.thread_pool {
            Some(pool) => pool.install(|| compute_densities_parallel(particles)),
            None => compute_densities(particles),
        };
        self.particles.commit_densities(densities);
    }

    fn force_pass(&mut self) {
        let particles = self.particles.as_slice();
        let physics = &self.physics;
        let forces = match &self.thread_pool {
            Some(pool) => pool.install(|| compute_forces_parallel(particles, physics)),
            None => compute_forces(particles, physics),
        };
        self.particles.commit_forces(forces);
    }

    fn integration_pass(&mut self) {
        let particles = self.particles.as_mut_slice();
        match &self.thread_pool {
            Some(pool) => pool.install(|| integrate_motion_parallel(particles)),
            None => integrate_motion(particles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::particle_data::ParticleSeed;
    use glam::DVec2;

    fn block(width: usize, height: usize) -> Vec<ParticleSeed> {
        let mut seeds = Vec::new();
        for row in 0..height {
            for col in 0..width {
                let position = DVec2::new(col as f64, row as f64);
                if row == height - 1 || col == 0 || col == width - 1 {
                    seeds.push(ParticleSeed::wall(position));
                } else {
                    seeds.push(ParticleSeed::fluid(position));
                }
            }
        }
        seeds
    }

    #[test]
    fn test_stages_cycle_in_order() {
        let set = ParticleSet::from_seeds(&block(4, 4), 16).unwrap();
        let mut solver = FluidSolver::sequential(set, PhysicsConfig::default());

        assert_eq!(solver.stage(), FrameStage::ComputeDensity);
        assert_eq!(solver.advance_stage(), FrameStage::ComputeForce);
        assert_eq!(solver.advance_stage(), FrameStage::Integrate);
        assert_eq!(solver.stats().frames, 0);
        assert_eq!(solver.advance_stage(), FrameStage::ComputeDensity);
        assert_eq!(solver.stats().frames, 1);
    }

    #[test]
    fn test_solver_keeps_its_physics() {
        let physics = PhysicsConfig {
            gravity: 0.5,
            pressure: 2.0,
            viscosity: 3.0,
        };
        let set = ParticleSet::from_seeds(&block(3, 3), 9).unwrap();
        let mut solver = FluidSolver::sequential(set, physics);
        solver.run(2);

        assert_eq!(solver.physics().gravity, 0.5);
        assert_eq!(solver.physics().pressure, 2.0);
        assert_eq!(solver.physics().viscosity, 3.0);
    }

    #[test]
    fn test_step_from_mid_frame_finishes_that_frame() {
        let set = ParticleSet::from_seeds(&block(4, 4), 16).unwrap();
        let mut solver = FluidSolver::sequential(set, PhysicsConfig::default());

        solver.advance_stage();
        solver.step();
        assert_eq!(solver.stage(), FrameStage::ComputeDensity);
        assert_eq!(solver.stats().frames, 1);
    }

    #[test]
    fn test_single_particle_frame() {
        let seeds = [ParticleSeed::fluid(DVec2::new(10.0, 10.0))];
        let set = ParticleSet::from_seeds(&seeds, 1).unwrap();
        let mut solver = FluidSolver::sequential(set, PhysicsConfig::default());

        solver.step();

        let particle = solver.particles().get(0).unwrap();
        assert_eq!(particle.density, 1.0);
        assert_eq!(particle.force, DVec2::new(0.0, 1.0));
        assert_eq!(particle.velocity, DVec2::new(0.0, 0.1));
        assert_eq!(particle.position, DVec2::new(10.0, 10.1));
    }

    #[test]
    fn test_empty_set_steps() {
        let mut solver = FluidSolver::sequential(ParticleSet::empty(4), PhysicsConfig::default());
        solver.run(3);
        assert!(solver.particles().is_empty());
        assert_eq!(solver.stats().frames, 3);
    }

    #[test]
    fn test_parallel_solver_matches_sequential() {
        let seeds = block(7, 5);
        let set = ParticleSet::from_seeds(&seeds, seeds.len()).unwrap();

        let mut sequential = FluidSolver::sequential(set.clone(), PhysicsConfig::default());
        let config = SolverConfig {
            mode: ExecutionMode::Parallel,
            worker_threads: 4,
            capacity: seeds.len(),
        };
        let mut parallel = FluidSolver::new(set, PhysicsConfig::default(), &config).unwrap();

        sequential.run(20);
        parallel.run(20);

        assert_eq!(parallel.mode(), ExecutionMode::Parallel);
        assert_eq!(sequential.particles(), parallel.particles());
    }
}
