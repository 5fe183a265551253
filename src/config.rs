use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{display, physics, scene};
use crate::error::{FluidError, FluidResult};

/// Coefficients of the force pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity added to every force, pointing down the rows
    pub gravity: f64,
    /// Pressure coefficient
    pub pressure: f64,
    /// Viscosity coefficient
    pub viscosity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: physics::DEFAULT_GRAVITY,
            pressure: physics::DEFAULT_PRESSURE,
            viscosity: physics::DEFAULT_VISCOSITY,
        }
    }
}

impl PhysicsConfig {
    /// Gravity as a vector. Rows grow downwards.
    pub fn gravity_vector(&self) -> DVec2 {
        DVec2::new(0.0, self.gravity)
    }
}

/// How each pass walks the particle set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

/// Configuration for the fluid solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub mode: ExecutionMode,
    pub worker_threads: usize,
    /// Maximum number of particles a scene may produce
    pub capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            worker_threads: num_cpus::get(),
            capacity: scene::DEFAULT_CAPACITY,
        }
    }
}

/// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_interval_us: u64,
    /// Clear the terminal before the first frame
    pub clear_on_start: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_us: display::DEFAULT_FRAME_INTERVAL_US,
            clear_on_start: true,
        }
    }
}

/// Top level configuration, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    pub physics: PhysicsConfig,
    pub solver: SolverConfig,
    pub display: DisplayConfig,
}

impl FluidConfig {
    /// Parse a TOML document. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> FluidResult<Self> {
        let config: FluidConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> FluidResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> FluidResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the solver cannot run with
    pub fn validate(&self) -> FluidResult<()> {
        let coefficients = [
            ("physics.gravity", self.physics.gravity),
            ("physics.pressure", self.physics.pressure),
            ("physics.viscosity", self.physics.viscosity),
        ];
        for (field, value) in coefficients {
            if !value.is_finite() {
                return Err(FluidError::InvalidConfig {
                    field,
                    reason: format!("must be finite, got {}", value),
                });
            }
        }

        if self.solver.capacity == 0 {
            return Err(FluidError::InvalidConfig {
                field: "solver.capacity",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.solver.worker_threads == 0 {
            return Err(FluidError::InvalidConfig {
                field: "solver.worker_threads",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
