//! Error types shared by the solver, scene loader and configuration layer.

/// Result type for fluid operations
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building or driving a simulation
#[derive(Debug, thiserror::Error)]
pub enum FluidError {
    #[error("Particle capacity exceeded: {count} particles, capacity {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Worker thread pool creation failed: {message}")]
    ThreadPool { message: String },
}

impl From<rayon::ThreadPoolBuildError> for FluidError {
    fn from(error: rayon::ThreadPoolBuildError) -> Self {
        FluidError::ThreadPool {
            message: error.to_string(),
        }
    }
}
