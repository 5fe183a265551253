// ascii-sph constants - single source of truth
//
// Every numeric constant used by the solver, the scene loader and the
// renderer lives here. Do not redefine them elsewhere.

/// Fluid solver constants
pub mod physics {
    /// Smoothing length of the kernel.
    pub const SMOOTHING_LENGTH: f64 = 1.0;

    /// Pairs further apart than this never interact (inclusive bound).
    pub const CUTOFF_RADIUS: f64 = 2.0 * SMOOTHING_LENGTH;

    /// Density every wall particle starts from before neighbours are summed.
    pub const WALL_DENSITY_BASELINE: f64 = 9.0;

    /// Density every fluid particle starts from before neighbours are summed.
    pub const FLUID_DENSITY_BASELINE: f64 = 0.0;

    /// Reference term in `(3 - density_i - density_j)`.
    pub const PRESSURE_REFERENCE: f64 = 3.0;

    /// Force-to-velocity scale applied during integration.
    pub const VELOCITY_DIVISOR: f64 = 10.0;

    pub const DEFAULT_GRAVITY: f64 = 1.0;
    pub const DEFAULT_PRESSURE: f64 = 4.0;
    pub const DEFAULT_VISCOSITY: f64 = 8.0;
}

/// Terminal display constants
pub mod display {
    /// Columns per row, including the trailing newline slot.
    pub const WIDTH: usize = 80;
    pub const HEIGHT: usize = 25;
    pub const CELL_COUNT: usize = WIDTH * HEIGHT;

    /// Scene rows are two simulation units tall.
    pub const ROW_HEIGHT: f64 = 2.0;

    /// Glyph for every combination of the four neighbourhood flags.
    pub const GLYPHS: &[u8; 16] = b" '`-.|//,\\|\\_\\/#";

    pub const FLAG_SELF: u8 = 8;
    pub const FLAG_LEFT_NEIGHBOUR: u8 = 4;
    pub const FLAG_UPPER_NEIGHBOUR: u8 = 2;
    pub const FLAG_DIAGONAL_NEIGHBOUR: u8 = 1;

    pub const ANSI_CLEAR: &str = "\x1b[2J";
    pub const ANSI_CURSOR_HOME: &str = "\x1b[1;1H";

    /// Pause between frames in microseconds.
    pub const DEFAULT_FRAME_INTERVAL_US: u64 = 12_321;
}

/// Scene loading constants
pub mod scene {
    use super::display;

    /// Byte marking a wall in a scene layout.
    pub const WALL_BYTE: u8 = b'#';

    /// Each printable scene character becomes this many particles.
    pub const PARTICLES_PER_CHAR: usize = 2;

    /// Particle capacity that fits a full screen of scene characters.
    pub const DEFAULT_CAPACITY: usize = PARTICLES_PER_CHAR * display::CELL_COUNT;
}
