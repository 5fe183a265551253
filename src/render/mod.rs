//! Terminal renderer
//!
//! Each frame marks the cells around every on-screen particle with bit
//! flags, then maps each cell's flags through a 16-glyph table so that
//! clusters of particles read as surfaces and edges.

pub mod ascii_frame;
pub mod terminal;

pub use ascii_frame::AsciiFrame;
pub use terminal::TerminalOutput;
