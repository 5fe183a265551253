//! Scene loading: turns an ASCII layout into the initial particle set.
//!
//! Layouts are read as raw bytes. Every printable ASCII byte becomes a
//! column of two particles, one unit wide and two units tall. `#` marks
//! walls, any other printable byte is fluid, and everything else is empty
//! space.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use glam::DVec2;

use crate::constants::display::ROW_HEIGHT;
use crate::constants::scene::WALL_BYTE;
use crate::error::FluidResult;
use crate::fluid::{ParticleSeed, ParticleSet};

/// Counts and extent of a loaded scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSummary {
    pub particles: usize,
    pub walls: usize,
    pub fluid: usize,
    /// Largest coordinates occupied by any particle
    pub extent: DVec2,
}

impl SceneSummary {
    pub fn of(particles: &ParticleSet) -> Self {
        let extent = particles
            .iter()
            .fold(DVec2::ZERO, |extent, p| extent.max(p.position));

        Self {
            particles: particles.len(),
            walls: particles.wall_count(),
            fluid: particles.fluid_count(),
            extent,
        }
    }
}

/// Whether a layout byte becomes particles: printable ASCII, space excluded.
/// Bytes of multi-byte sequences and other non-ASCII bytes are empty space.
#[inline]
fn is_particle_byte(byte: u8) -> bool {
    byte > b' ' && byte.is_ascii()
}

/// Parse a scene layout into particle seeds, in reading order.
///
/// The layout is walked byte by byte, so any encoding loads; each byte is
/// one column.
pub fn parse_scene(layout: impl AsRef<[u8]>) -> Vec<ParticleSeed> {
    let mut seeds = Vec::new();
    let mut cursor = DVec2::ZERO;

    for &byte in layout.as_ref() {
        if byte == b'\n' {
            cursor = DVec2::new(0.0, cursor.y + ROW_HEIGHT);
            continue;
        }

        if is_particle_byte(byte) {
            let make = if byte == WALL_BYTE {
                ParticleSeed::wall
            } else {
                ParticleSeed::fluid
            };
            seeds.push(make(cursor));
            seeds.push(make(cursor + DVec2::Y));
        }

        cursor.x += 1.0;
    }

    seeds
}

/// Read a scene from any reader and build the particle set
pub fn load_scene_reader<R: Read>(mut reader: R, capacity: usize) -> FluidResult<ParticleSet> {
    let mut layout = Vec::new();
    reader.read_to_end(&mut layout)?;

    let particles = ParticleSet::from_seeds(&parse_scene(&layout), capacity)?;
    let summary = SceneSummary::of(&particles);
    log::info!(
        "Loaded scene: {} particles ({} walls, {} fluid), extent {:?}",
        summary.particles,
        summary.walls,
        summary.fluid,
        summary.extent
    );

    Ok(particles)
}

/// Read a scene file and build the particle set
pub fn load_scene_file(path: impl AsRef<Path>, capacity: usize) -> FluidResult<ParticleSet> {
    let path = path.as_ref();
    log::debug!("Reading scene from {}", path.display());
    let file = File::open(path)?;
    load_scene_reader(BufReader::new(file), capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluidError;
    use std::io::Write;

    #[test]
    fn test_characters_become_particle_columns() {
        let seeds = parse_scene("#o\n x");

        let expected = vec![
            ParticleSeed::wall(DVec2::new(0.0, 0.0)),
            ParticleSeed::wall(DVec2::new(0.0, 1.0)),
            ParticleSeed::fluid(DVec2::new(1.0, 0.0)),
            ParticleSeed::fluid(DVec2::new(1.0, 1.0)),
            ParticleSeed::fluid(DVec2::new(1.0, 2.0)),
            ParticleSeed::fluid(DVec2::new(1.0, 3.0)),
        ];
        assert_eq!(seeds, expected);
    }

    #[test]
    fn test_whitespace_and_controls_only_advance() {
        let seeds = parse_scene(" \t\r.\n\n#");
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[0].position, DVec2::new(3.0, 0.0));
        assert!(!seeds[0].is_wall);
        assert_eq!(seeds[2].position, DVec2::new(0.0, 4.0));
        assert!(seeds[2].is_wall);
    }

    #[test]
    fn test_non_ascii_bytes_only_advance() {
        // Latin-1 e-acute is not valid UTF-8 and still loads
        let particles = load_scene_reader(&[b'#', 0xE9, b'#', b'\n'][..], 100).unwrap();
        assert_eq!(particles.len(), 4);
        assert_eq!(particles.get(2).unwrap().position, DVec2::new(2.0, 0.0));
        assert!(particles.iter().all(|p| p.is_wall()));
    }

    #[test]
    fn test_multi_byte_character_spans_its_bytes() {
        // U+2588 is three bytes in UTF-8: three empty columns
        let seeds = parse_scene("\u{2588}#");
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], ParticleSeed::wall(DVec2::new(3.0, 0.0)));
        assert_eq!(seeds[1], ParticleSeed::wall(DVec2::new(3.0, 1.0)));
    }

    #[test]
    fn test_delete_byte_is_fluid() {
        let seeds = parse_scene([0x7Fu8]);
        assert_eq!(seeds.len(), 2);
        assert!(!seeds[0].is_wall);
    }

    #[test]
    fn test_empty_layout() {
        assert!(parse_scene("").is_empty());
        assert!(parse_scene("   \n\n").is_empty());
    }

    #[test]
    fn test_reader_enforces_capacity() {
        let err = load_scene_reader("ooo".as_bytes(), 5).unwrap_err();
        assert!(matches!(
            err,
            FluidError::CapacityExceeded { count: 6, capacity: 5 }
        ));
    }

    #[test]
    fn test_load_scene_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#~~#\n####\n").unwrap();

        let particles = load_scene_file(file.path(), 100).unwrap();
        let summary = SceneSummary::of(&particles);
        assert_eq!(summary.particles, 16);
        assert_eq!(summary.walls, 12);
        assert_eq!(summary.fluid, 4);
        assert_eq!(summary.extent, DVec2::new(3.0, 3.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scene_file(dir.path().join("nope.txt"), 10).unwrap_err();
        assert!(matches!(err, FluidError::Io(_)));
    }
}
