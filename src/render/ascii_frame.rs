use crate::constants::display::{
    CELL_COUNT, FLAG_DIAGONAL_NEIGHBOUR, FLAG_LEFT_NEIGHBOUR, FLAG_SELF, FLAG_UPPER_NEIGHBOUR,
    GLYPHS, HEIGHT, ROW_HEIGHT, WIDTH,
};
use crate::fluid::Particle;

/// Flag grid for one frame. The last column of every row is reserved for
/// the line break.
pub struct AsciiFrame {
    cells: Vec<u8>,
}

impl Default for AsciiFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiFrame {
    pub fn new() -> Self {
        Self {
            cells: vec![0; CELL_COUNT],
        }
    }

    /// Screen cell of a particle, if it can be drawn together with its
    /// right and lower neighbours
    pub fn cell_of(particle: &Particle) -> Option<(usize, usize)> {
        let position = particle.position;
        if !position.is_finite() {
            return None;
        }

        // Truncate towards zero, then bounds-check the signed result
        let x = position.x as i64;
        let y = (position.y / ROW_HEIGHT) as i64;
        if x < 0 || x >= WIDTH as i64 - 1 || y < 0 || y >= HEIGHT as i64 - 2 {
            return None;
        }

        Some((x as usize, y as usize))
    }

    /// Rebuild the flag grid from the current particle positions
    pub fn draw<'a>(&mut self, particles: impl IntoIterator<Item = &'a Particle>) {
        self.cells.fill(0);

        for particle in particles {
            let Some((x, y)) = Self::cell_of(particle) else {
                continue;
            };

            let here = x + WIDTH * y;
            let right = here + 1;
            let below = here + WIDTH;
            let below_right = below + 1;

            self.cells[here] |= FLAG_SELF;
            self.cells[right] |= FLAG_LEFT_NEIGHBOUR;
            self.cells[below] |= FLAG_UPPER_NEIGHBOUR;
            // Plain store, drops flags earlier particles left in this cell
            self.cells[below_right] = FLAG_DIAGONAL_NEIGHBOUR;
        }
    }

    pub fn flags(&self, x: usize, y: usize) -> u8 {
        self.cells[x + WIDTH * y]
    }

    pub fn glyph(&self, x: usize, y: usize) -> char {
        GLYPHS[(self.flags(x, y) & 0x0F) as usize] as char
    }

    /// `HEIGHT` lines of `WIDTH - 1` glyphs, each ending in a newline
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(CELL_COUNT);
        for y in 0..HEIGHT {
            for x in 0..WIDTH - 1 {
                text.push(self.glyph(x, y));
            }
            text.push('\n');
        }
        text
    }
}
