use std::io::Write;

use crate::constants::display::{ANSI_CLEAR, ANSI_CURSOR_HOME};
use crate::render::AsciiFrame;

/// Writes frames to a terminal-like sink. The screen is cleared once, then
/// every frame only homes the cursor and overdraws, which avoids flicker.
pub struct TerminalOutput<W: Write> {
    sink: W,
    clear_pending: bool,
    frames_written: u64,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(sink: W, clear_on_start: bool) -> Self {
        Self {
            sink,
            clear_pending: clear_on_start,
            frames_written: 0,
        }
    }

    pub fn present(&mut self, frame: &AsciiFrame) -> std::io::Result<()> {
        if self.clear_pending {
            self.sink.write_all(ANSI_CLEAR.as_bytes())?;
            self.clear_pending = false;
        }

        self.sink.write_all(ANSI_CURSOR_HOME.as_bytes())?;
        self.sink.write_all(frame.to_text().as_bytes())?;
        self.sink.flush()?;

        self.frames_written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
