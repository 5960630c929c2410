//! ASCII grayscale renderer

use std::io::Write;

use super::DisplaySink;
use crate::consts::GRAYSCALE_RAMP;
use crate::error::Result;
use crate::sim::HeightField;

/// Map a height onto the grayscale ramp.
///
/// Heights below 0 (or NaN) use the first symbol, heights of 1 and above the last.
#[inline]
pub fn height_to_symbol(height: f64) -> char {
    let ramp = GRAYSCALE_RAMP.as_bytes();
    // Float-to-int `as` saturates, so negatives and NaN land on 0
    let index = (ramp.len() as f64 * height).floor() as usize;
    ramp[index.min(ramp.len() - 1)] as char
}

/// One symbol per sample
pub fn to_ascii(field: &HeightField) -> String {
    field.as_slice().iter().map(|&h| height_to_symbol(h)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Backspace over the previous strip and redraw in place
    Redraw,
    /// Print one strip per line
    Lines,
}

/// Sink that writes the grayscale strip to any `Write`
pub struct AsciiSink<W: Write> {
    out: W,
    mode: Mode,
}

impl<W: Write> AsciiSink<W> {
    /// Redraw a single line in place (terminal animation)
    pub fn new(out: W) -> Self {
        Self {
            out,
            mode: Mode::Redraw,
        }
    }

    /// Print every frame on its own line
    pub fn lines(out: W) -> Self {
        Self {
            out,
            mode: Mode::Lines,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for AsciiSink<W> {
    fn present(&mut self, field: &HeightField) -> Result<()> {
        let strip = to_ascii(field);
        match self.mode {
            Mode::Redraw => {
                // Clear old prints, one backspace per sample
                let backspaces = "\u{8}".repeat(field.len());
                write!(self.out, "{backspaces}{strip}")?;
            }
            Mode::Lines => writeln!(self.out, "{strip}")?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.mode == Mode::Redraw {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
