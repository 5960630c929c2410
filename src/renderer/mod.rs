//! Display sinks for the height field
//!
//! The simulation hands each tick's field to a sink. The ASCII sink maps
//! heights onto a grayscale ramp and redraws a single terminal line.

mod ascii;

pub use ascii::{AsciiSink, height_to_symbol, to_ascii};

use crate::error::Result;
use crate::sim::HeightField;

/// Consumer of one height field per tick
pub trait DisplaySink {
    /// Show the field for the current tick
    fn present(&mut self, field: &HeightField) -> Result<()>;

    /// Called once after the last tick
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn present(&mut self, field: &HeightField) -> Result<()> {
        (**self).present(field)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Sink that draws nothing (batch runs, benchmarks, tests)
#[derive(Debug, Default)]
pub struct NullSink {
    frames: u64,
    finished: bool,
}

impl NullSink {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}

impl DisplaySink for NullSink {
    fn present(&mut self, _field: &HeightField) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
