//! ASCII Waves - 1D wave superposition simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wave state updates, height field accumulation)
//! - `renderer`: Display sinks for the sampled height field
//! - `settings`: Scene configuration (defaults, JSON, seeded scatter)
//! - `cli`: Command-line arguments for the binary

pub mod cli;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, WaveError};
pub use renderer::{AsciiSink, DisplaySink, NullSink};
pub use settings::{SimConfig, WaveConfig};
pub use sim::{HeightField, Simulation, Wave, WaveShape, WaveState};

/// Simulation configuration constants
pub mod consts {
    /// Number of height field samples in the reference scene
    pub const FIELD_SIZE: usize = 80;
    /// Reference tick rate (updates per second)
    pub const SIM_FPS: u32 = 100;
    /// Fixed simulation timestep for the reference tick rate
    pub const SIM_DT: f64 = 1.0 / SIM_FPS as f64;
    /// Ticks run by the reference scene
    pub const DEFAULT_TICKS: u64 = 1000;

    /// Grayscale ramp, darkest to brightest
    pub const GRAYSCALE_RAMP: &str = " .:-=+*#%@";
}
