//! Deterministic simulation module
//!
//! All wave logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (waves in scene order)
//! - No rendering, pacing, or platform dependencies

pub mod field;
pub mod state;
pub mod tick;

pub use field::{HeightField, accumulate_wave, fold_index, kernel};
pub use state::{Wave, WaveShape, WaveState, update_wave};
pub use tick::{Simulation, tick};
