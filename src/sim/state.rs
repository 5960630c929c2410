//! Wave state and shape types
//!
//! A wave is a scalar position moving inside the unit interval plus the
//! footprint it leaves in the height field.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};

/// Kinematic state of a 1D wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Centre position, nominally in [0, 1]
    pub position: f64,
    /// Signed speed in units of the field per second
    pub speed: f64,
}

impl WaveState {
    pub fn new(position: f64, speed: f64) -> Self {
        Self { position, speed }
    }

    /// Advance by `time_interval` seconds, reflecting off the [0, 1] walls
    pub fn update(&mut self, time_interval: f64) {
        update_wave(time_interval, self);
    }
}

/// Visual footprint of a wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWaveShape")]
pub struct WaveShape {
    /// Full wavelength; the cosine bump spans half of it
    pub length: f64,
    /// Peak amplitude
    pub height: f64,
}

impl WaveShape {
    pub fn new(length: f64, height: f64) -> Result<Self> {
        let shape = Self { length, height };
        shape.validate()?;
        Ok(shape)
    }

    /// The kernel divides by the quarter length, so it must be positive
    pub fn validate(&self) -> Result<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(WaveError::invalid(format!(
                "wave length must be positive and finite, got {}",
                self.length
            )));
        }
        Ok(())
    }

    /// Half-width of the kernel window
    #[inline]
    pub fn quarter_length(&self) -> f64 {
        0.25 * self.length
    }
}

/// Unchecked wire form of `WaveShape`
#[derive(Deserialize)]
struct RawWaveShape {
    length: f64,
    height: f64,
}

impl TryFrom<RawWaveShape> for WaveShape {
    type Error = WaveError;

    fn try_from(raw: RawWaveShape) -> Result<Self> {
        WaveShape::new(raw.length, raw.height)
    }
}

/// A wave entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub state: WaveState,
    pub shape: WaveShape,
}

impl Wave {
    pub fn new(position: f64, speed: f64, length: f64, height: f64) -> Result<Self> {
        Ok(Self {
            state: WaveState::new(position, speed),
            shape: WaveShape::new(length, height)?,
        })
    }

    pub fn update(&mut self, time_interval: f64) {
        self.state.update(time_interval);
    }
}

/// Advance a wave's state by one step.
///
/// Reflection re-applies the step's displacement from the wall instead of
/// mirroring the overshoot, so a wave can sit just outside [0, 1] for one
/// tick before the next step brings it back.
pub fn update_wave(time_interval: f64, state: &mut WaveState) {
    debug_assert!(time_interval > 0.0, "time_interval must be positive");

    let displacement = time_interval * state.speed;
    state.position += displacement;

    if state.position > 1.0 {
        state.speed = -state.speed;
        state.position = 1.0 + displacement;
    } else if state.position < 0.0 {
        state.speed = -state.speed;
        state.position = displacement;
    }
}
