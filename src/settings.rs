//! Scene configuration
//!
//! Loaded from a JSON file, generated from a seed, or taken from the
//! built-in reference scene.

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, WaveError};
use crate::sim::Wave;

/// Initial state and shape of one wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Starting position in [0, 1]
    pub position: f64,
    /// Signed speed (field widths per second)
    pub speed: f64,
    /// Wavelength, must be positive
    pub length: f64,
    /// Peak amplitude
    pub height: f64,
}

impl WaveConfig {
    pub fn to_wave(&self) -> Result<Wave> {
        Wave::new(self.position, self.speed, self.length, self.height)
    }
}

/// Complete scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of height field samples
    pub field_size: usize,
    /// Ticks per simulated second
    pub fps: u32,
    /// Ticks to run
    pub ticks: u64,
    /// Waves in draw order
    pub waves: Vec<WaveConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_size: FIELD_SIZE,
            fps: SIM_FPS,
            ticks: DEFAULT_TICKS,
            waves: vec![
                WaveConfig {
                    position: 0.0,
                    speed: 1.0,
                    length: 0.8,
                    height: 0.5,
                },
                WaveConfig {
                    position: 1.0,
                    speed: -0.5,
                    length: 1.2,
                    height: 0.4,
                },
            ],
        }
    }
}

impl SimConfig {
    /// Random scene of `count` waves, reproducible from `seed`
    pub fn scattered(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let waves = (0..count)
            .map(|_| {
                let magnitude = rng.random_range(0.1..1.0);
                let speed = if rng.random_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                };
                WaveConfig {
                    position: rng.random_range(0.0..1.0),
                    speed,
                    length: rng.random_range(0.2..1.2),
                    height: rng.random_range(0.2..0.6),
                }
            })
            .collect();

        log::debug!("Scattered {count} waves from seed {seed}");
        Self {
            waves,
            ..Self::default()
        }
    }

    /// Seconds per tick
    pub fn time_interval(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Reject scenes the kernel math cannot handle
    pub fn validate(&self) -> Result<()> {
        if self.field_size == 0 {
            return Err(WaveError::invalid("field_size must be at least 1"));
        }
        if self.fps == 0 {
            return Err(WaveError::invalid("fps must be at least 1"));
        }
        for (i, wave) in self.waves.iter().enumerate() {
            if !wave.length.is_finite() || wave.length <= 0.0 {
                return Err(WaveError::invalid(format!(
                    "wave {i}: length must be positive, got {}",
                    wave.length
                )));
            }
            if !(wave.position.is_finite() && wave.speed.is_finite() && wave.height.is_finite()) {
                return Err(WaveError::invalid(format!(
                    "wave {i}: position, speed and height must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Load and validate a JSON scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!(
            "Loaded {} waves from {}",
            config.waves.len(),
            path.display()
        );
        Ok(config)
    }

    /// Write the scene as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
