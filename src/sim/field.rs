//! Sampled 1D height field and the cosine kernel that fills it
//!
//! Sample `i` of an `N`-sample field holds the height at `(i + 0.5) / N`.
//! Each wave adds a raised-cosine bump of half-width `length / 4` centred on
//! its position. Parts of the bump that fall past either edge are folded back
//! into the field by mirroring the sample index.

use std::f64::consts::PI;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::state::Wave;
use crate::error::{Result, WaveError};

/// Fixed-size height field, zeroed at the start of every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeightField")]
pub struct HeightField {
    samples: Vec<f64>,
}

/// Unchecked wire form of `HeightField`
#[derive(Deserialize)]
struct RawHeightField {
    samples: Vec<f64>,
}

impl TryFrom<RawHeightField> for HeightField {
    type Error = WaveError;

    fn try_from(raw: RawHeightField) -> Result<Self> {
        if raw.samples.is_empty() {
            return Err(WaveError::invalid("height field needs at least one sample"));
        }
        Ok(Self {
            samples: raw.samples,
        })
    }
}

impl HeightField {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(WaveError::invalid("height field needs at least one sample"));
        }
        Ok(Self {
            samples: vec![0.0; size],
        })
    }

    /// Zero every sample
    pub fn reset(&mut self) {
        self.samples.fill(0.0);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Coordinate of sample `i` in the unit interval
    #[inline]
    pub fn cell_center(&self, i: usize) -> f64 {
        (i as f64 + 0.5) / self.samples.len() as f64
    }

    /// Add `wave`'s footprint to this field
    pub fn accumulate(&mut self, wave: &Wave) {
        accumulate_wave(wave, &mut self.samples);
    }

    /// Highest sample value
    pub fn peak(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Index<usize> for HeightField {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.samples[i]
    }
}

/// Raised-cosine kernel: `height` at distance 0, falling to 0 at `quarter_length`
#[inline]
pub fn kernel(distance: f64, quarter_length: f64, height: f64) -> f64 {
    let theta = (distance * PI / quarter_length).min(PI);
    0.5 * height * (1.0 + theta.cos())
}

/// Mirror a window index back into `[0, n)`.
///
/// A single fold only covers windows up to twice the field width; anything
/// still outside returns `None`.
#[inline]
pub fn fold_index(i: i64, n: i64) -> Option<usize> {
    let j = if i < 0 {
        -(i + 1)
    } else if i >= n {
        2 * n - (i + 1)
    } else {
        i
    };
    (0..n).contains(&j).then_some(j as usize)
}

/// Accumulate one wave into `field` (additive).
pub fn accumulate_wave(wave: &Wave, field: &mut [f64]) {
    if field.is_empty() {
        return;
    }

    let size = field.len() as f64;
    let n = field.len() as i64;
    let pos = wave.state.position;
    let height = wave.shape.height;
    let quarter_length = wave.shape.quarter_length();

    // `as` truncates toward zero, which shifts windows that straddle 0
    let start = ((pos - quarter_length) * size) as i64;
    let end = ((pos + quarter_length) * size) as i64;

    // Indices outside [-n, 2n) can never fold back in
    let lo = start.max(-n);
    let hi = end.min(2 * n);
    let mut skipped = end.saturating_sub(start).max(0) - (hi - lo).max(0);

    for i in lo..hi {
        let Some(j) = fold_index(i, n) else {
            skipped += 1;
            continue;
        };
        let distance = ((i as f64 + 0.5) / size - pos).abs();
        field[j] += kernel(distance, quarter_length, height);
    }

    if skipped > 0 {
        log::trace!(
            "wave at {pos:.3} (length {}) spans wider than the field; skipped {skipped} samples",
            wave.shape.length
        );
    }
}
