//! Fixed timestep simulation tick
//!
//! Core loop that advances every wave and rebuilds the height field.

use super::field::HeightField;
use super::state::Wave;
use crate::error::{Result, WaveError};
use crate::renderer::DisplaySink;
use crate::settings::SimConfig;

/// Advance all waves by one fixed timestep and rebuild `field` from them
pub fn tick(waves: &mut [Wave], field: &mut HeightField, dt: f64) {
    // March through time
    for wave in waves.iter_mut() {
        wave.update(dt);
    }

    field.reset();

    for wave in waves.iter() {
        field.accumulate(wave);
    }
}

/// Owns the scene and the per-tick buffer
#[derive(Debug, Clone)]
pub struct Simulation {
    waves: Vec<Wave>,
    field: HeightField,
    dt: f64,
    ticks: u64,
}

impl Simulation {
    pub fn new(waves: Vec<Wave>, field_size: usize, dt: f64) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(WaveError::invalid(format!(
                "time step must be positive, got {dt}"
            )));
        }
        for wave in &waves {
            wave.shape.validate()?;
        }
        Ok(Self {
            waves,
            field: HeightField::new(field_size)?,
            dt,
            ticks: 0,
        })
    }

    /// Build from a validated scene config
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let waves = config
            .waves
            .iter()
            .map(|w| w.to_wave())
            .collect::<Result<Vec<_>>>()?;
        Self::new(waves, config.field_size, config.time_interval())
    }

    /// Two waves crossing an 80-sample field at 100 Hz
    pub fn reference() -> Result<Self> {
        Self::from_config(&SimConfig::default())
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    pub fn time_interval(&self) -> f64 {
        self.dt
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.dt
    }

    /// Advance one tick and return the rebuilt field
    pub fn tick(&mut self) -> &HeightField {
        tick(&mut self.waves, &mut self.field, self.dt);
        self.ticks += 1;
        &self.field
    }

    /// Run `ticks` ticks, presenting each field to `sink`
    pub fn run<S: DisplaySink + ?Sized>(&mut self, ticks: u64, sink: &mut S) -> Result<()> {
        log::info!(
            "Running {} waves on a {}-sample field for {} ticks (dt = {})",
            self.waves.len(),
            self.field.len(),
            ticks,
            self.dt
        );

        for _ in 0..ticks {
            self.tick();
            sink.present(&self.field)?;
        }
        sink.finish()?;

        log::info!(
            "Simulation finished after {} ticks ({:.2}s simulated)",
            self.ticks,
            self.elapsed()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::NullSink;
    use crate::sim::{WaveShape, WaveState};
    use crate::settings::WaveConfig;

    #[test]
    fn test_tick_updates_then_accumulates() {
        let mut sim = Simulation::reference().unwrap();
        sim.tick();
        assert_eq!(sim.ticks(), 1);

        // Waves moved before being drawn
        let first = sim.waves()[0];
        assert_eq!(first.state.position, 0.0 + SIM_DT * 1.0);
        let second = sim.waves()[1];
        assert_eq!(second.state.position, 1.0 + SIM_DT * -0.5);

        let mut expected = HeightField::new(FIELD_SIZE).unwrap();
        expected.accumulate(&first);
        expected.accumulate(&second);
        assert_eq!(sim.field(), &expected);
    }

    #[test]
    fn test_tick_resets_field() {
        let mut sim = Simulation::reference().unwrap();
        for _ in 0..50 {
            sim.tick();
        }
        let mut fresh = HeightField::new(FIELD_SIZE).unwrap();
        for wave in sim.waves() {
            fresh.accumulate(wave);
        }
        assert_eq!(sim.field(), &fresh);
    }

    #[test]
    fn test_deterministic() {
        let mut a = Simulation::reference().unwrap();
        let mut b = Simulation::from_config(&SimConfig::default()).unwrap();
        for _ in 0..500 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(a.waves(), b.waves());
    }

    #[test]
    fn test_waves_stay_near_unit_interval() {
        let mut sim = Simulation::reference().unwrap();
        for _ in 0..5000 {
            sim.tick();
            for wave in sim.waves() {
                let overshoot = SIM_DT * wave.state.speed.abs();
                assert!(wave.state.position >= -overshoot - 1e-12);
                assert!(wave.state.position <= 1.0 + overshoot + 1e-12);
            }
        }
    }

    #[test]
    fn test_run_presents_every_tick() {
        let mut sim = Simulation::reference().unwrap();
        let mut sink = NullSink::default();
        sim.run(25, &mut sink).unwrap();
        assert_eq!(sink.frames(), 25);
        assert!(sink.finished());
        assert_eq!(sim.ticks(), 25);
        assert!((sim.elapsed() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_time_step() {
        assert!(Simulation::new(Vec::new(), 10, 0.0).is_err());
        assert!(Simulation::new(Vec::new(), 10, f64::NAN).is_err());
    }

    #[test]
    fn test_new_rejects_zero_length_wave_literal() {
        // Public fields bypass WaveShape::new
        let wave = Wave {
            state: WaveState::new(0.5, 1.0),
            shape: WaveShape {
                length: 0.0,
                height: 1.0,
            },
        };
        assert!(matches!(
            Simulation::new(vec![wave], FIELD_SIZE, SIM_DT),
            Err(WaveError::InvalidConfiguration(_))
        ));

        let wave = Wave {
            shape: WaveShape {
                length: -0.4,
                height: 1.0,
            },
            ..wave
        };
        assert!(Simulation::new(vec![wave], FIELD_SIZE, SIM_DT).is_err());
    }

    #[test]
    fn test_reference_matches_default_config() {
        let sim = Simulation::reference().unwrap();
        assert_eq!(sim.field().len(), FIELD_SIZE);
        assert_eq!(sim.time_interval(), SIM_DT);
        assert_eq!(sim.waves()[0], Wave::new(0.0, 1.0, 0.8, 0.5).unwrap());
        assert_eq!(sim.waves()[1], Wave::new(1.0, -0.5, 1.2, 0.4).unwrap());
    }

    #[test]
    fn test_from_config_rejects_zero_length_wave() {
        let config = SimConfig {
            waves: vec![WaveConfig {
                position: 0.5,
                speed: 1.0,
                length: 0.0,
                height: 1.0,
            }],
            ..SimConfig::default()
        };
        assert!(matches!(
            Simulation::from_config(&config),
            Err(WaveError::InvalidConfiguration(_))
        ));
    }
}
