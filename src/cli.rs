//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::settings::SimConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ascii-waves")]
#[command(about = "1D wave superposition rendered as an ASCII height field", long_about = None)]
pub struct Args {
    /// Load the scene from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace the scene with COUNT randomly placed waves
    #[arg(long, value_name = "COUNT", conflicts_with = "config")]
    pub scatter: Option<usize>,

    /// Seed for --scatter
    #[arg(long, default_value = "1", requires = "scatter")]
    pub seed: u64,

    /// Number of ticks to run
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Ticks per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Number of height field samples
    #[arg(long, value_name = "N")]
    pub field_size: Option<usize>,

    /// Run as fast as possible instead of pacing to --fps
    #[arg(long)]
    pub no_pace: bool,

    /// Print one line per tick instead of redrawing in place
    #[arg(long)]
    pub lines: bool,

    /// Draw nothing
    #[arg(long, conflicts_with = "lines")]
    pub quiet: bool,

    /// Print the resolved scene as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Build the scene: file or scatter or reference, then command-line overrides
    pub fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match (&self.config, self.scatter) {
            (Some(path), _) => SimConfig::load(path)?,
            (None, Some(count)) => SimConfig::scattered(self.seed, count),
            (None, None) => SimConfig::default(),
        };

        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(field_size) = self.field_size {
            config.field_size = field_size;
        }

        config.validate()?;
        Ok(config)
    }
}
