//! ASCII Waves entry point
//!
//! Resolves the scene, then runs the fixed-rate loop against a terminal sink.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use ascii_waves::cli::Args;
use ascii_waves::renderer::{AsciiSink, DisplaySink, NullSink};
use ascii_waves::sim::{HeightField, Simulation};

/// Sleeps after each frame so ticks land at a fixed wall-clock rate
struct Paced<S> {
    inner: S,
    frame: Duration,
    next: Instant,
}

impl<S: DisplaySink> Paced<S> {
    fn new(inner: S, fps: u32) -> Self {
        Self {
            inner,
            frame: Duration::from_secs_f64(1.0 / fps as f64),
            next: Instant::now(),
        }
    }
}

impl<S: DisplaySink> DisplaySink for Paced<S> {
    fn present(&mut self, field: &HeightField) -> ascii_waves::Result<()> {
        self.inner.present(field)?;
        self.next += self.frame;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            // Fell behind; don't try to catch up
            self.next = now;
        }
        Ok(())
    }

    fn finish(&mut self) -> ascii_waves::Result<()> {
        self.inner.finish()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.resolve_config().context("invalid scene")?;

    if args.dump_config {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", config.to_json()?)?;
        return Ok(());
    }

    log::info!("ASCII Waves starting...");
    let mut sim = Simulation::from_config(&config)?;

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn DisplaySink> = match (args.quiet, args.lines) {
        (true, _) => Box::new(NullSink::default()),
        (false, true) => Box::new(AsciiSink::lines(stdout)),
        (false, false) => Box::new(AsciiSink::new(stdout)),
    };
    if !args.no_pace {
        sink = Box::new(Paced::new(sink, config.fps));
    }

    sim.run(config.ticks, &mut sink)?;
    Ok(())
}
