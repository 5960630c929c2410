use ascii_waves::consts::{DEFAULT_TICKS, FIELD_SIZE, GRAYSCALE_RAMP};
use ascii_waves::renderer::{AsciiSink, NullSink, to_ascii};
use ascii_waves::{SimConfig, Simulation, WaveError};

#[test]
fn reference_scene_runs_to_completion() {
    let mut sim = Simulation::reference().unwrap();
    let mut sink = NullSink::default();
    sim.run(DEFAULT_TICKS, &mut sink).unwrap();

    assert_eq!(sink.frames(), DEFAULT_TICKS);
    assert_eq!(sim.ticks(), DEFAULT_TICKS);
    assert!((sim.elapsed() - 10.0).abs() < 1e-9);
    assert!(sim.field().as_slice().iter().all(|h| h.is_finite()));
}

#[test]
fn line_sink_prints_one_strip_per_tick() {
    let mut sim = Simulation::reference().unwrap();
    let mut sink = AsciiSink::lines(Vec::new());
    sim.run(20, &mut sink).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 20);
    for line in &lines {
        assert_eq!(line.chars().count(), FIELD_SIZE);
        assert!(line.chars().all(|c| GRAYSCALE_RAMP.contains(c)));
    }
    assert_eq!(*lines.last().unwrap(), to_ascii(sim.field()));
}

#[test]
fn waves_meet_in_the_middle() {
    // Wave 1 moves right at 1.0, wave 2 left at 0.5: they cross near 2/3
    let mut sim = Simulation::reference().unwrap();
    for _ in 0..67 {
        sim.tick();
    }
    let field = sim.field();
    let peak_index = field
        .as_slice()
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();

    // Overlapping bumps sum past either amplitude
    assert!(field.peak() > 0.5);
    assert!((45..62).contains(&peak_index), "peak at {peak_index}");
}

#[test]
fn scattered_scene_is_reproducible() {
    let config = SimConfig::scattered(1234, 6);
    let mut a = Simulation::from_config(&config).unwrap();
    let mut b = Simulation::from_config(&config).unwrap();
    for _ in 0..300 {
        assert_eq!(a.tick(), b.tick());
    }
}

#[test]
fn empty_field_is_rejected() {
    let config = SimConfig {
        field_size: 0,
        ..SimConfig::default()
    };
    assert!(matches!(
        Simulation::from_config(&config),
        Err(WaveError::InvalidConfiguration(_))
    ));
}
