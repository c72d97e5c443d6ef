use fpvsim::{Control, InputState, ObstacleSet, SimConfig, Simulation, TelemetrySnapshot};

/// Baseline config with the target pinned 80 m above the spawn pose, so
/// flight tests never capture by accident.
pub fn far_target_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.target.region_half_extent = 0.0;
    config.target.min_altitude = 80.0;
    config.target.max_altitude = 80.0;
    config.seed = 42;
    config
}

/// Config whose target always spawns exactly on the spawn pose, so every
/// tick captures.
pub fn target_on_spawn_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.target.region_half_extent = 0.0;
    config.target.min_altitude = config.start.position.y;
    config.target.max_altitude = config.start.position.y;
    config.seed = 42;
    config
}

pub fn open_world(config: SimConfig) -> Simulation {
    Simulation::new(config, ObstacleSet::empty()).expect("config must validate")
}

pub fn hold(controls: &[Control]) -> InputState {
    let mut input = InputState::new();
    for &control in controls {
        input.press(control);
    }
    input
}

/// Run `ticks` fixed-dt ticks and return the final snapshot.
pub fn run(sim: &mut Simulation, input: &InputState, dt: f64, ticks: usize) -> TelemetrySnapshot {
    let mut snapshot = sim.snapshot();
    for _ in 0..ticks {
        snapshot = sim.tick(input, dt);
    }
    snapshot
}
