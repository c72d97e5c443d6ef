use fpvsim::{generate_city, CityConfig, Control, InputState, RngManager, SimConfig, SimError, Simulation};

/// Headless demo loop: fly a scripted minute of one variant at a fixed
/// 60 Hz and print the HUD lines the renderer would show.
fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "city_dash".to_string());
    let config = SimConfig::preset(&name).ok_or_else(|| {
        SimError::InvalidConfig(format!("unknown variant preset: {}", name))
    })?;

    let rng = RngManager::new(config.seed);
    let obstacles = generate_city(&CityConfig::default(), &mut rng.get_rng("city"));
    let mut sim = Simulation::new(config, obstacles)?;

    let dt = 1.0 / 60.0;
    let mut input = InputState::new();
    input.press(Control::ThrottleUp);

    for frame in 0u32..3600 {
        // Scripted stick work: climb, nose over, cruise, ease off.
        match frame {
            120 => {
                input.release(Control::ThrottleUp);
                input.press(Control::PitchForward);
            }
            150 => {
                input.release(Control::PitchForward);
            }
            600 => {
                input.press(Control::ThrottleDown);
            }
            660 => {
                input.release(Control::ThrottleDown);
            }
            _ => {}
        }

        let snapshot = sim.tick(&input, dt);
        if frame % 60 == 0 {
            let style = &sim.config().hud;
            let score = snapshot
                .score_text(style)
                .map(|s| format!("  score {}", s))
                .unwrap_or_default();
            println!(
                "t={:5.1}s  alt {}  spd {}{}",
                f64::from(frame) * dt,
                snapshot.altitude_text(style),
                snapshot.speed_text(style),
                score
            );
        }
    }

    Ok(())
}
