// Host-side tests for configuration defaults, mode/theme parsing and colours.

use field_core::{
    ink, ParseModeError, ParseThemeError, Rgba, SimMode, SimulationConfig, Theme,
};

#[test]
fn defaults_keep_flocking_population_smaller() {
    let cfg = SimulationConfig::default();
    // Boids is O(n²) per frame; its population must stay the smaller one.
    assert!(cfg.boid_count < cfg.neural_count);
    assert!(cfg.triangle_distance <= cfg.connect_distance);
    assert!(cfg.min_speed < cfg.max_speed);
    assert!(cfg.max_connections > 0);
}

#[test]
fn count_follows_mode_and_seed_speed_is_drift_speed() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.count_for(SimMode::Neural), 150);
    assert_eq!(cfg.count_for(SimMode::Boids), 80);
    assert_eq!(cfg.seed_speed(), cfg.neural_speed);
}

#[test]
fn mode_round_trips_through_persisted_strings() {
    for mode in [SimMode::Neural, SimMode::Boids] {
        assert_eq!(mode.to_string().parse::<SimMode>(), Ok(mode));
    }
    assert_eq!("boids".parse::<SimMode>(), Ok(SimMode::Boids));
    assert_eq!(
        "Boids".parse::<SimMode>(),
        Err(ParseModeError("Boids".to_string()))
    );
    assert_eq!(SimMode::Neural.toggled().toggled(), SimMode::Neural);
}

#[test]
fn theme_round_trips_through_persisted_strings() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    let err = "".parse::<Theme>().unwrap_err();
    assert_eq!(err, ParseThemeError(String::new()));
    assert!(err.to_string().contains("unknown theme"));
    assert!(Theme::Light.toggled().is_dark());
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new(255, 255, 255, 0.6).to_css(), "rgba(255, 255, 255, 0.6)");
    assert_eq!(Rgba::gray(0, 1.0).to_css(), "rgba(0, 0, 0, 1)");
    assert_eq!(ink(Theme::Dark), Rgba::gray(255, 1.0));
    assert_eq!(ink(Theme::Light).with_alpha(0.2).a, 0.2);
}
