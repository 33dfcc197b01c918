//! Simulation modes, display theme and the tunable parameter bag.
//!
//! Mode and theme round-trip through the preference store as plain strings, so
//! both implement `Display`/`FromStr` with the persisted spellings.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Active motion model. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimMode {
    #[default]
    Neural,
    Boids,
}

impl SimMode {
    pub fn toggled(self) -> Self {
        match self {
            SimMode::Neural => SimMode::Boids,
            SimMode::Boids => SimMode::Neural,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimMode::Neural => "neural",
            SimMode::Boids => "boids",
        }
    }
}

impl fmt::Display for SimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown simulation mode {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for SimMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neural" => Ok(SimMode::Neural),
            "boids" => Ok(SimMode::Boids),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Display theme. Only affects colours, never physics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Tunable parameters. Read-only during a frame; only the active mode changes
/// at runtime and that lives on the simulation context, not here.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    // Population per mode. Boids is O(n²) per frame and the renderer is O(n³)
    // worst case, so the flocking population is deliberately the smaller one.
    pub neural_count: usize,
    pub boid_count: usize,

    // Rendering
    pub connect_distance: f32,
    pub triangle_distance: f32,
    pub node_radius: f32,
    pub max_connections: usize,

    // Interaction
    pub repulse_radius: f32,
    pub repulse_force: f32,

    // Neural physics
    pub neural_speed: f32,

    // Boids physics
    pub visual_range: f32,
    pub centering_factor: f32,
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub turn_factor: f32,
    pub edge_margin: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            neural_count: 150,
            boid_count: 80,
            connect_distance: 85.0,
            triangle_distance: 80.0,
            node_radius: 2.0,
            max_connections: 8,
            repulse_radius: 200.0,
            repulse_force: 15.0,
            neural_speed: 0.8,
            visual_range: 100.0,
            centering_factor: 0.005,
            avoid_factor: 0.05,
            matching_factor: 0.05,
            turn_factor: 0.2,
            edge_margin: 100.0,
            min_speed: 2.0,
            max_speed: 4.0,
        }
    }
}

impl SimulationConfig {
    /// Population size for `mode`.
    pub fn count_for(&self, mode: SimMode) -> usize {
        match mode {
            SimMode::Neural => self.neural_count,
            SimMode::Boids => self.boid_count,
        }
    }

    /// Speed used to seed velocities whenever the population is rebuilt.
    /// Both modes seed with the drift speed; boids reach their own
    /// `[min_speed, max_speed]` band on the first clamp.
    pub fn seed_speed(&self) -> f32 {
        self.neural_speed
    }
}
