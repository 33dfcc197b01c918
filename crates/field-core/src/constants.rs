// Fixed tuning constants shared by the simulation and the web frontend.
// Anything a user might reasonably retune lives in `SimulationConfig` instead.

// Neural motion
pub const NEURAL_DAMPING: f32 = 0.95; // per-frame velocity multiplier while overspeed

// Boids motion
pub const SEPARATION_RANGE_SQ: f32 = 900.0; // 30 units

// Population seeding
pub const SHADE_MIN: u8 = 50;
pub const SHADE_MAX: u8 = 200; // exclusive

// Connective geometry
pub const LINE_DIMMING: f32 = 0.2;
pub const TRIANGLE_DIMMING: f32 = 0.15;
pub const NODE_ALPHA: f32 = 0.6;

// Ripples
pub const RIPPLE_START_RADIUS: f32 = 10.0;
pub const RIPPLE_GROWTH: f32 = 5.0; // radius added per frame
pub const RIPPLE_FADE: f32 = 0.03; // alpha removed per frame
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;
pub const LINE_WIDTH: f32 = 1.0;

// Shake impulse: each component gets a uniform kick in [-SHAKE_SPAN/2, SHAKE_SPAN/2)
pub const SHAKE_SPAN: f32 = 30.0;

// Preference store keys
pub const PREF_KEY_MODE: &str = "simMode";
pub const PREF_KEY_THEME: &str = "theme";
