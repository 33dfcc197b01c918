// DOM contract with the host page.

pub const CANVAS_ID: &str = "neuralCanvas";
pub const SHAKE_BUTTON_ID: &str = "shakeBtn";
pub const MODE_BUTTON_ID: &str = "modeBtn";
pub const THEME_BUTTON_ID: &str = "themeBtn";

// Toggled on both <body> and <html>; page CSS keys off it.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// Mode button glyphs
pub const BOIDS_LABEL: &str = "🦅";
pub const NEURAL_LABEL: &str = "🧠";
