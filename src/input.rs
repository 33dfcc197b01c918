use crate::constants::{BOIDS_LABEL, NEURAL_LABEL};
use field_core::{PointerTarget, SimMode};

/// Classify a pointer-down by the tag name of the element it landed on.
/// Buttons and links keep their own click behaviour.
#[inline]
pub fn pointer_target_for_tag(tag_name: &str) -> PointerTarget {
    if tag_name.eq_ignore_ascii_case("BUTTON") || tag_name.eq_ignore_ascii_case("A") {
        PointerTarget::Control
    } else {
        PointerTarget::Surface
    }
}

#[inline]
pub fn mode_button_label(mode: SimMode) -> &'static str {
    match mode {
        SimMode::Boids => BOIDS_LABEL,
        SimMode::Neural => NEURAL_LABEL,
    }
}

/// Surface size from the window's inner size, never below one pixel.
#[inline]
pub fn surface_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = if inner_width.is_finite() { inner_width } else { 0.0 };
    let h = if inner_height.is_finite() { inner_height } else { 0.0 };
    ((w as u32).max(1), (h as u32).max(1))
}

/// Console verbosity: debug builds also show the per-second frame report.
#[inline]
pub fn console_log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
