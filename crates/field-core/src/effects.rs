use crate::color::Rgba;
use crate::constants::{RIPPLE_FADE, RIPPLE_GROWTH, RIPPLE_LINE_WIDTH, RIPPLE_START_RADIUS};
use crate::surface::Surface;
use glam::Vec2;

/// Expanding, fading ring spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    /// 0..=1, never increases.
    pub alpha: f32,
    /// RGB of the ring; alpha comes from `self.alpha` when drawn.
    pub color: Rgba,
}

impl Ripple {
    pub fn new(origin: Vec2, color: Rgba) -> Self {
        Self {
            origin,
            radius: RIPPLE_START_RADIUS,
            alpha: 1.0,
            color,
        }
    }

    /// Grow and fade by one frame. Returns `false` once the ripple is spent.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.radius += RIPPLE_GROWTH;
        self.alpha -= RIPPLE_FADE;
        self.alpha > 0.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectOverlay {
    ripples: Vec<Ripple>,
}

impl EffectOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, origin: Vec2, color: Rgba) {
        self.ripples.push(Ripple::new(origin, color));
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Advance every ripple, drop the spent ones and stroke the survivors.
    ///
    /// Walks in reverse so `swap_remove` never skips or revisits an entry.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.ripples.is_empty() {
            return;
        }
        surface.set_line_width(RIPPLE_LINE_WIDTH);
        for i in (0..self.ripples.len()).rev() {
            if !self.ripples[i].advance() {
                self.ripples.swap_remove(i);
                continue;
            }
            let r = &self.ripples[i];
            surface.set_stroke(r.color.with_alpha(r.alpha));
            surface.stroke_circle(r.origin, r.radius);
        }
    }
}
