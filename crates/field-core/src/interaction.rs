//! Pointer and button actions applied between frames.

use crate::color::ink;
use crate::config::{SimMode, Theme};
use crate::constants::SHAKE_SPAN;
use crate::particle::Particle;
use crate::prefs::{self, PreferenceStore};
use crate::sim::Simulation;
use glam::Vec2;
use rand::Rng;

/// Where a pointer-down landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Background or canvas: spawns a ripple and repels particles.
    Surface,
    /// A button or link: left to the control itself.
    Control,
}

/// Push every particle within `radius` of `point` straight away from it.
/// The impulse falls off linearly from `force` at the point to zero at `radius`.
pub fn repulse(particles: &mut [Particle], point: Vec2, radius: f32, force: f32) -> usize {
    let radius_sq = radius * radius;
    let mut hit = 0;
    for p in particles.iter_mut() {
        let d = p.pos - point;
        let dist_sq = d.length_squared();
        if dist_sq < radius_sq {
            let dist = dist_sq.sqrt();
            // atan2(0, 0) is 0, so a particle exactly on the point is pushed along +x.
            let dir = Vec2::from_angle(d.y.atan2(d.x));
            let blast = (radius - dist) / radius * force;
            p.vel += dir * blast;
            hit += 1;
        }
    }
    hit
}

impl Simulation {
    /// Returns whether the event was consumed.
    pub fn pointer_down(&mut self, point: Vec2, target: PointerTarget) -> bool {
        if target == PointerTarget::Control {
            return false;
        }
        let color = ink(self.theme());
        self.effects_mut().spawn(point, color);
        let (radius, force) = (self.config().repulse_radius, self.config().repulse_force);
        let hit = repulse(self.particles_mut(), point, radius, force);
        log::debug!(
            "[input] pointer down at ({:.0},{:.0}) repelled {}",
            point.x,
            point.y,
            hit
        );
        true
    }

    /// Independent random kick to every particle, regardless of position.
    pub fn shake(&mut self) {
        let half = SHAKE_SPAN * 0.5;
        // Index loop: the rng and the particles both live on `self`.
        for i in 0..self.particles().len() {
            let kick = Vec2::new(
                self.rng.gen_range(-half..half),
                self.rng.gen_range(-half..half),
            );
            self.particles_mut()[i].vel += kick;
        }
    }

    /// Flip Neural <-> Boids, persist it, and repopulate at the new size.
    pub fn toggle_mode(&mut self, store: &mut dyn PreferenceStore) -> SimMode {
        let mode = self.mode().toggled();
        prefs::save_mode(store, mode);
        self.set_mode(mode);
        log::info!("[sim] mode -> {} ({} particles)", mode, self.particles().len());
        mode
    }

    /// Flip Light <-> Dark and persist it. Colours only; physics untouched.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        let theme = self.theme().toggled();
        prefs::save_theme(store, theme);
        self.set_theme(theme);
        log::info!("[sim] theme -> {}", theme);
        theme
    }
}
