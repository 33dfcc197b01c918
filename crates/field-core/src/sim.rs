//! The simulation context: everything one animation frame reads or writes.
//!
//! Input handlers and the frame loop both mutate this object directly. The
//! host guarantees they never interleave, so no locking is involved.

use crate::config::{SimMode, SimulationConfig, Theme};
use crate::constants::LINE_WIDTH;
use crate::effects::EffectOverlay;
use crate::motion::{Motion, MotionModel};
use crate::particle::{Particle, ParticleStore};
use crate::prefs::{self, PreferenceStore};
use crate::render::{LinkStats, ProximityRenderer};
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Simulation {
    config: SimulationConfig,
    mode: SimMode,
    theme: Theme,
    motion: Motion,
    renderer: ProximityRenderer,
    particles: ParticleStore,
    effects: EffectOverlay,
    bounds: Vec2,
    pub(crate) rng: StdRng,
}

impl Simulation {
    /// Deterministic simulation for a fixed `seed`.
    pub fn new(config: SimulationConfig, bounds: Vec2, seed: u64) -> Self {
        Self::with_rng(config, bounds, StdRng::seed_from_u64(seed))
    }

    /// Starts in neural mode with the light theme and a freshly seeded population.
    pub fn with_rng(config: SimulationConfig, bounds: Vec2, rng: StdRng) -> Self {
        let mode = SimMode::default();
        let mut sim = Self {
            motion: Motion::for_mode(mode, &config),
            renderer: ProximityRenderer::from_config(&config),
            config,
            mode,
            theme: Theme::default(),
            particles: ParticleStore::new(),
            effects: EffectOverlay::new(),
            bounds,
            rng,
        };
        sim.repopulate();
        sim
    }

    /// Seed mode and theme from persisted preferences. Called once at start-up.
    pub fn load_preferences(&mut self, store: &dyn PreferenceStore) {
        self.theme = prefs::load_theme(store);
        let mode = prefs::load_mode(store);
        if mode != self.mode {
            self.set_mode(mode);
        }
        log::info!("[sim] preferences mode={} theme={}", self.mode, self.theme);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn mode(&self) -> SimMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// In-place access for impulses. The population size cannot change here.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.particles.as_mut_slice()
    }

    pub fn effects(&self) -> &EffectOverlay {
        &self.effects
    }

    pub(crate) fn effects_mut(&mut self) -> &mut EffectOverlay {
        &mut self.effects
    }

    /// Switch motion model and rebuild the population at that mode's size.
    pub fn set_mode(&mut self, mode: SimMode) {
        self.mode = mode;
        self.motion = Motion::for_mode(mode, &self.config);
        self.repopulate();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// New surface dimensions. Always repopulates rather than rescaling.
    pub fn resize(&mut self, bounds: Vec2) {
        log::debug!("[sim] resize {:.0}x{:.0}", bounds.x, bounds.y);
        self.bounds = bounds;
        self.repopulate();
    }

    fn repopulate(&mut self) {
        self.particles.reset(
            self.config.count_for(self.mode),
            self.bounds,
            self.config.seed_speed(),
            &mut self.rng,
        );
    }

    /// Advance and draw one frame.
    ///
    /// Update and draw are interleaved per particle: particle `i` is advanced
    /// then immediately linked against `j > i`, which still hold last frame's
    /// positions.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LinkStats {
        surface.clear(self.bounds);
        self.effects.step(surface);
        surface.set_line_width(LINE_WIDTH);

        let motion = self.motion;
        let renderer = self.renderer;
        let theme = self.theme;
        let bounds = self.bounds;
        let mut stats = LinkStats::default();
        self.particles.for_each(|particles, i| {
            motion.advance(particles, i, bounds);
            renderer.draw_node(&particles[i], theme, surface);
            stats += renderer.draw_links_from(particles, i, theme, surface);
        });
        stats
    }
}
