use crate::constants::{SHADE_MAX, SHADE_MIN};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Gray level used to tint triangles in the light theme.
    pub shade: u8,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, shade: u8) -> Self {
        Self { pos, vel, shade }
    }
}

/// Exclusive owner of the particle population.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from explicit particles, bypassing random seeding.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard the population and seed `count` fresh particles inside `size`.
    ///
    /// Each velocity component is uniform in `[-base_speed/2, base_speed/2)`.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        size: Vec2,
        base_speed: f32,
        rng: &mut R,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let pos = Vec2::new(span(rng, 0.0, size.x), span(rng, 0.0, size.y));
            let half = base_speed * 0.5;
            let vel = Vec2::new(span(rng, -half, half), span(rng, -half, half));
            let shade = rng.gen_range(SHADE_MIN..SHADE_MAX);
            self.particles.push(Particle::new(pos, vel, shade));
        }
        log::debug!(
            "[particles] reset count={} surface={:.0}x{:.0}",
            count,
            size.x,
            size.y
        );
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for motion updates and impulses. The length is fixed;
    /// only `reset` changes the population size.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Visit every particle in index order with mutable access to the whole
    /// set. Particle `i` sees particles `j < i` already visited in this pass.
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut [Particle], usize),
    {
        for i in 0..self.particles.len() {
            visitor(&mut self.particles, i);
        }
    }
}

// Uniform in [lo, hi); collapses to `lo` for an empty range instead of panicking.
#[inline]
fn span<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
