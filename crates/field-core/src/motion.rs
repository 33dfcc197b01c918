//! Per-particle motion models.
//!
//! Both models mutate the population in place, one particle at a time, in
//! index order. The boids model reads its neighbours from the same slice it
//! writes to, so particle `i` observes the already-advanced state of every
//! `j < i` and the previous-frame state of every `j > i`.

use crate::config::{SimMode, SimulationConfig};
use crate::constants::{NEURAL_DAMPING, SEPARATION_RANGE_SQ};
use crate::particle::Particle;
use glam::Vec2;

pub trait MotionModel {
    /// Advance `particles[index]` by one frame inside a surface of `bounds`.
    fn advance(&self, particles: &mut [Particle], index: usize, bounds: Vec2);
}

/// Wandering drift with a soft speed governor and edge reflection.
#[derive(Clone, Copy, Debug)]
pub struct NeuralMotion {
    pub base_speed: f32,
}

impl NeuralMotion {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            base_speed: config.neural_speed,
        }
    }

    pub fn step(&self, p: &mut Particle, bounds: Vec2) {
        p.pos += p.vel;

        // Soft governor: overspeed decays over several frames rather than snapping.
        if p.vel.length_squared() > self.base_speed * self.base_speed {
            p.vel *= NEURAL_DAMPING;
        }

        // Checked after integration; a particle may sit outside for one frame.
        if p.pos.x < 0.0 || p.pos.x > bounds.x {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y > bounds.y {
            p.vel.y = -p.vel.y;
        }
    }
}

impl MotionModel for NeuralMotion {
    fn advance(&self, particles: &mut [Particle], index: usize, bounds: Vec2) {
        if let Some(p) = particles.get_mut(index) {
            self.step(p, bounds);
        }
    }
}

/// Classic flocking: cohesion, separation and alignment over an O(n²) scan.
#[derive(Clone, Copy, Debug)]
pub struct BoidsMotion {
    pub visual_range: f32,
    pub centering_factor: f32,
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub turn_factor: f32,
    pub edge_margin: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl BoidsMotion {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            visual_range: config.visual_range,
            centering_factor: config.centering_factor,
            avoid_factor: config.avoid_factor,
            matching_factor: config.matching_factor,
            turn_factor: config.turn_factor,
            edge_margin: config.edge_margin,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
        }
    }

    /// Steering contribution from every other particle within visual range.
    pub fn steer(&self, particles: &[Particle], index: usize) -> Vec2 {
        let me = particles[index];
        let range_sq = self.visual_range * self.visual_range;

        let mut center = Vec2::ZERO;
        let mut separation = Vec2::ZERO;
        let mut avg_vel = Vec2::ZERO;
        let mut neighbors = 0usize;

        for (j, other) in particles.iter().enumerate() {
            if j == index {
                continue;
            }
            let d = me.pos - other.pos;
            let dist_sq = d.length_squared();
            if dist_sq < range_sq {
                center += other.pos;
                if dist_sq < SEPARATION_RANGE_SQ {
                    separation += d;
                }
                avg_vel += other.vel;
                neighbors += 1;
            }
        }

        if neighbors == 0 {
            return me.vel;
        }

        let n = neighbors as f32;
        let mut vel = me.vel;
        vel += (center / n - me.pos) * self.centering_factor;
        vel += separation * self.avoid_factor;
        vel += (avg_vel / n - vel) * self.matching_factor;
        vel
    }

    /// Constant push away from any edge closer than `edge_margin`.
    /// The four checks are independent, so corners get both.
    pub fn turn_from_edges(&self, pos: Vec2, mut vel: Vec2, bounds: Vec2) -> Vec2 {
        if pos.x < self.edge_margin {
            vel.x += self.turn_factor;
        }
        if pos.x > bounds.x - self.edge_margin {
            vel.x -= self.turn_factor;
        }
        if pos.y < self.edge_margin {
            vel.y += self.turn_factor;
        }
        if pos.y > bounds.y - self.edge_margin {
            vel.y -= self.turn_factor;
        }
        vel
    }
}

impl MotionModel for BoidsMotion {
    fn advance(&self, particles: &mut [Particle], index: usize, bounds: Vec2) {
        if index >= particles.len() {
            return;
        }
        let steered = self.steer(particles, index);
        let p = &mut particles[index];
        let turned = self.turn_from_edges(p.pos, steered, bounds);
        p.vel = clamp_speed(turned, self.min_speed, self.max_speed);
        p.pos += p.vel;
    }
}

/// Rescale `vel` along its own direction so its length lies in `[min, max]`.
///
/// A zero vector has no direction and is returned unchanged.
#[inline]
pub fn clamp_speed(vel: Vec2, min: f32, max: f32) -> Vec2 {
    let speed_sq = vel.length_squared();
    if speed_sq > max * max {
        vel / speed_sq.sqrt() * max
    } else if speed_sq < min * min {
        if speed_sq == 0.0 {
            return vel;
        }
        vel / speed_sq.sqrt() * min
    } else {
        vel
    }
}

/// The motion model selected by the active mode.
#[derive(Clone, Copy, Debug)]
pub enum Motion {
    Neural(NeuralMotion),
    Boids(BoidsMotion),
}

impl Motion {
    pub fn for_mode(mode: SimMode, config: &SimulationConfig) -> Self {
        match mode {
            SimMode::Neural => Motion::Neural(NeuralMotion::from_config(config)),
            SimMode::Boids => Motion::Boids(BoidsMotion::from_config(config)),
        }
    }

    pub fn mode(&self) -> SimMode {
        match self {
            Motion::Neural(_) => SimMode::Neural,
            Motion::Boids(_) => SimMode::Boids,
        }
    }
}

impl MotionModel for Motion {
    fn advance(&self, particles: &mut [Particle], index: usize, bounds: Vec2) {
        match self {
            Motion::Neural(m) => m.advance(particles, index, bounds),
            Motion::Boids(m) => m.advance(particles, index, bounds),
        }
    }
}
