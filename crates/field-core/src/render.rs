//! Connective geometry between nearby particles.
//!
//! For a primary particle `i` every later particle `j > i` within
//! `connect_distance` gets a line, up to `max_connections` per primary. Pairs
//! that are also within `triangle_distance` look further ahead for a `k > j`
//! closing a triangle whose three legs are all inside `triangle_distance`.
//! The pair/triple scan is O(n³) worst case and relies on small populations.

use crate::color::{ink, Rgba};
use crate::config::{SimulationConfig, Theme};
use crate::constants::{LINE_DIMMING, LINE_WIDTH, NODE_ALPHA, TRIANGLE_DIMMING};
use crate::particle::Particle;
use crate::surface::Surface;

/// What one pass of the renderer emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub lines: usize,
    pub triangles: usize,
    /// Qualifying pairs dropped by the per-primary connection cap.
    pub capped: usize,
}

impl std::ops::AddAssign for LinkStats {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.triangles += rhs.triangles;
        self.capped += rhs.capped;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProximityRenderer {
    pub connect_distance: f32,
    pub triangle_distance: f32,
    pub max_connections: usize,
    pub node_radius: f32,
}

impl ProximityRenderer {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            connect_distance: config.connect_distance,
            triangle_distance: config.triangle_distance,
            max_connections: config.max_connections,
            node_radius: config.node_radius,
        }
    }

    pub fn draw_node<S: Surface + ?Sized>(&self, p: &Particle, theme: Theme, surface: &mut S) {
        surface.set_fill(ink(theme).with_alpha(NODE_ALPHA));
        surface.fill_circle(p.pos, self.node_radius);
    }

    /// Lines and triangles whose lowest index is `i`.
    pub fn draw_links_from<S: Surface + ?Sized>(
        &self,
        particles: &[Particle],
        i: usize,
        theme: Theme,
        surface: &mut S,
    ) -> LinkStats {
        let mut stats = LinkStats::default();
        let Some(node) = particles.get(i) else {
            return stats;
        };
        let connect_sq = self.connect_distance * self.connect_distance;
        let triangle_sq = self.triangle_distance * self.triangle_distance;
        let line_ink = ink(theme);

        let mut connections = 0usize;
        for j in (i + 1)..particles.len() {
            let other = &particles[j];
            let dist_sq = node.pos.distance_squared(other.pos);
            if dist_sq >= connect_sq {
                continue;
            }
            // Counted before the cap check: overflow pairs skip triangles too.
            connections += 1;
            if connections > self.max_connections {
                stats.capped += 1;
                continue;
            }

            let opacity = 1.0 - dist_sq.sqrt() / self.connect_distance;
            surface.set_stroke(line_ink.with_alpha(opacity * LINE_DIMMING));
            surface.stroke_line(node.pos, other.pos);
            stats.lines += 1;

            if dist_sq < triangle_sq {
                for third in &particles[(j + 1)..] {
                    let leg_a = node.pos.distance_squared(third.pos);
                    let leg_b = other.pos.distance_squared(third.pos);
                    if leg_a < triangle_sq && leg_b < triangle_sq {
                        let alpha = (1.0 - dist_sq / triangle_sq) * TRIANGLE_DIMMING;
                        surface.set_fill(triangle_color(theme, node, other, third, alpha));
                        surface.fill_triangle(node.pos, other.pos, third.pos);
                        stats.triangles += 1;
                    }
                }
            }
        }
        stats
    }

    /// Draw every node and its links from a single, unchanging snapshot.
    pub fn draw_all<S: Surface + ?Sized>(
        &self,
        particles: &[Particle],
        theme: Theme,
        surface: &mut S,
    ) -> LinkStats {
        surface.set_line_width(LINE_WIDTH);
        let mut stats = LinkStats::default();
        for (i, p) in particles.iter().enumerate() {
            self.draw_node(p, theme, surface);
            stats += self.draw_links_from(particles, i, theme, surface);
        }
        stats
    }
}

/// Shade-averaged gray on light backgrounds, translucent white on dark ones.
pub fn triangle_color(
    theme: Theme,
    a: &Particle,
    b: &Particle,
    c: &Particle,
    alpha: f32,
) -> Rgba {
    if theme.is_dark() {
        Rgba::gray(255, alpha)
    } else {
        let avg = (a.shade as u16 + b.shade as u16 + c.shade as u16) / 3;
        Rgba::gray(avg as u8, alpha)
    }
}
