// Shared fixtures for host-side tests: a surface that records what was drawn
// and an in-memory preference store.

#![allow(dead_code)]

use field_core::{Particle, PreferenceStore, Rgba, Surface};
use glam::Vec2;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Clear(Vec2),
    LineWidth(f32),
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Triangle { points: [Vec2; 3], color: Rgba },
}

pub struct Recorder {
    pub cmds: Vec<Cmd>,
    fill: Rgba,
    stroke: Rgba,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            cmds: Vec::new(),
            fill: Rgba::gray(0, 1.0),
            stroke: Rgba::gray(0, 1.0),
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn triangles(&self) -> Vec<([Vec2; 3], Rgba)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Triangle { points, color } => Some((*points, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn rings(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::StrokeCircle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn dots(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Cmd::FillCircle { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, size: Vec2) {
        self.cmds.push(Cmd::Clear(size));
    }
    fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.stroke = color;
    }
    fn set_line_width(&mut self, width: f32) {
        self.cmds.push(Cmd::LineWidth(width));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.cmds.push(Cmd::FillCircle {
            center,
            radius,
            color: self.fill,
        });
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.cmds.push(Cmd::StrokeCircle {
            center,
            radius,
            color: self.stroke,
        });
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.cmds.push(Cmd::Line {
            from,
            to,
            color: self.stroke,
        });
    }
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.cmds.push(Cmd::Triangle {
            points: [a, b, c],
            color: self.fill,
        });
    }
}

#[derive(Default)]
pub struct MemoryPrefs {
    pub values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 100)
}

pub fn moving(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 100)
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
