//! Minimal immediate-mode 2D drawing interface.
//!
//! The simulation only needs a handful of primitives, so any canvas-like
//! backend can host it. Styles are sticky: a `set_*` call applies to every
//! following primitive until the next one.

use crate::color::Rgba;
use glam::Vec2;

pub trait Surface {
    /// Clear the whole drawable area.
    fn clear(&mut self, size: Vec2);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
    /// Fill the closed path a → b → c.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2);
}
