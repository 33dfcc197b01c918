use crate::config::Theme;
use std::fmt;

/// 8-bit RGB with a floating alpha, matching what a CSS `rgba()` accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(level: u8, a: f32) -> Self {
        Self::new(level, level, level, a)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Base ink for a theme: black on light backgrounds, white on dark ones.
#[inline]
pub fn ink(theme: Theme) -> Rgba {
    if theme.is_dark() {
        Rgba::gray(255, 1.0)
    } else {
        Rgba::gray(0, 1.0)
    }
}
