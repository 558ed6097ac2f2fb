// Core value types shared by the surface, rasterizer and UI.

use serde::{Deserialize, Serialize};

/// Packed 0xAARRGGBB color. Writes are opaque replacement, alpha is carried but never blended.
/// minifb ignores the top byte, so a Color can be pushed to the window as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Rec. 601 luma of the color channels, 0..=255.
    pub const fn luma(self) -> u8 {
        ((self.r() as u32 * 299 + self.g() as u32 * 587 + self.b() as u32 * 114) / 1000) as u8
    }
}

/// Integer pointer / pixel position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded to the nearest integer.
    pub fn rounded_distance(self, other: Point) -> i32 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt().round() as i32
    }
}
