// The fixed swatch row shown at the bottom of the window.

use crate::types::Color;

pub const PALETTE_COLORS: [Color; 20] = [
    Color::BLACK,
    Color::WHITE,
    Color::rgba(255, 0, 0, 255),     // red
    Color::rgba(0, 255, 0, 255),     // green
    Color::rgba(0, 0, 255, 255),     // blue
    Color::rgba(255, 255, 0, 255),   // yellow
    Color::rgba(0, 255, 255, 255),   // cyan
    Color::rgba(255, 0, 255, 255),   // magenta
    Color::rgba(255, 165, 0, 255),   // orange
    Color::rgba(128, 0, 128, 255),   // purple
    Color::rgba(255, 192, 203, 255), // pink
    Color::rgba(139, 69, 19, 255),   // brown
    Color::rgba(128, 128, 128, 255), // gray
    Color::rgba(200, 200, 200, 255), // light gray
    Color::rgba(64, 64, 64, 255),    // dark gray
    Color::rgba(139, 0, 0, 255),     // dark red
    Color::rgba(0, 100, 0, 255),     // dark green
    Color::rgba(0, 0, 139, 255),     // dark blue
    Color::rgba(50, 205, 50, 255),   // lime
    Color::rgba(0, 128, 128, 255),   // teal
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_COLORS.len()],
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: PALETTE_COLORS, selected: 0 }
    }
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Color {
        self.colors[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.colors.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.colors.len() - 1) % self.colors.len();
    }

    /// Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index < self.colors.len() {
            self.selected = index;
        }
    }
}
