// Window + input + tiny software text.
// Visual effects provided here:
// 1) A window that shows the canvas texture.
// 2) Mouse/keyboard read back as canvas events.
// 3) A crosshair and a 5x7 bitmap font for HUD text on top of the picture.

use crate::canvas::CanvasEvent;
use crate::error::Error;
use crate::present::{PresentationSink, Texture};
use crate::raster;
use crate::surface::PixelTarget;
use crate::types::{Color, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Keyboard actions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Canvas(CanvasEvent),
    ToggleHelp,
    ToggleUi,
    Quit,
}

const KEY_BINDINGS: [(Key, Command); 11] = [
    (Key::Escape, Command::Quit),
    (Key::H, Command::ToggleHelp),
    (Key::U, Command::ToggleUi),
    (Key::Tab, Command::Canvas(CanvasEvent::ToolNext)),
    (Key::Up, Command::Canvas(CanvasEvent::BrushGrow)),
    (Key::Down, Command::Canvas(CanvasEvent::BrushShrink)),
    (Key::Q, Command::Canvas(CanvasEvent::ColorPrev)),
    (Key::E, Command::Canvas(CanvasEvent::ColorNext)),
    (Key::Delete, Command::Canvas(CanvasEvent::ClearCanvas)),
    (Key::Backspace, Command::Canvas(CanvasEvent::ClearCanvas)),
    (Key::Z, Command::Canvas(CanvasEvent::UndoToggle)),
];

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window the size of the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // the display paces the loop
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x.max(0.0) as i32, y.max(0.0) as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Where the pointer touches the canvas this frame, if it does.
    pub fn contact(&self) -> Option<Point> {
        if self.left_mouse_down() { self.mouse_pos() } else { None }
    }

    /// Keys pressed since the last frame, in binding order (no auto-repeat).
    pub fn commands(&self) -> Vec<Command> {
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| self.window.is_key_pressed(*key, KeyRepeat::No))
            .map(|&(_, cmd)| cmd)
            .collect()
    }
}

impl PresentationSink for Drawer {
    /// Push the frame to the screen.
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, texture: &Texture) -> Result<(), Error> {
        if texture.stride() != texture.width() {
            return Err(Error::WindowUpdate(format!(
                "window needs packed rows, got stride {} for width {}",
                texture.stride(),
                texture.width()
            )));
        }
        self.window
            .update_with_buffer(texture.data(), texture.width(), texture.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

/* ---------- Pointer edges: press / drag / release from a raw "is touching" sample ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSample {
    Up,
    Pressed(Point),
    Held { prev: Point, pos: Point },
    /// Carries the last position seen while touching.
    Released(Point),
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<Point>,
}

impl PointerTracker {
    pub fn update(&mut self, contact: Option<Point>) -> PointerSample {
        let sample = match (self.last, contact) {
            (None, None) => PointerSample::Up,
            (None, Some(pos)) => PointerSample::Pressed(pos),
            (Some(prev), Some(pos)) => PointerSample::Held { prev, pos },
            (Some(prev), None) => PointerSample::Released(prev),
        };
        self.last = contact;
        sample
    }
}

/* ---------- Software drawing: crosshair, tiny bitmap font ---------- */

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a “+” shape (with a tiny gap at the center).
pub fn draw_crosshair(fb: &mut impl PixelTarget, cx: i32, cy: i32, size: i32, color: Color) {
    raster::line(fb, cx - size, cy, cx - 2, cy, 1, color);
    raster::line(fb, cx + 2, cy, cx + size, cy, 1, color);
    raster::line(fb, cx, cy - size, cx, cy - 2, 1, color);
    raster::line(fb, cx, cy + 2, cx, cy + size, 1, color);
    fb.set_pixel(cx, cy, color);
}

/// Return a 5x7 glyph bitmap. Lowercase letters map to uppercase.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut impl PixelTarget, x: i32, y: i32, ch: char, color: Color) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass first, glyph on top
        for (dx, dy, c) in [(1, 1, Color::BLACK), (0, 0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        fb.set_pixel(x + rx + dx, y + ry as i32 + dy, c);
                    }
                }
            }
        }
    }
}

/// Pixel width of `text` when drawn with `draw_text_5x7`.
pub fn text_width_5x7(text: &str) -> i32 {
    text.chars().count() as i32 * 6
}

/// Draw a text string using 5x7 glyphs, 1 pixel apart.
pub fn draw_text_5x7(fb: &mut impl PixelTarget, mut x: i32, y: i32, text: &str, color: Color) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
