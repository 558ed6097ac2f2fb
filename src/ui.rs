// Overlays drawn on top of the canvas each frame (never into the canvas itself):
// toolbar, palette strip, help panel, status message, cursor and shape preview.
// Also decides whether a pointer sample lands on the UI or on the picture.

use crate::canvas::{Canvas, CanvasEvent, Notice};
use crate::draw::{draw_text_5x7, text_width_5x7, PointerSample, PointerTracker};
use crate::error::Error;
use crate::palette::Palette;
use crate::raster;
use crate::surface::PixelTarget;
use crate::tools::{ToolContext, ToolKind};
use crate::types::{Color, Point};

pub const TOOLBAR_HEIGHT: i32 = 40;
pub const PALETTE_HEIGHT: i32 = 35;
const SWATCH: i32 = 25;
const SWATCH_SPACING: i32 = 3;
const STATUS_FRAMES: u32 = 120; // ~2 s at 60 fps

const UI_BG: Color = Color::rgba(40, 40, 40, 255);
const UI_BORDER: Color = Color::rgba(100, 100, 100, 255);
const UI_SELECTED: Color = Color::rgba(255, 255, 0, 255);
const HELP_BG: Color = Color::rgba(20, 20, 20, 255);
const PREVIEW: Color = Color::rgba(200, 200, 200, 255);
const YELLOW: Color = Color::rgba(255, 255, 0, 255);
const CYAN: Color = Color::rgba(0, 255, 255, 255);

const HELP_LINES: [&str; 9] = [
    "Left mouse: draw on canvas",
    "Up/Down: brush size",
    "Q/E: previous/next color",
    "Tab: cycle tools (Pencil/Eraser/Line/...)",
    "Delete: clear canvas",
    "Z: undo last action (again to redo)",
    "U: toggle toolbar/palette",
    "H: show/hide this help",
    "Esc: quit",
];

pub struct Ui {
    width: i32,
    height: i32,
    pub show_toolbar: bool,
    pub show_palette: bool,
    pub show_help: bool,
    status: Option<(String, u32)>,
}

impl Ui {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            show_toolbar: true,
            show_palette: true,
            show_help: false,
            status: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), STATUS_FRAMES));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Advance one frame; the status message fades after its timer runs out.
    pub fn tick(&mut self) {
        let expired = match &mut self.status {
            Some((_, frames)) => {
                *frames -= 1;
                *frames == 0
            }
            None => false,
        };
        if expired {
            self.status = None;
        }
    }

    pub fn toggle_bars(&mut self) {
        self.show_toolbar = !self.show_toolbar;
        self.show_palette = !self.show_palette;
    }

    fn palette_top(&self) -> i32 {
        self.height - PALETTE_HEIGHT
    }

    fn swatch_origin(&self, count: usize) -> i32 {
        let total = count as i32 * (SWATCH + SWATCH_SPACING);
        (self.width - total) / 2
    }

    /// Index of the swatch under `p`, if the palette strip is shown.
    pub fn palette_hit_test(&self, palette: &Palette, p: Point) -> Option<usize> {
        if !self.show_palette || p.y < self.palette_top() || p.y > self.palette_top() + PALETTE_HEIGHT {
            return None;
        }
        let start = self.swatch_origin(palette.colors().len());
        (0..palette.colors().len()).find(|&i| {
            let bx = start + i as i32 * (SWATCH + SWATCH_SPACING);
            p.x >= bx && p.x <= bx + SWATCH
        })
    }

    pub fn toolbar_hit_test(&self, p: Point) -> bool {
        self.show_toolbar && p.y >= 0 && p.y <= TOOLBAR_HEIGHT
    }

    /// One frame of pointer input. Runs every frame, help or not: while help is open the
    /// contact is dropped, so a gesture in progress is released and the next press after
    /// closing help starts a fresh one.
    pub fn pointer_frame(
        &mut self,
        canvas: &mut Canvas,
        tracker: &mut PointerTracker,
        contact: Option<Point>,
    ) -> Result<Option<Notice>, Error> {
        let contact = if self.show_help { None } else { contact };
        let sample = tracker.update(contact);
        self.route_pointer(canvas, sample)
    }

    /// Send one pointer sample to the palette, swallow it on the toolbar, or paint with it.
    pub fn route_pointer(&mut self, canvas: &mut Canvas, sample: PointerSample) -> Result<Option<Notice>, Error> {
        let (pos, event) = match sample {
            PointerSample::Up => return Ok(None),
            PointerSample::Released(p) => return canvas.handle(CanvasEvent::PointerUp(p)),
            PointerSample::Pressed(p) => (p, CanvasEvent::PointerDown(p)),
            PointerSample::Held { pos, .. } => (pos, CanvasEvent::PointerMove(pos)),
        };
        if let Some(index) = self.palette_hit_test(canvas.palette(), pos) {
            canvas.select_color(index);
            return Ok(None);
        }
        if self.toolbar_hit_test(pos) {
            return Ok(None);
        }
        canvas.handle(event)
    }

    /// Top band: color swatch, tool, size, key hints, plus the centred status message.
    pub fn render_toolbar(&self, fb: &mut impl PixelTarget, tools: &ToolContext) {
        if self.show_toolbar {
            raster::fill_rect(fb, 0, 0, self.width - 1, TOOLBAR_HEIGHT - 1, UI_BG);
            raster::line(fb, 0, TOOLBAR_HEIGHT, self.width - 1, TOOLBAR_HEIGHT, 1, UI_BORDER);
            raster::fill_circle(fb, 18, 20, 12, tools.current_color());
            raster::rect(fb, 5, 7, 31, 33, UI_BORDER);

            let info = format!(
                "Tool: {}  |  Size: {}  |  Q/E: Color  |  H: Help",
                tools.tool(),
                tools.brush_size()
            );
            draw_text_5x7(fb, 45, 17, &info, Color::WHITE);
        }

        if let Some(msg) = self.status() {
            let x = (self.width - text_width_5x7(msg)) / 2;
            draw_text_5x7(fb, x, self.height / 2 - 50, msg, YELLOW);
        }
    }

    /// Bottom strip of swatches; the selected one gets a highlight frame.
    pub fn render_palette(&self, fb: &mut impl PixelTarget, palette: &Palette) {
        if !self.show_palette {
            return;
        }
        let top = self.palette_top();
        raster::fill_rect(fb, 0, top, self.width - 1, self.height - 1, UI_BG);
        raster::line(fb, 0, top, self.width - 1, top, 1, UI_BORDER);

        let start = self.swatch_origin(palette.colors().len());
        let y = top + 5;
        for (i, &color) in palette.colors().iter().enumerate() {
            let x = start + i as i32 * (SWATCH + SWATCH_SPACING);
            if i == palette.selected() {
                raster::fill_rect(fb, x - 2, y - 2, x + SWATCH + 1, y + SWATCH + 1, UI_SELECTED);
            }
            raster::fill_rect(fb, x, y, x + SWATCH - 1, y + SWATCH - 1, color);
            raster::rect(fb, x, y, x + SWATCH, y + SWATCH, UI_BORDER);
        }
    }

    /// Brush-sized dot under the pointer, outlined black (white when the color is dark).
    pub fn render_cursor(&self, fb: &mut impl PixelTarget, p: Point, tools: &ToolContext) {
        let r = (tools.brush_size() / 2).max(2);
        let color = tools.current_color();
        raster::fill_circle(fb, p.x, p.y, r, color);
        raster::circle(fb, p.x, p.y, r, cursor_outline(color));
    }

    /// Outline of the shape that a release at `pointer` would commit.
    pub fn render_preview(&self, fb: &mut impl PixelTarget, tools: &ToolContext, pointer: Point) {
        let Some(start) = tools.shape_start() else {
            return;
        };
        match tools.tool() {
            ToolKind::Line => raster::line(fb, start.x, start.y, pointer.x, pointer.y, 1, PREVIEW),
            ToolKind::Rect | ToolKind::FillRect => raster::rect(fb, start.x, start.y, pointer.x, pointer.y, PREVIEW),
            ToolKind::Circle | ToolKind::FillCircle => {
                raster::circle(fb, start.x, start.y, start.rounded_distance(pointer), PREVIEW)
            }
            ToolKind::Pencil | ToolKind::Eraser | ToolKind::Spray => {}
        }
    }

    pub fn render_help(&self, fb: &mut impl PixelTarget) {
        let (x, y) = (self.width / 2 - 380, self.height / 2 - 200);
        let (w, h) = (760, 400);
        raster::fill_rect(fb, x, y, x + w, y + h, HELP_BG);
        raster::rect(fb, x, y, x + w, y + h, UI_BORDER);

        let mut line = y + 24;
        draw_text_5x7(fb, x + 20, line, "=== Sketchpad - Help ===", YELLOW);
        line += 38;
        for text in HELP_LINES {
            draw_text_5x7(fb, x + 20, line, text, Color::WHITE);
            line += 28;
        }
        line += 10;
        draw_text_5x7(fb, x + 20, line, "Click the palette bar to pick a color directly!", CYAN);
    }
}

fn cursor_outline(fill: Color) -> Color {
    if fill.luma() < 64 { Color::WHITE } else { Color::BLACK }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use crate::present::Texture;

    fn canvas() -> Canvas {
        Canvas::with_seed(&CanvasConfig::default(), 3).unwrap()
    }

    #[test]
    fn palette_hit_test_maps_swatches() {
        let ui = Ui::new(960, 544);
        let palette = Palette::default();
        // 20 swatches of 28 px -> 560 px wide, starting at x = 200
        assert_eq!(ui.palette_hit_test(&palette, Point::new(200, 520)), Some(0));
        assert_eq!(ui.palette_hit_test(&palette, Point::new(228 + 10, 530)), Some(1));
        assert_eq!(ui.palette_hit_test(&palette, Point::new(199, 520)), None);
        assert_eq!(ui.palette_hit_test(&palette, Point::new(300, 400)), None);
    }

    #[test]
    fn hidden_bars_do_not_capture_the_pointer() {
        let mut ui = Ui::new(960, 544);
        assert!(ui.toolbar_hit_test(Point::new(10, 40)));
        assert!(!ui.toolbar_hit_test(Point::new(10, 41)));
        ui.toggle_bars();
        assert!(!ui.toolbar_hit_test(Point::new(10, 10)));
        assert_eq!(ui.palette_hit_test(&Palette::default(), Point::new(200, 520)), None);
    }

    #[test]
    fn status_expires_after_its_frames() {
        let mut ui = Ui::new(960, 544);
        ui.set_status("Undo!");
        for _ in 0..STATUS_FRAMES - 1 {
            ui.tick();
        }
        assert_eq!(ui.status(), Some("Undo!"));
        ui.tick();
        assert_eq!(ui.status(), None);
    }

    #[test]
    fn routing_picks_colors_and_ignores_toolbar() {
        let mut ui = Ui::new(960, 544);
        let mut c = canvas();
        ui.route_pointer(&mut c, PointerSample::Pressed(Point::new(200 + 28 * 2, 520))).unwrap();
        assert_eq!(c.palette().selected(), 2);
        assert!(!c.has_undo());

        ui.route_pointer(&mut c, PointerSample::Pressed(Point::new(300, 20))).unwrap();
        assert!(!c.has_undo());
        assert_eq!(c.pointer(), None);

        ui.route_pointer(&mut c, PointerSample::Pressed(Point::new(300, 200))).unwrap();
        assert!(c.has_undo());
        assert_eq!(c.surface().get_pixel(300, 200), Some(c.tools().current_color()));
        ui.route_pointer(&mut c, PointerSample::Released(Point::new(300, 200))).unwrap();
        assert_eq!(c.pointer(), None);
    }

    #[test]
    fn help_ends_the_gesture_so_the_next_press_starts_fresh() {
        let mut ui = Ui::new(960, 544);
        let mut c = canvas();
        let mut tracker = PointerTracker::default();
        let (a, b) = (Point::new(100, 100), Point::new(800, 400));

        ui.pointer_frame(&mut c, &mut tracker, Some(a)).unwrap();
        assert_eq!(c.pointer(), Some(a));

        // H while the button is still down, release, then H again
        ui.show_help = true;
        ui.pointer_frame(&mut c, &mut tracker, Some(a)).unwrap();
        assert_eq!(c.pointer(), None);
        ui.pointer_frame(&mut c, &mut tracker, Some(Point::new(450, 250))).unwrap();
        ui.pointer_frame(&mut c, &mut tracker, None).unwrap();
        ui.show_help = false;

        ui.pointer_frame(&mut c, &mut tracker, Some(b)).unwrap();
        assert_eq!(c.pointer(), Some(b));
        assert_eq!(c.surface().get_pixel(450, 250), Some(Color::WHITE));
        assert_eq!(c.surface().get_pixel(800, 400), Some(c.tools().current_color()));

        // the new press took its own snapshot: one undo removes only the dot at B
        ui.pointer_frame(&mut c, &mut tracker, None).unwrap();
        c.handle(CanvasEvent::UndoToggle).unwrap();
        assert_eq!(c.surface().get_pixel(800, 400), Some(Color::WHITE));
        assert_eq!(c.surface().get_pixel(100, 100), Some(c.tools().current_color()));
    }

    #[test]
    fn cursor_outline_contrasts_with_the_fill() {
        assert_eq!(cursor_outline(Color::WHITE), Color::BLACK);
        assert_eq!(cursor_outline(Color::rgba(255, 255, 0, 255)), Color::BLACK);
        assert_eq!(cursor_outline(Color::BLACK), Color::WHITE);
        assert_eq!(cursor_outline(Color::rgba(0, 0, 128, 255)), Color::WHITE);

        let ui = Ui::new(200, 120);
        let c = canvas();
        let mut frame = Texture::packed(200, 120).unwrap();
        ui.render_cursor(&mut frame, Point::new(60, 60), c.tools());
        let outline = cursor_outline(c.tools().current_color());
        assert_eq!(frame.get_pixel(62, 60), Some(outline));
        assert_eq!(frame.get_pixel(60, 60), Some(c.tools().current_color()));
    }

    #[test]
    fn preview_draws_into_frame_not_canvas() {
        let ui = Ui::new(960, 544);
        let mut c = canvas();
        c.handle(CanvasEvent::ToolNext).unwrap();
        c.handle(CanvasEvent::ToolNext).unwrap();
        c.handle(CanvasEvent::ToolNext).unwrap(); // Rect
        c.handle(CanvasEvent::PointerDown(Point::new(100, 100))).unwrap();

        let mut frame = Texture::packed(960, 544).unwrap();
        ui.render_preview(&mut frame, c.tools(), Point::new(120, 130));
        assert_eq!(frame.get_pixel(110, 100), Some(PREVIEW));
        assert_eq!(frame.get_pixel(110, 110), Some(Color(0)));
        assert!(c.surface().pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn overlays_render_without_panicking_at_edges() {
        let mut ui = Ui::new(200, 120);
        ui.set_status("Canvas cleared!");
        let c = canvas();
        let mut frame = Texture::packed(200, 120).unwrap();
        ui.render_toolbar(&mut frame, c.tools());
        ui.render_palette(&mut frame, c.palette());
        ui.render_help(&mut frame);
        ui.render_cursor(&mut frame, Point::new(-3, 119), c.tools());
        assert_eq!(frame.get_pixel(0, 0), Some(HELP_BG));
    }
}
