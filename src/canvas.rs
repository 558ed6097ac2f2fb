// The painting engine: turns discrete input events into pixels.
// Owns the surface, the undo slot, the tool state and the palette; the window and UI only
// talk to it through `handle` and the read accessors below.

use crate::config::CanvasConfig;
use crate::error::Error;
use crate::palette::Palette;
use crate::raster;
use crate::surface::PixelSurface;
use crate::tools::{ToolContext, ToolKind};
use crate::types::Point;
use crate::undo::UndoStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::{self, Display};
use tracing::debug;

/// Everything the input side can ask of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    PointerDown(Point),
    PointerMove(Point),
    /// Carries the last known contact position.
    PointerUp(Point),
    ToolNext,
    BrushGrow,
    BrushShrink,
    ColorPrev,
    ColorNext,
    ClearCanvas,
    UndoToggle,
}

/// User-visible outcome of an event, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ToolChanged(ToolKind),
    BrushResized(i32),
    Cleared,
    Undone,
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ToolChanged(tool) => write!(f, "Tool: {tool}"),
            Notice::BrushResized(size) => write!(f, "Brush: {size}"),
            Notice::Cleared => f.write_str("Canvas cleared!"),
            Notice::Undone => f.write_str("Undo!"),
        }
    }
}

pub struct Canvas {
    surface: PixelSurface,
    undo: UndoStore,
    tools: ToolContext,
    palette: Palette,
    spray_scale: i32,
    /// Position of the current contact; None while the pointer is up.
    pointer: Option<Point>,
    rng: StdRng,
}

impl Canvas {
    pub fn new(config: &CanvasConfig) -> Result<Self, Error> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as `new` but with a repeatable spray pattern.
    pub fn with_seed(config: &CanvasConfig, seed: u64) -> Result<Self, Error> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &CanvasConfig, rng: StdRng) -> Result<Self, Error> {
        let surface = PixelSurface::new(config.width, config.height, config.background)?;
        let undo = UndoStore::new(&surface)?;
        let palette = Palette::default();
        let tools = ToolContext::new(
            palette.current(),
            config.background,
            config.brush_initial,
            config.brush_min,
            config.brush_max,
        );
        Ok(Self {
            surface,
            undo,
            tools,
            palette,
            spray_scale: config.spray_scale,
            pointer: None,
            rng,
        })
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn tools(&self) -> &ToolContext {
        &self.tools
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn has_undo(&self) -> bool {
        self.undo.has_snapshot()
    }

    /// Where the pointer is while it is held down.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn spray_radius(&self) -> i32 {
        self.tools.brush_size() * self.spray_scale
    }

    /// Direct palette pick (e.g. a tap on a swatch).
    pub fn select_color(&mut self, index: usize) {
        self.palette.select_index(index);
        self.tools.set_current_color(self.palette.current());
    }

    pub fn handle(&mut self, event: CanvasEvent) -> Result<Option<Notice>, Error> {
        match event {
            CanvasEvent::PointerDown(p) => {
                if self.pointer.is_some() {
                    // already in contact: treat as a sample of the ongoing gesture
                    self.pointer_move(p);
                } else {
                    self.pointer_down(p)?;
                }
                Ok(None)
            }
            CanvasEvent::PointerMove(p) => {
                self.pointer_move(p);
                Ok(None)
            }
            CanvasEvent::PointerUp(p) => {
                self.pointer_up(p);
                Ok(None)
            }
            CanvasEvent::ToolNext => {
                let tool = self.tools.next_tool();
                debug!(%tool, "tool changed");
                Ok(Some(Notice::ToolChanged(tool)))
            }
            CanvasEvent::BrushGrow => {
                let size = self.tools.grow_brush();
                debug!(size, "brush grow");
                Ok(Some(Notice::BrushResized(size)))
            }
            CanvasEvent::BrushShrink => {
                let size = self.tools.shrink_brush();
                debug!(size, "brush shrink");
                Ok(Some(Notice::BrushResized(size)))
            }
            CanvasEvent::ColorPrev => {
                self.palette.select_prev();
                self.tools.set_current_color(self.palette.current());
                debug!(index = self.palette.selected(), "color changed");
                Ok(None)
            }
            CanvasEvent::ColorNext => {
                self.palette.select_next();
                self.tools.set_current_color(self.palette.current());
                debug!(index = self.palette.selected(), "color changed");
                Ok(None)
            }
            CanvasEvent::ClearCanvas => {
                self.undo.save(&self.surface)?;
                self.surface.clear(self.tools.background_color());
                self.tools.disarm();
                debug!("canvas cleared");
                Ok(Some(Notice::Cleared))
            }
            CanvasEvent::UndoToggle => {
                let swapped = self.undo.toggle(&mut self.surface)?;
                debug!(swapped, "undo toggle");
                Ok(swapped.then_some(Notice::Undone))
            }
        }
    }

    fn pointer_down(&mut self, p: Point) -> Result<(), Error> {
        // one snapshot per gesture, taken before its first pixel
        self.undo.save(&self.surface)?;
        self.pointer = Some(p);
        let tool = self.tools.tool();
        if tool.is_continuous() {
            let color = self.tools.draw_color();
            if tool == ToolKind::Spray {
                let radius = self.spray_radius();
                raster::spray(&mut self.surface, p.x, p.y, radius, color, &mut self.rng);
            } else {
                raster::brush(&mut self.surface, p.x, p.y, self.tools.brush_size(), color);
            }
        } else {
            self.tools.arm(p);
        }
        Ok(())
    }

    fn pointer_move(&mut self, p: Point) {
        let Some(prev) = self.pointer.replace(p) else {
            // hovering, nothing to paint
            self.pointer = None;
            return;
        };
        let tool = self.tools.tool();
        if !tool.is_continuous() {
            // armed shapes only preview until release
            return;
        }
        let color = self.tools.draw_color();
        if tool == ToolKind::Spray {
            let radius = self.spray_radius();
            raster::spray(&mut self.surface, p.x, p.y, radius, color, &mut self.rng);
        } else {
            // interpolate so fast strokes stay connected between samples
            raster::line(&mut self.surface, prev.x, prev.y, p.x, p.y, self.tools.brush_size(), color);
        }
    }

    fn pointer_up(&mut self, p: Point) {
        self.pointer = None;
        if let Some(start) = self.tools.disarm() {
            let tool = self.tools.tool();
            tool.draw_shape(&mut self.surface, start, p, self.tools.brush_size(), self.tools.draw_color());
            debug!(%tool, ?start, end = ?p, "shape committed");
        }
    }
}
