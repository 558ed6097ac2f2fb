// Tool selection, brush settings and the two-point shape state machine.

use crate::raster;
use crate::surface::PixelTarget;
use crate::types::{Color, Point};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rect,
    Circle,
    FillRect,
    FillCircle,
    Spray,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rect,
        ToolKind::Circle,
        ToolKind::FillRect,
        ToolKind::FillCircle,
        ToolKind::Spray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
            ToolKind::Rect => "Rect",
            ToolKind::Circle => "Circle",
            ToolKind::FillRect => "FillRect",
            ToolKind::FillCircle => "FillCircle",
            ToolKind::Spray => "Spray",
        }
    }

    /// The following tool, wrapping after Spray.
    pub fn next(self) -> ToolKind {
        let i = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Continuous tools paint on every contact sample; the rest need two points.
    pub fn is_continuous(self) -> bool {
        matches!(self, ToolKind::Pencil | ToolKind::Eraser | ToolKind::Spray)
    }

    /// Rasterize the two-point shape spanned by `start`..`end`.
    /// Used both for the final commit and for the on-screen preview.
    /// Continuous tools have no shape and draw nothing.
    pub fn draw_shape(self, target: &mut impl PixelTarget, start: Point, end: Point, size: i32, color: Color) {
        match self {
            ToolKind::Line => raster::line(target, start.x, start.y, end.x, end.y, size, color),
            ToolKind::Rect => raster::rect(target, start.x, start.y, end.x, end.y, color),
            ToolKind::FillRect => raster::fill_rect(target, start.x, start.y, end.x, end.y, color),
            ToolKind::Circle => raster::circle(target, start.x, start.y, start.rounded_distance(end), color),
            ToolKind::FillCircle => {
                raster::fill_circle(target, start.x, start.y, start.rounded_distance(end), color)
            }
            ToolKind::Pencil | ToolKind::Eraser | ToolKind::Spray => {}
        }
    }
}

impl Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a two-point shape is waiting for its second point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeState {
    #[default]
    Idle,
    Armed { start: Point },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolContext {
    current_color: Color,
    background_color: Color,
    brush_size: i32,
    brush_min: i32,
    brush_max: i32,
    tool: ToolKind,
    shape: ShapeState,
}

impl ToolContext {
    /// `brush_initial` is clamped into `brush_min..=brush_max`.
    pub fn new(current_color: Color, background_color: Color, brush_initial: i32, brush_min: i32, brush_max: i32) -> Self {
        Self {
            current_color,
            background_color,
            brush_size: brush_initial.clamp(brush_min, brush_max),
            brush_min,
            brush_max,
            tool: ToolKind::default(),
            shape: ShapeState::Idle,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn brush_size(&self) -> i32 {
        self.brush_size
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn shape_state(&self) -> ShapeState {
        self.shape
    }

    pub fn shape_drawing(&self) -> bool {
        matches!(self.shape, ShapeState::Armed { .. })
    }

    /// Start point of the pending shape, only while armed.
    pub fn shape_start(&self) -> Option<Point> {
        match self.shape {
            ShapeState::Armed { start } => Some(start),
            ShapeState::Idle => None,
        }
    }

    /// Color the current tool lays down: the eraser paints background.
    pub fn draw_color(&self) -> Color {
        if self.tool == ToolKind::Eraser {
            self.background_color
        } else {
            self.current_color
        }
    }

    /// Switching tools always drops any pending shape without drawing it.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.shape = ShapeState::Idle;
    }

    pub fn next_tool(&mut self) -> ToolKind {
        self.set_tool(self.tool.next());
        self.tool
    }

    pub fn grow_brush(&mut self) -> i32 {
        self.brush_size = (self.brush_size + 1).min(self.brush_max);
        self.brush_size
    }

    pub fn shrink_brush(&mut self) -> i32 {
        self.brush_size = (self.brush_size - 1).max(self.brush_min);
        self.brush_size
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn arm(&mut self, start: Point) {
        self.shape = ShapeState::Armed { start };
    }

    /// Back to idle; hands back the start point if a shape was pending.
    pub fn disarm(&mut self) -> Option<Point> {
        let start = self.shape_start();
        self.shape = ShapeState::Idle;
        start
    }
}
