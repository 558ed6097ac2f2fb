//! Raster sketchpad: an in-memory pixel canvas with brush, shape and spray tools,
//! one-level undo and a per-frame copy into a display texture.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod palette;
pub mod present;
pub mod raster;
pub mod surface;
pub mod tools;
pub mod types;
pub mod ui;
pub mod undo;

pub use canvas::{Canvas, CanvasEvent, Notice};
pub use config::CanvasConfig;
pub use error::Error;
pub use surface::{PixelSurface, PixelTarget};
pub use tools::{ToolContext, ToolKind};
pub use types::{Color, Point};
