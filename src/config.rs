// Startup settings. Everything has a default, so the JSON file only needs the keys you change.

use crate::error::Error;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub brush_min: i32,
    pub brush_max: i32,
    pub brush_initial: i32,
    /// Spray radius = brush size * spray_scale.
    pub spray_scale: i32,
    pub window_title: String,
    pub debug_logging: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 544,
            background: Color::WHITE,
            brush_min: 1,
            brush_max: 30,
            brush_initial: 3,
            spray_scale: 3,
            window_title: "Sketchpad".into(),
            debug_logging: false,
        }
    }
}

impl CanvasConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {}: {e}", path.display())))?;
        let cfg: CanvasConfig = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("parse {}: {e}", path.display())))?;
        cfg.validate()
    }

    /// First command line argument is an optional config path.
    pub fn from_args() -> Result<Self, Error> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings the canvas cannot work with; pull the initial brush into range.
    pub fn validate(mut self) -> Result<Self, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!("canvas size {}x{} is empty", self.width, self.height)));
        }
        if self.brush_min < 1 || self.brush_min > self.brush_max {
            return Err(Error::Config(format!(
                "brush range {}..={} is invalid",
                self.brush_min, self.brush_max
            )));
        }
        if self.spray_scale < 1 {
            return Err(Error::Config(format!("spray_scale {} must be at least 1", self.spray_scale)));
        }
        self.brush_initial = self.brush_initial.clamp(self.brush_min, self.brush_max);
        Ok(self)
    }
}
