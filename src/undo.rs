// Single-level undo: one spare buffer that trades places with the live surface.
// Visual: pressing undo flips between "before" and "after" the last gesture.

use crate::error::{alloc_filled, Error};
use crate::surface::PixelSurface;
use crate::types::Color;

pub struct UndoStore {
    snapshot: Vec<Color>,
    has_snapshot: bool,
}

impl UndoStore {
    /// Reserve a snapshot slot matching `surface`; starts empty.
    pub fn new(surface: &PixelSurface) -> Result<Self, Error> {
        let snapshot = alloc_filled(surface.pixels().len(), Color::default())?;
        Ok(Self { snapshot, has_snapshot: false })
    }

    pub fn has_snapshot(&self) -> bool {
        self.has_snapshot
    }

    /// Capture the surface, overwriting whatever was stored before.
    /// Call right before the first mutation of a gesture, never mid-gesture.
    pub fn save(&mut self, surface: &PixelSurface) -> Result<(), Error> {
        surface.snapshot_into(&mut self.snapshot)?;
        self.has_snapshot = true;
        Ok(())
    }

    /// Swap live pixels with the snapshot. Twice in a row is a no-op overall.
    /// Returns false (and touches nothing) when there is nothing to swap with.
    pub fn toggle(&mut self, surface: &mut PixelSurface) -> Result<bool, Error> {
        if !self.has_snapshot {
            return Ok(false);
        }
        surface.swap_with(&mut self.snapshot)?;
        Ok(true)
    }
}
