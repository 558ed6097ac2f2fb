// The pixel buffer we paint into.
// Visual: this is the picture itself; the window shows a copy of it every frame.

use crate::error::{alloc_filled, Error};
use crate::types::Color;

/// Anything the rasterizer can write pixels into.
/// Implementors silently drop writes that fall outside their bounds.
pub trait PixelTarget {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// Fixed-size, row-major grid of packed colors (index = y * width + x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelSurface {
    /// Allocate a `width x height` surface filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, Error> {
        let len = width.checked_mul(height).ok_or(Error::Allocation { bytes: usize::MAX })?;
        let pixels = alloc_filled(len, background)?;
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The whole buffer, row-major with stride == width.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of pixels; `y` must be < height.
    pub fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Read back a pixel; `None` outside the surface.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn snapshot_into(&self, dest: &mut [Color]) -> Result<(), Error> {
        check_len(self.pixels.len(), dest.len())?;
        dest.copy_from_slice(&self.pixels);
        Ok(())
    }

    pub fn restore_from(&mut self, src: &[Color]) -> Result<(), Error> {
        check_len(self.pixels.len(), src.len())?;
        self.pixels.copy_from_slice(src);
        Ok(())
    }

    /// Exchange contents with `other` in place (used by the undo toggle).
    pub fn swap_with(&mut self, other: &mut [Color]) -> Result<(), Error> {
        check_len(self.pixels.len(), other.len())?;
        self.pixels.swap_with_slice(other);
        Ok(())
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl PixelTarget for PixelSurface {
    /// Put a pixel if (x,y) is inside bounds; otherwise nothing happens.
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}

fn check_len(expected: usize, actual: usize) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::SizeMismatch { expected, actual });
    }
    Ok(())
}
