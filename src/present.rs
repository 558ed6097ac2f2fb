// Publishing the surface for display.
// Visual: once per frame the painted picture is copied into the texture the window shows.

use crate::error::{alloc_filled, Error};
use crate::surface::{PixelSurface, PixelTarget};
use crate::types::Color;

/// Device-side pixel buffer. Rows are `stride` pixels apart; the tail of each row
/// past `width` is padding and never read by the display.
pub struct Texture {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u32>,
}

impl Texture {
    pub fn new(width: usize, height: usize, stride: usize) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::SizeMismatch { expected: width, actual: stride });
        }
        let len = stride.checked_mul(height).ok_or(Error::Allocation { bytes: usize::MAX })?;
        let data = alloc_filled(len, 0u32)?;
        Ok(Self { width, height, stride, data })
    }

    /// Tightly packed texture (stride == width), what the window wants.
    pub fn packed(width: usize, height: usize) -> Result<Self, Error> {
        Self::new(width, height, width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| Color(self.data[y * self.stride + x]))
    }
}

impl PixelTarget for Texture {
    /// Overlays (UI, previews) draw straight into the frame with the same clipping rules.
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.stride + x] = color.0;
    }
}

/// Copy the surface into the texture one row at a time, skipping stride padding.
pub fn sync(surface: &PixelSurface, texture: &mut Texture) -> Result<(), Error> {
    if surface.width() != texture.width || surface.height() != texture.height {
        return Err(Error::SizeMismatch {
            expected: surface.width() * surface.height(),
            actual: texture.width * texture.height,
        });
    }
    for y in 0..surface.height() {
        let start = y * texture.stride;
        let dst = &mut texture.data[start..start + texture.width];
        for (d, s) in dst.iter_mut().zip(surface.row(y)) {
            *d = s.0;
        }
    }
    Ok(())
}

/// Whatever finally puts a texture on screen.
pub trait PresentationSink {
    fn present(&mut self, texture: &Texture) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: u32 = 0xDEAD_BEEF;

    #[test]
    fn sync_copies_rows_and_leaves_padding() {
        let mut surface = PixelSurface::new(3, 2, Color::WHITE).unwrap();
        surface.set_pixel(2, 1, Color::BLACK);
        let mut tex = Texture::new(3, 2, 5).unwrap();
        tex.data.fill(PAD);

        sync(&surface, &mut tex).unwrap();

        assert_eq!(tex.get_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(tex.get_pixel(2, 1), Some(Color::BLACK));
        assert_eq!(&tex.data()[3..5], &[PAD, PAD]);
        assert_eq!(&tex.data()[8..10], &[PAD, PAD]);
        assert_eq!(tex.data()[5 + 2], Color::BLACK.0);
    }

    #[test]
    fn sync_rejects_other_dimensions() {
        let surface = PixelSurface::new(3, 2, Color::WHITE).unwrap();
        let mut tex = Texture::packed(2, 3).unwrap();
        assert!(matches!(sync(&surface, &mut tex), Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn stride_narrower_than_width_is_rejected() {
        assert!(Texture::new(4, 4, 3).is_err());
    }

    #[test]
    fn overlay_writes_clip_to_width_not_stride() {
        let mut tex = Texture::new(2, 2, 4).unwrap();
        tex.set_pixel(2, 0, Color::BLACK);
        tex.set_pixel(-1, 1, Color::BLACK);
        assert!(tex.data().iter().all(|&p| p == 0));
        tex.set_pixel(1, 1, Color::BLACK);
        assert_eq!(tex.data()[4 + 1], Color::BLACK.0);
    }
}
