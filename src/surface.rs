// src/surface.rs

//! Defines `Surface`, an owned 2D buffer of 16-bit packed colour pixels.
//!
//! Pixels are kept row-major (`index = y * width + x`) in storage byte order.
//! The buffer length equals `width * height` for the whole life of the
//! surface; nothing resizes it.

use crate::color::{pack_rgb, to_stored};

use anyhow::{bail, Context, Result};
use log::debug;

/// An owned, fixed-size pixel buffer.
///
/// A surface is released when it is dropped or passed to [`Surface::destroy`].
/// Because both consume the value, a surface cannot be released twice or used
/// after release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    size: usize,
    pixels: Vec<u16>,
}

impl Surface {
    /// Allocates a `width` x `height` surface.
    ///
    /// Pixel contents are unspecified by contract; this implementation zeroes
    /// them. Callers should `fill` or blit before reading.
    ///
    /// # Errors
    /// Returns an error if either dimension is not positive, if `width * height`
    /// overflows, or if the allocator cannot provide the buffer.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            bail!("invalid surface dimensions {}x{}", width, height);
        }
        let (width, height) = (width as usize, height as usize);
        let size = match width.checked_mul(height) {
            Some(size) => size,
            None => bail!("surface size {}x{} overflows", width, height),
        };

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(size)
            .with_context(|| format!("failed to allocate {} pixels for surface", size))?;
        pixels.resize(size, 0);

        debug!("Created {}x{} surface ({} pixels)", width, height, size);
        Ok(Surface {
            width,
            height,
            size,
            pixels,
        })
    }

    /// Releases the surface and its pixel buffer.
    pub fn destroy(self) {
        debug!("Destroying {}x{} surface", self.width, self.height);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, always `width * height`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The stored pixels in row-major order.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }

    /// The pixel buffer as raw bytes, in memory order, for handing to a host
    /// that presents it.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The stored value at `(x, y)`, or `None` if the coordinate is off the
    /// surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        self.index_of(i64::from(x), i64::from(y))
            .map(|idx| self.pixels[idx])
    }

    /// Buffer index of `(x, y)`, or `None` when either axis is out of range.
    pub(crate) fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let col = self.column(x)?;
        let row = self.row(y)?;
        Some(row * self.width + col)
    }

    pub(crate) fn row(&self, y: i64) -> Option<usize> {
        usize::try_from(y).ok().filter(|&y| y < self.height)
    }

    pub(crate) fn column(&self, x: i64) -> Option<usize> {
        usize::try_from(x).ok().filter(|&x| x < self.width)
    }

    /// Fills every pixel with `colour`, swapped into storage order.
    pub fn fill(&mut self, colour: u16) {
        self.pixels.fill(to_stored(colour));
    }

    /// Fills every pixel with the colour packed from 8-bit channels.
    ///
    /// Equivalent to `fill(pack_rgb(r, g, b))`.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.fill(pack_rgb(r, g, b));
    }
}
