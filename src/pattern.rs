// src/pattern.rs

//! ASCII-art pattern loading.
//!
//! A pattern is text where a space marks a transparent (mask) pixel and any
//! other byte marks a solid pixel. [`load`] maps such text onto a surface's
//! buffer byte for byte; [`Pattern`] wraps a fixed-size tile definition and
//! builds a surface from it.

use crate::color::{to_stored, Color};
use crate::surface::Surface;

use anyhow::{bail, ensure, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Writes `length` pixels of `dest`, in flat buffer order, from `source`.
///
/// Each space byte becomes `mask`; every other byte becomes `colour`. Both are
/// natural-order values and are swapped into storage order once here. The
/// surface's width and height play no part: callers size `dest` so that
/// `width * height` matches the pattern. Pixels past `length` are untouched.
///
/// # Errors
/// Returns an error, and writes nothing, if `length` exceeds either the
/// surface's pixel count or the length of `source`.
pub fn load(
    dest: &mut Surface,
    source: &[u8],
    length: u16,
    colour: u16,
    mask: u16,
) -> Result<()> {
    let length = usize::from(length);
    if length > dest.size() || length > source.len() {
        warn!(
            "Refusing to load {} pixels (surface holds {}, source has {} bytes)",
            length,
            dest.size(),
            source.len()
        );
        bail!(
            "pattern length {} exceeds surface size {} or source length {}",
            length,
            dest.size(),
            source.len()
        );
    }

    let colour = to_stored(colour);
    let mask = to_stored(mask);
    for (pixel, &byte) in dest.pixels_mut()[..length].iter_mut().zip(source) {
        *pixel = if byte == b' ' { mask } else { colour };
    }
    Ok(())
}

/// A named, fixed-size ASCII-art tile.
///
/// ```json
/// { "name": "arrow", "width": 3, "height": 2,
///   "rows": [" # ", "###"],
///   "colour": { "Rgb": [255, 255, 255] }, "mask": { "Packed": 63519 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pattern {
    pub name: String,
    pub width: i32,
    pub height: i32,
    /// One string per row, each exactly `width` bytes.
    pub rows: Vec<String>,
    /// Colour for non-space bytes.
    pub colour: Color,
    /// Colour for space bytes; also the key to pass to `blit_mask`.
    pub mask: Color,
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern {
            name: String::new(),
            width: 0,
            height: 0,
            rows: Vec::new(),
            colour: Color::default(),
            mask: Color::Packed(0xf81f),
        }
    }
}

impl Pattern {
    /// The mask colour in storage order, ready to use as a `blit_mask` key.
    pub fn stored_mask(&self) -> u16 {
        self.mask.to_stored()
    }

    /// Validates the tile and renders it onto a new `width` x `height` surface.
    pub fn build(&self) -> Result<Surface> {
        ensure!(
            self.rows.len() == usize::try_from(self.height).unwrap_or(0),
            "pattern '{}' has {} rows, expected {}",
            self.name,
            self.rows.len(),
            self.height
        );
        if let Some((idx, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| usize::try_from(self.width).map_or(true, |w| row.len() != w))
        {
            bail!(
                "pattern '{}' row {} is {} bytes wide, expected {}",
                self.name,
                idx,
                row.len(),
                self.width
            );
        }

        let mut surface = Surface::new(self.width, self.height)
            .with_context(|| format!("failed to allocate pattern '{}'", self.name))?;
        let length = u16::try_from(surface.size()).with_context(|| {
            format!(
                "pattern '{}' has {} pixels, more than a single load accepts",
                self.name,
                surface.size()
            )
        })?;
        let source = self.rows.concat();
        load(
            &mut surface,
            source.as_bytes(),
            length,
            self.colour.to_packed(),
            self.mask.to_packed(),
        )?;

        debug!(
            "Built pattern '{}' ({}x{})",
            self.name, self.width, self.height
        );
        Ok(surface)
    }
}
