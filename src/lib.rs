// src/lib.rs

//! A minimal 2D raster surface library.
//!
//! Surfaces are owned buffers of 16-bit packed colour (RGB565-style) pixels.
//! Pixels are stored byte-swapped relative to the packed value a caller
//! supplies: every entry point taking a raw colour swaps it once before
//! storing, and blits copy stored pixels verbatim.

pub mod blit;
pub mod color;
pub mod config;
pub mod pattern;
pub mod rect;
pub mod surface;

pub use blit::{blit, blit_mask};
pub use color::{pack_rgb, swap_bytes, Color};
pub use config::Config;
pub use pattern::{load, Pattern};
pub use rect::Rect;
pub use surface::Surface;
