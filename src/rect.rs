// src/rect.rs

//! Defines `Rect`, the region descriptor passed to blit operations.

use serde::{Deserialize, Serialize};

/// A rectangular region in surface pixel coordinates.
///
/// `x` and `y` may be negative to place a region partly off a surface.
/// When used as a blit destination only `x` and `y` matter; blits never scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// A rect at the origin covering `w` by `h` pixels.
    pub const fn sized(w: i32, h: i32) -> Self {
        Rect { x: 0, y: 0, w, h }
    }
}
