// src/color.rs

//! Packed 16-bit colour helpers and the `Color` enum used to write colours
//! in configuration.
//!
//! Two representations of a 16-bit colour exist in this crate:
//! - the *natural* packed value a caller works with, produced by [`pack_rgb`];
//! - the *stored* value held in a `Surface`'s pixel buffer, which is the
//!   natural value with its high and low bytes exchanged.
//!
//! [`to_stored`] converts at the input boundary. Blits never convert.

use serde::{Deserialize, Serialize};

/// Exchanges the high and low bytes of `colour`. Self-inverse.
#[inline]
pub const fn swap_bytes(colour: u16) -> u16 {
    ((colour << 8) & 0xff00) | (colour >> 8)
}

/// Converts a natural packed colour into the surface storage byte order.
#[inline]
pub const fn to_stored(colour: u16) -> u16 {
    swap_bytes(colour)
}

/// Converts a stored pixel back into a natural packed colour.
#[inline]
pub const fn from_stored(pixel: u16) -> u16 {
    swap_bytes(pixel)
}

/// Packs 8-bit channels into a natural-order 16-bit colour.
///
/// Each channel keeps only its top five bits (integer division by 8, no
/// rounding). Red lands at bit 11, green at bit 6 and blue at bit 0, so bit 5
/// is always clear.
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u16 {
    (((r >> 3) as u16) << 11) + (((g >> 3) as u16) << 6) + ((b >> 3) as u16)
}

/// A colour as written in configuration.
///
/// Every variant resolves to a natural-order packed value; the byte swap into
/// storage order happens later, at the surface entry point that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// An already packed natural-order value.
    Packed(u16),
    /// 8-bit channels, packed with [`pack_rgb`].
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Packed(0)
    }
}

impl Color {
    /// Resolves this colour to a natural-order packed value.
    pub const fn to_packed(self) -> u16 {
        match self {
            Color::Packed(value) => value,
            Color::Rgb(r, g, b) => pack_rgb(r, g, b),
        }
    }

    /// Resolves this colour to the value a surface would store for it.
    pub const fn to_stored(self) -> u16 {
        to_stored(self.to_packed())
    }
}
