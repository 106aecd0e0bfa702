// src/blit.rs

//! Rectangular pixel copies between surfaces.
//!
//! A blit covers `src_rect.w` x `src_rect.h` offsets. For each offset the
//! source coordinate is `src_rect` origin plus the offset, and the destination
//! coordinate is `dest_rect` origin plus the offset. A pixel is skipped when
//! either coordinate falls off its surface on either axis, so regions may hang
//! off any edge of either surface. The visible offsets are clamped up front,
//! so the cost follows the pixels copied, not the rect extent. The destination
//! rect's `w` and `h` are ignored: nothing is scaled.
//!
//! Stored pixels are copied verbatim. No byte swap happens here.

use crate::rect::Rect;
use crate::surface::Surface;

use log::trace;

/// Copies a region of `src` to an offset within `dest`.
///
/// Returns the number of destination pixels written.
pub fn blit(dest: &mut Surface, src: &Surface, dest_rect: &Rect, src_rect: &Rect) -> usize {
    let written = copy_region(dest, src, dest_rect, src_rect, None);
    trace!(
        "blit {:?} -> {:?}: {} pixels written",
        src_rect,
        dest_rect,
        written
    );
    written
}

/// Copies a region of `src` to an offset within `dest`, leaving the
/// destination untouched wherever the source pixel equals `mask`.
///
/// `mask` is compared against stored pixels as-is, so it must already be in
/// storage byte order (see [`crate::color::to_stored`]).
///
/// Returns the number of destination pixels written.
pub fn blit_mask(
    dest: &mut Surface,
    src: &Surface,
    dest_rect: &Rect,
    src_rect: &Rect,
    mask: u16,
) -> usize {
    let written = copy_region(dest, src, dest_rect, src_rect, Some(mask));
    trace!(
        "blit_mask {:?} -> {:?} (mask {:#06x}): {} pixels written",
        src_rect,
        dest_rect,
        mask,
        written
    );
    written
}

/// Offsets along one axis at which both the source and destination coordinate
/// land on their surfaces, as a half-open range. Every other offset would be
/// skipped pixel by pixel, so iterating only this range copies the same pixels.
fn visible_span(
    extent: i32,
    src_origin: i32,
    src_len: usize,
    dest_origin: i32,
    dest_len: usize,
) -> Option<(usize, usize)> {
    let (src_origin, dest_origin) = (i64::from(src_origin), i64::from(dest_origin));
    let start = 0i64.max(-src_origin).max(-dest_origin);
    let end = i64::from(extent)
        .min(src_len as i64 - src_origin)
        .min(dest_len as i64 - dest_origin);
    if start >= end {
        return None;
    }
    Some((start as usize, end as usize))
}

fn copy_region(
    dest: &mut Surface,
    src: &Surface,
    dest_rect: &Rect,
    src_rect: &Rect,
    mask: Option<u16>,
) -> usize {
    let Some((y0, y1)) = visible_span(
        src_rect.h,
        src_rect.y,
        src.height(),
        dest_rect.y,
        dest.height(),
    ) else {
        return 0;
    };
    let Some((x0, x1)) = visible_span(
        src_rect.w,
        src_rect.x,
        src.width(),
        dest_rect.x,
        dest.width(),
    ) else {
        return 0;
    };

    // Inside the span every offset maps to a valid coordinate on both surfaces.
    let src_x = (i64::from(src_rect.x) + x0 as i64) as usize;
    let dest_x = (i64::from(dest_rect.x) + x0 as i64) as usize;
    let run = x1 - x0;
    let (src_width, dest_width) = (src.width(), dest.width());
    let mut written = 0;

    for y in y0..y1 {
        let src_y = (i64::from(src_rect.y) + y as i64) as usize;
        let dest_y = (i64::from(dest_rect.y) + y as i64) as usize;
        let src_row = &src.pixels()[src_y * src_width + src_x..][..run];
        let dest_row = &mut dest.pixels_mut()[dest_y * dest_width + dest_x..][..run];

        match mask {
            None => {
                dest_row.copy_from_slice(src_row);
                written += run;
            }
            Some(key) => {
                for (d, &s) in dest_row.iter_mut().zip(src_row) {
                    if s != key {
                        *d = s;
                        written += 1;
                    }
                }
            }
        }
    }

    written
}
