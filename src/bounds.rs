//! Alpha bounding-box detection over raw RGBA8 pixels.

use crate::placement::Rect;

const CHANNELS: usize = 4;

/// Smallest rectangle containing every pixel with non-zero alpha.
///
/// `pixels` is a tightly packed RGBA8 buffer, row-major, `width * height * 4`
/// bytes long. Returns `None` when the image is fully transparent, has a
/// zero dimension, or the buffer length doesn't match the dimensions.
pub fn content_bounds(pixels: &[u8], width: u32, height: u32) -> Option<Rect> {
    let row_len = width as usize * CHANNELS;
    if row_len == 0 || height == 0 || pixels.len() != row_len * height as usize {
        return None;
    }

    let mut left = u32::MAX;
    let mut right = 0;
    let mut top = None;
    let mut bottom = 0;
    for (y, row) in pixels.chunks_exact(row_len).enumerate() {
        let Some(first) = row.chunks_exact(CHANNELS).position(is_visible) else {
            continue;
        };
        let last = row
            .chunks_exact(CHANNELS)
            .rposition(is_visible)
            .unwrap_or(first);
        let y = y as u32;
        top.get_or_insert(y);
        bottom = y + 1;
        left = left.min(first as u32);
        right = right.max(last as u32 + 1);
    }

    Rect::from_edges(left, top?, right, bottom)
}

fn is_visible(px: &[u8]) -> bool {
    px[3] != 0
}
