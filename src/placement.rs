//! Fit-and-center placement for icon content.
//!
//! Computes where scaled content lands on a fixed square canvas. Pure
//! geometry: no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use iconfit::{Size, compute_placement};
//!
//! let placement = compute_placement(800, 400, 832, 1024).unwrap();
//!
//! // Longer side clamped to 832, shorter side scaled by the same ratio,
//! // then centered on the 1024×1024 canvas.
//! assert_eq!(placement.resize_to, Size::new(832, 416));
//! assert_eq!(placement.offset, (96, 304));
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Side length of the packaging canvas in pixels.
pub const ICON_CANVAS_SIZE: u32 = 1024;

/// Side length of the square the artwork is fitted into.
///
/// Leaves roughly 10% padding on each side of the canvas.
pub const ICON_CONTENT_SIZE: u32 = 832;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square size with both sides equal to `side`.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from `(left, top, right, bottom)` edges.
    ///
    /// `right` and `bottom` are exclusive. Returns `None` for an empty
    /// or inverted rectangle.
    pub fn from_edges(left: u32, top: u32, right: u32, bottom: u32) -> Option<Self> {
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(left, top, right - left, bottom - top))
    }

    /// The `(left, top, right, bottom)` edges, right/bottom exclusive.
    ///
    /// Edges past `u32::MAX` saturate.
    pub fn edges(&self) -> (u32, u32, u32, u32) {
        (
            self.x,
            self.y,
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    /// Dimensions of the rect.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

/// Where scaled content sits on the output canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Dimensions to resize the content to.
    pub resize_to: Size,
    /// Top-left offset of the resized content on the canvas.
    pub offset: (u32, u32),
    /// Canvas dimensions the offset is relative to.
    pub canvas: Size,
}

impl Placement {
    /// Placement for content of the given size using the fixed icon
    /// geometry ([`ICON_CONTENT_SIZE`] within [`ICON_CANVAS_SIZE`]).
    pub fn for_icon(content: Size) -> Result<Self, PlacementError> {
        compute_placement(
            content.width,
            content.height,
            ICON_CONTENT_SIZE,
            ICON_CANVAS_SIZE,
        )
    }

    /// Destination rectangle of the content on the canvas.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.offset.0,
            self.offset.1,
            self.resize_to.width,
            self.resize_to.height,
        )
    }

    /// Whether resampling is needed to go from `content` to `resize_to`.
    pub fn needs_resize(&self, content: Size) -> bool {
        self.resize_to != content
    }

    /// Whether any transparent margin surrounds the content.
    pub fn needs_padding(&self) -> bool {
        self.canvas != self.resize_to
    }
}

/// Placement computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Content has zero width or height.
    #[error("content has zero width or height")]
    ZeroContentDimension,
    /// Target size is zero.
    #[error("target size must be positive")]
    ZeroTargetSize,
    /// Target square does not fit on the canvas.
    #[error("target size {target} exceeds canvas size {canvas}")]
    TargetExceedsCanvas { target: u32, canvas: u32 },
}

/// Scale content to fit a `target_size` square, preserving aspect ratio,
/// and center it on a `canvas_size` square.
///
/// The longer side becomes exactly `target_size`; square content takes
/// the height-constrained branch and ends up `target_size` on both sides.
/// When the leftover space is odd, the extra pixel goes to the right or
/// bottom margin.
pub fn compute_placement(
    content_width: u32,
    content_height: u32,
    target_size: u32,
    canvas_size: u32,
) -> Result<Placement, PlacementError> {
    if content_width == 0 || content_height == 0 {
        return Err(PlacementError::ZeroContentDimension);
    }
    if target_size == 0 {
        return Err(PlacementError::ZeroTargetSize);
    }
    if target_size > canvas_size {
        return Err(PlacementError::TargetExceedsCanvas {
            target: target_size,
            canvas: canvas_size,
        });
    }

    let (new_w, new_h) = fit_square(content_width, content_height, target_size);
    let offset = (
        center_offset(canvas_size, new_w),
        center_offset(canvas_size, new_h),
    );
    Ok(Placement {
        resize_to: Size::new(new_w, new_h),
        offset,
        canvas: Size::square(canvas_size),
    })
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Clamp the longer side to `target` and scale the other proportionally.
/// Never returns a zero dimension.
fn fit_square(sw: u32, sh: u32, target: u32) -> (u32, u32) {
    let aspect = sw as f64 / sh as f64;
    if sw > sh {
        (target, scaled(target as f64 / aspect))
    } else {
        (scaled(target as f64 * aspect), target)
    }
}

fn scaled(v: f64) -> u32 {
    let v = v.round() as u32;
    if v == 0 { 1 } else { v }
}

fn center_offset(space: u32, extent: u32) -> u32 {
    space.saturating_sub(extent) / 2
}
