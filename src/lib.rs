//! Fit app icon artwork onto a fixed packaging canvas.
//!
//! Trims an icon to its visible (non-transparent) content, scales that
//! content to fit an 832×832 square without distorting it, and centers it
//! on a transparent 1024×1024 canvas.
//!
//! # Modules
//!
//! - [`placement`] — Fit-and-center geometry. Pure, `no_std` compatible
//! - [`bounds`] — Alpha bounding-box detection over raw RGBA8 buffers
//! - `icon` — Decode, render and save via the `image` crate (`std` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod bounds;
#[cfg(feature = "std")]
pub mod icon;
pub mod placement;

/// Icon rewritten when no path is given.
pub const DEFAULT_ICON_PATH: &str = "public/icon.png";

pub use bounds::content_bounds;
#[cfg(feature = "std")]
pub use icon::{FitIcon, Fitted, IconError, fit_icon_in_place};
pub use placement::{
    ICON_CANVAS_SIZE, ICON_CONTENT_SIZE, Placement, PlacementError, Rect, Size,
    compute_placement,
};
