//! Load, fit and save icon images.
//!
//! Glue between [`crate::bounds`], [`crate::placement`] and the `image`
//! crate: decode to RGBA8, crop to the visible content, resample it into the
//! icon square and composite it onto a transparent canvas.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, Rgba, RgbaImage};
use log::{debug, info};

use crate::bounds::content_bounds;
use crate::placement::{Placement, PlacementError, Rect, Size};

/// Errors from the icon pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The icon path does not exist.
    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),
    /// No pixel has non-zero alpha.
    #[error("image is empty or fully transparent")]
    EmptyContent,
    /// Content geometry rejected by the placement math.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// Decode or encode failure.
    #[error(transparent)]
    Image(#[from] image::ImageError),
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A decoded icon, ready to be fitted onto the packaging canvas.
pub struct FitIcon {
    img: RgbaImage,
    format: Option<ImageFormat>,
}

impl FitIcon {
    /// Decode the image at `path`, sniffing the format from its contents.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IconError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IconError::MissingFile(path.to_path_buf()));
        }
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let img = reader.decode()?.to_rgba8();
        debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            format
        );
        Ok(Self { img, format })
    }

    /// Wrap an already decoded image. No source format is known.
    pub fn from_image(img: RgbaImage) -> Self {
        Self { img, format: None }
    }

    /// Format sniffed from the file contents, if opened from disk.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Source dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.img.width(), self.img.height())
    }

    /// Bounding box of the visible content, `None` if fully transparent.
    pub fn content_bounds(&self) -> Option<Rect> {
        content_bounds(self.img.as_raw(), self.img.width(), self.img.height())
    }

    /// Where the content will land on the canvas.
    pub fn placement(&self) -> Result<Placement, IconError> {
        self.layout().map(|(_, placement)| placement)
    }

    /// Compose the fitted canvas in memory. Nothing is written.
    pub fn render(&self) -> Result<Fitted, IconError> {
        let (bounds, placement) = self.layout()?;
        let Size { width, height } = placement.resize_to;

        let cropped =
            imageops::crop_imm(&self.img, bounds.x, bounds.y, bounds.width, bounds.height)
                .to_image();
        let content = if placement.needs_resize(bounds.size()) {
            imageops::resize(&cropped, width, height, FilterType::Lanczos3)
        } else {
            cropped
        };

        let mut canvas = RgbaImage::from_pixel(
            placement.canvas.width,
            placement.canvas.height,
            Rgba([0, 0, 0, 0]),
        );
        let (x, y) = placement.offset;
        imageops::overlay(&mut canvas, &content, i64::from(x), i64::from(y));

        Ok(Fitted {
            canvas,
            bounds,
            placement,
            format: self.format,
        })
    }

    fn layout(&self) -> Result<(Rect, Placement), IconError> {
        let bounds = self.content_bounds().ok_or(IconError::EmptyContent)?;
        let placement = Placement::for_icon(bounds.size())?;
        debug!(
            "content {:?} -> {}x{} at {:?}",
            bounds, placement.resize_to.width, placement.resize_to.height, placement.offset
        );
        Ok((bounds, placement))
    }
}

/// A composed icon canvas.
pub struct Fitted {
    canvas: RgbaImage,
    bounds: Rect,
    placement: Placement,
    format: Option<ImageFormat>,
}

impl Fitted {
    /// The composed canvas.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Content bounding box in the source image.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Where the content was drawn on the canvas.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Format the canvas is saved in: the source's format when it was
    /// decoded from disk, else the one named by `path`'s extension, else PNG.
    pub fn output_format(&self, path: &Path) -> ImageFormat {
        self.format
            .or_else(|| ImageFormat::from_path(path).ok())
            .unwrap_or(ImageFormat::Png)
    }

    /// Encode the canvas and write it to `path`.
    ///
    /// Encoding happens in memory first; an unsupported format leaves
    /// `path` untouched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IconError> {
        let path = path.as_ref();
        let format = self.output_format(path);
        let mut buf = Cursor::new(Vec::new());
        self.canvas.write_to(&mut buf, format)?;
        fs::write(path, buf.into_inner())?;
        info!("wrote {} ({:?})", path.display(), format);
        Ok(())
    }

    /// Take the composed canvas.
    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }
}

/// Fit the icon at `path` onto the packaging canvas and overwrite it.
///
/// The file is only replaced once the new canvas is fully composed, so any
/// failure before the final write leaves it untouched.
pub fn fit_icon_in_place<P: AsRef<Path>>(path: P) -> Result<Fitted, IconError> {
    let path = path.as_ref();
    let fitted = FitIcon::open(path)?.render()?;
    fitted.save(path)?;
    Ok(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_with_block(w: u32, h: u32, block: Rect) -> FitIcon {
        let mut img = RgbaImage::new(w, h);
        for y in block.y..block.y + block.height {
            for x in block.x..block.x + block.width {
                img.put_pixel(x, y, Rgba([200, 40, 40, 255]));
            }
        }
        FitIcon::from_image(img)
    }

    #[test]
    fn transparent_icon_is_empty() {
        let icon = FitIcon::from_image(RgbaImage::new(64, 64));
        assert!(matches!(icon.placement(), Err(IconError::EmptyContent)));
        assert!(matches!(icon.render(), Err(IconError::EmptyContent)));
    }

    #[test]
    fn placement_uses_content_not_source() {
        let icon = icon_with_block(300, 300, Rect::new(50, 100, 200, 100));
        assert_eq!(icon.size(), Size::new(300, 300));
        assert_eq!(icon.content_bounds(), Some(Rect::new(50, 100, 200, 100)));
        let p = icon.placement().unwrap();
        assert_eq!(p.resize_to, Size::new(832, 416));
        assert_eq!(p.offset, (96, 304));
    }

    #[test]
    fn render_centers_content() {
        let icon = icon_with_block(40, 80, Rect::new(10, 0, 20, 40));
        let fitted = icon.render().unwrap();
        let canvas = fitted.canvas();
        assert_eq!(canvas.dimensions(), (1024, 1024));

        let expected = Rect::new(304, 96, 416, 832);
        assert_eq!(fitted.placement().content_rect(), expected);
        assert_eq!(
            content_bounds(canvas.as_raw(), 1024, 1024),
            Some(expected)
        );
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(1023, 1023)[3], 0);
        assert!(canvas.get_pixel(512, 512)[3] > 250);
    }

    #[test]
    fn render_skips_resample_at_target_size() {
        let icon = icon_with_block(900, 900, Rect::new(30, 30, 832, 832));
        let fitted = icon.render().unwrap();
        assert!(!fitted.placement().needs_resize(fitted.bounds().size()));
        let corner = fitted.canvas().get_pixel(96, 96);
        assert!(corner[3] > 250 && corner[0] > 190 && corner[1] < 50);
        assert_eq!(fitted.canvas().get_pixel(95, 96)[3], 0);
    }

    // ── output format ───────────────────────────────────────────────────

    #[test]
    fn output_format_falls_back_to_extension_then_png() {
        let fitted = icon_with_block(8, 8, Rect::new(0, 0, 8, 8)).render().unwrap();
        assert_eq!(
            fitted.output_format(Path::new("icon.webp")),
            ImageFormat::WebP
        );
        assert_eq!(fitted.output_format(Path::new("icon.asset")), ImageFormat::Png);
        assert_eq!(fitted.output_format(Path::new("icon")), ImageFormat::Png);
    }

    #[test]
    fn output_format_prefers_source_format() {
        let mut icon = icon_with_block(8, 8, Rect::new(0, 0, 8, 8));
        icon.format = Some(ImageFormat::Png);
        let fitted = icon.render().unwrap();
        assert_eq!(fitted.output_format(Path::new("icon.jpg")), ImageFormat::Png);
    }
}
