//! Pure Rust icon backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode logo (JPEG, PNG, TIFF, WebP) | `image::ImageReader` |
//! | Placeholder blob | `base64` + `image::load_from_memory` |
//! | Resize | `image::imageops::resize` (exact `size × size`, filter from config) |
//! | Transparent composite | `image::imageops::overlay` |
//! | Leaf emblem | `tiny-skia` path fill + strokes |
//! | Encode → PNG | `image::codecs::png::PngEncoder` / `Pixmap::encode_png` |

use super::backend::{BackendError, Dimensions, IconBackend};
use super::leaf::{LeafGeometry, Point};
use super::params::{IconSource, LeafColor, RenderParams, Resample};
use super::placeholder::placeholder_png;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Backend using the `image` and `tiny-skia` crates.
///
/// The most recently decoded logo is kept in memory, so resizing one logo to
/// every density decodes it once. Changes to the file on disk are not seen by
/// a backend that has already decoded it.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    logo: Mutex<Option<(PathBuf, Arc<RgbaImage>)>>,
}

impl RustBackend {
    pub fn new() -> Self {
        Self {
            logo: Mutex::new(None),
        }
    }

    /// Decoded RGBA pixels of `path`, reusing the last decode of the same file.
    fn decoded_logo(&self, path: &Path) -> Result<Arc<RgbaImage>, BackendError> {
        let mut cached = self
            .logo
            .lock()
            .map_err(|_| BackendError::ProcessingFailed("Logo cache poisoned".into()))?;
        if let Some((_, img)) = cached.as_ref().filter(|(cached_path, _)| cached_path == path) {
            return Ok(Arc::clone(img));
        }
        let img = Arc::new(load_image(path)?.to_rgba8());
        *cached = Some((path.to_path_buf(), Arc::clone(&img)));
        Ok(img)
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode an RGBA buffer as PNG in memory.
fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))?;
    Ok(buf)
}

fn render_placeholder(size: u32) -> Result<Vec<u8>, BackendError> {
    let blob = placeholder_png()?;
    let img = image::load_from_memory(&blob)
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode placeholder: {}", e))
        })?
        .to_rgba8();
    encode_png(&image::imageops::resize(
        &img,
        size,
        size,
        FilterType::Nearest,
    ))
}

fn render_resize(logo: &RgbaImage, size: u32, filter: Resample) -> RgbaImage {
    image::imageops::resize(logo, size, size, filter.filter_type())
}

fn render_fit(logo: &RgbaImage, size: u32, filter: Resample) -> RgbaImage {
    let resized = render_resize(logo, size, filter);
    let mut canvas = RgbaImage::new(size, size);
    image::imageops::overlay(&mut canvas, &resized, 0, 0);
    canvas
}

fn render_leaf(size: u32, color: LeafColor) -> Result<Vec<u8>, BackendError> {
    use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| {
        BackendError::ProcessingFailed(format!("Cannot allocate {size}x{size} canvas"))
    })?;

    let [r, g, b, a] = color.rgba();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    // Veins replace the body pixels rather than blending over them, so a
    // translucent color stays uniform across the whole emblem.
    paint.blend_mode = BlendMode::Source;

    let geometry = LeafGeometry::for_size(size);

    let outline = polygon_path(&geometry.outline)
        .ok_or_else(|| BackendError::ProcessingFailed("Degenerate leaf outline".into()))?;
    pixmap.fill_path(
        &outline,
        &paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    for vein in &geometry.veins {
        let mut pb = PathBuilder::new();
        pb.move_to(vein.from.x, vein.from.y);
        pb.line_to(vein.to.x, vein.to.y);
        let Some(line) = pb.finish() else {
            continue;
        };
        let stroke = Stroke {
            width: vein.width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&line, &paint, &stroke, Transform::identity(), None);
    }

    pixmap
        .encode_png()
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

fn polygon_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

impl IconBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                other
            )),
        })?;
        Ok(Dimensions { width, height })
    }

    fn render(&self, params: &RenderParams) -> Result<Vec<u8>, BackendError> {
        let size = params.size;
        match &params.source {
            IconSource::Placeholder => render_placeholder(size),
            IconSource::Leaf { color } => render_leaf(size, *color),
            IconSource::Resize { path, filter } => {
                encode_png(&render_resize(&*self.decoded_logo(path)?, size, *filter))
            }
            IconSource::Fit { path, filter } => {
                encode_png(&render_fit(&*self.decoded_logo(path)?, size, *filter))
            }
            IconSource::Copy { path } => Ok(std::fs::read(path)?),
        }
    }
}
