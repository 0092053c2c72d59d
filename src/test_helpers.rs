//! Shared test utilities for the mipmap-gen test suite.
//!
//! Provides synthetic logo creation, PNG decoding, and assertions over a
//! written mipmap tree.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_test_logo(&tmp.path().join("logo.png"), 512, 512);
//! // ... materialize into tmp.path() ...
//! assert_icon_tree(tmp.path(), &Density::ALL);
//! ```

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::density::{Density, IconVariant, icon_path};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a gradient RGBA PNG with a transparent top-left quadrant.
pub fn write_test_logo(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 2 && y < height / 2 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    img.save(path).unwrap();
}

/// Decode PNG bytes into an RGBA buffer. Panics on invalid data.
pub fn decode_png(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap_or_else(|e| panic!("not a valid PNG: {e}"))
        .to_rgba8()
}

// =========================================================================
// Tree inspection
// =========================================================================

/// All files under `root`, as sorted `/`-separated relative paths.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files);
    files.sort();
    files
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let rel = path.strip_prefix(root).unwrap();
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            files.push(parts.join("/"));
        }
    }
}

/// Assert every density has both variants, byte-identical, at the exact size.
pub fn assert_icon_tree(res_dir: &Path, densities: &[Density]) {
    for &density in densities {
        let standard_path = icon_path(res_dir, density, IconVariant::Standard);
        let round_path = icon_path(res_dir, density, IconVariant::Round);
        let standard = std::fs::read(&standard_path)
            .unwrap_or_else(|e| panic!("missing {}: {e}", standard_path.display()));
        let round = std::fs::read(&round_path)
            .unwrap_or_else(|e| panic!("missing {}: {e}", round_path.display()));

        assert_eq!(standard, round, "variants differ for {density}");
        let size = density.size();
        assert_eq!(
            decode_png(&standard).dimensions(),
            (size, size),
            "wrong dimensions for {density}"
        );
    }
}
