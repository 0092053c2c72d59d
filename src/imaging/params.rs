//! Parameter types for icon rendering.
//!
//! These structs describe *what* to render, not *how*. They are the interface
//! between [`materialize`](crate::materialize) (which decides which densities
//! to produce) and the [`backend`](super::backend) (which does the pixel work
//! and encoding). Keeping them plain data lets tests swap in a mock backend.
//!
//! ## Types
//!
//! - [`Resample`]: user-facing resampling filter name, mapped to `image`'s `FilterType`.
//! - [`LeafColor`]: RGBA fill for the procedural leaf emblem.
//! - [`IconSource`]: where the pixels of every density come from.
//! - [`RenderParams`]: one source rendered at one edge length.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resampling filter used when shrinking a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resample {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl Resample {
    pub fn filter_type(self) -> FilterType {
        match self {
            Resample::Nearest => FilterType::Nearest,
            Resample::Triangle => FilterType::Triangle,
            Resample::CatmullRom => FilterType::CatmullRom,
            Resample::Gaussian => FilterType::Gaussian,
            Resample::Lanczos3 => FilterType::Lanczos3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Resample::Nearest => "nearest",
            Resample::Triangle => "triangle",
            Resample::CatmullRom => "catmullrom",
            Resample::Gaussian => "gaussian",
            Resample::Lanczos3 => "lanczos3",
        }
    }
}

impl fmt::Display for Resample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Resample::Nearest,
            Resample::Triangle,
            Resample::CatmullRom,
            Resample::Gaussian,
            Resample::Lanczos3,
        ]
        .into_iter()
        .find(|r| r.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| {
            format!("unknown filter '{s}' (expected nearest, triangle, catmullrom, gaussian or lanczos3)")
        })
    }
}

/// RGBA fill color for the leaf emblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafColor(pub [u8; 4]);

impl LeafColor {
    pub fn rgba(self) -> [u8; 4] {
        self.0
    }
}

impl Default for LeafColor {
    /// `#2ECC40`, fully opaque.
    fn default() -> Self {
        Self([46, 204, 64, 255])
    }
}

impl FromStr for LeafColor {
    type Err = String;

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{s}' (expected RRGGBB or RRGGBBAA)"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?, alpha]))
    }
}

/// Where the pixels of every density come from.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSource {
    /// Embedded placeholder PNG, scaled up to each density.
    Placeholder,
    /// Procedurally drawn leaf emblem on a transparent canvas.
    Leaf { color: LeafColor },
    /// Logo stretched to exactly `size × size`.
    Resize { path: PathBuf, filter: Resample },
    /// Logo stretched to `size × size`, then composited onto a transparent canvas.
    Fit { path: PathBuf, filter: Resample },
    /// Logo bytes written unchanged at every density.
    Copy { path: PathBuf },
}

impl IconSource {
    /// Path of the logo file, for sources that read one.
    pub fn logo_path(&self) -> Option<&Path> {
        match self {
            IconSource::Resize { path, .. }
            | IconSource::Fit { path, .. }
            | IconSource::Copy { path } => Some(path),
            IconSource::Placeholder | IconSource::Leaf { .. } => None,
        }
    }
}

/// Parameters for rendering one density.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub source: IconSource,
    /// Target edge length in pixels. Ignored by [`IconSource::Copy`].
    pub size: u32,
}
