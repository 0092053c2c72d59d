//! Android density buckets and the launcher-icon file layout.
//!
//! Every icon lands at a fixed location under the project's resource
//! directory:
//!
//! ```text
//! android/app/src/main/res/
//! ├── mipmap-mdpi/      48×48
//! │   ├── ic_launcher.png
//! │   └── ic_launcher_round.png
//! ├── mipmap-hdpi/      72×72
//! ├── mipmap-xhdpi/     96×96
//! ├── mipmap-xxhdpi/    144×144
//! └── mipmap-xxxhdpi/   192×192
//! ```
//!
//! The round variant is never visually distinct: both files always receive
//! the same bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Resource directory used when neither the CLI nor `mipmap.toml` names one.
pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

/// An Android display-density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All densities, smallest first.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon edge length in pixels.
    pub fn size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    pub fn mipmap_dir_name(self) -> String {
        format!("mipmap-{}", self.label())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown density '{0}' (expected one of mdpi, hdpi, xhdpi, xxhdpi, xxxhdpi)")]
pub struct UnknownDensity(pub String);

impl FromStr for Density {
    type Err = UnknownDensity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownDensity(s.to_string()))
    }
}

/// The two launcher icon files written per density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Standard,
    Round,
}

impl IconVariant {
    pub const ALL: [IconVariant; 2] = [IconVariant::Standard, IconVariant::Round];

    pub fn file_name(self) -> &'static str {
        match self {
            IconVariant::Standard => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
        }
    }
}

/// `<res_dir>/mipmap-<density>`
pub fn mipmap_dir(res_dir: &Path, density: Density) -> PathBuf {
    res_dir.join(density.mipmap_dir_name())
}

/// `<res_dir>/mipmap-<density>/<variant file>`
pub fn icon_path(res_dir: &Path, density: Density, variant: IconVariant) -> PathBuf {
    mipmap_dir(res_dir, density).join(variant.file_name())
}
