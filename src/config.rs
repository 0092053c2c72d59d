//! Project configuration module.
//!
//! Handles loading and validating an optional `mipmap.toml` in the project
//! root. Every setting has a stock default, so a project without the file gets
//! the standard Android layout and the five standard densities.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! res_dir = "android/app/src/main/res"   # Android resource directory
//! logo = "assets/logo.png"               # Source logo for resize/fit/copy
//! densities = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]
//!
//! [resize]
//! filter = "lanczos3"     # nearest | triangle | catmullrom | gaussian | lanczos3
//!
//! [leaf]
//! color = [46, 204, 64, 255]  # RGBA fill of the leaf emblem
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! logo = "branding/icon-1024.png"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command-line flags take
//! precedence over anything set here.

use crate::density::{DEFAULT_RES_DIR, Density};
use crate::imaging::{LeafColor, Resample};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "mipmap.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `mipmap.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Android resource directory, relative to the project root.
    pub res_dir: PathBuf,
    /// Source logo for the resize, fit and copy commands.
    pub logo: PathBuf,
    /// Densities to produce, in order.
    pub densities: Vec<Density>,
    pub resize: ResizeConfig,
    pub leaf: LeafConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            logo: PathBuf::from("assets/logo.png"),
            densities: Density::ALL.to_vec(),
            resize: ResizeConfig::default(),
            leaf: LeafConfig::default(),
        }
    }
}

impl IconConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.densities.is_empty() {
            return Err(ConfigError::Validation(
                "densities must not be empty".into(),
            ));
        }
        for (i, density) in self.densities.iter().enumerate() {
            if self.densities[..i].contains(density) {
                return Err(ConfigError::Validation(format!(
                    "density '{density}' listed more than once"
                )));
            }
        }
        Ok(())
    }
}

/// Logo resizing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub filter: Resample,
}

/// Leaf emblem settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeafConfig {
    pub color: LeafColor,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(IconConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `mipmap.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IconConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IconConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `mipmap.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<IconConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `mipmap.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mipmap-gen Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Android resource directory, relative to the project root.
res_dir = "android/app/src/main/res"

# Source logo used by `resize`, `fit` and `copy`.
logo = "assets/logo.png"

# Densities to produce. Sizes are fixed per density:
#   mdpi 48, hdpi 72, xhdpi 96, xxhdpi 144, xxxhdpi 192
densities = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]

# ---------------------------------------------------------------------------
# Logo resizing (resize, fit)
# ---------------------------------------------------------------------------
[resize]
# Resampling filter: nearest, triangle, catmullrom, gaussian, lanczos3.
filter = "lanczos3"

# ---------------------------------------------------------------------------
# Leaf emblem (leaf)
# ---------------------------------------------------------------------------
[leaf]
# Fill color as [red, green, blue, alpha].
color = [46, 204, 64, 255]
"##
}
