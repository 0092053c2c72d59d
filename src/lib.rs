//! # mipmap-gen
//!
//! Populates the `mipmap-*` launcher-icon directories of an Android project
//! at every standard density.
//!
//! # Architecture: One Routine, Five Sources
//!
//! Every command runs the same linear batch job:
//!
//! ```text
//! 1. Resolve   mipmap.toml + flags  →  IconConfig, IconSource
//! 2. Render    IconSource × density →  PNG bytes           (imaging)
//! 3. Write     PNG bytes            →  ic_launcher.png + ic_launcher_round.png
//! ```
//!
//! Only the source of the pixels differs between commands:
//!
//! | Command | Source |
//! |---------|--------|
//! | `placeholder` | embedded 1×1 PNG, scaled up |
//! | `leaf` | procedurally drawn leaf emblem |
//! | `resize` | logo stretched to each density |
//! | `fit` | logo stretched and composited on a transparent canvas |
//! | `copy` | logo bytes, unchanged |
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`density`] | Density table (mdpi 48 … xxxhdpi 192) and icon file layout |
//! | [`imaging`] | Rendering backend: decode, resize, composite, draw, encode |
//! | [`materialize`] | The shared write loop, its errors and progress events |
//! | [`config`] | Optional `mipmap.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Render Once, Write Twice
//!
//! The round icon is never visually distinct, so each density is rendered a
//! single time and the same bytes go to both files. The two variants are
//! byte-identical by construction.
//!
//! ## Preflight Before Writing
//!
//! Sources that read a logo are checked before the resource directory is
//! touched, and each density is rendered before its directory is created. A
//! missing or undecodable logo never leaves a half-written tree behind.
//! Failures after the first density lands are not rolled back.

pub mod config;
pub mod density;
pub mod imaging;
pub mod materialize;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
