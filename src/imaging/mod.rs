//! Icon rendering in pure Rust, no system image tools.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize / Fit** | `imageops::resize` + `imageops::overlay` |
//! | **Leaf emblem** | `tiny-skia` fill + stroke |
//! | **Placeholder** | `base64` blob, nearest-neighbour upscale |
//!
//! The module is split into:
//! - **Leaf**: Pure geometry for the procedural emblem (unit testable)
//! - **Parameters**: Data structures describing what to render
//! - **Backend**: [`IconBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining the density table + backend

pub mod backend;
pub mod leaf;
pub mod operations;
mod params;
mod placeholder;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, IconBackend};
pub use operations::{RenderedIcon, get_dimensions, plan_render, render_density};
pub use params::{IconSource, LeafColor, RenderParams, Resample};
pub use placeholder::{PLACEHOLDER_PNG_BASE64, placeholder_png};
pub use rust_backend::RustBackend;
