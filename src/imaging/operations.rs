//! High-level image operations.
//!
//! These functions combine the density table with backend execution. They
//! decide what to render for each density and hand the backend a fully
//! specified [`RenderParams`].

use super::backend::{BackendError, Dimensions, IconBackend};
use super::params::{IconSource, RenderParams};
use crate::density::Density;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get logo dimensions using the backend.
pub fn get_dimensions(backend: &impl IconBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Plan a render for one density without executing it.
pub fn plan_render(source: &IconSource, density: Density) -> RenderParams {
    RenderParams {
        source: source.clone(),
        size: density.size(),
    }
}

/// One density rendered to its encoded file contents.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub density: Density,
    pub bytes: Vec<u8>,
}

/// Render the icon for one density.
pub fn render_density(
    backend: &impl IconBackend,
    source: &IconSource,
    density: Density,
) -> Result<RenderedIcon> {
    let bytes = backend.render(&plan_render(source, density))?;
    Ok(RenderedIcon { density, bytes })
}
