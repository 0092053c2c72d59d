//! Icon rendering backend trait and shared types.
//!
//! The [`IconBackend`] trait defines the two operations every backend must
//! support: identify a logo, and render one density to encoded bytes.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend). Writing files is left to
//! [`materialize`](crate::materialize), so a backend never touches the
//! resource directory.

use super::params::RenderParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// Trait for icon rendering backends.
pub trait IconBackend {
    /// Get image dimensions without rendering.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Produce the encoded file contents for one density.
    fn render(&self, params: &RenderParams) -> Result<Vec<u8>, BackendError>;
}
