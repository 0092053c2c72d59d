//! Embedded placeholder icon.
//!
//! A single semi-transparent green pixel, stored as base64 so the binary can
//! produce a complete icon set before a real logo exists. The backend scales
//! it up with nearest-neighbour sampling, giving a flat square at every density.

use super::backend::BackendError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// 1×1 RGBA PNG, pixel `(0, 255, 0, 127)`.
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Decode the embedded placeholder into PNG bytes.
pub fn placeholder_png() -> Result<Vec<u8>, BackendError> {
    STANDARD
        .decode(PLACEHOLDER_PNG_BASE64)
        .map_err(|e| BackendError::ProcessingFailed(format!("Invalid placeholder blob: {e}")))
}
