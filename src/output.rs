//! CLI output formatting.
//!
//! Every written file gets a `Created <path>` line as it lands, followed by a
//! short completion message for the command that ran:
//!
//! ```text
//! Created android/app/src/main/res/mipmap-mdpi/ic_launcher.png
//! Created android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png
//! ...
//! Created android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png
//!
//! App icons created from logo.png!
//! Wrote 10 files across 5 densities
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::imaging::{Dimensions, IconSource};
use crate::materialize::{IconEvent, MaterializeResult};
use std::path::Path;

/// Format a single progress event.
pub fn format_icon_event(event: &IconEvent) -> Vec<String> {
    match event {
        IconEvent::SourceIdentified { path, dimensions } => {
            let mut lines = vec![format!(
                "Source: {} ({}x{})",
                path.display(),
                dimensions.width,
                dimensions.height
            )];
            lines.extend(format_source_note(*dimensions));
            lines
        }
        IconEvent::Written { path, .. } => vec![format!("Created {}", path.display())],
    }
}

pub fn print_icon_event(event: &IconEvent) {
    for line in format_icon_event(event) {
        println!("{}", line);
    }
}

/// Warn when a logo will be stretched to a square.
pub fn format_source_note(dimensions: Dimensions) -> Vec<String> {
    if dimensions.is_square() {
        Vec::new()
    } else {
        vec![format!(
            "Note: source is {}x{}, icons will be stretched to square",
            dimensions.width, dimensions.height
        )]
    }
}

fn logo_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Completion message for a finished run.
pub fn format_summary(source: &IconSource, result: &MaterializeResult) -> Vec<String> {
    let mut lines = vec![String::new()];
    match source {
        IconSource::Placeholder => {
            lines.push("Android icons created successfully!".to_string());
            lines.push(String::new());
            lines.push(
                "Note: These are placeholder icons. Run `mipmap-gen resize` once a logo exists."
                    .to_string(),
            );
        }
        IconSource::Leaf { .. } => {
            lines.push("Leaf icons generated successfully!".to_string());
        }
        IconSource::Resize { path, .. } => {
            lines.push(format!("App icons created from {}!", logo_name(path)));
        }
        IconSource::Fit { .. } => {
            lines.push("App icons fixed!".to_string());
        }
        IconSource::Copy { path } => {
            lines.push(format!("App icons created from {}!", logo_name(path)));
            lines.push(
                "Note: Files are copied unchanged. Use `mipmap-gen resize` for per-density sizes."
                    .to_string(),
            );
        }
    }
    let densities = result.density_count();
    lines.push(format!(
        "Wrote {} files across {} {}",
        result.written.len(),
        densities,
        if densities == 1 { "density" } else { "densities" }
    ));
    lines
}

pub fn print_summary(source: &IconSource, result: &MaterializeResult) {
    for line in format_summary(source, result) {
        println!("{}", line);
    }
}

/// Message for a `copy` run whose logo does not exist.
pub fn format_missing_source(path: &Path) -> String {
    format!("Error: {} not found!", path.display())
}

pub fn print_missing_source(path: &Path) {
    println!("{}", format_missing_source(path));
}
