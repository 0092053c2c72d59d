//! Icon materialization: render every density and write both launcher files.
//!
//! This is the one routine every subcommand shares. Given an [`IconSource`]
//! and a list of densities it:
//!
//! 1. Preflights the source (before touching the resource directory).
//! 2. For each density, renders the icon once.
//! 3. Creates `mipmap-<density>/` if absent.
//! 4. Writes the same bytes to `ic_launcher.png` and `ic_launcher_round.png`.
//!
//! ## Output Structure
//!
//! ```text
//! res/
//! ├── mipmap-mdpi/
//! │   ├── ic_launcher.png         # 48×48
//! │   └── ic_launcher_round.png   # same bytes
//! ├── ...
//! └── mipmap-xxxhdpi/
//!     ├── ic_launcher.png         # 192×192
//!     └── ic_launcher_round.png
//! ```
//!
//! ## Failure Semantics
//!
//! There are no retries and no rollback. A density's directory is only created
//! once its icon has rendered, so a logo that passes preflight but fails to
//! decode still leaves the resource directory untouched. A failure mid-run
//! leaves every file written so far in place; the events already sent still
//! describe them.
//! Re-running overwrites all outputs.

use crate::density::{Density, IconVariant, icon_path, mipmap_dir};
use crate::imaging::{BackendError, Dimensions, IconBackend, IconSource, render_density};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("No densities selected")]
    NoDensities,
}

/// Progress events emitted while icons are written.
#[derive(Debug, Clone, PartialEq)]
pub enum IconEvent {
    /// The logo was identified before rendering started.
    SourceIdentified { path: PathBuf, dimensions: Dimensions },
    /// One icon file was written.
    Written {
        density: Density,
        variant: IconVariant,
        path: PathBuf,
    },
}

/// A single file written during materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenIcon {
    pub density: Density,
    pub variant: IconVariant,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterializeResult {
    /// Logo dimensions, when the source was identified.
    pub source_dimensions: Option<Dimensions>,
    pub written: Vec<WrittenIcon>,
}

impl MaterializeResult {
    /// Number of distinct densities that received files.
    pub fn density_count(&self) -> usize {
        self.written
            .iter()
            .map(|w| w.density)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

fn emit(events: &Option<Sender<IconEvent>>, event: IconEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is listening.
        tx.send(event).ok();
    }
}

/// Check the source before any file is written.
///
/// - `Copy` only needs the file to exist.
/// - `Resize` / `Fit` must decode far enough to report dimensions.
/// - `Placeholder` / `Leaf` need nothing.
fn preflight(
    backend: &impl IconBackend,
    source: &IconSource,
) -> Result<Option<Dimensions>, MaterializeError> {
    match source {
        IconSource::Copy { path } => {
            if !path.exists() {
                return Err(MaterializeError::SourceNotFound(path.clone()));
            }
            Ok(None)
        }
        IconSource::Resize { path, .. } | IconSource::Fit { path, .. } => {
            Ok(Some(backend.identify(path)?))
        }
        IconSource::Placeholder | IconSource::Leaf { .. } => Ok(None),
    }
}

/// Render `source` for every density and write both launcher icons.
///
/// Densities are processed in the order given. Events are sent as each file
/// lands; the sender is dropped when this function returns.
pub fn materialize(
    backend: &impl IconBackend,
    source: &IconSource,
    res_dir: &Path,
    densities: &[Density],
    events: Option<Sender<IconEvent>>,
) -> Result<MaterializeResult, MaterializeError> {
    if densities.is_empty() {
        return Err(MaterializeError::NoDensities);
    }

    let source_dimensions = preflight(backend, source)?;
    if let (Some(dimensions), Some(path)) = (source_dimensions, source.logo_path()) {
        emit(
            &events,
            IconEvent::SourceIdentified {
                path: path.to_path_buf(),
                dimensions,
            },
        );
    }

    let mut written = Vec::with_capacity(densities.len() * IconVariant::ALL.len());

    for &density in densities {
        let icon = render_density(backend, source, density)?;
        std::fs::create_dir_all(mipmap_dir(res_dir, density))?;

        for variant in IconVariant::ALL {
            let path = icon_path(res_dir, density, variant);
            std::fs::write(&path, &icon.bytes)?;
            emit(
                &events,
                IconEvent::Written {
                    density,
                    variant,
                    path: path.clone(),
                },
            );
            written.push(WrittenIcon {
                density,
                variant,
                path,
            });
        }
    }

    Ok(MaterializeResult {
        source_dimensions,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::{LeafColor, Resample, RustBackend};
    use crate::test_helpers::{assert_icon_tree, list_files, write_test_logo};
    use std::sync::mpsc;
    use tempfile::TempDir;

    #[test]
    fn writes_both_variants_for_every_density() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();

        let result = materialize(
            &backend,
            &IconSource::Placeholder,
            tmp.path(),
            &Density::ALL,
            None,
        )
        .unwrap();

        assert_eq!(result.written.len(), 10);
        assert_eq!(result.density_count(), 5);
        for density in Density::ALL {
            let standard = std::fs::read(icon_path(tmp.path(), density, IconVariant::Standard));
            let round = std::fs::read(icon_path(tmp.path(), density, IconVariant::Round));
            assert_eq!(standard.unwrap(), density.size().to_string().into_bytes());
            assert_eq!(round.unwrap(), density.size().to_string().into_bytes());
        }
    }

    #[test]
    fn renders_once_per_density_in_order() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();

        materialize(
            &backend,
            &IconSource::Placeholder,
            tmp.path(),
            &Density::ALL,
            None,
        )
        .unwrap();

        let sizes: Vec<u32> = backend
            .get_operations()
            .into_iter()
            .filter_map(|op| match op {
                RecordedOp::Render { size, .. } => Some(size),
                RecordedOp::Identify(_) => None,
            })
            .collect();
        assert_eq!(sizes, vec![48, 72, 96, 144, 192]);
    }

    #[test]
    fn respects_density_subset() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();

        let result = materialize(
            &backend,
            &IconSource::Placeholder,
            tmp.path(),
            &[Density::Xxxhdpi, Density::Mdpi],
            None,
        )
        .unwrap();

        assert_eq!(result.density_count(), 2);
        assert_eq!(
            list_files(tmp.path()),
            vec![
                "mipmap-mdpi/ic_launcher.png",
                "mipmap-mdpi/ic_launcher_round.png",
                "mipmap-xxxhdpi/ic_launcher.png",
                "mipmap-xxxhdpi/ic_launcher_round.png",
            ]
        );
    }

    #[test]
    fn empty_density_list_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let result = materialize(
            &MockBackend::new(),
            &IconSource::Placeholder,
            tmp.path(),
            &[],
            None,
        );
        assert!(matches!(result, Err(MaterializeError::NoDensities)));
    }

    #[test]
    fn emits_written_events_in_order() {
        let tmp = TempDir::new().unwrap();
        let (tx, rx) = mpsc::channel();

        materialize(
            &MockBackend::new(),
            &IconSource::Placeholder,
            tmp.path(),
            &[Density::Mdpi],
            Some(tx),
        )
        .unwrap();

        let events: Vec<IconEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                IconEvent::Written {
                    density: Density::Mdpi,
                    variant: IconVariant::Standard,
                    path: tmp.path().join("mipmap-mdpi/ic_launcher.png"),
                },
                IconEvent::Written {
                    density: Density::Mdpi,
                    variant: IconVariant::Round,
                    path: tmp.path().join("mipmap-mdpi/ic_launcher_round.png"),
                },
            ]
        );
    }

    #[test]
    fn copy_with_missing_logo_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let res = tmp.path().join("res");
        let logo = tmp.path().join("assets/logo.png");
        let backend = MockBackend::new();

        let result = materialize(
            &backend,
            &IconSource::Copy { path: logo.clone() },
            &res,
            &Density::ALL,
            None,
        );

        assert!(matches!(result, Err(MaterializeError::SourceNotFound(p)) if p == logo));
        assert!(!res.exists());
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn resize_with_unidentifiable_logo_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let res = tmp.path().join("res");
        let backend = MockBackend::new();

        let result = materialize(
            &backend,
            &IconSource::Resize {
                path: tmp.path().join("logo.png"),
                filter: Resample::Lanczos3,
            },
            &res,
            &Density::ALL,
            None,
        );

        assert!(matches!(result, Err(MaterializeError::Imaging(_))));
        assert!(!res.exists());
    }

    #[test]
    fn resize_reports_source_dimensions() {
        let tmp = TempDir::new().unwrap();
        let dims = Dimensions {
            width: 640,
            height: 480,
        };
        let backend = MockBackend::with_dimensions(dims);
        let (tx, rx) = mpsc::channel();

        let result = materialize(
            &backend,
            &IconSource::Fit {
                path: "/logo.png".into(),
                filter: Resample::Lanczos3,
            },
            tmp.path(),
            &[Density::Mdpi],
            Some(tx),
        )
        .unwrap();

        assert_eq!(result.source_dimensions, Some(dims));
        assert_eq!(
            rx.iter().next(),
            Some(IconEvent::SourceIdentified {
                path: "/logo.png".into(),
                dimensions: dims,
            })
        );
    }

    #[test]
    fn mid_run_failure_keeps_earlier_files() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::failing_at(96);
        let (tx, rx) = mpsc::channel();

        let result = materialize(
            &backend,
            &IconSource::Placeholder,
            tmp.path(),
            &Density::ALL,
            Some(tx),
        );

        assert!(matches!(result, Err(MaterializeError::Imaging(_))));
        assert_eq!(rx.iter().count(), 4);
        assert!(icon_path(tmp.path(), Density::Hdpi, IconVariant::Round).exists());
        assert!(!icon_path(tmp.path(), Density::Xhdpi, IconVariant::Standard).exists());
        // No directory for a density whose render failed
        assert!(!mipmap_dir(tmp.path(), Density::Xhdpi).exists());
    }

    #[test]
    fn truncated_logo_leaves_res_dir_untouched() {
        let tmp = TempDir::new().unwrap();
        let logo = tmp.path().join("logo.png");
        write_test_logo(&logo, 256, 256);
        let bytes = std::fs::read(&logo).unwrap();
        std::fs::write(&logo, &bytes[..bytes.len() - 30]).unwrap();
        let res = tmp.path().join("res");

        // The header still reads, so only the full decode fails
        assert!(RustBackend::new().identify(&logo).is_ok());

        let result = materialize(
            &RustBackend::new(),
            &IconSource::Resize {
                path: logo,
                filter: Resample::Lanczos3,
            },
            &res,
            &Density::ALL,
            None,
        );

        assert!(matches!(result, Err(MaterializeError::Imaging(_))));
        assert!(!res.exists());
    }

    #[test]
    fn density_count_ignores_repeats() {
        let tmp = TempDir::new().unwrap();
        let result = materialize(
            &MockBackend::new(),
            &IconSource::Placeholder,
            tmp.path(),
            &[Density::Mdpi, Density::Hdpi, Density::Mdpi],
            None,
        )
        .unwrap();

        assert_eq!(result.written.len(), 6);
        assert_eq!(result.density_count(), 2);
    }

    #[test]
    fn rerun_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        let path = icon_path(tmp.path(), Density::Mdpi, IconVariant::Standard);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"stale").unwrap();

        materialize(
            &MockBackend::new(),
            &IconSource::Placeholder,
            tmp.path(),
            &[Density::Mdpi],
            None,
        )
        .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"48");
    }

    #[test]
    fn real_backend_leaf_tree_has_exact_sizes() {
        let tmp = TempDir::new().unwrap();

        materialize(
            &RustBackend::new(),
            &IconSource::Leaf {
                color: LeafColor::default(),
            },
            tmp.path(),
            &Density::ALL,
            None,
        )
        .unwrap();

        assert_icon_tree(tmp.path(), &Density::ALL);
    }

    #[test]
    fn real_backend_fit_tree_has_exact_sizes() {
        let tmp = TempDir::new().unwrap();
        let logo = tmp.path().join("logo.png");
        write_test_logo(&logo, 512, 512);
        let res = tmp.path().join("res");

        let result = materialize(
            &RustBackend::new(),
            &IconSource::Fit {
                path: logo,
                filter: Resample::Lanczos3,
            },
            &res,
            &Density::ALL,
            None,
        )
        .unwrap();

        assert_eq!(
            result.source_dimensions,
            Some(Dimensions {
                width: 512,
                height: 512
            })
        );
        assert_icon_tree(&res, &Density::ALL);
    }
}
