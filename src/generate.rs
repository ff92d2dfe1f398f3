//! Icon generation.
//!
//! For every source image and every [`SizeSpec`], write a square PNG to
//! `<output_root>/drawable-<density>/<base_name>.png`.
//!
//! ## Failure Policy
//!
//! A source is decoded exactly once, before anything touches the output tree.
//! If decoding fails, no directory is created and no size is attempted. An
//! error while writing one size stops the remaining sizes of that source.
//!
//! Sources are independent: [`generate_all`] records each outcome in a
//! [`GenerateReport`] and always moves on to the next source. Whether a failed
//! source should fail the process is the caller's decision.
//!
//! ## Output Structure
//!
//! ```text
//! res/
//! ├── drawable-ldpi/
//! │   ├── shumiao.png      # 36x36
//! │   └── zhigeyun.png
//! ├── drawable-mdpi/       # 48x48
//! ├── drawable-hdpi/       # 72x72
//! ├── drawable-xhdpi/      # 96x96
//! ├── drawable-xxhdpi/     # 144x144
//! └── drawable-xxxhdpi/    # 192x192
//! ```
//!
//! Work is strictly sequential. Progress is reported through an optional
//! channel so the binary can print while the library stays I/O-agnostic.

use crate::config::GeneratorConfig;
use crate::density::SizeSpec;
use crate::imaging::{BackendError, Compression, Dimensions, ImageBackend, ResizeParams};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{0}")]
    Imaging(#[from] BackendError),
    #[error("cannot create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("size table is empty")]
    EmptySizeTable,
}

/// One icon written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub density: String,
    pub path: PathBuf,
    pub size: u32,
}

/// Progress notifications, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// A source is about to be processed.
    SourceStarted { source_path: PathBuf },
    /// The source decoded successfully.
    SourceOpened { original: Dimensions },
    /// One density variant was written.
    IconGenerated { path: PathBuf, size: u32 },
    /// Processing of the source stopped early.
    SourceFailed { message: String },
}

fn emit(events: Option<&Sender<GenerateEvent>>, event: GenerateEvent) {
    if let Some(tx) = events {
        // Receiver gone means nobody is printing; generation carries on.
        let _ = tx.send(event);
    }
}

/// Resize one source into every entry of `size_specs`.
///
/// Returns the icons written, in table order. Fails fast: see the
/// [module docs](self).
pub fn resize_all<B: ImageBackend>(
    backend: &B,
    source_path: &Path,
    output_root: &Path,
    base_name: &str,
    size_specs: &[SizeSpec],
    compression: Compression,
    events: Option<&Sender<GenerateEvent>>,
) -> Result<Vec<GeneratedIcon>, GenerateError> {
    if size_specs.is_empty() {
        return Err(GenerateError::EmptySizeTable);
    }

    let source = backend.decode(source_path)?;
    emit(
        events,
        GenerateEvent::SourceOpened {
            original: backend.dimensions(&source),
        },
    );

    let mut icons = Vec::with_capacity(size_specs.len());
    for spec in size_specs {
        let dir = spec.output_dir(output_root);
        std::fs::create_dir_all(&dir).map_err(|source| GenerateError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let output = spec.output_path(output_root, base_name);
        let written = backend.resize_square(
            &source,
            &ResizeParams {
                output: output.clone(),
                size: spec.size,
                compression,
            },
        )?;
        debug_assert_eq!(written.width, spec.size);

        emit(
            events,
            GenerateEvent::IconGenerated {
                path: output.clone(),
                size: spec.size,
            },
        );
        icons.push(GeneratedIcon {
            density: spec.name.clone(),
            path: output,
            size: spec.size,
        });
    }

    Ok(icons)
}

/// Outcome for a single configured source.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source_path: PathBuf,
    pub base_name: String,
    pub result: Result<Vec<GeneratedIcon>, GenerateError>,
}

/// Per-source results of a full run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub outcomes: Vec<SourceOutcome>,
}

impl GenerateReport {
    pub fn failed(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Total number of icons written across all sources.
    pub fn icon_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(Vec::len)
            .sum()
    }
}

/// Run [`resize_all`] for every configured source, in order.
///
/// A failed source is reported and recorded; the next source still runs.
pub fn generate_all<B: ImageBackend>(
    backend: &B,
    config: &GeneratorConfig,
    events: Option<&Sender<GenerateEvent>>,
) -> GenerateReport {
    let output_root = config.output_root();
    let compression = config.compression.into();
    let mut report = GenerateReport::default();

    for source in &config.sources {
        let source_path = config.source_path(source);
        let base_name = source.base_name();
        emit(
            events,
            GenerateEvent::SourceStarted {
                source_path: source_path.clone(),
            },
        );

        let result = resize_all(
            backend,
            &source_path,
            &output_root,
            &base_name,
            &config.densities,
            compression,
            events,
        );
        if let Err(e) = &result {
            emit(
                events,
                GenerateEvent::SourceFailed {
                    message: e.to_string(),
                },
            );
        }

        report.outcomes.push(SourceOutcome {
            source_path,
            base_name,
            result,
        });
    }

    report
}
