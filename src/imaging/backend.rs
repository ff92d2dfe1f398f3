//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the generator
//! needs: decode a source once, report its dimensions, and write a square
//! resized PNG from it.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests substitute a recording mock.

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: size {size} is outside 1..={max}", path.display())]
    InvalidSize { path: PathBuf, size: u32, max: u32 },
}

/// Pixel dimensions of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// `Source` is the decoded raster. It is produced once per source file and
/// only borrowed afterwards, so every resize starts from the same pixels.
pub trait ImageBackend {
    type Source;

    /// Read and decode an image file.
    fn decode(&self, path: &Path) -> Result<Self::Source, BackendError>;

    /// Dimensions of a decoded source.
    fn dimensions(&self, source: &Self::Source) -> Dimensions;

    /// Resize to exactly `params.size` square and write PNG to
    /// `params.output`, replacing any existing file.
    fn resize_square(
        &self,
        source: &Self::Source,
        params: &ResizeParams,
    ) -> Result<Dimensions, BackendError>;
}
