//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how*. The
//! [`generate`](crate::generate) module decides which icons to write; the
//! [`backend`](super::backend) does the pixel work.

use std::path::PathBuf;

/// PNG compression effort. PNG is lossless, so this only trades encode time
/// for file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    Fast,
    #[default]
    Best,
}

/// Parameters for a square resize written as PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub output: PathBuf,
    /// Edge length; output is always `size × size`.
    pub size: u32,
    pub compression: Compression,
}
