//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Resize** | `resize_exact` + Lanczos3 |
//! | **Encode** | PNG, lossless |
//!
//! The module is split into:
//! - **Parameters**: what to produce ([`ResizeParams`])
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{Compression, ResizeParams};
pub use rust_backend::RustBackend;
