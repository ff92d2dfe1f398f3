//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (lossless) |
//!
//! Encoded bytes are written to a sibling `.tmp` file and renamed into place,
//! so a failed write never leaves a truncated PNG at the target path.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Compression, ResizeParams};
use crate::density::MAX_EDGE;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open, sniff and decode. The extension is not trusted, so a PNG saved as
/// `.jpg` still decodes.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let reader = ImageReader::open(path).map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = reader.with_guessed_format().map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    reader.decode().map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn encode_png(
    img: &DynamicImage,
    path: &Path,
    compression: Compression,
) -> Result<Vec<u8>, BackendError> {
    let compression = match compression {
        Compression::Fast => CompressionType::Fast,
        Compression::Best => CompressionType::Best,
    };
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, compression, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(bytes)
}

/// Write via a temp file in the same directory, then rename over the target.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), BackendError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    if let Err(source) = std::fs::write(&tmp_path, bytes) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(BackendError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        BackendError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl ImageBackend for RustBackend {
    type Source = DynamicImage;

    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        load_image(path)
    }

    fn dimensions(&self, source: &DynamicImage) -> Dimensions {
        let (width, height) = source.dimensions();
        Dimensions { width, height }
    }

    fn resize_square(
        &self,
        source: &DynamicImage,
        params: &ResizeParams,
    ) -> Result<Dimensions, BackendError> {
        if params.size == 0 || params.size > MAX_EDGE {
            return Err(BackendError::InvalidSize {
                path: params.output.clone(),
                size: params.size,
                max: MAX_EDGE,
            });
        }
        // resize_exact stretches; aspect ratio is intentionally not kept.
        let resized = source.resize_exact(params.size, params.size, FilterType::Lanczos3);
        let bytes = encode_png(&resized, &params.output, params.compression)?;
        write_replacing(&params.output, &bytes)?;
        Ok(self.dimensions(&resized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png, png_dimensions};

    fn params(output: &Path, size: u32) -> ResizeParams {
        ResizeParams {
            output: output.to_path_buf(),
            size,
            compression: Compression::Fast,
        }
    }

    #[test]
    fn decode_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.jpg");
        create_test_jpeg(&path, 200, 150);

        let backend = RustBackend::new();
        let img = backend.decode(&path).unwrap();
        assert_eq!(
            backend.dimensions(&img),
            Dimensions {
                width: 200,
                height: 150
            }
        );
    }

    #[test]
    fn decode_nonexistent_file_is_open_error() {
        let backend = RustBackend::new();
        let result = backend.decode(Path::new("/nonexistent/logo.jpg"));
        assert!(matches!(result, Err(BackendError::Open { .. })));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let backend = RustBackend::new();
        let result = backend.decode(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn decode_sniffs_content_not_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-png.jpg");
        create_test_png(&path, 64, 32);

        let backend = RustBackend::new();
        let img = backend.decode(&path).unwrap();
        assert_eq!(backend.dimensions(&img).width, 64);
    }

    #[test]
    fn resize_square_from_landscape_source() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("wide.jpg");
        create_test_jpeg(&source, 400, 300);
        let output = tmp.path().join("icon.png");

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        let dims = backend.resize_square(&img, &params(&output, 72)).unwrap();

        assert_eq!(dims, Dimensions { width: 72, height: 72 });
        assert_eq!(png_dimensions(&output), (72, 72));
    }

    #[test]
    fn resize_square_can_upscale() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("tiny.png");
        create_test_png(&source, 16, 16);
        let output = tmp.path().join("icon.png");

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        backend.resize_square(&img, &params(&output, 192)).unwrap();

        assert_eq!(png_dimensions(&output), (192, 192));
    }

    #[test]
    fn resize_square_replaces_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 100, 100);
        let output = tmp.path().join("icon.png");
        create_test_png(&output, 10, 20);

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        backend.resize_square(&img, &params(&output, 48)).unwrap();

        assert_eq!(png_dimensions(&output), (48, 48));
        assert!(!tmp.path().join("icon.png.tmp").exists());
    }

    #[test]
    fn resize_square_missing_directory_is_write_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 50, 50);
        let output = tmp.path().join("no-such-dir").join("icon.png");

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        let result = backend.resize_square(&img, &params(&output, 36));
        let err = result.unwrap_err();
        assert!(matches!(err, BackendError::Write { .. }));
        assert!(err.to_string().contains("icon.png"));
        assert!(!output.exists());
    }

    #[test]
    fn resize_square_rejects_oversized_edge() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 8, 8);
        let output = tmp.path().join("huge.png");

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        let result = backend.resize_square(&img, &params(&output, 4_000_000_000));
        assert!(matches!(
            result,
            Err(BackendError::InvalidSize {
                size: 4_000_000_000,
                ..
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn source_is_not_mutated_by_resize() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("logo.jpg");
        create_test_jpeg(&source, 300, 200);

        let backend = RustBackend::new();
        let img = backend.decode(&source).unwrap();
        for size in [36, 48, 192] {
            let output = tmp.path().join(format!("{size}.png"));
            backend.resize_square(&img, &params(&output, size)).unwrap();
        }
        assert_eq!(
            backend.dimensions(&img),
            Dimensions {
                width: 300,
                height: 200
            }
        );
    }
}
