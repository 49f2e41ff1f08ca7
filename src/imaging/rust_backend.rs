//! Pure Rust image processing backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::load_from_memory` (format sniffed from the bytes) |
//! | Render (stretch) | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend};
use super::params::{ExportFormat, ExportSettings};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
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

impl ImageBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError> {
        // Decode errors are not distinguished further; any failure reads as
        // "could not decode" to the caller
        image::load_from_memory(bytes).map_err(|e| BackendError::DecodeFailed(e.to_string()))
    }

    fn render(&self, source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        // resize_exact, not resize: the target box wins even when it does
        // not match the source aspect ratio
        source.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        raster: &DynamicImage,
        settings: &ExportSettings,
    ) -> Result<Vec<u8>, BackendError> {
        let mut out = Vec::new();
        match settings.format {
            ExportFormat::Jpeg => {
                // JPEG carries no alpha channel; flatten before encoding
                let rgb = DynamicImage::ImageRgb8(raster.to_rgb8());
                let quality = (settings.quality * 100.0).round() as u8;
                let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), quality);
                rgb.write_with_encoder(encoder)
                    .map_err(|e| BackendError::EncodeFailed(e.to_string()))?;
            }
            ExportFormat::Png => {
                // Quality is accepted but has no effect on PNG
                let encoder = PngEncoder::new(Cursor::new(&mut out));
                raster
                    .write_with_encoder(encoder)
                    .map_err(|e| BackendError::EncodeFailed(e.to_string()))?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageEncoder, RgbImage, RgbaImage};

    /// Encode a synthetic gradient JPEG into memory.
    fn test_jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut bytes = Vec::new();
        JpegEncoder::new(Cursor::new(&mut bytes))
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_synthetic_jpeg() {
        let backend = RustBackend::new();
        let img = backend.decode(&test_jpeg_bytes(200, 150)).unwrap();
        assert_eq!(img.width(), 200);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn decode_garbage_errors() {
        let backend = RustBackend::new();
        let result = backend.decode(b"this is not an image");
        assert!(matches!(result, Err(BackendError::DecodeFailed(_))));
    }

    #[test]
    fn render_stretches_to_exact_box() {
        let backend = RustBackend::new();
        let source = backend.decode(&test_jpeg_bytes(400, 300)).unwrap();

        // Deliberately off-ratio box: stretch, don't letterbox
        let raster = backend.render(&source, 100, 200);
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
    }

    #[test]
    fn encode_jpeg_decodes_back_to_same_dimensions() {
        let backend = RustBackend::new();
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(120, 80, image::Rgb([10, 200, 30])));

        let bytes = backend
            .encode(
                &raster,
                &ExportSettings {
                    format: ExportFormat::Jpeg,
                    quality: 0.85,
                },
            )
            .unwrap();
        assert!(!bytes.is_empty());

        let decoded = backend.decode(&bytes).unwrap();
        assert_eq!(decoded.width(), 120);
        assert_eq!(decoded.height(), 80);
    }

    #[test]
    fn encode_png_ignores_quality() {
        let backend = RustBackend::new();
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 40, image::Rgb([1, 2, 3])));

        // Out-of-range quality is passed through; PNG never looks at it
        let a = backend
            .encode(
                &raster,
                &ExportSettings {
                    format: ExportFormat::Png,
                    quality: 0.1,
                },
            )
            .unwrap();
        let b = backend
            .encode(
                &raster,
                &ExportSettings {
                    format: ExportFormat::Png,
                    quality: 7.5,
                },
            )
            .unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn encode_jpeg_flattens_alpha() {
        let backend = RustBackend::new();
        let raster =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(30, 30, image::Rgba([9, 9, 9, 128])));

        let bytes = backend
            .encode(&raster, &ExportSettings::default())
            .unwrap();
        let decoded = backend.decode(&bytes).unwrap();
        assert_eq!(decoded.width(), 30);
        assert_eq!(decoded.height(), 30);
    }

    #[test]
    fn jpeg_quality_changes_output_size() {
        let backend = RustBackend::new();
        let source = backend.decode(&test_jpeg_bytes(300, 200)).unwrap();

        let low = backend
            .encode(
                &source,
                &ExportSettings {
                    format: ExportFormat::Jpeg,
                    quality: 0.1,
                },
            )
            .unwrap();
        let high = backend
            .encode(
                &source,
                &ExportSettings {
                    format: ExportFormat::Jpeg,
                    quality: 0.95,
                },
            )
            .unwrap();
        assert!(low.len() < high.len());
    }
}
