//! Image backend trait and shared error type.
//!
//! The [`ImageBackend`] trait defines the three platform primitives the
//! session needs: decode, render, and encode. The production implementation
//! is [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, built on
//! the `image` crate. Tests swap in a recording mock so session logic can be
//! exercised without encoding a single pixel.

use super::params::ExportSettings;
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    #[error("encode failed: {0}")]
    EncodeFailed(String),
}

/// Trait for image processing backends.
///
/// The raster type is `image::DynamicImage` throughout: it is the crate's
/// common currency for decoded pixels, and a mock can fabricate one cheaply.
pub trait ImageBackend: Sync {
    /// Decode an image from raw bytes, sniffing the container format.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError>;

    /// Draw `source` stretched to exactly `width` × `height`.
    ///
    /// No aspect correction — a box that does not match the source ratio
    /// produces a non-uniform stretch, which is accepted behavior. Pure and
    /// synchronous; only the returned raster is written.
    fn render(&self, source: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode a raster to compressed bytes at the given format/quality.
    fn encode(
        &self,
        raster: &DynamicImage,
        settings: &ExportSettings,
    ) -> Result<Vec<u8>, BackendError>;
}
