//! In-memory image operations: decode, stretch-resize, JPEG/PNG encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::load_from_memory` |
//! | **Render** | `resize_exact` + `Lanczos3` |
//! | **Encode** | `JpegEncoder` / `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: [`ExportFormat`] and [`ExportSettings`]
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use params::{ExportFormat, ExportSettings};
pub use rust_backend::RustBackend;
