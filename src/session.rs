//! Single-document resize session.
//!
//! [`ResizeSession`] owns all mutable state of one load→edit→render→export
//! cycle: the current [`ImageSource`], the [`DimensionModel`], the export
//! settings, and the last rendered preview. It is the explicit session
//! object that replaces page-global state — no statics, so tests can run
//! many sessions side by side.
//!
//! # State machine
//!
//! ```text
//! Empty --select_file--> Loaded      (mime check, then decode)
//! Loaded --select_file--> Loaded     (replaces the current source)
//! any --select_file, bad mime--> unchanged (InvalidInputType)
//! any --select_file, bad bytes--> Empty    (DecodeFailure drops the source)
//! Loaded --reset--> Empty            (settings back to defaults)
//! ```
//!
//! The browser original suspends twice, on decode and on encode; here both
//! are synchronous calls returning a discriminated `Result`, which keeps the
//! ordering guarantee trivially: a render always uses the dimension values
//! as they stood when it was invoked.

use crate::dimensions::DimensionModel;
use crate::export::{
    EncodedResult, approx_kb_of_encoded, approx_kb_of_original, suggested_filename, unix_millis,
};
use crate::imaging::{BackendError, ExportFormat, ExportSettings, ImageBackend};
use crate::types::DisplayInfo;
use image::DynamicImage;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The selected file's declared content type is not an image type.
    /// Reported to the user; session state is untouched.
    #[error("not an image file (got {mime})")]
    InvalidInputType { mime: String },
    /// The backend could not decode the bytes. The session is back to Empty.
    #[error("could not decode image: {0}")]
    Decode(BackendError),
    /// The backend could not encode the raster. No partial result is
    /// produced; preview state is unaffected.
    #[error("could not encode image: {0}")]
    Encoding(BackendError),
    /// An edit or render was requested while no image is loaded.
    #[error("no image loaded")]
    NoSource,
    /// Export was requested before any render.
    #[error("nothing rendered yet")]
    NoPreview,
}

/// A file handed in by the collaborator: name, declared mime type, raw bytes.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// The currently loaded decoded image plus its origin metadata.
///
/// `width`/`height` always reflect the decoded bitmap's natural dimensions.
#[derive(Debug, Clone)]
pub struct ImageSource {
    bitmap: DynamicImage,
    width: u32,
    height: u32,
    file_name: String,
    byte_len: usize,
}

impl ImageSource {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Display info for the original image.
    pub fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            width: self.width,
            height: self.height,
            approx_size_kb: approx_kb_of_original(self.byte_len),
        }
    }
}

/// One user's resize session. Single-document: loading a new file replaces
/// the previous one.
pub struct ResizeSession<B> {
    backend: B,
    source: Option<ImageSource>,
    dimensions: Option<DimensionModel>,
    settings: ExportSettings,
    preview: Option<DynamicImage>,
}

impl<B: ImageBackend> ResizeSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            source: None,
            dimensions: None,
            settings: ExportSettings::default(),
            preview: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn dimensions(&self) -> Option<&DimensionModel> {
        self.dimensions.as_ref()
    }

    pub fn settings(&self) -> ExportSettings {
        self.settings
    }

    /// Load a file into the session.
    ///
    /// Declared non-image mime types are rejected synchronously and leave
    /// the current state untouched. A decode failure drops any previously
    /// loaded source. On success the dimension model is initialized to 50%
    /// of the source and the original's display info is returned.
    pub fn select_file(&mut self, file: FileInput) -> Result<DisplayInfo, SessionError> {
        if !file.mime_type.starts_with("image/") {
            return Err(SessionError::InvalidInputType {
                mime: file.mime_type,
            });
        }

        debug!("decoding {} ({} bytes)", file.name, file.bytes.len());
        let bitmap = match self.backend.decode(&file.bytes) {
            Ok(bitmap) => bitmap,
            Err(e) => {
                self.source = None;
                self.dimensions = None;
                self.preview = None;
                return Err(SessionError::Decode(e));
            }
        };

        let (width, height) = (bitmap.width(), bitmap.height());
        let byte_len = file.bytes.len();
        self.dimensions = Some(DimensionModel::new(width, height));
        self.preview = None;
        self.source = Some(ImageSource {
            bitmap,
            width,
            height,
            file_name: file.name,
            byte_len,
        });
        debug!("loaded {width}x{height}");

        Ok(DisplayInfo {
            width,
            height,
            approx_size_kb: approx_kb_of_original(byte_len),
        })
    }

    fn dims_mut(&mut self) -> Result<&mut DimensionModel, SessionError> {
        self.dimensions.as_mut().ok_or(SessionError::NoSource)
    }

    pub fn set_width(&mut self, value: u32) -> Result<(), SessionError> {
        self.dims_mut()?.set_width(value);
        Ok(())
    }

    pub fn set_height(&mut self, value: u32) -> Result<(), SessionError> {
        self.dims_mut()?.set_height(value);
        Ok(())
    }

    pub fn set_lock_aspect(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.dims_mut()?.set_lock_aspect(enabled);
        Ok(())
    }

    pub fn apply_preset_scale(&mut self, scale: f64) -> Result<(), SessionError> {
        self.dims_mut()?.apply_preset_scale(scale);
        Ok(())
    }

    /// Export format for subsequent renders and exports. Allowed in any
    /// state — it is form state, not image state.
    pub fn set_format(&mut self, format: ExportFormat) {
        self.settings.format = format;
    }

    /// Encoder quality in `[0, 1]`, passed through unvalidated.
    pub fn set_quality(&mut self, quality: f32) {
        self.settings.quality = quality;
    }

    /// Render the preview at the current target dimensions.
    ///
    /// The returned size figure comes from encoding the preview at the
    /// current settings, so it matches what the export will weigh. The
    /// preview raster is kept even when that measuring encode fails, so a
    /// later export can retry with different settings.
    pub fn render_preview(&mut self) -> Result<DisplayInfo, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoSource)?;
        let dims = self.dimensions.as_ref().ok_or(SessionError::NoSource)?;

        let (width, height) = (dims.target_width(), dims.target_height());
        debug!("rendering preview at {width}x{height}");
        let raster = self.backend.render(&source.bitmap, width, height);
        let measured = self.backend.encode(&raster, &self.settings);
        self.preview = Some(raster);

        let encoded = measured.map_err(SessionError::Encoding)?;
        Ok(DisplayInfo {
            width,
            height,
            approx_size_kb: approx_kb_of_encoded(encoded.len()),
        })
    }

    /// Encode the rendered preview at the current settings.
    ///
    /// Each call produces an independent [`EncodedResult`]; repeated exports
    /// are distinguished by the millisecond timestamp in the suggested
    /// filename. Requires a prior [`render_preview`](Self::render_preview).
    pub fn export(&self) -> Result<EncodedResult, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoSource)?;
        let preview = self.preview.as_ref().ok_or(SessionError::NoPreview)?;

        let bytes = self
            .backend
            .encode(preview, &self.settings)
            .map_err(SessionError::Encoding)?;
        let name = suggested_filename(&source.file_name, unix_millis(), self.settings.format);
        debug!("encoded {} bytes as {name}", bytes.len());

        Ok(EncodedResult {
            bytes,
            suggested_filename: name,
        })
    }

    /// Clear the session back to Empty and restore default settings
    /// (JPEG, quality 0.9; the aspect lock starts enabled on the next load).
    pub fn reset(&mut self) {
        self.source = None;
        self.dimensions = None;
        self.preview = None;
        self.settings = ExportSettings::default();
    }
}
