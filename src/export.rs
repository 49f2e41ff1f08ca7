//! Export naming and display-size heuristics.
//!
//! Everything here is a pure function — the session supplies the clock and
//! the bytes, so tests control both.

use crate::imaging::ExportFormat;
use std::time::{SystemTime, UNIX_EPOCH};

/// One completed export: compressed bytes plus the filename to save them
/// under. Created fresh per export action, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    pub bytes: Vec<u8>,
    pub suggested_filename: String,
}

impl EncodedResult {
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Derive the download filename: `<stem>_resized_<unix-millis>.<ext>`.
///
/// The timestamp keeps repeated exports of the same image unique within a
/// session without needing a counter.
///
/// # Examples
/// ```
/// # use pixelfit::export::suggested_filename;
/// # use pixelfit::imaging::ExportFormat;
/// assert_eq!(
///     suggested_filename("photo.jpg", 1700000000000, ExportFormat::Jpeg),
///     "photo_resized_1700000000000.jpg"
/// );
/// ```
pub fn suggested_filename(
    original_name: &str,
    timestamp_millis: u64,
    format: ExportFormat,
) -> String {
    format!(
        "{}_resized_{}.{}",
        strip_extension(original_name),
        timestamp_millis,
        format.extension()
    )
}

/// Strip the final extension from a filename.
///
/// Only the last `.ext` segment is removed (`photo.tar.gz` → `photo.tar`).
/// Dotfiles keep their full name rather than collapsing to an empty stem.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(pos) => &name[..pos],
    }
}

/// Current unix time in milliseconds.
pub(crate) fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Approximate size of the original input, in KB.
///
/// The figure is reconstructed the way the preview UI historically measured
/// it: take the base64 length the bytes would occupy in a data URL, then
/// scale by 3/4. Explicitly approximate — display only, never a precise
/// byte count.
pub fn approx_kb_of_original(byte_len: usize) -> u32 {
    let base64_len = byte_len.div_ceil(3) * 4;
    ((base64_len as f64 * 3.0 / 4.0) / 1024.0).round() as u32
}

/// Approximate size of an encoded result, in KB (byte length / 1024, rounded).
pub fn approx_kb_of_encoded(byte_len: usize) -> u32 {
    (byte_len as f64 / 1024.0).round() as u32
}
