//! Shared types handed to the UI collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensions plus approximate size, shown next to a preview.
///
/// `approx_size_kb` is a display heuristic, not a precise byte count: for a
/// freshly loaded original it is derived from the base64 length the bytes
/// would occupy, for a rendered preview from the encoded output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub width: u32,
    pub height: u32,
    pub approx_size_kb: u32,
}

impl fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {}px (approx. {} KB)",
            self.width, self.height, self.approx_size_kb
        )
    }
}
