//! Parameter types for export encoding.
//!
//! These describe *what* to encode, not *how*. They are the interface between
//! the session (which holds user-chosen settings) and the
//! [`backend`](super::backend) (which does the actual pixel work).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output container for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Jpeg,
    Png,
}

impl ExportFormat {
    /// File extension used in suggested download names.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Jpeg => write!(f, "jpeg"),
            ExportFormat::Png => write!(f, "png"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    /// Accepts format names, common extensions, and mime types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "image/jpeg" => Ok(ExportFormat::Jpeg),
            "png" | "image/png" => Ok(ExportFormat::Png),
            other => Err(format!("unknown format: {other} (expected jpeg or png)")),
        }
    }
}

/// Format and quality for one export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// Encoder quality in `[0, 1]`. Passed through to the encoder as-is —
    /// out-of-range values are not validated here. PNG ignores it.
    pub quality: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Jpeg,
            quality: 0.9,
        }
    }
}
