//! CLI output formatting.
//!
//! Each step of the pipeline has a `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! Loaded photo.jpg
//!     1200 × 900px (approx. 353 KB)
//! Resized
//!     600 × 450px (approx. 98 KB)
//! Saved ./photo_resized_1700000000000.jpg (98 KB)
//! ```

use crate::export::{EncodedResult, approx_kb_of_encoded};
use crate::types::DisplayInfo;
use std::path::Path;

/// Indentation for context lines under a header.
const INDENT: &str = "    ";

pub fn format_loaded(file_name: &str, info: &DisplayInfo) -> Vec<String> {
    vec![format!("Loaded {file_name}"), format!("{INDENT}{info}")]
}

pub fn format_rendered(info: &DisplayInfo) -> Vec<String> {
    vec!["Resized".to_string(), format!("{INDENT}{info}")]
}

pub fn format_saved(result: &EncodedResult, path: &Path) -> Vec<String> {
    vec![format!(
        "Saved {} ({} KB)",
        path.display(),
        approx_kb_of_encoded(result.byte_length())
    )]
}

pub fn print_loaded(file_name: &str, info: &DisplayInfo) {
    for line in format_loaded(file_name, info) {
        println!("{line}");
    }
}

pub fn print_rendered(info: &DisplayInfo) {
    for line in format_rendered(info) {
        println!("{line}");
    }
}

pub fn print_saved(result: &EncodedResult, path: &Path) {
    for line in format_saved(result, path) {
        println!("{line}");
    }
}
