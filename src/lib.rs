//! # Pixelfit
//!
//! A single-image resizer core: load an image from bytes, edit target
//! dimensions with an aspect-ratio lock, render a high-quality stretched
//! preview, and export JPEG or PNG bytes with a derived download filename.
//!
//! # Architecture: Session Around Pure Parts
//!
//! All mutable state lives in one explicit [`session::ResizeSession`] —
//! there is no global current-image state. The session composes three pure
//! or nearly-pure layers:
//!
//! ```text
//! dimensions   width/height/aspect-lock arithmetic   (no I/O, no pixels)
//! imaging      decode / render / encode              (behind a trait)
//! export       filenames + display-size heuristics   (caller supplies clock)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: dimension rules and filename derivation are plain
//!   functions; session logic runs against a recording mock backend.
//! - **Swappable pixels**: the [`imaging::ImageBackend`] trait keeps the
//!   state machine independent of the `image` crate's encoders.
//! - **Determinism**: the only impure inputs (clock, encoder output) enter
//!   through seams the tests control.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | The load→edit→render→export state machine and its error taxonomy |
//! | [`dimensions`] | `DimensionModel`: 50% defaults, aspect lock, preset scales |
//! | [`imaging`] | `ImageBackend` trait + pure-Rust `RustBackend` (Lanczos3, JPEG/PNG) |
//! | [`export`] | `<stem>_resized_<millis>.<ext>` naming, approximate-KB display figures |
//! | [`types`] | `DisplayInfo` handed to the UI collaborator |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Stretch, Don't Fit
//!
//! Rendering draws the source into *exactly* the requested box. When the box
//! does not match the source ratio the image stretches non-uniformly — that
//! is the contract, not an error. Keeping edges proportional is the
//! dimension model's job (the aspect lock), never the renderer's.
//!
//! ## Two Anchors for the Aspect Ratio
//!
//! Manual width/height edits derive the other edge from the ratio captured
//! when the lock was last enabled (always re-anchored to the source, so
//! unlocked drift never leaks in). Preset scales bypass the ratio entirely
//! and multiply the source dimensions. The asymmetry is deliberate, observed
//! form behavior.
//!
//! ## Approximate Sizes Stay Approximate
//!
//! The KB figures surfaced for display use the historical heuristics
//! (base64-length for the original, encoded length for previews). They are
//! labeled approximate and never fed back into any decision.

pub mod dimensions;
pub mod export;
pub mod imaging;
pub mod output;
pub mod session;
pub mod types;
