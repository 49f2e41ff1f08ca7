//! End-to-end pipeline tests against the real `image`-crate backend:
//! load → edit dimensions → render → export → decode the bytes back.

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageEncoder, ImageReader};
use pixelfit::imaging::{ExportFormat, RustBackend};
use pixelfit::session::{FileInput, ResizeSession, SessionError};
use std::io::Cursor;

/// Encode a synthetic gradient JPEG into memory.
fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    let mut bytes = Vec::new();
    JpegEncoder::new(Cursor::new(&mut bytes))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

fn jpeg_input(name: &str, width: u32, height: u32) -> FileInput {
    FileInput {
        name: name.to_string(),
        mime_type: "image/jpeg".to_string(),
        bytes: test_jpeg(width, height),
    }
}

fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap();
    (img.width(), img.height())
}

#[test]
fn load_edit_render_export_round_trip() {
    let mut session = ResizeSession::new(RustBackend::new());

    let info = session
        .select_file(jpeg_input("vacation.jpg", 1200, 900))
        .unwrap();
    assert_eq!((info.width, info.height), (1200, 900));
    assert!(info.approx_size_kb > 0);

    // Defaults: half the source
    let dims = session.dimensions().unwrap();
    assert_eq!(dims.target_width(), 600);
    assert_eq!(dims.target_height(), 450);

    // Locked edit drives the other edge
    session.set_lock_aspect(true).unwrap();
    session.set_width(300).unwrap();
    assert_eq!(session.dimensions().unwrap().target_height(), 225);

    let rendered = session.render_preview().unwrap();
    assert_eq!((rendered.width, rendered.height), (300, 225));

    let result = session.export().unwrap();
    assert!(result.byte_length() > 0);
    assert!(result.suggested_filename.starts_with("vacation_resized_"));
    assert!(result.suggested_filename.ends_with(".jpg"));
    assert_eq!(decoded_dimensions(&result.bytes), (300, 225));
}

#[test]
fn preset_scale_derives_from_source() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("photo.jpg", 1200, 900))
        .unwrap();

    // Manual edits first; the preset must still work from 1200x900
    session.set_lock_aspect(false).unwrap();
    session.set_width(11).unwrap();
    session.set_height(17).unwrap();

    session.apply_preset_scale(0.25).unwrap();
    let dims = session.dimensions().unwrap();
    assert_eq!(dims.target_width(), 300);
    assert_eq!(dims.target_height(), 225);

    let result = {
        session.render_preview().unwrap();
        session.export().unwrap()
    };
    assert_eq!(decoded_dimensions(&result.bytes), (300, 225));
}

#[test]
fn png_export_round_trip() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("shot.jpg", 400, 300))
        .unwrap();
    session.set_format(ExportFormat::Png);

    session.render_preview().unwrap();
    let result = session.export().unwrap();
    assert!(result.suggested_filename.ends_with(".png"));
    assert_eq!(decoded_dimensions(&result.bytes), (200, 150));
}

#[test]
fn off_ratio_box_stretches() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("wide.jpg", 800, 200))
        .unwrap();

    session.set_lock_aspect(false).unwrap();
    session.set_width(100).unwrap();
    session.set_height(300).unwrap();

    session.render_preview().unwrap();
    let result = session.export().unwrap();
    assert_eq!(decoded_dimensions(&result.bytes), (100, 300));
}

#[test]
fn text_file_is_rejected_and_session_stays_empty() {
    let mut session = ResizeSession::new(RustBackend::new());

    let result = session.select_file(FileInput {
        name: "notes.txt".to_string(),
        mime_type: "text/plain".to_string(),
        bytes: b"hello".to_vec(),
    });

    assert!(matches!(
        result,
        Err(SessionError::InvalidInputType { .. })
    ));
    assert!(!session.is_loaded());
    assert!(session.source().is_none());
}

#[test]
fn corrupt_image_bytes_fail_decode() {
    let mut session = ResizeSession::new(RustBackend::new());

    let result = session.select_file(FileInput {
        name: "broken.jpg".to_string(),
        mime_type: "image/jpeg".to_string(),
        bytes: vec![0xde, 0xad, 0xbe, 0xef],
    });

    assert!(matches!(result, Err(SessionError::Decode(_))));
    assert!(!session.is_loaded());
}

#[test]
fn back_to_back_exports_are_independent() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("photo.jpg", 600, 400))
        .unwrap();
    session.render_preview().unwrap();

    let first = session.export().unwrap();
    let second = session.export().unwrap();
    assert!(first.byte_length() > 0);
    assert!(second.byte_length() > 0);
    assert_eq!(decoded_dimensions(&first.bytes), (300, 200));
    assert_eq!(decoded_dimensions(&second.bytes), (300, 200));
}

#[test]
fn exported_bytes_written_to_disk_decode_back() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("disk.jpg", 640, 480))
        .unwrap();
    session.render_preview().unwrap();
    let result = session.export().unwrap();

    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join(&result.suggested_filename);
    std::fs::write(&path, &result.bytes).unwrap();

    let read_back = std::fs::read(&path).unwrap();
    assert_eq!(decoded_dimensions(&read_back), (320, 240));
}

#[test]
fn reset_then_reload() {
    let mut session = ResizeSession::new(RustBackend::new());
    session
        .select_file(jpeg_input("one.jpg", 100, 100))
        .unwrap();
    session.reset();
    assert!(!session.is_loaded());

    let info = session
        .select_file(jpeg_input("two.jpg", 300, 100))
        .unwrap();
    assert_eq!((info.width, info.height), (300, 100));
    assert_eq!(session.dimensions().unwrap().target_width(), 150);
}
