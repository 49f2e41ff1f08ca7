use clap::{Parser, Subcommand};
use pixelfit::imaging::{ExportFormat, RustBackend};
use pixelfit::output;
use pixelfit::session::{FileInput, ResizeSession};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixelfit")]
#[command(about = "Resize a single image to JPEG or PNG")]
#[command(long_about = "\
Resize a single image to JPEG or PNG

Loads one image, applies target dimensions, renders a Lanczos-filtered
result, and writes it next to you as <stem>_resized_<timestamp>.<ext>.

Dimension rules match the resize form this tool grew out of:

  - defaults are 50% of the source
  - with the aspect lock on (the default), setting one edge derives the
    other from the source ratio
  - --scale multiplies the original source dimensions, ignoring the lock
  - pass --no-lock-aspect to set both edges exactly (off-ratio boxes
    stretch the image; that is intended)

Sizes printed alongside results are approximate display figures.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print dimensions and approximate size of an image
    Info {
        file: PathBuf,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resize an image and write the encoded result
    Resize {
        file: PathBuf,
        /// Target width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Target height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Preset scale applied to the source dimensions (e.g. 0.5)
        #[arg(long, conflicts_with_all = ["width", "height"])]
        scale: Option<f64>,
        /// Edit width and height independently of the source ratio
        #[arg(long)]
        no_lock_aspect: bool,
        /// Output format: jpeg or png
        #[arg(long, default_value = "jpeg")]
        format: ExportFormat,
        /// Encoder quality in [0, 1] (JPEG only)
        #[arg(long, default_value_t = 0.9)]
        quality: f32,
        /// Directory to write the result into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Info { file, json } => {
            let mut session = ResizeSession::new(RustBackend::new());
            let input = read_file_input(&file)?;
            let name = input.name.clone();
            let info = session.select_file(input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                output::print_loaded(&name, &info);
            }
        }
        Command::Resize {
            file,
            width,
            height,
            scale,
            no_lock_aspect,
            format,
            quality,
            output: output_dir,
        } => {
            let mut session = ResizeSession::new(RustBackend::new());
            session.set_format(format);
            session.set_quality(quality);

            let input = read_file_input(&file)?;
            let name = input.name.clone();
            let info = session.select_file(input)?;
            output::print_loaded(&name, &info);

            if no_lock_aspect {
                session.set_lock_aspect(false)?;
            }
            if let Some(scale) = scale {
                session.apply_preset_scale(scale)?;
            }
            if let Some(width) = width {
                session.set_width(width)?;
            }
            if let Some(height) = height {
                session.set_height(height)?;
            }

            let rendered = session.render_preview()?;
            output::print_rendered(&rendered);

            let result = session.export()?;
            std::fs::create_dir_all(&output_dir)?;
            let path = output_dir.join(&result.suggested_filename);
            std::fs::write(&path, &result.bytes)?;
            output::print_saved(&result, &path);
        }
    }

    Ok(())
}

/// Read a file from disk into the session's input shape, deriving the
/// declared mime type from the extension (the CLI's stand-in for the
/// browser's file metadata).
fn read_file_input(path: &Path) -> Result<FileInput, std::io::Error> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(FileInput {
        name,
        mime_type: mime_for_extension(path),
        bytes,
    })
}

fn mime_for_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
    .to_string()
}
