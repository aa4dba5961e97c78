//! Command implementations and argument parsing for the blobfish CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use blobfish_core::{Detection, Detector, DetectorBuilder, DetectorError, MaskSource};
use blobfish_providers_raster::{
    ColorParseError, RasterError, RasterMask, Rgb, load_rgb, recolor, save_rgb,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, error, field, info, instrument};

const DEFAULT_TOLERANCE: u32 = 5;
const DEFAULT_BLOB_COUNT: usize = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "blobfish", about = "Detect the largest colour blobs in an image.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Threshold an image and report its largest blobs.
    Detect(DetectCommand),
}

/// Options accepted by the `detect` command.
#[derive(Debug, Args, Clone)]
pub struct DetectCommand {
    /// Path to the input image.
    pub image: PathBuf,

    /// Target blob colour as six hex digits, e.g. `3232dc`.
    #[arg(long, value_parser = parse_color)]
    pub color: Rgb,

    /// Maximum percentual colour distance that still counts as the target.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u32,

    /// How many blobs to report, largest first.
    #[arg(long = "blobs", default_value_t = DEFAULT_BLOB_COUNT)]
    pub blob_count: usize,

    /// Write a copy of the image with the reported blobs recoloured.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override name for the mask (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

fn parse_color(raw: &str) -> Result<Rgb, ColorParseError> {
    Rgb::from_hex(raw)
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing an image failed.
    #[error(transparent)]
    Raster(#[from] RasterError),
    /// Core detection failed.
    #[error(transparent)]
    Core(#[from] DetectorError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the mask source implementation.
    pub mask: String,
    /// Blobs produced by the detector, largest first.
    pub detection: Detection,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Detect(detect) => run_command(detect),
    }
}

#[instrument(
    name = "cli.detect",
    err,
    skip(command),
    fields(
        image = field::Empty,
        tolerance = field::Empty,
        blob_count = field::Empty,
    ),
)]
pub(super) fn run_command(command: DetectCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("image", field::display(command.image.display()));
    span.record("tolerance", field::display(command.tolerance));
    span.record("blob_count", field::display(command.blob_count));

    let detector = DetectorBuilder::new()
        .with_blob_count(command.blob_count)
        .build()?;

    let image = load_rgb(&command.image)?;
    let mask_name = derive_mask_name(&command.image, command.name.as_deref());
    let mask = RasterMask::from_image(mask_name, &image, command.color, command.tolerance);
    let summary = detect(&detector, &mask)?;

    if let Some(output) = &command.output {
        let painted = recolor(&image, &summary.detection, command.color);
        // A failed save is logged and the run summary still returned.
        if let Err(save_error) = save_rgb(output, &painted) {
            error!(
                error = %save_error,
                output = %output.display(),
                "failed to save recoloured image"
            );
        } else {
            info!(output = %output.display(), "recoloured image saved");
        }
    }

    Ok(summary)
}

fn detect(detector: &Detector, mask: &RasterMask) -> Result<ExecutionSummary, CliError> {
    let detection = detector.run(mask)?;
    info!(
        mask = mask.name(),
        blobs = detection.blob_count(),
        "detection completed"
    );
    Ok(ExecutionSummary {
        mask: mask.name().to_owned(),
        detection,
    })
}

pub(super) fn derive_mask_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "mask".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use blobfish_cli::cli::{ExecutionSummary, render_summary};
/// # use blobfish_core::{Blob, Detection, GridDims, PixelCoord};
/// #
/// # fn main() -> std::io::Result<()> {
/// let summary = ExecutionSummary {
///     mask: "demo".into(),
///     detection: Detection::new(
///         GridDims::new(1, 1),
///         vec![Blob::new(vec![PixelCoord::new(0, 0)])],
///     ),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8");
/// assert!(text.contains("blob 1: size 1"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "mask: {}", summary.mask)?;
    writeln!(writer, "blobs: {}", summary.detection.blob_count())?;
    for (index, blob) in summary.detection.blobs().iter().enumerate() {
        writeln!(writer, "blob {}: size {}", index + 1, blob.size())?;
    }
    Ok(())
}
