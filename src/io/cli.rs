//! Command-line interface for cropping, inspecting and sampling images

use crate::crop::batch::{
    BatchObserver, NamedBatch, SilentObserver, check_file_component, run_crop_job,
};
use crate::inspect::color::sample_file_color;
use crate::inspect::metadata::read_dimensions;
use crate::io::configuration::{
    CropJob, DEFAULT_COLS, DEFAULT_FILE_PREFIX, DEFAULT_MARGIN, DEFAULT_OUTPUT_DIR, DEFAULT_ROWS,
    DEFAULT_SOURCE, default_batches,
};
use crate::io::error::{GridCropError, Result};
use crate::io::progress::ProgressManager;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridcrop")]
#[command(
    author,
    version,
    about = "Crop a uniform grid of cells out of an image into named files"
)]
/// Command-line arguments for the grid cropping tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crop labelled grid cells into numbered PNG files
    Crop(CropArgs),

    /// Print the width and height of an image
    Inspect {
        /// Image file to inspect
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },

    /// Print the color of the top-left pixel of an image
    Color {
        /// Image file to sample
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },
}

/// Arguments of the `crop` subcommand
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Source image containing the grid
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory receiving the cropped files (created if absent)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Pixels trimmed from every side of each cell
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Leading component of every output file name
    #[arg(short, long, default_value = DEFAULT_FILE_PREFIX, value_parser = parse_prefix)]
    pub prefix: String,

    /// Labelled cell selection, repeatable (defaults to the avatar sheet batches)
    #[arg(short, long = "batch", value_name = "LABEL=ROW:COL,...")]
    pub batches: Vec<NamedBatch>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CropArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the crop job described by these arguments
    pub fn to_job(&self) -> CropJob {
        let batches = if self.batches.is_empty() {
            default_batches()
        } else {
            self.batches.clone()
        };

        CropJob {
            source: self.source.clone(),
            output_dir: self.output_dir.clone(),
            cols: self.cols,
            rows: self.rows,
            margin: self.margin,
            prefix: self.prefix.clone(),
            batches,
        }
    }
}

fn parse_prefix(value: &str) -> Result<String> {
    check_file_component("prefix", value)?;
    Ok(value.to_string())
}

/// Writes a `Saved <file>` line for every file as soon as it is written,
/// then forwards the notification to `inner`
pub struct SaveReporter<'a, O: ?Sized, W> {
    inner: &'a mut O,
    out: W,
}

impl<'a, O: BatchObserver + ?Sized, W: Write> SaveReporter<'a, O, W> {
    /// Report to `out` and forward to `inner`
    pub const fn new(inner: &'a mut O, out: W) -> Self {
        Self { inner, out }
    }
}

impl<O: BatchObserver + ?Sized, W: Write> BatchObserver for SaveReporter<'_, O, W> {
    fn batch_started(&mut self, label: &str, len: usize) {
        self.inner.batch_started(label, len);
    }

    fn file_saved(&mut self, label: &str, index: usize, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if let Err(e) = writeln!(self.out, "Saved {name}") {
            tracing::warn!(error = %e, "could not report saved file");
        }
        self.inner.file_saved(label, index, path);
    }

    fn batch_finished(&mut self, label: &str) {
        self.inner.batch_finished(label);
    }
}

/// One-line report of a failure, using the error's display form
pub fn error_message(error: &GridCropError) -> String {
    format!("Error: {error}")
}

/// Message printed by `inspect`: the dimensions, or the error
pub fn inspect_message(path: &Path) -> String {
    match read_dimensions(path) {
        Ok(dimensions) => format!(
            "Width: {}, Height: {}",
            dimensions.width(),
            dimensions.height()
        ),
        Err(e) => error_message(&e),
    }
}

/// Message printed by `color`: the hex color, or the error
pub fn color_message(path: &Path) -> String {
    match sample_file_color(path) {
        Ok(color) => format!("Background Color: {color}"),
        Err(e) => error_message(&e),
    }
}

/// Dispatches a parsed command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// `inspect` and `color` report failures as a printed message and
    /// succeed. `crop` stops at the first failure and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of a crop run fails
    // Allow print for the per-command report lines
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Crop(args) => {
                Self::crop(args, std::io::stdout().lock())?;
            }
            Command::Inspect { image } => println!("{}", inspect_message(image)),
            Command::Color { image } => println!("{}", color_message(image)),
        }
        Ok(())
    }

    /// Run a crop, with progress bars unless `--quiet` was given
    ///
    /// A `Saved <file>` line goes to `out` right after each file is
    /// written, so files saved before a failure are still reported.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while cropping
    pub fn crop<W: Write>(args: &CropArgs, out: W) -> Result<Vec<PathBuf>> {
        let job = args.to_job();
        if !args.should_show_progress() {
            return run_crop_job(&job, &mut SaveReporter::new(&mut SilentObserver, out));
        }

        let mut progress = ProgressManager::new();
        let result = run_crop_job(&job, &mut SaveReporter::new(&mut progress, out));
        progress.finish();
        result
    }
}
