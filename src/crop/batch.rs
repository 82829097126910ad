//! Named batches of grid cells cropped into sequentially numbered files

use crate::crop::extract::{ensure_output_dir, extract_and_save};
use crate::grid::{CellAddress, CropRegion, GridSpec, ImageDimensions, compute_cell_region};
use crate::inspect::metadata::load_source;
use crate::io::configuration::{CropJob, OUTPUT_EXTENSION};
use crate::io::error::{GridCropError, Result, invalid_parameter};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Ordered group of cells sharing a label
///
/// Output files of a batch are numbered from 1 in the order the cells appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBatch {
    /// Identifier used in every output file name of the batch
    pub label: String,
    /// Cells to crop, in output order
    pub cells: Vec<CellAddress>,
}

impl NamedBatch {
    /// Create a batch from a label and an ordered list of cells
    pub fn new<C>(label: impl Into<String>, cells: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<CellAddress>,
    {
        Self {
            label: label.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of cells in the batch
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the batch selects no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromStr for NamedBatch {
    type Err = GridCropError;

    /// Parse `LABEL=ROW:COL,ROW:COL,...`
    fn from_str(s: &str) -> Result<Self> {
        let (label, cells) = s
            .split_once('=')
            .ok_or_else(|| invalid_parameter("batch", &s, &"expected LABEL=ROW:COL,..."))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(invalid_parameter("batch", &s, &"label is empty"));
        }
        check_file_component("batch label", label)?;
        let cells = cells
            .split(',')
            .filter(|cell| !cell.trim().is_empty())
            .map(CellAddress::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            label: label.to_string(),
            cells,
        })
    }
}

/// Reject a file name component that could escape the output directory
///
/// # Errors
///
/// Returns a configuration error if `value` contains a path separator
pub fn check_file_component(parameter: &'static str, value: &str) -> Result<()> {
    if value.contains(['/', '\\']) {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"must not contain path separators",
        ));
    }
    Ok(())
}

/// Receives progress notifications from [`GridCropper::run_batch`]
///
/// All methods default to doing nothing.
pub trait BatchObserver {
    /// A batch is about to be processed
    fn batch_started(&mut self, _label: &str, _len: usize) {}

    /// The `index`-th file (1-based) of a batch has been written
    fn file_saved(&mut self, _label: &str, _index: usize, _path: &Path) {}

    /// Every cell of a batch has been written
    fn batch_finished(&mut self, _label: &str) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

/// File name for the `index`-th cell of a batch: `<prefix>_<label>_<index>.png`
pub fn output_file_name(prefix: &str, label: &str, index: usize) -> String {
    format!("{prefix}_{label}_{index}.{OUTPUT_EXTENSION}")
}

/// File name used by the avatar sheet layout: `avatar_<label>_<index>.png`
pub fn avatar_file_name(label: &str, index: usize) -> String {
    output_file_name(crate::io::configuration::DEFAULT_FILE_PREFIX, label, index)
}

/// Converts grid cells of one source image into margin-inset crops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCropper {
    dimensions: ImageDimensions,
    grid: GridSpec,
    margin: u32,
}

impl GridCropper {
    /// Create a cropper for an image of `dimensions` split by `grid`
    pub const fn new(dimensions: ImageDimensions, grid: GridSpec, margin: u32) -> Self {
        Self {
            dimensions,
            grid,
            margin,
        }
    }

    /// Source image dimensions
    pub const fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// Grid partition
    pub const fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Inward margin applied to every cell side
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Crop region of a cell, unvalidated
    pub fn region(&self, address: CellAddress) -> CropRegion {
        compute_cell_region(self.dimensions, self.grid, address, self.margin)
    }

    /// Crop every cell of every batch into `output_dir`
    ///
    /// Batches are processed in order and cells within a batch in order. The
    /// index passed to `naming` restarts at 1 for each batch. Returns the
    /// written paths in processing order.
    ///
    /// # Errors
    ///
    /// Stops at the first crop or save failure. Files written before the
    /// failure are left on disk.
    pub fn run_batch<F, O>(
        &self,
        image: &DynamicImage,
        selections: &[NamedBatch],
        output_dir: &Path,
        naming: F,
        observer: &mut O,
    ) -> Result<Vec<PathBuf>>
    where
        F: Fn(&str, usize) -> String,
        O: BatchObserver + ?Sized,
    {
        let total = selections.iter().map(NamedBatch::len).sum();
        let mut written = Vec::with_capacity(total);

        for batch in selections {
            observer.batch_started(&batch.label, batch.len());

            for (index, &address) in (1..).zip(&batch.cells) {
                if !address.is_within(self.grid) {
                    tracing::warn!(%address, grid = %self.grid, label = %batch.label, "cell outside grid");
                }
                let region = self.region(address);
                let path = output_dir.join(naming(&batch.label, index));
                extract_and_save(image, region, &path)?;

                tracing::info!(%address, %region, path = %path.display(), "saved cell");
                observer.file_saved(&batch.label, index, &path);
                written.push(path);
            }

            observer.batch_finished(&batch.label);
        }

        Ok(written)
    }
}

/// Run a complete crop job: prepare the output directory, decode the
/// source, and crop every configured batch
///
/// # Errors
///
/// Returns an error if the prefix or a batch label contains a path
/// separator, the output directory cannot be created, the source cannot be
/// loaded, the grid is invalid for the source, or any crop fails
pub fn run_crop_job<O>(job: &CropJob, observer: &mut O) -> Result<Vec<PathBuf>>
where
    O: BatchObserver + ?Sized,
{
    check_file_component("prefix", &job.prefix)?;
    for batch in &job.batches {
        check_file_component("batch label", &batch.label)?;
    }
    ensure_output_dir(&job.output_dir)?;

    let source = load_source(&job.source)?;
    let grid = GridSpec::new(job.cols, job.rows)?;
    tracing::debug!(
        dimensions = %source.dimensions(),
        %grid,
        margin = job.margin,
        "loaded source"
    );

    let cropper = GridCropper::new(source.dimensions(), grid, job.margin);
    cropper.run_batch(
        source.image(),
        &job.batches,
        &job.output_dir,
        |label, index| output_file_name(&job.prefix, label, index),
        observer,
    )
}
