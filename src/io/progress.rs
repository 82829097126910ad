//! Per-batch progress bars for crop runs

use crate::crop::batch::BatchObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per batch, labelled with the batch name
///
/// Bars stay on screen once their batch completes so the run reads as a
/// summary afterwards.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<(String, ProgressBar)>,
    files_saved: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            bars: Vec::new(),
            files_saved: 0,
        }
    }

    /// Number of files reported as saved so far
    pub const fn files_saved(&self) -> usize {
        self.files_saved
    }

    /// Number of batches started so far
    pub const fn batch_count(&self) -> usize {
        self.bars.len()
    }

    /// Position of the bar for `label`, if that batch has started
    pub fn position(&self, label: &str) -> Option<u64> {
        self.bar(label).map(ProgressBar::position)
    }

    /// Abandon any unfinished bars, leaving them at their last position
    pub fn finish(&self) {
        for (_, bar) in &self.bars {
            if !bar.is_finished() {
                bar.abandon();
            }
        }
    }

    fn bar(&self, label: &str) -> Option<&ProgressBar> {
        self.bars
            .iter()
            .rev()
            .find(|(name, _)| name == label)
            .map(|(_, bar)| bar)
    }
}

impl BatchObserver for ProgressManager {
    fn batch_started(&mut self, label: &str, len: usize) {
        let bar = self.multi_progress.add(ProgressBar::new(len as u64));
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bars.push((label.to_string(), bar));
    }

    fn file_saved(&mut self, label: &str, _index: usize, path: &Path) {
        self.files_saved += 1;
        if let Some(bar) = self.bar(label) {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.into_owned());
            bar.inc(1);
        }
    }

    fn batch_finished(&mut self, label: &str) {
        if let Some(bar) = self.bar(label) {
            bar.finish_with_message("done");
        }
    }
}
