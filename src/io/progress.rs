//! Phase progress display for tile loading and mosaic composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per processing phase
///
/// Each phase (loading tiles, composing rows) gets its own bar which stays on
/// screen once finished, so the user sees the whole run at a glance.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
    finished_phases: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
            finished_phases: 0,
        }
    }

    /// Start a new phase with `total` steps, finishing any running one
    pub fn start_phase(&mut self, label: &str, total: usize) {
        self.finish_phase();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Report the number of finished steps of the running phase
    pub fn update(&self, position: usize) {
        if let Some(ref bar) = self.current {
            bar.set_position(position as u64);
        }
    }

    /// Mark the running phase as complete
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish();
            self.finished_phases += 1;
        }
    }

    /// Number of phases that have been completed
    pub const fn finished_phases(&self) -> usize {
        self.finished_phases
    }

    /// Whether a phase is currently running
    pub const fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.finish_phase();
        let _ = self.multi_progress.clear();
    }
}
