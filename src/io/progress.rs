//! Per-strategy trial progress bars

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while strategies run their trials
///
/// Each selected strategy gets its own bar. The strategy list is
/// deduplicated upstream, so there are never more bars than `StrategyKind`
/// variants.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    strategy_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>14}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            strategy_bars: Vec::new(),
        }
    }

    /// Number of per-strategy bars currently shown
    pub fn bar_count(&self) -> usize {
        self.strategy_bars.len()
    }

    /// Prepare one bar per strategy, each counting `trials` trials
    pub fn initialize(&mut self, strategy_count: usize, trials: usize) {
        for _ in 0..strategy_count {
            let bar = ProgressBar::new(trials as u64);
            bar.set_style(TRIAL_STYLE.clone());
            self.strategy_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Label the bar of strategy number `index`
    pub fn start_strategy(&self, index: usize, name: &str) {
        if let Some(bar) = self.strategy_bars.get(index) {
            bar.set_prefix(name.to_string());
            bar.set_message(String::new());
        }
    }

    /// Report one finished trial and its threshold
    pub fn update_trial(&self, index: usize, completed: usize, threshold: f64) {
        if let Some(bar) = self.strategy_bars.get(index) {
            bar.set_position(completed as u64);
            bar.set_message(format!("p = {threshold:.4}"));
        }
    }

    /// Mark a strategy as finished
    pub fn complete_strategy(&self, index: usize, elapsed: Duration) {
        if let Some(bar) = self.strategy_bars.get(index) {
            bar.set_message(format!("✓ {elapsed:.2?}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
