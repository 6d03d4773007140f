//! Progress reporting infrastructure

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of the ongoing pipeline stage
///
/// To avoid corrupted terminal output, you should not write anything to stdout
/// or stderr yourself as long as a report is being displayed. Please use logs
/// for status messages.
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare to report on a new fan-out of independent tasks
    ///
    /// Nothing is displayed if there is no work to be done.
    pub fn add(&self, what: impl Into<Cow<'static, str>>, work: Work) -> ProgressTracker {
        if u64::from(work) == 0 {
            return ProgressTracker {
                bar: ProgressBar::hidden(),
                report: self.0.clone(),
            };
        }
        let style_trailer = match work {
            Work::Steps(_) => "{pos}/{len} ({per_sec})",
            Work::PercentSteps(_) => "{percent:>2}% (~{eta} left)",
        };
        let bar = ProgressBar::new(work.into())
            .with_prefix(what.into())
            .with_style(
                ProgressStyle::with_template(&format!("{{prefix}} {{wide_bar}} {style_trailer}"))
                    .expect("all styles above should be valid indicatif styles"),
            );
        ProgressTracker {
            bar: self.0.add(bar),
            report: self.0.clone(),
        }
    }
}

/// Work whose progression can be tracked
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Work {
    /// Tasks to be run, with a precise count display
    Steps(usize),

    /// Tasks to be run, with a percentage-based display
    PercentSteps(usize),
}
//
impl From<Work> for u64 {
    fn from(value: Work) -> Self {
        let inner = match value {
            Work::Steps(s) => s,
            Work::PercentSteps(p) => p,
        };
        inner as u64
    }
}

/// Mechanism to track progress
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific fan-out
    bar: ProgressBar,

    /// Underlying stage report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Record that some tasks have completed, successfully or not
    ///
    /// Returns truth that the progress bar has reached its maximum value, in
    /// which case it is hidden.
    pub fn make_progress(&self, tasks: u64) -> bool {
        self.bar.inc(tasks);
        let finished = self.bar.position() >= self.bar.length().unwrap_or(0);
        if finished {
            self.bar.finish_and_clear();
            self.report.remove(&self.bar);
        }
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_finishes_on_last_step() {
        let report = ProgressReport::new();
        let tracker = report.add("Testing", Work::Steps(2));
        assert!(!tracker.make_progress(1));
        assert!(tracker.make_progress(1));
    }

    #[test]
    fn empty_work_is_immediately_finished() {
        let report = ProgressReport::new();
        let tracker = report.add("Nothing", Work::PercentSteps(0));
        assert!(tracker.make_progress(0));
    }
}
