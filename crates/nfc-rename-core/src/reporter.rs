use crate::engine::RunSummary;
use crate::plan::RenameEntry;
use std::io;
use std::path::Path;

/// Sink for events emitted while scanning and renaming.
///
/// The CLI renders these as console lines; tests record them.
/// All methods have default no-op implementations.
pub trait Reporter {
    fn on_run_start(&self, _target: &Path) {}
    fn on_scan_dir(&self, _dir: &Path) {}
    fn on_rename_needed(&self, _entry: &RenameEntry) {}
    fn on_scan_complete(&self, _target: &Path, _total_items: usize, _files: usize, _dirs: usize) {}
    fn on_already_normalized(&self) {}
    fn on_renamed(&self, _entry: &RenameEntry) {}
    fn on_skipped(&self, _entry: &RenameEntry) {}
    fn on_rename_failed(&self, _entry: &RenameEntry, _err: &io::Error) {}
    fn on_complete(&self, _target: &Path, _summary: &RunSummary) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl Reporter for SilentReporter {}
