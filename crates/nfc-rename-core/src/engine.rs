use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::plan::{DirOrder, Plan, RenameEntry};
use crate::reporter::Reporter;
use crate::scanner;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct NormalizeEngine {
    config: AppConfig,
    cancel_token: Arc<AtomicBool>,
}

#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub total_items: usize,
    pub files_to_rename: usize,
    pub dirs_to_rename: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub scan_duration: Duration,
    pub rename_duration: Duration,
}

impl RunSummary {
    /// True when every name in the tree was already NFC.
    pub fn is_clean(&self) -> bool {
        self.files_to_rename == 0 && self.dirs_to_rename == 0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteStats {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum Outcome {
    Renamed,
    Skipped,
    Failed,
}

impl NormalizeEngine {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            cancel_token: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_dir_order(mut self, order: DirOrder) -> Self {
        self.config.dir_order = order;
        self
    }

    pub fn dir_order(&self) -> DirOrder {
        self.config.dir_order
    }

    /// Shared flag that stops the run when set, e.g. from a Ctrl-C handler.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_token)
    }

    /// Run the whole pipeline on `target`:
    /// 1. Validate that the root exists and is a directory
    /// 2. Walk the tree and plan renames
    /// 3. Rename files, then directories in `dir_order`
    pub fn run(&self, target: &Path, reporter: &dyn Reporter) -> Result<RunSummary> {
        let target = validate_root(target)?;
        reporter.on_run_start(&target);

        info!("Scanning {}", target.display());
        let scan_start = Instant::now();
        let outcome = scanner::scan_tree(&target, &self.cancel_token, reporter)?;
        let mut plan = outcome.plan;

        let mut summary = RunSummary {
            total_items: outcome.total_items,
            files_to_rename: plan.file_renames.len(),
            dirs_to_rename: plan.dir_renames.len(),
            scan_duration: scan_start.elapsed(),
            ..RunSummary::default()
        };
        reporter.on_scan_complete(
            &target,
            summary.total_items,
            summary.files_to_rename,
            summary.dirs_to_rename,
        );

        if plan.is_empty() {
            reporter.on_already_normalized();
            return Ok(summary);
        }

        plan.order_dirs(self.config.dir_order);

        let rename_start = Instant::now();
        let stats = self.execute(&plan, reporter)?;
        summary.renamed = stats.renamed;
        summary.skipped = stats.skipped;
        summary.failed = stats.failed;
        summary.rename_duration = rename_start.elapsed();

        reporter.on_complete(&target, &summary);
        Ok(summary)
    }

    /// Apply every entry of an ordered plan. Per-entry failures are reported
    /// and counted; only cancellation stops the batch.
    pub fn execute(&self, plan: &Plan, reporter: &dyn Reporter) -> Result<ExecuteStats> {
        let mut stats = ExecuteStats::default();

        for entry in plan.execution_order() {
            if self.cancel_token.load(Ordering::Relaxed) {
                return Err(Error::Interrupted);
            }
            match apply(entry, reporter) {
                Outcome::Renamed => stats.renamed += 1,
                Outcome::Skipped => stats.skipped += 1,
                Outcome::Failed => stats.failed += 1,
            }
        }

        debug!(
            "{} renamed, {} skipped, {} failed",
            stats.renamed, stats.skipped, stats.failed
        );
        Ok(stats)
    }
}

fn apply(entry: &RenameEntry, reporter: &dyn Reporter) -> Outcome {
    // A dangling symlink at the destination counts as existing.
    if fs::symlink_metadata(&entry.destination).is_ok() {
        reporter.on_skipped(entry);
        return Outcome::Skipped;
    }

    match fs::rename(&entry.source, &entry.destination) {
        Ok(()) => {
            reporter.on_renamed(entry);
            Outcome::Renamed
        }
        Err(err) => {
            warn!("Error renaming {}: {}", entry.source.display(), err);
            reporter.on_rename_failed(entry, &err);
            Outcome::Failed
        }
    }
}

/// Check that `path` is an existing directory and make it absolute.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()))
        }
        Err(err) => return Err(Error::Io(err)),
    };
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(std::path::absolute(path)?)
}
