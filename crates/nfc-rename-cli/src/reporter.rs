use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use nfc_rename_core::{ItemKind, RenameEntry, Reporter, RunSummary};
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Console reporter.
///
/// - Verbose: banners plus one line per scanned folder and planned rename
/// - Quiet: a spinner on stderr while scanning (hidden when not a TTY)
/// - Always: scan totals, one line per rename/skip/error, and a summary
pub struct CliReporter {
    verbose: bool,
    spinner: RefCell<Option<ProgressBar>>,
    scanned_dirs: RefCell<u64>,
}

impl CliReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: RefCell::new(None),
            scanned_dirs: RefCell::new(0),
        }
    }

    fn start_spinner(&self) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for CliReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::File => "File",
        ItemKind::Directory => "Dir",
    }
}

impl Reporter for CliReporter {
    fn on_run_start(&self, target: &Path) {
        if self.verbose {
            println!("Target directory: {}", target.display());
            println!("Starting NFC normalization...");
        } else {
            self.start_spinner();
        }
    }

    fn on_scan_dir(&self, dir: &Path) {
        if self.verbose {
            println!("Scanning: {}", dir.display());
            return;
        }
        let mut count = self.scanned_dirs.borrow_mut();
        *count += 1;
        if let Some(pb) = self.spinner.borrow().as_ref() {
            pb.set_message(format!("Scanning... {} folders", *count));
        }
    }

    fn on_rename_needed(&self, entry: &RenameEntry) {
        if self.verbose {
            println!(
                "  {} needs rename: {} -> {}",
                kind_label(entry.kind),
                entry.source_name(),
                entry.destination_name().cyan()
            );
        }
    }

    fn on_scan_complete(&self, target: &Path, total_items: usize, files: usize, dirs: usize) {
        self.finish_spinner();
        println!("Processing directory: {}", target.display());
        println!("Total items scanned: {}", total_items);
        println!(
            "Found {} files and {} directories to rename",
            format!("{}", files).yellow(),
            format!("{}", dirs).yellow()
        );
    }

    fn on_already_normalized(&self) {
        println!("{}", "All files and folders are already in NFC form.".green());
    }

    fn on_renamed(&self, entry: &RenameEntry) {
        println!(
            "Renamed {}: {} -> {}",
            entry.kind.label(),
            entry.source_name(),
            entry.destination_name().green()
        );
    }

    fn on_skipped(&self, entry: &RenameEntry) {
        println!(
            "{} {}",
            "Skipped (already exists):".yellow(),
            entry.destination.display()
        );
    }

    fn on_rename_failed(&self, entry: &RenameEntry, err: &io::Error) {
        println!(
            "{} {}: {}",
            "Error renaming".red(),
            entry.source.display(),
            err
        );
    }

    fn on_complete(&self, target: &Path, summary: &RunSummary) {
        println!("Completed processing {}", target.display());
        if self.verbose {
            println!(
                "{} renamed, {} skipped, {} failed in {:.2}s",
                format!("{}", summary.renamed).green(),
                format!("{}", summary.skipped).yellow(),
                format!("{}", summary.failed).red(),
                (summary.scan_duration + summary.rename_duration).as_secs_f64()
            );
        }
    }
}
