use crate::error::{Error, Result};
use crate::plan::{Item, ItemKind, Plan};
use crate::reporter::Reporter;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub total_items: usize,
    pub plan: Plan,
}

/// Top-down walk of `target_dir`, collecting every entry whose basename is
/// not in NFC form. The root itself is never renamed.
///
/// Any error listing a directory aborts the scan; nothing is skipped.
pub fn scan_tree(
    target_dir: &Path,
    cancel: &AtomicBool,
    reporter: &dyn Reporter,
) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    reporter.on_scan_dir(target_dir);

    for entry_result in WalkDir::new(target_dir).min_depth(1).follow_links(false) {
        if cancel.load(Ordering::Relaxed) {
            return Err(Error::Interrupted);
        }

        let entry = entry_result.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| target_dir.to_path_buf());
            let message = err.to_string();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
            Error::Scan { path, source }
        })?;

        // Links are not followed, but a link to a directory is renamed as one.
        let kind = if entry.file_type().is_dir() {
            reporter.on_scan_dir(entry.path());
            ItemKind::Directory
        } else if entry.path_is_symlink() && entry.path().is_dir() {
            ItemKind::Directory
        } else {
            ItemKind::File
        };

        outcome.total_items += 1;
        let item = Item {
            kind,
            path: entry.into_path(),
        };

        if let Some(rename) = item.rename_entry() {
            reporter.on_rename_needed(&rename);
            outcome.plan.push(rename);
        }
    }

    debug!(
        "Scanned {} items under {}, {} renames planned",
        outcome.total_items,
        target_dir.display(),
        outcome.plan.len()
    );

    Ok(outcome)
}
