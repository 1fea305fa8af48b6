use crate::normalize;
use serde::Deserialize;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::File => "file",
            ItemKind::Directory => "folder",
        }
    }
}

/// An entry seen during the scan, with the path exactly as the walker produced it.
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    pub path: PathBuf,
}

impl Item {
    /// Builds the rename for this item if its basename is not already NFC.
    pub fn rename_entry(&self) -> Option<RenameEntry> {
        let name = self.path.file_name()?;
        let composed = normalize::nfc_name(name)?;
        let destination = match self.path.parent() {
            Some(parent) => parent.join(composed),
            None => PathBuf::from(composed),
        };
        Some(RenameEntry {
            kind: self.kind,
            source: self.path.clone(),
            destination,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub kind: ItemKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenameEntry {
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    pub fn destination_name(&self) -> String {
        file_name_lossy(&self.destination)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ordering policy for directory renames.
///
/// Directories must be renamed after everything inside them, or the paths
/// collected during the scan stop pointing at anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirOrder {
    /// Raw source path compared byte-wise, descending. Puts a child after its
    /// parent's prefix, which approximates deepest-first for ordinary trees
    /// but is not a topological order.
    #[default]
    PathDescending,
    /// Number of path components, descending; ties fall back to the raw path
    /// so the order is stable.
    DepthDescending,
}

#[derive(Debug, Default, Clone)]
pub struct Plan {
    pub file_renames: Vec<RenameEntry>,
    pub dir_renames: Vec<RenameEntry>,
}

impl Plan {
    pub fn push(&mut self, entry: RenameEntry) {
        match entry.kind {
            ItemKind::File => self.file_renames.push(entry),
            ItemKind::Directory => self.dir_renames.push(entry),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file_renames.is_empty() && self.dir_renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.file_renames.len() + self.dir_renames.len()
    }

    pub fn order_dirs(&mut self, order: DirOrder) {
        match order {
            DirOrder::PathDescending => self
                .dir_renames
                .sort_by(|a, b| b.source.as_os_str().cmp(a.source.as_os_str())),
            DirOrder::DepthDescending => self.dir_renames.sort_by_key(|entry| {
                (
                    Reverse(entry.source.components().count()),
                    Reverse(entry.source.as_os_str().to_os_string()),
                )
            }),
        }
    }

    /// Files first in discovery order, then directories in their current order.
    pub fn execution_order(&self) -> impl Iterator<Item = &RenameEntry> {
        self.file_renames.iter().chain(self.dir_renames.iter())
    }
}
