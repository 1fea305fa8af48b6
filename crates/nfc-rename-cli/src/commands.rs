use clap::{Parser, ValueEnum};
use nfc_rename_core::DirOrder;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nfc-rename")]
#[command(
    about = "Rename files and folders with decomposed Unicode names (NFD) to composed form (NFC)",
    long_about = None,
    after_help = "Example: nfc-rename ~/Documents"
)]
pub struct Cli {
    /// Folder to normalize
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show every scanned folder and each planned rename
    #[arg(short, long)]
    pub verbose: bool,

    /// Order in which folder renames are applied (overrides Config.toml)
    #[arg(long, value_enum)]
    pub dir_order: Option<DirOrderArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirOrderArg {
    /// Sort by raw path, descending
    PathDescending,
    /// Sort by path depth, deepest first
    DepthDescending,
}

impl From<DirOrderArg> for DirOrder {
    fn from(arg: DirOrderArg) -> Self {
        match arg {
            DirOrderArg::PathDescending => DirOrder::PathDescending,
            DirOrderArg::DepthDescending => DirOrder::DepthDescending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["nfc-rename"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.verbose);
        assert!(cli.dir_order.is_none());
    }

    #[test]
    fn test_path_verbose_and_order() {
        let cli = Cli::parse_from(["nfc-rename", "-v", "/data", "--dir-order", "depth-descending"]);
        assert_eq!(cli.path, PathBuf::from("/data"));
        assert!(cli.verbose);
        assert_eq!(
            cli.dir_order.map(DirOrder::from),
            Some(DirOrder::DepthDescending)
        );
    }
}
