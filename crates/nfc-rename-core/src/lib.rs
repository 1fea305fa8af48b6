pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod plan;
pub mod reporter;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{ExecuteStats, NormalizeEngine, RunSummary};
pub use error::{Error, Result};
pub use plan::{DirOrder, Item, ItemKind, Plan, RenameEntry};
pub use reporter::{Reporter, SilentReporter};
pub use scanner::ScanOutcome;
