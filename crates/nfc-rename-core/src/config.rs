use crate::error::Result;
use crate::plan::DirOrder;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dir_order: DirOrder,
}

/// Reads `Config.toml` from the working directory if present, then
/// `NFC_RENAME_*` environment variables. Missing sources fall back to defaults.
pub fn load_configuration() -> Result<AppConfig> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("NFC_RENAME"));
    from_builder(builder)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig> {
    Ok(builder.build()?.try_deserialize::<AppConfig>()?)
}
