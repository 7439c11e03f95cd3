//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod score;

use std::path::Path;

use docscore_core::DssConfig;

/// Load the effective configuration: explicit path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DssConfig> {
    match config_path {
        Some(path) => Ok(DssConfig::from_file(Path::new(path))?),
        None => Ok(DssConfig::default()),
    }
}
