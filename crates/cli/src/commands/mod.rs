pub mod chat;
pub mod doctor;
pub mod serve;

use std::path::PathBuf;

use angstrom_config::AppConfig;

/// Load configuration for a command, with a readable error.
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    AppConfig::load(path.as_deref()).map_err(|e| format!("Failed to load config: {e}").into())
}
