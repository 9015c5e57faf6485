mod config;

pub use config::{BookingConfig, Config, DisplayConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/flow-diagnostic[-dev]/` based on FLOW_DIAGNOSTIC_ENV.
///
/// Set FLOW_DIAGNOSTIC_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FLOW_DIAGNOSTIC_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("flow-diagnostic-dev")
    } else {
        base_dir.join("flow-diagnostic")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
