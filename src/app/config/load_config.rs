//! Configuration loading from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::{CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{AppConfig, AppError};

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `documentor.toml` in `dir` is
/// used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let config_path: PathBuf = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}
