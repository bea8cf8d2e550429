//! Configuration parsing.

use crate::domain::{AppConfig, AppError};

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "documentor.toml";

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
