pub mod app_config;
pub mod parse;

pub use app_config::{AppConfig, GeminiApiConfig};
pub use parse::{CONFIG_FILE_NAME, parse_config_content};
