//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! the HTTP client and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::HttpGeminiClient;
use crate::app::commands::{analyze, prompt};
use crate::app::config::load_config;
use crate::ports::GenerationClient;

pub use crate::domain::{AppConfig, AppError, GenerationResult, PromptKind, SourceDocument};

/// Generate a README and docstrings for `source`.
///
/// Configuration is read from `documentor.toml` in the current directory when
/// present; the API key comes from the environment.
pub fn analyze(source: &str, language_tag: &str) -> Result<GenerationResult, AppError> {
    let config = load_config(None, &std::env::current_dir()?)?;
    analyze_with_config(source, language_tag, &config)
}

/// Generate a README and docstrings for `source` using the given configuration.
pub fn analyze_with_config(
    source: &str,
    language_tag: &str,
    config: &AppConfig,
) -> Result<GenerationResult, AppError> {
    let document = SourceDocument::new(source, language_tag);
    run_with_config(&document, config)
}

/// Generate a README and docstrings for `source` through a caller-supplied client.
pub fn analyze_with_client<C>(
    client: &C,
    source: &str,
    language_tag: &str,
) -> Result<GenerationResult, AppError>
where
    C: GenerationClient + Sync + ?Sized,
{
    analyze::execute(client, &SourceDocument::new(source, language_tag))
}

/// Read `path` and run the pipeline on its contents.
pub fn analyze_file(
    path: &Path,
    language_tag: &str,
    config: &AppConfig,
) -> Result<GenerationResult, AppError> {
    let document = read_document(path, language_tag)?;
    run_with_config(&document, config)
}

/// Render the prompt of the given kind for the file at `path`.
pub fn preview_prompt(kind: PromptKind, path: &Path, language_tag: &str) -> Result<String, AppError> {
    let document = read_document(path, language_tag)?;
    prompt::execute(kind, &document)
}

/// Load configuration from an explicit path or the current directory.
pub fn load_app_config(path: Option<PathBuf>) -> Result<AppConfig, AppError> {
    load_config(path.as_deref(), &std::env::current_dir()?)
}

fn run_with_config(
    document: &SourceDocument,
    config: &AppConfig,
) -> Result<GenerationResult, AppError> {
    if document.is_empty() {
        return Err(AppError::InputMissing);
    }
    let client = HttpGeminiClient::from_env_with_config(&config.gemini)?;
    analyze::execute(&client, document)
}

fn read_document(path: &Path, language_tag: &str) -> Result<SourceDocument, AppError> {
    let code = fs::read_to_string(path)?;
    let document = SourceDocument::new(code, language_tag);
    Ok(match path.file_name() {
        Some(name) => document.with_name(name.to_string_lossy()),
        None => document,
    })
}
