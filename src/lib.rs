//! documentor: generate a README and missing docstrings for a source file with Gemini.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpGeminiClient;
pub use app::api::{
    analyze, analyze_file, analyze_with_client, analyze_with_config, load_app_config,
    preview_prompt,
};
pub use domain::{
    AppConfig, AppError, GeminiApiConfig, GenerationError, GenerationPhase, GenerationResult,
    PromptKind, PromptLocale, ResponseSchema, SourceDocument, UndocumentedFunction,
};
pub use ports::{GenerationClient, GenerationRequest};
