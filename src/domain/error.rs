use std::fmt;
use std::io;

use thiserror::Error;

/// Library-wide error type for documentor operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No source text was handed to the pipeline.
    #[error("No source code provided")]
    InputMissing,

    /// A built-in prompt template failed to render.
    #[error("Prompt assembly failed for '{template}': {reason}")]
    PromptAssembly { template: String, reason: String },

    /// A call to the generation service failed.
    #[error("{phase} generation failed: {source}")]
    Generation {
        phase: GenerationPhase,
        #[source]
        source: GenerationError,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap a client failure with the pipeline phase it happened in.
    pub fn generation(phase: GenerationPhase, source: GenerationError) -> Self {
        AppError::Generation { phase, source }
    }
}

/// Pipeline step an external generation call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Readme,
    Discovery,
    Docstring,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Readme => "README",
            GenerationPhase::Discovery => "Function discovery",
            GenerationPhase::Docstring => "Docstring",
        }
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single call to the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The service answered but the body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The service answered without any generated text.
    #[error("Response contained no text{}", block_suffix(.0))]
    EmptyResponse(Option<String>),
}

fn block_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(" (blocked: {r})")).unwrap_or_default()
}
