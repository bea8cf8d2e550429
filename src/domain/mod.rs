pub mod configuration;
pub mod document;
pub mod error;
pub mod locale;
pub mod prompt;

pub use configuration::{AppConfig, GeminiApiConfig};
pub use document::{GenerationResult, SourceDocument, UndocumentedFunction};
pub use error::{AppError, GenerationError, GenerationPhase};
pub use locale::PromptLocale;
pub use prompt::{PromptKind, ResponseSchema};
