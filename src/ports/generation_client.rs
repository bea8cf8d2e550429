//! Generation service port definition.

use crate::domain::{GenerationError, ResponseSchema};

/// Request for a single text generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Prompt text sent as the user turn.
    pub prompt: String,
    /// When set, the service is asked for JSON conforming to this schema.
    pub schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    /// Free-text completion.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), schema: None }
    }

    /// Schema-constrained JSON completion.
    pub fn json(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self { prompt: prompt.into(), schema: Some(schema) }
    }

    pub fn is_structured(&self) -> bool {
        self.schema.is_some()
    }
}

/// Port for the external text generation service.
///
/// One call either returns the generated text or fails. Implementations must
/// not retry.
pub trait GenerationClient {
    /// Submit a prompt and return the generated text.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<C: GenerationClient + ?Sized> GenerationClient for &C {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).generate(request)
    }
}

impl<C: GenerationClient + ?Sized> GenerationClient for Box<C> {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        (**self).generate(request)
    }
}
