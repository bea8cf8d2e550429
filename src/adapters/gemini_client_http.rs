//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig, GenerationError, ResponseSchema};
use crate::ports::{GenerationClient, GenerationRequest};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const JSON_MIME_TYPE: &str = "application/json";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: generate_content_url(config)?, client })
    }

    /// Create from environment variables with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "{} environment variable not set",
                    API_KEY_VARS.join(" or ")
                ))
            })?;

        Self::new(api_key, config)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn generate_content_url(config: &GeminiApiConfig) -> Result<Url, AppError> {
    let raw = format!(
        "{}/models/{}:generateContent",
        config.api_url.as_str().trim_end_matches('/'),
        config.model.trim()
    );
    Url::parse(&raw)
        .map_err(|e| AppError::Configuration(format!("Invalid Gemini endpoint '{}': {}", raw, e)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a ResponseSchema,
}

impl<'a> ApiRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content { role: "user", parts: vec![Part { text: &request.prompt }] }],
            generation_config: request.schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    /// Text of the first candidate, with all parts concatenated.
    fn into_text(self) -> Result<String, GenerationError> {
        let block_reason = self.prompt_feedback.and_then(|feedback| feedback.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(GenerationError::EmptyResponse(block_reason));
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = block_reason.or(candidate.finish_reason.filter(|r| r != "STOP"));
            return Err(GenerationError::EmptyResponse(reason));
        }
        Ok(text)
    }
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let api_request = ApiRequest::from_request(request);

        tracing::debug!(
            endpoint = %self.endpoint,
            structured = request.is_structured(),
            prompt_chars = request.prompt.chars().count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, JSON_MIME_TYPE)
            .json(&api_request)
            .send()
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Api { status: status.as_u16(), body });
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| GenerationError::Decode(e.to_string()))?;
        api_response.into_text()
    }
}
