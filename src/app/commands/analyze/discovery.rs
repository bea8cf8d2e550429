//! Discovery of functions that lack documentation.

use serde_json::Value;

use crate::domain::prompt::{FUNCTION_CODE_FIELD, build_function_discovery_prompt};
use crate::domain::{AppError, GenerationPhase, ResponseSchema, UndocumentedFunction};
use crate::ports::{GenerationClient, GenerationRequest};

/// Ask the model for every undocumented function in `code`.
///
/// A response that cannot be read as a JSON array yields an empty list rather
/// than an error.
pub fn discover_functions<C: GenerationClient + ?Sized>(
    client: &C,
    code: &str,
) -> Result<Vec<UndocumentedFunction>, AppError> {
    let prompt = build_function_discovery_prompt(code)?;
    let request = GenerationRequest::json(prompt, ResponseSchema::function_array());
    let response = client
        .generate(&request)
        .map_err(|err| AppError::generation(GenerationPhase::Discovery, err))?;

    Ok(parse_discovery_response(&response))
}

/// Read the discovery payload, keeping entries with a non-empty string `function_code`.
pub fn parse_discovery_response(response: &str) -> Vec<UndocumentedFunction> {
    let entries = match serde_json::from_str::<Value>(response.trim()) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "discovery response is not a JSON array");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse discovery response as JSON");
            return Vec::new();
        }
    };

    let total = entries.len();
    let functions: Vec<UndocumentedFunction> = entries
        .iter()
        .filter_map(|entry| entry.get(FUNCTION_CODE_FIELD).and_then(Value::as_str))
        .filter(|code| !code.is_empty())
        .map(UndocumentedFunction::new)
        .collect();

    if functions.len() < total {
        tracing::debug!(dropped = total - functions.len(), "ignored malformed discovery entries");
    }
    functions
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
