//! Entities of a single generation run.

use serde::Serialize;

/// Uploaded source text plus the UI language tag used to localize prompts.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    code: String,
    language_tag: String,
    name: Option<String>,
}

impl SourceDocument {
    pub fn new(code: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self { code: code.into(), language_tag: language_tag.into(), name: None }
    }

    /// Attach the file name the text was read from.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// A function the model reported as lacking documentation.
///
/// Identity is the exact source text; there is no name or line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndocumentedFunction {
    pub function_code: String,
}

impl UndocumentedFunction {
    pub fn new(function_code: impl Into<String>) -> Self {
        Self { function_code: function_code.into() }
    }
}

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated README in Markdown.
    pub readme: String,
    /// Source text with documented functions patched in.
    pub updated_code: String,
}
