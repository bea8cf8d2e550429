//! Prompt preview: render what would be sent, without calling the service.

use crate::domain::prompt::{
    PromptKind, build_docstring_prompt, build_function_discovery_prompt, build_readme_prompt,
};
use crate::domain::{AppError, SourceDocument};

/// Render the `kind` prompt for `document`.
///
/// For docstring prompts the whole document stands in for the function text.
pub fn execute(kind: PromptKind, document: &SourceDocument) -> Result<String, AppError> {
    if document.is_empty() {
        return Err(AppError::InputMissing);
    }

    let code = document.code();
    let language_tag = document.language_tag();
    match kind {
        PromptKind::Readme => build_readme_prompt(code, language_tag),
        PromptKind::Discovery => build_function_discovery_prompt(code),
        PromptKind::Docstring => build_docstring_prompt(code, language_tag),
    }
}
