//! Documentation generation pipeline.
//!
//! README generation and function discovery run concurrently; docstring
//! requests then run one at a time against a single working copy of the source.

pub mod discovery;
pub mod patch;

use std::thread;

use crate::domain::prompt::{build_docstring_prompt, build_readme_prompt};
use crate::domain::{
    AppError, GenerationError, GenerationPhase, GenerationResult, SourceDocument,
    UndocumentedFunction,
};
use crate::ports::{GenerationClient, GenerationRequest};

pub use discovery::{discover_functions, parse_discovery_response};
pub use patch::{WorkingCopy, strip_code_fences};

/// Counts from the patch phase of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub discovered: usize,
    pub patched: usize,
    pub skipped: usize,
}

/// Run the full pipeline for one document.
///
/// Any failed generation call aborts the run. A discovery response that is
/// not a JSON array only means no functions get documented.
pub fn execute<C>(client: &C, document: &SourceDocument) -> Result<GenerationResult, AppError>
where
    C: GenerationClient + Sync + ?Sized,
{
    if document.is_empty() {
        return Err(AppError::InputMissing);
    }

    let code = document.code();
    let language_tag = document.language_tag();
    tracing::info!(
        file = document.name().unwrap_or("<input>"),
        language = language_tag,
        chars = code.chars().count(),
        "starting documentation run"
    );

    let (readme, functions) = thread::scope(|scope| {
        let readme = scope.spawn(|| generate_readme(client, code, language_tag));
        let functions = discover_functions(client, code);
        let readme = readme.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (readme, functions)
    });
    let readme = readme?;
    let functions = functions?;

    let (updated_code, summary) = document_functions(client, code, &functions, language_tag)?;
    tracing::info!(
        discovered = summary.discovered,
        patched = summary.patched,
        skipped = summary.skipped,
        "documentation run complete"
    );

    Ok(GenerationResult { readme, updated_code })
}

fn generate_readme<C>(client: &C, code: &str, language_tag: &str) -> Result<String, AppError>
where
    C: GenerationClient + ?Sized,
{
    let prompt = build_readme_prompt(code, language_tag)?;
    let readme = client
        .generate(&GenerationRequest::text(prompt))
        .map_err(|err| AppError::generation(GenerationPhase::Readme, err))?;

    if readme.trim().is_empty() {
        return Err(AppError::generation(
            GenerationPhase::Readme,
            GenerationError::EmptyResponse(None),
        ));
    }
    Ok(readme)
}

/// Patch a documented version of each function into a copy of `code`.
///
/// Functions are handled strictly in the given order. A function whose text is
/// no longer present (already rewritten by an overlapping entry, or never
/// present verbatim) is skipped without a request.
pub fn document_functions<C>(
    client: &C,
    code: &str,
    functions: &[UndocumentedFunction],
    language_tag: &str,
) -> Result<(String, PatchSummary), AppError>
where
    C: GenerationClient + ?Sized,
{
    let mut working = WorkingCopy::new(code);
    let mut summary = PatchSummary { discovered: functions.len(), ..PatchSummary::default() };

    for (index, function) in functions.iter().enumerate() {
        let original = function.function_code.as_str();
        if !working.contains(original) {
            tracing::debug!(index, "function text not found in working copy, skipping");
            summary.skipped += 1;
            continue;
        }

        let prompt = build_docstring_prompt(original, language_tag)?;
        let response = client
            .generate(&GenerationRequest::text(prompt))
            .map_err(|err| AppError::generation(GenerationPhase::Docstring, err))?;

        let documented = strip_code_fences(&response);
        if documented.is_empty() {
            return Err(AppError::generation(
                GenerationPhase::Docstring,
                GenerationError::EmptyResponse(None),
            ));
        }

        working.replace_first(original, documented);
        summary.patched += 1;
    }

    Ok((working.into_string(), summary))
}
