//! Text patching of the working copy.
//!
//! Functions are located by exact text, not by structure. Only the first
//! occurrence of a function's text is ever replaced.

/// Mutable copy of the source text, exclusively owned by the patch loop.
#[derive(Debug, Clone)]
pub struct WorkingCopy {
    text: String,
}

impl WorkingCopy {
    pub fn new(original: &str) -> Self {
        Self { text: original.to_string() }
    }

    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.text.contains(needle)
    }

    /// Replace the first occurrence of `needle`. Returns `false` when absent.
    pub fn replace_first(&mut self, needle: &str, replacement: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self.text.find(needle) {
            Some(start) => {
                self.text.replace_range(start..start + needle.len(), replacement);
                true
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

const FENCE: &str = "```";

/// Strip a surrounding Markdown code fence and whitespace from a model response.
///
/// The opening fence line (including an info string such as `python`) and a
/// trailing fence are removed independently; unfenced text is only trimmed.
pub fn strip_code_fences(response: &str) -> &str {
    let mut text = response.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.split_once('\n') {
            Some((_info, body)) => body,
            None => rest,
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}
