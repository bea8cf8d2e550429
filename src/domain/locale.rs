//! Prompt wording selection.

/// Language the instruction prompts are written in.
///
/// Only two wording sets exist. Any UI language tag that is not Russian falls
/// back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptLocale {
    #[default]
    English,
    Russian,
}

impl PromptLocale {
    const RUSSIAN_PREFIX: &'static str = "ru";

    /// Reduce a language tag (`"ru"`, `"ru-RU"`, `"en-US"`, ...) to a prompt locale.
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with(Self::RUSSIAN_PREFIX) {
            PromptLocale::Russian
        } else {
            PromptLocale::English
        }
    }

    /// Suffix used in template names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLocale::English => "en",
            PromptLocale::Russian => "ru",
        }
    }
}
