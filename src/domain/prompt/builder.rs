//! Prompt templates for the documentation pipeline.
//!
//! Each prompt kind is an embedded minijinja template. Source code is passed in
//! as a template variable, so anything inside it (including `{{ ... }}`) is
//! copied through verbatim.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, PromptLocale};

mod templates {
    pub static README_EN: &str = include_str!("../../assets/prompts/readme_en.md.j2");
    pub static README_RU: &str = include_str!("../../assets/prompts/readme_ru.md.j2");
    pub static DISCOVERY: &str = include_str!("../../assets/prompts/discovery.md.j2");
    pub static DOCSTRING_EN: &str = include_str!("../../assets/prompts/docstring_en.md.j2");
    pub static DOCSTRING_RU: &str = include_str!("../../assets/prompts/docstring_ru.md.j2");
}

/// The three prompts the pipeline sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Readme,
    Discovery,
    Docstring,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Readme => "readme",
            PromptKind::Discovery => "discovery",
            PromptKind::Docstring => "docstring",
        }
    }

    fn template(&self, locale: PromptLocale) -> (&'static str, &'static str) {
        match (self, locale) {
            (PromptKind::Readme, PromptLocale::English) => ("readme_en.md.j2", templates::README_EN),
            (PromptKind::Readme, PromptLocale::Russian) => ("readme_ru.md.j2", templates::README_RU),
            (PromptKind::Discovery, _) => ("discovery.md.j2", templates::DISCOVERY),
            (PromptKind::Docstring, PromptLocale::English) => {
                ("docstring_en.md.j2", templates::DOCSTRING_EN)
            }
            (PromptKind::Docstring, PromptLocale::Russian) => {
                ("docstring_ru.md.j2", templates::DOCSTRING_RU)
            }
        }
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(
    kind: PromptKind,
    locale: PromptLocale,
    ctx: minijinja::Value,
) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    let (name, source) = kind.template(locale);
    env.render_named_str(name, source, ctx).map_err(|err| AppError::PromptAssembly {
        template: name.to_string(),
        reason: err.to_string(),
    })
}

/// Build the prompt asking for a README of `code`.
pub fn build_readme_prompt(code: &str, language_tag: &str) -> Result<String, AppError> {
    render(PromptKind::Readme, PromptLocale::from_tag(language_tag), context! { code => code })
}

/// Build the prompt asking which functions in `code` lack documentation.
///
/// The discovery prompt is not localized: its output is machine-read JSON.
pub fn build_function_discovery_prompt(code: &str) -> Result<String, AppError> {
    render(PromptKind::Discovery, PromptLocale::English, context! { code => code })
}

/// Build the prompt asking for `function_code` with a docstring inserted.
pub fn build_docstring_prompt(function_code: &str, language_tag: &str) -> Result<String, AppError> {
    render(
        PromptKind::Docstring,
        PromptLocale::from_tag(language_tag),
        context! { function_code => function_code },
    )
}
