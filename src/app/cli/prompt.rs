//! Prompt preview command.

use std::path::Path;

use clap::ValueEnum;

use crate::app::api;
use crate::domain::{AppError, PromptKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PromptKindArg {
    Readme,
    Discovery,
    Docstring,
}

impl From<PromptKindArg> for PromptKind {
    fn from(arg: PromptKindArg) -> Self {
        match arg {
            PromptKindArg::Readme => PromptKind::Readme,
            PromptKindArg::Discovery => PromptKind::Discovery,
            PromptKindArg::Docstring => PromptKind::Docstring,
        }
    }
}

pub fn run_prompt(kind: PromptKindArg, file: &Path, language_tag: &str) -> Result<(), AppError> {
    let prompt = api::preview_prompt(kind.into(), file, language_tag)?;
    print!("{}", prompt);
    Ok(())
}
