//! CLI Adapter.

mod generate;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

const LOG_ENV_VAR: &str = "DOCUMENTOR_LOG";

#[derive(Parser)]
#[command(name = "documentor")]
#[command(version)]
#[command(
    about = "Generate a README and missing docstrings for a source file",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./documentor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a README and insert missing docstrings
    #[clap(visible_alias = "g")]
    Generate {
        /// Source file to document
        file: PathBuf,
        /// Language tag for the generated text (e.g. en, ru-RU)
        #[arg(short, long)]
        lang: Option<String>,
        /// Write README.md and the updated source into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long, conflicts_with = "out_dir")]
        json: bool,
    },
    /// Print the prompt that would be sent, without calling the API
    #[clap(visible_alias = "p")]
    Prompt {
        /// Prompt kind
        #[arg(value_enum)]
        kind: prompt::PromptKindArg,
        /// Source file to embed in the prompt
        file: PathBuf,
        /// Language tag for the prompt wording (e.g. en, ru-RU)
        #[arg(short, long)]
        lang: Option<String>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { file, lang, out_dir, json } => {
            let options = generate::GenerateOptions {
                file,
                language_tag: lang.unwrap_or_else(default_language_tag),
                out_dir,
                json,
                config: cli.config,
            };
            generate::run_generate(options)
        }
        Commands::Prompt { kind, file, lang } => {
            prompt::run_prompt(kind, &file, &lang.unwrap_or_else(default_language_tag))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Language tag derived from `LANG` (`ru_RU.UTF-8` -> `ru-RU`), else `en`.
fn default_language_tag() -> String {
    std::env::var("LANG")
        .ok()
        .and_then(|value| language_tag_from_locale(&value))
        .unwrap_or_else(|| "en".to_string())
}

fn language_tag_from_locale(locale: &str) -> Option<String> {
    let base = locale.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
