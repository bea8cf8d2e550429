//! Generate command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::api;
use crate::domain::{AppError, GenerationResult};

const README_FILE_NAME: &str = "README.md";

pub struct GenerateOptions {
    pub file: PathBuf,
    pub language_tag: String,
    pub out_dir: Option<PathBuf>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

pub fn run_generate(options: GenerateOptions) -> Result<(), AppError> {
    let config = api::load_app_config(options.config)?;
    let result = api::analyze_file(&options.file, &options.language_tag, &config)?;

    if let Some(out_dir) = options.out_dir {
        let written = write_outputs(&result, &options.file, &out_dir)?;
        for path in written {
            println!("✅ Wrote {}", path.display());
        }
    } else if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, &options.file);
    }
    Ok(())
}

fn print_result(result: &GenerationResult, source: &Path) {
    println!("=== {} ===", README_FILE_NAME);
    println!("{}", result.readme.trim_end());
    println!();
    println!("=== {} ===", display_name(source));
    println!("{}", result.updated_code.trim_end());
}

/// Write `README.md` and the updated source into `out_dir`.
fn write_outputs(
    result: &GenerationResult,
    source: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    if display_name(source) == README_FILE_NAME {
        return Err(AppError::config_error(format!(
            "Input file {} would collide with the generated {}; rename it or print to stdout",
            source.display(),
            README_FILE_NAME
        )));
    }

    fs::create_dir_all(out_dir)?;

    let code_path = out_dir.join(display_name(source));
    if fs::canonicalize(source)? == fs::canonicalize(out_dir)?.join(display_name(source)) {
        return Err(AppError::config_error(format!(
            "Refusing to overwrite the input file {}; choose another --out-dir",
            source.display()
        )));
    }

    let readme_path = out_dir.join(README_FILE_NAME);
    fs::write(&readme_path, &result.readme)?;
    fs::write(&code_path, &result.updated_code)?;
    Ok(vec![readme_path, code_path])
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "source".to_string())
}
