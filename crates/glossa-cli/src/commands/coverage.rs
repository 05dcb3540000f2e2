//! Coverage command implementation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Args;
use glossa::{LocaleId, Translator, leaf_keys};
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::table::{LocaleCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_locale = LocaleId::new(
        args.source
            .file_stem()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default(),
    );

    let mut translator = Translator::new();
    translator
        .load_translations(source_locale.clone(), &args.source)
        .map_err(|e| miette!("Failed to load source file {}: {e}", args.source.display()))?;
    let source_count = translator
        .translations(source_locale.clone())
        .map_or(0, |ns| leaf_keys(ns).len());

    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LocaleCoverage> = Vec::new();
    for lang in &args.lang {
        let locale = LocaleId::new(lang);
        let lang_file = base_dir.join(format!("{lang}.json"));

        if lang_file.exists() {
            translator
                .load_translations(locale.clone(), &lang_file)
                .map_err(|e| miette!("Failed to load translation file {}: {e}", lang_file.display()))?;
        } else {
            tracing::debug!(%locale, file = %lang_file.display(), "no translation file");
        }

        let missing = translator.missing_keys(source_locale.clone(), locale);
        coverage_data.push(LocaleCoverage {
            locale: lang.clone(),
            translated: source_count - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{table}");

        for entry in &coverage_data {
            if !entry.missing.is_empty() {
                println!("\nMissing in {}:", entry.locale);
                for key in &entry.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
