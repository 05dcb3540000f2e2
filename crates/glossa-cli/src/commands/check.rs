//! Implementation of the `glossa check` command.

use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use glossa::parser::parse_namespace;
use glossa::{LoadWarning, LocaleId, Namespace, Translator, leaf_keys};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::GlossaDiagnostic;

const SOURCE: &str = "source";
const TARGET: &str = "target";

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Translation files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Compare each file's keys against this source file
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of checking one file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    keys: usize,
    error: Option<String>,
    warnings: Vec<String>,
}

/// The locale a translation file holds, taken from its file stem.
fn locale_for(path: &Path) -> LocaleId {
    LocaleId::new(
        path.file_stem()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default(),
    )
}

/// Parse a file. Syntax errors become a diagnostic unless `json` output is
/// requested; shape errors are returned as a message.
fn load(path: &Path, json: bool) -> miette::Result<Result<Namespace, String>> {
    let content = read_to_string(path).into_diagnostic()?;
    let data: serde_json::Value = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(e) if json => return Ok(Err(e.to_string())),
        Err(e) => return Err(GlossaDiagnostic::from_json_error(path, &content, &e).into()),
    };
    Ok(parse_namespace(Some(&locale_for(path)), data).map_err(|e| e.to_string()))
}

/// Shape warnings and untranslated keys of `target` relative to `source`.
fn compare(source: &Namespace, target: Namespace) -> Vec<String> {
    let mut translator = Translator::new();
    translator.store_mut().set(SOURCE.into(), source.clone());
    translator.store_mut().set(TARGET.into(), target);

    let warnings = translator.validate_translations(SOURCE, TARGET);
    let missing = translator.missing_keys(SOURCE, TARGET);
    warnings
        .iter()
        .map(LoadWarning::to_string)
        .chain(
            missing
                .into_iter()
                .map(|key| format!("key '{key}' is not translated")),
        )
        .collect()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let source = match &args.source {
        Some(path) => match load(path, false)? {
            Ok(namespace) => Some(namespace),
            Err(message) => {
                return Err(miette::miette!(
                    "Invalid source file {}: {message}",
                    path.display()
                ));
            }
        },
        None => None,
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let mut report = FileReport {
            file: file.display().to_string(),
            keys: 0,
            error: None,
            warnings: Vec::new(),
        };
        match load(file, args.json)? {
            Ok(namespace) => {
                report.keys = leaf_keys(&namespace).len();
                if let Some(source) = &source {
                    report.warnings = compare(source, namespace);
                }
            }
            Err(message) => report.error = Some(message),
        }
        reports.push(report);
    }

    let failed = reports.iter().any(|r| r.error.is_some());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        for report in &reports {
            match &report.error {
                Some(error) => println!("{} {}: {error}", "✗".red(), report.file),
                None => println!("{} {} ({} keys)", "✓".green(), report.file, report.keys),
            }
            for warning in &report.warnings {
                println!("  {} {warning}", "warning:".yellow());
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
