//! Implementation of the `glossa translate` command.

use std::fs::read_to_string;

use clap::Args;
use glossa::{
    Config, LoadError, LocaleId, Quantity, Resolution, ResolutionSource, TranslateOptions,
    Translator, Value, Variables,
};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::parse_key_val;
use crate::output::GlossaDiagnostic;

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Translation files in locale=path format (repeatable)
    #[arg(short, long = "file", value_parser = parse_key_val, required = true)]
    pub files: Vec<(String, String)>,

    /// Dotted translation key
    #[arg(long, short)]
    pub key: String,

    /// Locale to translate into. Defaults to the first file's locale.
    #[arg(long, short)]
    pub locale: Option<String>,

    /// Quantity for plural selection and {{quantity}}; fractions like 1.5 are allowed
    #[arg(long, short, allow_negative_numbers = true)]
    pub quantity: Option<Quantity>,

    /// Variables in name=value format (repeatable)
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Fail instead of printing the key when the translation is missing
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Debug, Serialize)]
struct TranslateJson {
    text: String,
    requested_locale: String,
    locale: Option<String>,
    category: Option<String>,
    source: &'static str,
}

impl From<Resolution> for TranslateJson {
    fn from(resolution: Resolution) -> Self {
        TranslateJson {
            text: resolution.text,
            requested_locale: resolution.requested_locale.to_string(),
            locale: resolution.locale.as_ref().map(ToString::to_string),
            category: resolution.category.map(|c| c.as_str().to_string()),
            source: match resolution.source {
                ResolutionSource::Translation => "translation",
                ResolutionSource::Handler => "handler",
                ResolutionSource::Key => "key",
            },
        }
    }
}

/// Numbers become numeric values, everything else stays text.
fn parse_variables(vars: Vec<(String, String)>) -> Variables {
    vars.into_iter()
        .map(|(name, raw)| {
            let value = if let Ok(n) = raw.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = raw.parse::<f64>() {
                Value::from(f)
            } else {
                Value::from(raw)
            };
            (name, value)
        })
        .collect()
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let config = Config::builder().throw_on_error(args.strict).build();
    let mut translator = Translator::with_config(config);

    for (locale, path) in &args.files {
        match translator.load_translations(locale.as_str(), path) {
            Ok(count) => tracing::debug!(%locale, %path, count, "loaded translations"),
            Err(LoadError::Json { path, source }) => {
                let content = read_to_string(&path).into_diagnostic()?;
                return Err(GlossaDiagnostic::from_json_error(&path, &content, &source).into());
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }

    let locale = args
        .locale
        .clone()
        .or_else(|| args.files.first().map(|(locale, _)| locale.clone()))
        .map(LocaleId::new);
    let options = TranslateOptions {
        locale,
        variables: parse_variables(args.vars),
        quantity: args.quantity,
    };

    match translator.resolve(&args.key, &options) {
        Ok(resolution) => {
            if args.json {
                let output = TranslateJson::from(resolution);
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", resolution.text);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Translation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
