//! Implementation of the `glossa speak` command.

use clap::Args;
use glossa::SpeechRegistry;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::parse_key_val;
use crate::output::table::format_speech_table;

/// Arguments for the speak command.
#[derive(Debug, Args)]
pub struct SpeakArgs {
    /// Numbers to convert
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Speech mapping to use
    #[arg(long, short, default_value = "american")]
    pub mapping: String,

    /// Extra speech mappings in key=path format (repeatable)
    #[arg(long = "mappings-file", value_parser = parse_key_val)]
    pub mapping_files: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one converted number.
#[derive(Debug, Serialize)]
struct SpeechJson {
    number: i64,
    words: String,
}

/// Run the speak command.
pub fn run_speak(args: SpeakArgs) -> Result<i32> {
    let mut registry = SpeechRegistry::new();
    for (key, path) in &args.mapping_files {
        registry.load_file(key.as_str(), path).into_diagnostic()?;
    }

    let mut rows = Vec::with_capacity(args.numbers.len());
    for &n in &args.numbers {
        match registry.to_speech(n, &args.mapping) {
            Ok(words) => rows.push((n, words)),
            Err(e) => {
                eprintln!("Speech error: {e}");
                return Ok(exitcode::DATAERR);
            }
        }
    }

    if args.json {
        let output: Vec<SpeechJson> = rows
            .into_iter()
            .map(|(number, words)| SpeechJson { number, words })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if let [(_, words)] = rows.as_slice() {
        println!("{words}");
    } else {
        println!("{}", format_speech_table(&rows));
    }
    Ok(exitcode::OK)
}
