//! Error types for translation loading and evaluation.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading translations or speech mappings.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Translation payload is not a mapping, or contains a value that is
    /// neither text, plural forms, nor a nested namespace.
    #[error(
        "invalid translation data{}{}: {reason}",
        locale_suffix(.locale.as_deref()),
        path_suffix(.path)
    )]
    InvalidTranslationData {
        locale: Option<String>,
        path: String,
        reason: String,
    },

    /// Speech mapping vocabulary has the wrong shape.
    #[error("invalid speech mapping '{key}': {reason}")]
    InvalidSpeechMapping { key: String, reason: String },

    /// A speech rule pattern or replacement failed to compile.
    #[error("invalid rule #{index} in speech mapping '{key}': {reason}")]
    InvalidSpeechRule {
        key: String,
        index: usize,
        reason: String,
    },

    /// JSON syntax or structure error.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error when reading a data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Attempted to reload translations that were not loaded from a file.
    #[error("cannot reload '{locale}': was not loaded from a file")]
    NoPathForReload { locale: String },
}

/// An error that occurred while resolving a translation or speaking a number.
#[derive(Debug, Error)]
pub enum EvalError {
    /// No translations for the requested locale or its base language, with
    /// `throw_on_error` enabled.
    #[error("invalid locale '{locale}': no translations loaded")]
    InvalidLocale { locale: String },

    /// Key lookup failed with `throw_on_error` enabled.
    #[error(
        "missing translation key '{key}' for locale '{locale}'{}",
        did_you_mean(.suggestions)
    )]
    MissingTranslation {
        key: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// A `{{name}}` placeholder survived interpolation.
    #[error(
        "missing variable {}{}",
        .placeholders.join(", "),
        key_suffix(.key.as_deref())
    )]
    MissingInterpolationVariable {
        key: Option<String>,
        placeholders: Vec<String>,
    },

    /// Requested speech mapping is not registered.
    #[error("speech mapping '{key}' not found, available: {}", .available.join(", "))]
    UnknownSpeechMapping { key: String, available: Vec<String> },

    /// A speech rule hit a runtime matching error (e.g. backtrack limit).
    #[error("rule #{index} of speech mapping '{key}' failed: {reason}")]
    SpeechRule {
        key: String,
        index: usize,
        reason: String,
    },
}

/// A non-fatal issue found when comparing two locales' translations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// Key exists in the target locale but not in the source.
    #[error("key '{key}' in '{locale}' does not exist in the source locale")]
    UnknownKey { key: String, locale: String },

    /// Key has a different shape than in the source (text, plural, namespace).
    #[error("key '{key}' in '{locale}' is {found}, source has {expected}")]
    ShapeMismatch {
        key: String,
        locale: String,
        expected: &'static str,
        found: &'static str,
    },
}

fn locale_suffix(locale: Option<&str>) -> String {
    locale.map(|l| format!(" for locale '{l}'")).unwrap_or_default()
}

fn path_suffix(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at '{path}'")
    }
}

fn key_suffix(key: Option<&str>) -> String {
    key.map(|k| format!(" for translation key '{k}'"))
        .unwrap_or_default()
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a misspelled key.
///
/// Candidates within Levenshtein distance 1 (keys of up to 3 characters) or
/// 2 (longer keys) are returned closest first, at most three of them. Exact
/// matches are never suggested.
///
/// # Example
///
/// ```
/// use glossa::compute_suggestions;
///
/// let available = vec!["home".to_string(), "about".to_string()];
/// assert_eq!(compute_suggestions("hmoe", &available), vec!["home"]);
/// ```
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(key, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    suggestions.sort_by(|(a_dist, a), (b_dist, b)| a_dist.cmp(b_dist).then_with(|| a.cmp(b)));
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
