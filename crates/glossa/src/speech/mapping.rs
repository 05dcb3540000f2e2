//! Speech mapping data and its validated, compiled form.

use std::borrow::Cow;

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

use crate::interpreter::{EvalError, LoadError};

/// Expected number of unit words (1-9).
const UNIT_COUNT: usize = 9;
/// Expected number of teen words (10-19).
const TEEN_COUNT: usize = 10;
/// Expected number of tens words (20, 30, ..., 90).
const TENS_COUNT: usize = 8;

/// Where an [`SpeechRuleData::Insert`] rule places its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    #[default]
    After,
}

/// A rewrite rule as written in mapping data.
///
/// Patterns are regular expressions; look-around is supported. Replacement
/// text uses `$1`, `$&` (whole match) and `$$` (literal `$`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpeechRuleData {
    /// Replace every match.
    Replace { pattern: String, replacement: String },
    /// Insert literal text next to every match.
    Insert {
        pattern: String,
        insertion: String,
        #[serde(default)]
        position: InsertPosition,
    },
}

/// A language variant's numeral vocabulary and rules, as written in data.
///
/// # Example
///
/// ```
/// use glossa::SpeechMappingData;
///
/// let data: SpeechMappingData = serde_json::from_str(r#"{
///     "negative": "minus", "zero": "zero",
///     "units": ["one","two","three","four","five","six","seven","eight","nine"],
///     "teens": ["ten","eleven","twelve","thirteen","fourteen","fifteen","sixteen","seventeen","eighteen","nineteen"],
///     "tens": ["twenty","thirty","forty","fifty","sixty","seventy","eighty","ninety"],
///     "hundred": "hundred", "thousand": "thousand", "million": "million",
///     "rules": [{ "type": "insert", "pattern": "hundred", "insertion": " and" }]
/// }"#).unwrap();
/// assert_eq!(data.rules.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechMappingData {
    pub negative: String,
    pub zero: String,
    pub units: Vec<String>,
    pub teens: Vec<String>,
    pub tens: Vec<String>,
    pub hundred: String,
    pub thousand: String,
    pub million: String,
    #[serde(default)]
    pub rules: Vec<SpeechRuleData>,
}

/// A compiled rewrite rule.
#[derive(Debug, Clone)]
pub enum SpeechRule {
    Replace {
        pattern: Regex,
        /// Replacement in `${n}` expansion syntax.
        replacement: String,
    },
    Insert {
        pattern: Regex,
        insertion: String,
        position: InsertPosition,
    },
}

impl SpeechRule {
    /// Compile a rule, checking that its replacement only references groups
    /// the pattern defines.
    fn compile(data: &SpeechRuleData) -> Result<SpeechRule, String> {
        match data {
            SpeechRuleData::Replace {
                pattern,
                replacement,
            } => {
                let pattern = Regex::new(pattern).map_err(|e| e.to_string())?;
                let groups = pattern.captures_len().saturating_sub(1);
                let replacement = normalize_replacement(replacement, groups)?;
                Ok(SpeechRule::Replace {
                    pattern,
                    replacement,
                })
            }
            SpeechRuleData::Insert {
                pattern,
                insertion,
                position,
            } => Ok(SpeechRule::Insert {
                pattern: Regex::new(pattern).map_err(|e| e.to_string())?,
                insertion: insertion.clone(),
                position: *position,
            }),
        }
    }

    /// Apply the rule to every match in `text`. `key` and `index` identify
    /// the rule in a matching error.
    fn apply(&self, text: &str, key: &str, index: usize) -> Result<String, EvalError> {
        let failed = |e: fancy_regex::Error| EvalError::SpeechRule {
            key: key.to_string(),
            index,
            reason: e.to_string(),
        };
        match self {
            SpeechRule::Replace {
                pattern,
                replacement,
            } => pattern
                .try_replacen(text, 0, replacement.as_str())
                .map(Cow::into_owned)
                .map_err(failed),
            SpeechRule::Insert {
                pattern,
                insertion,
                position,
            } => {
                let mut result = String::with_capacity(text.len());
                let mut last = 0;
                for found in pattern.find_iter(text) {
                    let found = found.map_err(failed)?;
                    result.push_str(&text[last..found.start()]);
                    if *position == InsertPosition::Before {
                        result.push_str(insertion);
                    }
                    result.push_str(found.as_str());
                    if *position == InsertPosition::After {
                        result.push_str(insertion);
                    }
                    last = found.end();
                }
                result.push_str(&text[last..]);
                Ok(result)
            }
        }
    }
}

/// Rewrite `$1` / `$&` / `$$` replacement syntax into `${1}` / `${0}` / `$$`.
///
/// A two-digit reference is used when that group exists, otherwise a single
/// digit, matching how such replacements are usually read. References to
/// groups the pattern does not define are rejected. A `$` not followed by a
/// digit, `&` or `$` is kept literally.
fn normalize_replacement(replacement: &str, groups: usize) -> Result<String, String> {
    let mut result = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                result.push_str("$$");
            }
            Some('&') => {
                chars.next();
                result.push_str("${0}");
            }
            Some(first) if first.is_ascii_digit() => {
                chars.next();
                let first = digit(first);
                let two_digit = chars
                    .peek()
                    .copied()
                    .filter(char::is_ascii_digit)
                    .map(|second| first * 10 + digit(second))
                    .filter(|&n| (1..=groups).contains(&n));
                let group = match two_digit {
                    Some(n) => {
                        chars.next();
                        n
                    }
                    None => first,
                };
                if group == 0 || group > groups {
                    return Err(format!(
                        "replacement references group ${group} but the pattern has {groups} group(s)"
                    ));
                }
                result.push_str(&format!("${{{group}}}"));
            }
            _ => result.push_str("$$"),
        }
    }
    Ok(result)
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}

/// A validated speech mapping with compiled rules.
#[derive(Debug, Clone)]
pub struct SpeechMapping {
    key: String,
    negative: String,
    zero: String,
    units: Vec<String>,
    teens: Vec<String>,
    tens: Vec<String>,
    hundred: String,
    thousand: String,
    million: String,
    rules: Vec<SpeechRule>,
}

impl SpeechMapping {
    /// Validate vocabulary sizes and compile rules.
    ///
    /// Fails with [`LoadError::InvalidSpeechMapping`] if `units`, `teens` or
    /// `tens` do not hold exactly 9, 10 and 8 words, and with
    /// [`LoadError::InvalidSpeechRule`] for a pattern that does not compile or
    /// a replacement that references a missing group.
    pub fn compile(key: impl Into<String>, data: SpeechMappingData) -> Result<Self, LoadError> {
        let key = key.into();
        check_len(&key, "units", &data.units, UNIT_COUNT)?;
        check_len(&key, "teens", &data.teens, TEEN_COUNT)?;
        check_len(&key, "tens", &data.tens, TENS_COUNT)?;

        let rules = data
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                SpeechRule::compile(rule).map_err(|reason| LoadError::InvalidSpeechRule {
                    key: key.clone(),
                    index,
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SpeechMapping {
            key,
            negative: data.negative,
            zero: data.zero,
            units: data.units,
            teens: data.teens,
            tens: data.tens,
            hundred: data.hundred,
            thousand: data.thousand,
            million: data.million,
            rules,
        })
    }

    /// The key this mapping was compiled under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn negative(&self) -> &str {
        &self.negative
    }

    pub fn zero(&self) -> &str {
        &self.zero
    }

    /// Word for a digit 1-9.
    pub fn unit(&self, digit: u64) -> &str {
        word(&self.units, digit.checked_sub(1))
    }

    /// Word for 10-19.
    pub fn teen(&self, value: u64) -> &str {
        word(&self.teens, value.checked_sub(10))
    }

    /// Word for a tens digit 2-9.
    pub fn tens(&self, digit: u64) -> &str {
        word(&self.tens, digit.checked_sub(2))
    }

    pub fn hundred(&self) -> &str {
        &self.hundred
    }

    pub fn thousand(&self) -> &str {
        &self.thousand
    }

    pub fn million(&self) -> &str {
        &self.million
    }

    pub fn rules(&self) -> &[SpeechRule] {
        &self.rules
    }

    /// Run every rule in order, each over the previous rule's output.
    pub fn apply_rules(&self, phrase: String) -> Result<String, EvalError> {
        self.rules
            .iter()
            .enumerate()
            .try_fold(phrase, |text, (index, rule)| {
                rule.apply(&text, &self.key, index)
            })
    }
}

fn word(words: &[String], index: Option<u64>) -> &str {
    index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| words.get(i))
        .map_or("", String::as_str)
}

fn check_len(key: &str, field: &str, words: &[String], expected: usize) -> Result<(), LoadError> {
    if words.len() == expected {
        Ok(())
    } else {
        Err(LoadError::InvalidSpeechMapping {
            key: key.to_string(),
            reason: format!("'{field}' needs {expected} words, found {}", words.len()),
        })
    }
}
