//! CLI command implementations.

mod check;
mod coverage;
mod speak;
mod translate;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use speak::{SpeakArgs, run_speak};
pub use translate::{TranslateArgs, run_translate};

/// Parse a `key=value` argument.
pub(crate) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument '{s}': expected key=value"))?;
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_key_val;

    #[test]
    fn splits_at_first_equals() {
        assert_eq!(
            parse_key_val("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn rejects_missing_equals() {
        assert!(parse_key_val("title").is_err());
    }
}
