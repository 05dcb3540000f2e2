//! Placeholder scanner using winnow.
//!
//! A placeholder is `{{`, one or more characters other than `}`, then `}}`.
//! Any other text, including a lone `{{`, is skipped.

use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_till};

/// Find every `{{...}}` token in `text`, in order of appearance.
///
/// # Example
///
/// ```
/// use glossa::parser::find_placeholders;
///
/// let found = find_placeholders("Hi {{name}}, {{count}} new {{ }}");
/// assert_eq!(found, vec!["{{name}}", "{{count}}", "{{ }}"]);
/// assert!(find_placeholders("no {{}} tokens {here}").is_empty());
/// ```
pub fn find_placeholders(text: &str) -> Vec<&str> {
    let mut remaining = text;
    placeholders.parse_next(&mut remaining).unwrap_or_default()
}

/// Scan the whole input, keeping only placeholder tokens.
fn placeholders<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    let segments: Vec<Option<&str>> = repeat(0.., segment).parse_next(input)?;
    Ok(segments.into_iter().flatten().collect())
}

/// Parse a placeholder, or skip a single character.
fn segment<'s>(input: &mut &'s str) -> ModalResult<Option<&'s str>> {
    alt((placeholder.map(Some), any.value(None))).parse_next(input)
}

/// Parse `{{name}}`, returning the full token including braces.
fn placeholder<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    ("{{", take_till(1.., '}'), "}}").take().parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::find_placeholders;

    #[test]
    fn finds_adjacent_placeholders() {
        assert_eq!(find_placeholders("{{a}}{{b}}"), vec!["{{a}}", "{{b}}"]);
    }

    #[test]
    fn skips_unterminated_placeholder() {
        assert!(find_placeholders("{{name} and {{other").is_empty());
    }

    #[test]
    fn triple_brace_starts_at_first_pair() {
        // `{{{x}}` matches as `{{` + `{x` + `}}`.
        assert_eq!(find_placeholders("{{{x}}"), vec!["{{{x}}"]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            find_placeholders("Välkommen {{namn}}!"),
            vec!["{{namn}}"]
        );
    }
}
