//! Chunked numeral rendering.

use crate::interpreter::EvalError;
use crate::speech::mapping::SpeechMapping;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Render `n` as words using `mapping`.
///
/// Zero short-circuits to the mapping's zero word without running rules.
/// Otherwise the magnitude is rendered in millions, thousands and remainder
/// chunks, the mapping's rules are applied in order, and the negative word is
/// prepended for negative input.
///
/// # Example
///
/// ```
/// use glossa::{SpeechRegistry, to_speech};
///
/// let registry = SpeechRegistry::new();
/// let british = registry.get("british").unwrap();
/// assert_eq!(to_speech(101, british).unwrap(), "one hundred and one");
/// assert_eq!(to_speech(-45, british).unwrap(), "minus forty-five");
/// ```
pub fn to_speech(n: i64, mapping: &SpeechMapping) -> Result<String, EvalError> {
    if n == 0 {
        return Ok(mapping.zero().to_string());
    }

    let mut words = Vec::new();
    render_scaled(n.unsigned_abs(), mapping, &mut words);
    let phrase = mapping.apply_rules(words.join(" "))?;

    let result = if n < 0 {
        format!("{} {phrase}", mapping.negative())
    } else {
        phrase
    };
    Ok(result.trim().to_string())
}

/// Push the words for `n`, scale by scale.
///
/// A millions count above 999 is itself rendered through this function, so
/// one billion reads as "one thousand million".
fn render_scaled<'a>(n: u64, mapping: &'a SpeechMapping, words: &mut Vec<&'a str>) {
    let millions = n.div_euclid(MILLION);
    let thousands = n.rem_euclid(MILLION).div_euclid(THOUSAND);
    let rest = n.rem_euclid(THOUSAND);

    if millions > 0 {
        if millions >= THOUSAND {
            render_scaled(millions, mapping, words);
        } else {
            render_chunk(millions, mapping, words);
        }
        push_word(words, mapping.million());
    }
    if thousands > 0 {
        render_chunk(thousands, mapping, words);
        push_word(words, mapping.thousand());
    }
    if rest > 0 {
        render_chunk(rest, mapping, words);
    }
}

/// Push the words for a chunk in 1..=999.
fn render_chunk<'a>(chunk: u64, mapping: &'a SpeechMapping, words: &mut Vec<&'a str>) {
    let hundreds = chunk.div_euclid(100);
    let below_hundred = chunk.rem_euclid(100);

    if hundreds > 0 {
        push_word(words, mapping.unit(hundreds));
        push_word(words, mapping.hundred());
    }
    match below_hundred {
        0 => {}
        1..=9 => push_word(words, mapping.unit(below_hundred)),
        10..=19 => push_word(words, mapping.teen(below_hundred)),
        _ => {
            push_word(words, mapping.tens(below_hundred.div_euclid(10)));
            let units = below_hundred.rem_euclid(10);
            if units > 0 {
                push_word(words, mapping.unit(units));
            }
        }
    }
}

/// Empty vocabulary entries (e.g. a language without a hundred word) add
/// nothing, so no double spaces reach the rules.
fn push_word<'a>(words: &mut Vec<&'a str>, word: &'a str) {
    if !word.is_empty() {
        words.push(word);
    }
}

#[cfg(test)]
mod tests {
    use crate::speech::mapping::{SpeechMapping, SpeechMappingData};
    use crate::speech::to_speech;

    fn digits() -> SpeechMapping {
        let words = |prefix: &str, count: usize| {
            (0..count).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>()
        };
        let data = SpeechMappingData {
            negative: "neg".to_string(),
            zero: "Z".to_string(),
            units: words("u", 9),
            teens: words("t", 10),
            tens: words("x", 8),
            hundred: "H".to_string(),
            thousand: "K".to_string(),
            million: "M".to_string(),
            rules: Vec::new(),
        };
        SpeechMapping::compile("digits", data).unwrap()
    }

    #[test]
    fn chunk_words_index_the_vocabulary() {
        let mapping = digits();
        assert_eq!(to_speech(1, &mapping).unwrap(), "u0");
        assert_eq!(to_speech(9, &mapping).unwrap(), "u8");
        assert_eq!(to_speech(10, &mapping).unwrap(), "t0");
        assert_eq!(to_speech(19, &mapping).unwrap(), "t9");
        assert_eq!(to_speech(20, &mapping).unwrap(), "x0");
        assert_eq!(to_speech(99, &mapping).unwrap(), "x7 u8");
        assert_eq!(to_speech(999, &mapping).unwrap(), "u8 H x7 u8");
    }

    #[test]
    fn scale_words_follow_their_chunk() {
        let mapping = digits();
        assert_eq!(to_speech(1_002_003, &mapping).unwrap(), "u0 M u1 K u2");
        assert_eq!(to_speech(5_000_000, &mapping).unwrap(), "u4 M");
        assert_eq!(to_speech(40_000, &mapping).unwrap(), "x2 K");
    }

    #[test]
    fn zero_skips_sign_and_chunks() {
        assert_eq!(to_speech(0, &digits()).unwrap(), "Z");
    }

    #[test]
    fn negative_prefix() {
        assert_eq!(to_speech(-7, &digits()).unwrap(), "neg u6");
    }

    #[test]
    fn large_millions_recurse() {
        let mapping = digits();
        assert_eq!(to_speech(1_000_000_000, &mapping).unwrap(), "u0 K M");
        assert!(to_speech(i64::MIN, &mapping).unwrap().starts_with("neg u8 M"));
    }
}
