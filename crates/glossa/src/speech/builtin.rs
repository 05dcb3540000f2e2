//! Built-in English speech mappings.

use crate::speech::mapping::{SpeechMappingData, SpeechRuleData};

pub const AMERICAN: &str = "american";
pub const BRITISH: &str = "british";

const UNITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// "forty one" → "forty-one"
const HYPHENATE_TENS: (&str, &str) = (
    "(twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety) (one|two|three|four|five|six|seven|eight|nine)",
    "$1-$2",
);

/// "hundred six" → "hundred and six"
const AND_AFTER_HUNDRED: (&str, &str) = ("(hundred) ([a-zA-Z]+)", "$1 and $2");

/// "thousand six hundred" → "thousand, six hundred"
const COMMA_BEFORE_HUNDREDS: (&str, &str) = (
    "(thousand|million) ([a-zA-Z]+) (?! (hundred|thousand|million))",
    "$1, $2 ",
);

/// "thousand six" → "thousand and six"
const AND_AFTER_SCALE: (&str, &str) = ("(thousand|million) ([a-zA-Z]+)", "$1 and $2");

fn replace((pattern, replacement): (&str, &str)) -> SpeechRuleData {
    SpeechRuleData::Replace {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

fn english(rules: Vec<SpeechRuleData>) -> SpeechMappingData {
    let words = |list: &[&str]| list.iter().map(ToString::to_string).collect();
    SpeechMappingData {
        negative: "minus".to_string(),
        zero: "zero".to_string(),
        units: words(&UNITS),
        teens: words(&TEENS),
        tens: words(&TENS),
        hundred: "hundred".to_string(),
        thousand: "thousand".to_string(),
        million: "million".to_string(),
        rules,
    }
}

/// American English: hyphenated tens, no "and".
pub fn american() -> SpeechMappingData {
    english(vec![replace(HYPHENATE_TENS)])
}

/// British English: hyphenated tens, "and" after hundreds and scale words,
/// and a comma between a scale word and a following hundreds group.
pub fn british() -> SpeechMappingData {
    english(vec![
        replace(HYPHENATE_TENS),
        replace(AND_AFTER_HUNDRED),
        replace(COMMA_BEFORE_HUNDREDS),
        replace(AND_AFTER_SCALE),
    ])
}
