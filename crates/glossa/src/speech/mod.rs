//! Integer to spoken-words conversion.
//!
//! A [`SpeechMapping`] supplies a language variant's numeral vocabulary and an
//! ordered list of rewrite rules. The converter renders a number chunk by
//! chunk (millions, thousands, remainder) using only the vocabulary, then
//! runs the rules over the phrase. Language quirks such as hyphenated tens,
//! "and" after "hundred", or comma separators live in the rules, so a new
//! variant is added by registering a mapping.

mod builtin;
mod convert;
mod mapping;
mod registry;

pub use convert::to_speech;
pub use mapping::{InsertPosition, SpeechMapping, SpeechMappingData, SpeechRule, SpeechRuleData};
pub use registry::SpeechRegistry;
