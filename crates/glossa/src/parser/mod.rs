//! Parsers for translation data and `{{name}}` placeholders.
//!
//! Translation data arrives as untyped JSON and is converted into typed
//! [`TranslationValue`](crate::TranslationValue) trees once, at load time.

mod placeholder;
mod translation;

pub use placeholder::find_placeholders;
pub use translation::{parse_namespace, parse_translation_data};
