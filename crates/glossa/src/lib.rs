pub mod formatter;
#[cfg(feature = "global-context")]
pub mod global;
pub mod interpreter;
pub mod parser;
pub mod speech;
pub mod types;

pub use formatter::{format_cardinal, format_number, format_ordinal, format_relative_time_sections};
pub use interpreter::{
    Config, ConfigUpdate, EvalError, LoadError, LoadWarning, MissingTranslationHandler,
    PluralKind, PluralRule, Resolution, ResolutionSource, Setting, TranslateOptions,
    TranslationStore, Translator, compute_suggestions, interpolate, leaf_keys, plural_category,
};
pub use speech::{
    InsertPosition, SpeechMapping, SpeechMappingData, SpeechRegistry, SpeechRule, SpeechRuleData,
    to_speech,
};
pub use types::{
    LocaleId, Namespace, PluralCategory, PluralForms, Quantity, TranslationValue, Value,
    Variables,
};

/// Creates a [`Variables`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use glossa::{vars, Value};
///
/// let v = vars! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::BTreeMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
