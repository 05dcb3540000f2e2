//! Process-wide translator and speech registry for the `global-context`
//! feature.
//!
//! Every call takes a lock; callers that want per-thread or per-request
//! locales should hold their own [`Translator`] instead.

use std::sync::{LazyLock, RwLock};

use crate::interpreter::{Config, ConfigUpdate, EvalError, TranslateOptions, Translator};
use crate::speech::SpeechRegistry;
use crate::types::LocaleId;

static GLOBAL_TRANSLATOR: LazyLock<RwLock<Translator>> =
    LazyLock::new(|| RwLock::new(Translator::new()));

static GLOBAL_SPEECH: LazyLock<RwLock<SpeechRegistry>> =
    LazyLock::new(|| RwLock::new(SpeechRegistry::new()));

/// Provides read access to the global translator.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> T {
    let guard = GLOBAL_TRANSLATOR
        .read()
        .expect("global translator lock poisoned");
    f(&guard)
}

/// Provides write access to the global translator.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> T {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .expect("global translator lock poisoned");
    f(&mut guard)
}

/// Translate with the global translator.
pub fn translate(key: &str, options: &TranslateOptions) -> Result<String, EvalError> {
    with_translator(|translator| translator.translate(key, options))
}

/// Set the global current locale.
pub fn set_locale(locale: impl Into<LocaleId>) {
    with_translator_mut(|translator| translator.set_locale(locale));
}

/// The global current locale, or the default locale if none is set.
pub fn locale() -> LocaleId {
    with_translator(|translator| translator.locale().clone())
}

/// Merge a configuration update into the global translator.
pub fn configure(update: ConfigUpdate) -> Config {
    with_translator_mut(|translator| translator.configure(update).clone())
}

/// Provides read access to the global speech registry.
pub fn with_speech<T>(f: impl FnOnce(&SpeechRegistry) -> T) -> T {
    let guard = GLOBAL_SPEECH.read().expect("global speech lock poisoned");
    f(&guard)
}

/// Provides write access to the global speech registry.
pub fn with_speech_mut<T>(f: impl FnOnce(&mut SpeechRegistry) -> T) -> T {
    let mut guard = GLOBAL_SPEECH.write().expect("global speech lock poisoned");
    f(&mut guard)
}

/// Speak `n` with a mapping from the global speech registry.
pub fn to_speech(n: i64, key: &str) -> Result<String, EvalError> {
    with_speech(|registry| registry.to_speech(n, key))
}
