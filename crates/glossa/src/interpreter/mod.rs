//! Translation resolution.
//!
//! This module holds the translation store, plural category resolution,
//! interpolation, and the [`Translator`] that combines them into the
//! key → text pipeline.

mod config;
mod context;
mod error;
mod evaluator;
mod interpolate;
mod plural;
mod store;
mod translator;

pub use config::{Config, ConfigUpdate, MissingTranslationHandler, Setting};
pub use context::{Resolution, ResolutionSource, TranslateOptions};
pub use error::{EvalError, LoadError, LoadWarning, compute_suggestions};
pub use interpolate::{QUANTITY_PLACEHOLDER, interpolate};
pub use plural::{PluralKind, PluralRule, plural_category, resolve_plural_category};
pub use store::{TranslationStore, leaf_keys};
pub use translator::Translator;
