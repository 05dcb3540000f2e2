use std::collections::BTreeMap;

use super::PluralCategory;

/// A nested mapping of translation keys, addressed with dotted paths such as
/// `"menu.home"`.
pub type Namespace = BTreeMap<String, TranslationValue>;

/// One node of a locale's translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    /// A translated string, possibly containing `{{name}}` placeholders.
    Leaf(String),

    /// Plural branches keyed by category. Always has an `other` branch.
    PluralForm(PluralForms),

    /// A nested namespace.
    Namespace(Namespace),
}

impl TranslationValue {
    /// Get this value as text, if it is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationValue::Leaf(text) => Some(text),
            TranslationValue::PluralForm(_) | TranslationValue::Namespace(_) => None,
        }
    }

    /// Get this value as plural forms, if it is one.
    pub fn as_plural(&self) -> Option<&PluralForms> {
        match self {
            TranslationValue::PluralForm(forms) => Some(forms),
            TranslationValue::Leaf(_) | TranslationValue::Namespace(_) => None,
        }
    }

    /// Get this value as a nested namespace, if it is one.
    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            TranslationValue::Namespace(namespace) => Some(namespace),
            TranslationValue::Leaf(_) | TranslationValue::PluralForm(_) => None,
        }
    }

    /// A short name for the shape of this value, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationValue::Leaf(_) => "text",
            TranslationValue::PluralForm(_) => "plural",
            TranslationValue::Namespace(_) => "namespace",
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Leaf(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Leaf(text)
    }
}

impl From<PluralForms> for TranslationValue {
    fn from(forms: PluralForms) -> Self {
        TranslationValue::PluralForm(forms)
    }
}

impl From<Namespace> for TranslationValue {
    fn from(namespace: Namespace) -> Self {
        TranslationValue::Namespace(namespace)
    }
}

/// Plural branches for a single translation key.
///
/// The `other` branch is required at construction, so selection can always
/// fall back to it.
///
/// # Example
///
/// ```
/// use glossa::{PluralCategory, PluralForms};
///
/// let apples = PluralForms::new("{{quantity}} apples")
///     .with(PluralCategory::One, "one apple")
///     .with(PluralCategory::Zero, "no apples");
///
/// assert_eq!(apples.select(PluralCategory::One), "one apple");
/// assert_eq!(apples.select(PluralCategory::Few), "{{quantity}} apples");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    other: String,
    forms: BTreeMap<PluralCategory, String>,
}

impl PluralForms {
    /// Create plural forms with only the `other` branch.
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            forms: BTreeMap::new(),
        }
    }

    /// Add or replace a branch.
    pub fn with(mut self, category: PluralCategory, text: impl Into<String>) -> Self {
        self.insert(category, text);
        self
    }

    /// Add or replace a branch in place.
    pub fn insert(&mut self, category: PluralCategory, text: impl Into<String>) {
        match category {
            PluralCategory::Other => self.other = text.into(),
            _ => {
                self.forms.insert(category, text.into());
            }
        }
    }

    /// Build from a category map. Returns `None` without an `other` entry.
    pub fn from_map(mut forms: BTreeMap<PluralCategory, String>) -> Option<Self> {
        let other = forms.remove(&PluralCategory::Other)?;
        Some(Self { other, forms })
    }

    /// The branch for `category`, if present.
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Other => Some(&self.other),
            _ => self.forms.get(&category).map(String::as_str),
        }
    }

    /// The `other` branch.
    pub fn other(&self) -> &str {
        &self.other
    }

    /// The branch for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &str {
        self.get(category).unwrap_or(&self.other)
    }

    /// All branches in category order, `other` last.
    pub fn iter(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        self.forms
            .iter()
            .map(|(category, text)| (*category, text.as_str()))
            .chain([(PluralCategory::Other, self.other.as_str())])
    }
}
