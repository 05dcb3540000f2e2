use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A locale identifier such as `en-US`, parsed once into a language subtag and
/// an optional region part.
///
/// Everything before the first `-` is the language; everything after it is
/// kept verbatim as the region. Fallback drops the region and keeps the
/// language, see [`LocaleId::base`].
///
/// # Example
///
/// ```
/// use glossa::LocaleId;
///
/// let locale = LocaleId::new("en-GB");
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.region(), Some("GB"));
/// assert_eq!(locale.base(), Some(LocaleId::new("en")));
/// assert_eq!(locale.to_string(), "en-GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    /// Parse a locale tag. Surrounding whitespace is ignored.
    pub fn new(tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim();
        match tag.split_once('-') {
            Some((language, region)) => Self {
                language: language.to_string(),
                region: (!region.is_empty()).then(|| region.to_string()),
            },
            None => Self {
                language: tag.to_string(),
                region: None,
            },
        }
    }

    /// The language subtag (e.g. `"en"` for `en-US`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region part, if any (e.g. `"US"` for `en-US`).
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The language-only locale this one falls back to.
    ///
    /// Returns `None` when there is no region to drop.
    pub fn base(&self) -> Option<LocaleId> {
        self.region.as_ref().map(|_| LocaleId {
            language: self.language.clone(),
            region: None,
        })
    }

    /// True when the language subtag is empty.
    pub fn is_empty(&self) -> bool {
        self.language.is_empty()
    }
}

impl Display for LocaleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleId {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl From<&String> for LocaleId {
    fn from(tag: &String) -> Self {
        Self::new(tag)
    }
}

impl From<&LocaleId> for LocaleId {
    fn from(locale: &LocaleId) -> Self {
        locale.clone()
    }
}

impl From<LocaleId> for String {
    fn from(locale: LocaleId) -> Self {
        locale.to_string()
    }
}
