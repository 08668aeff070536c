//! Per-language display text supplied by content packs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Text shown when neither the active nor the fallback language has an entry
pub const MISSING_TRANSLATION_PLACEHOLDER: &str = "No translation";

/// A language code as used by the host (`en`, `de`, `pt`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Language every pack is expected to provide.
    pub const DEFAULT: &'static str = "en";

    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Language code cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn default_language() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> String {
        code.0
    }
}

/// Display text keyed by language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(language.into(), text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve the text for `language`, falling back to the default language.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingTranslation` when neither entry exists.
    pub fn resolve(&self, language: &LanguageCode) -> Result<&str, DomainError> {
        self.0
            .get(language.as_str())
            .or_else(|| self.0.get(LanguageCode::DEFAULT))
            .map(String::as_str)
            .ok_or_else(|| {
                DomainError::missing_translation(language.as_str(), LanguageCode::DEFAULT)
            })
    }
}
