//! Locale extraction and resolution.
//!
//! Weblate exports follow the naming convention `messages.<tag>.yml` (or
//! `.yaml`). The tag is parsed as a language tag, reduced to its base
//! language subtag, and mapped to the ISO 639-3 three-letter code that
//! names the output subdirectory.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

lazy_static! {
    static ref FILE_NAME_REGEX: Regex = Regex::new(r"messages\.(.+)\.(yml|yaml)").unwrap();
}

/// Three-letter code of the primary source language. Its output bypasses
/// locale-suffixed directory naming.
pub const DEFAULT_LOCALE: &str = "eng";

/// Extracts the raw locale tag from a file name following the
/// `messages.<tag>.yml|yaml` convention, e.g. `messages.en-US.yml` → `en-US`.
///
/// Returns `None` when the name does not follow the convention; callers
/// treat that as a hard input-contract violation.
pub fn extract_locale_tag(file_name: &str) -> Option<&str> {
    FILE_NAME_REGEX
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .map(|tag| tag.as_str())
}

/// Normalized three-letter (ISO 639-3) language identifier used to name
/// output subdirectories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Resolves a raw locale tag (e.g. `fr`, `en-US`) to its canonical
    /// three-letter code. Region and script subtags are ignored; only the
    /// base language matters. Malformed or unmappable tags are errors.
    pub fn resolve(tag: &str) -> Result<Self, Error> {
        let identifier: LanguageIdentifier = tag
            .parse()
            .map_err(|_| Error::UnresolvableLocale(tag.to_string()))?;
        let base = identifier.language.as_str();
        let language = isolang::Language::from_639_1(base)
            .or_else(|| isolang::Language::from_639_3(base))
            .ok_or_else(|| Error::UnresolvableLocale(tag.to_string()))?;
        Ok(LocaleCode(language.to_639_3().to_string()))
    }

    /// True iff this code is the distinguished default locale.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LOCALE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocaleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
