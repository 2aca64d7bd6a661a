//! Core types for Weblate export documents.
//! The loader decodes into these; renderers consume them.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{error::Error, traits::Parser};

/// All strings of one translation context: string key → translated text.
///
/// Keys are unique within a context. A `BTreeMap` keeps iteration (and
/// therefore rendered output) deterministic.
pub type TranslationSet = BTreeMap<String, String>;

/// The full parsed content of one Weblate export file: context name →
/// [`TranslationSet`]. Allocated fresh per input file; documents are never
/// merged or reused across files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationDocument(BTreeMap<String, TranslationSet>);

impl TranslationDocument {
    /// Returns the strings of the named context, or an empty set when the
    /// document has no such context. An absent context is not an error.
    pub fn context(&self, name: &str) -> TranslationSet {
        self.0.get(name).cloned().unwrap_or_default()
    }

    /// Returns an iterator over the context names present in the document.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Parser for TranslationDocument {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_yaml::from_reader(reader).map_err(Error::YamlParse)
    }
}
