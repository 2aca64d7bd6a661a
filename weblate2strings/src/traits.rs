//! Traits for source-agnostic parsing of translation documents.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a translation document from one file.
///
/// # Example
///
/// ```rust,no_run
/// use weblate2strings::{TranslationDocument, traits::Parser};
/// let document = TranslationDocument::read_from("messages.fr.yml")?;
/// Ok::<(), weblate2strings::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
