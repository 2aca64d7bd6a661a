//! All error types for the weblate2strings crate.
//!
//! These are returned from all fallible operations (globbing, parsing,
//! locale resolution, rendering, writing).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("unreadable glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no language code in file name `{0}`")]
    UnrecognizedFileName(String),

    #[error("unresolvable locale tag `{0}`")]
    UnresolvableLocale(String),
}
