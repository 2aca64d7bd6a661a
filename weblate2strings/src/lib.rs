#![forbid(unsafe_code)]
//! Convert Weblate YAML exports into device string resource files.
//!
//! A Weblate export is a two-level YAML mapping: context name → (string key →
//! translated text). This crate loads such documents, derives a normalized
//! three-letter locale code from the export's file name, and renders one
//! context's strings through a pluggable [`Render`] strategy into an XML
//! resource document.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use weblate2strings::{
//!     LocaleCode, Render, TemplateRenderer, TranslationDocument,
//!     extract_locale_tag, output_path, traits::Parser,
//! };
//!
//! let document = TranslationDocument::read_from("messages.fr.yml")?;
//! let strings = document.context("weblate");
//!
//! let tag = extract_locale_tag("messages.fr.yml").unwrap();
//! let locale = LocaleCode::resolve(tag)?;
//!
//! let renderer = TemplateRenderer::from_file("strings.tmpl")?;
//! renderer.render_to_file(&strings, &output_path("out", &locale))?;
//! # Ok::<(), weblate2strings::Error>(())
//! ```

pub mod error;
pub mod input;
pub mod locale;
pub mod output;
pub mod render;
pub mod traits;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    error::Error,
    input::expand_input_glob,
    locale::{DEFAULT_LOCALE, LocaleCode, extract_locale_tag},
    output::{RESOURCE_FILE_NAME, output_path},
    render::{Render, TEMPLATE_FILE_NAME, TemplateRenderer, XmlRenderer},
    types::{TranslationDocument, TranslationSet},
};
