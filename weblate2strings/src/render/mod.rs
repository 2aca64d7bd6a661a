//! Rendering strategies for resource documents.
//!
//! The output markup is an external collaborator: the CLI loads a template
//! file by convention, while tests and embedders can inject any [`Render`]
//! implementation.

pub mod template;
pub mod xml;

pub use template::TemplateRenderer;
pub use xml::XmlRenderer;

use std::{fs::File, io::Write, path::Path};

use crate::{error::Error, types::TranslationSet};

/// Conventional template file name, looked up in the working directory.
pub const TEMPLATE_FILE_NAME: &str = "strings.tmpl";

/// An injected rendering strategy: turns one context's translation set
/// into the bytes of a resource document.
pub trait Render {
    /// Renders the translation set into output bytes.
    fn render(&self, strings: &TranslationSet) -> Result<Vec<u8>, Error>;

    /// Renders and writes to a file path, truncating any existing content.
    /// The destination directory must already exist.
    fn render_to_file(&self, strings: &TranslationSet, path: &Path) -> Result<(), Error> {
        let bytes = self.render(strings)?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }
}
