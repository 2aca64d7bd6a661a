//! Template-driven rendering, the conventional `strings.tmpl` strategy.
//!
//! The template receives the translation set as `strings`; iterate it with
//! `{% for key, value in strings|items %}`.

use std::{fs, path::Path};

use minijinja::{Environment, context};

use super::Render;
use crate::{error::Error, types::TranslationSet};

const TEMPLATE_NAME: &str = "strings";

/// Renders through a MiniJinja text template loaded at run time.
pub struct TemplateRenderer {
    environment: Environment<'static>,
}

impl TemplateRenderer {
    /// Compiles a template from source text. Malformed templates are
    /// rejected here, before any file is processed.
    pub fn from_source(source: impl Into<String>) -> Result<Self, Error> {
        let mut environment = Environment::new();
        environment.add_template_owned(TEMPLATE_NAME, source.into())?;
        Ok(TemplateRenderer { environment })
    }

    /// Loads and compiles the template file at `path`. A missing file is
    /// an I/O error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let source = fs::read_to_string(path)?;
        Self::from_source(source)
    }
}

impl Render for TemplateRenderer {
    fn render(&self, strings: &TranslationSet) -> Result<Vec<u8>, Error> {
        let template = self.environment.get_template(TEMPLATE_NAME)?;
        let rendered = template.render(context! { strings })?;
        Ok(rendered.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
<?xml version=\"1.0\" encoding=\"utf-8\"?>
<resources>
{%- for key, value in strings|items %}
    <string name=\"{{ key }}\">{{ value }}</string>
{%- endfor %}
</resources>
";

    fn sample_strings() -> TranslationSet {
        let mut strings = TranslationSet::new();
        strings.insert("greeting".to_string(), "Hi".to_string());
        strings.insert("farewell".to_string(), "Bye".to_string());
        strings
    }

    #[test]
    fn test_render_key_value_pairs() {
        let renderer = TemplateRenderer::from_source(TEMPLATE).unwrap();
        let output = renderer.render(&sample_strings()).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("<string name=\"greeting\">Hi</string>"));
        assert!(text.contains("<string name=\"farewell\">Bye</string>"));
        assert!(text.starts_with("<?xml"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TemplateRenderer::from_source(
            "{% for key, value in strings|items %}{{ key }}={{ value }};{% endfor %}",
        )
        .unwrap();
        let output = renderer.render(&sample_strings()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "farewell=Bye;greeting=Hi;");
    }

    #[test]
    fn test_render_empty_set() {
        let renderer = TemplateRenderer::from_source(TEMPLATE).unwrap();
        let output = renderer.render(&TranslationSet::new()).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("<resources>"));
        assert!(text.contains("</resources>"));
        assert!(!text.contains("<string"));
    }

    #[test]
    fn test_malformed_template() {
        let result = TemplateRenderer::from_source("{% for key in %}");
        assert!(matches!(result, Err(Error::Template(_))));
    }

    #[test]
    fn test_missing_template_file() {
        let result = TemplateRenderer::from_file("no/such/strings.tmpl");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
