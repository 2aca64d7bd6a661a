//! End-to-end tests of the library pipeline: parse an export, resolve its
//! locale from the file name, render the selected context, write the file.

use std::fs;

use tempfile::TempDir;
use weblate2strings::{
    LocaleCode, Render, TemplateRenderer, TranslationDocument, expand_input_glob,
    extract_locale_tag, output_path, traits::Parser,
};

const TEMPLATE: &str = "\
<?xml version=\"1.0\" encoding=\"utf-8\"?>
<resources>
{%- for key, value in strings|items %}
    <string name=\"{{ key }}\">{{ value }}</string>
{%- endfor %}
</resources>
";

#[test]
fn test_full_pipeline_for_one_export() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("messages.fr.yml");
    fs::write(&input_file, "weblate:\n  greeting: Salut\n").unwrap();
    fs::create_dir_all(temp_dir.path().join("out").join("resources-fra")).unwrap();

    let document = TranslationDocument::read_from(&input_file).unwrap();
    let strings = document.context("weblate");

    let file_name = input_file.to_string_lossy();
    let tag = extract_locale_tag(&file_name).unwrap();
    let locale = LocaleCode::resolve(tag).unwrap();
    assert_eq!(locale.as_str(), "fra");

    let destination = output_path(temp_dir.path().join("out"), &locale);
    let renderer = TemplateRenderer::from_source(TEMPLATE).unwrap();
    renderer.render_to_file(&strings, &destination).unwrap();

    let written = fs::read_to_string(&destination).unwrap();
    assert!(written.contains("<string name=\"greeting\">Salut</string>"));
}

#[test]
fn test_absent_context_renders_entry_less_document() {
    let document = TranslationDocument::from_str("weblate:\n  greeting: Hi\n").unwrap();
    let strings = document.context("other");

    let renderer = TemplateRenderer::from_source(TEMPLATE).unwrap();
    let output = renderer.render(&strings).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("<resources>"));
    assert!(!text.contains("<string"));
}

#[test]
fn test_documents_do_not_leak_between_files() {
    // Each file gets a fresh document, so a context missing from a later
    // file must not see strings parsed from an earlier one.
    let first = TranslationDocument::from_str("weblate:\n  greeting: Hi\n").unwrap();
    assert_eq!(first.context("weblate").len(), 1);

    let second = TranslationDocument::from_str("glossary:\n  app_name: Example\n").unwrap();
    assert!(second.context("weblate").is_empty());
}

#[test]
fn test_glob_feeds_exports_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["messages.fr.yml", "messages.de.yml", "messages.en.yaml"] {
        fs::write(temp_dir.path().join(name), "weblate: {}\n").unwrap();
    }

    let pattern = temp_dir.path().join("messages.*.y*ml");
    let paths = expand_input_glob(pattern.to_str().unwrap()).unwrap();

    let tags: Vec<&str> = paths
        .iter()
        .map(|p| extract_locale_tag(p.to_str().unwrap()).unwrap())
        .collect();
    assert_eq!(tags, vec!["de", "en", "fr"]);
}
