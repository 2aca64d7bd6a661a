//! The `yaml` conversion pipeline: glob the inputs, then for each export
//! parse it, resolve its locale, render the selected context, and write
//! the resource file. Strictly sequential; the first error aborts the run
//! and already-written files stay on disk.

use std::path::Path;

use weblate2strings::{
    Error, LocaleCode, Render, TemplateRenderer, TranslationDocument, expand_input_glob,
    extract_locale_tag, output_path, traits::Parser,
};

pub fn run_yaml_command(
    input_pattern: &str,
    output_dir: &str,
    context: &str,
    template_path: &str,
    verbose: bool,
) -> Result<(), Error> {
    // An empty match set is not an error: zero iterations, no output.
    let input_files = expand_input_glob(input_pattern)?;

    for input_file in &input_files {
        convert_file(input_file, output_dir, context, template_path, verbose)?;
    }
    Ok(())
}

fn convert_file(
    input_file: &Path,
    output_dir: &str,
    context: &str,
    template_path: &str,
    verbose: bool,
) -> Result<(), Error> {
    // A fresh document per file: a context missing from a later file must
    // not see strings parsed from an earlier one.
    let document = TranslationDocument::read_from(input_file)?;
    let strings = document.context(context);

    if verbose {
        for (key, value) in &strings {
            println!("{} - {}", key, value);
        }
    }

    let file_name = input_file.to_string_lossy();
    let tag = extract_locale_tag(&file_name)
        .ok_or_else(|| Error::UnrecognizedFileName(file_name.to_string()))?;
    let locale = LocaleCode::resolve(tag)?;

    let renderer = TemplateRenderer::from_file(template_path)?;
    renderer.render_to_file(&strings, &output_path(output_dir, &locale))
}
