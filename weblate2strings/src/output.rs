//! Output path selection for rendered resource files.

use std::path::{Path, PathBuf};

use crate::locale::LocaleCode;

/// File name of every rendered resource document.
pub const RESOURCE_FILE_NAME: &str = "strings.xml";

/// Computes the destination path for a locale's resource file.
///
/// The default locale maps to `<output_dir>/resources/strings.xml`; every
/// other code maps to `<output_dir>/resources-<code>/strings.xml`. The
/// destination directory is not created here; writing into a missing
/// directory fails.
pub fn output_path<P: AsRef<Path>>(output_dir: P, locale: &LocaleCode) -> PathBuf {
    let subdirectory = if locale.is_default() {
        "resources".to_string()
    } else {
        format!("resources-{}", locale.as_str())
    };
    output_dir.as_ref().join(subdirectory).join(RESOURCE_FILE_NAME)
}
