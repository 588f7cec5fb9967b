pub mod go;
pub mod tag;

use crate::error::GenError;
use crate::{Config, SourceUnit};
use std::fs;
use std::path::Path;

/// Suffix of the files this tool writes; they are never read back as input.
pub const GENERATED_SUFFIX: &str = "_tgconst_gen.go";

/// Name of the generated file for a package.
pub fn generated_file_name(package_name: &str) -> String {
    format!("{}{}", package_name, GENERATED_SUFFIX)
}

/// Whether a path is a Go source file we extract structs from: `.go`, not a
/// test file and not our own output.
pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    name.ends_with(".go") && !name.ends_with("_test.go") && !name.ends_with(GENERATED_SUFFIX)
}

/// Read a source file and extract its structs, keeping only the tags
/// selected by `config`.
pub fn parse_file(path: &Path, config: &Config) -> Result<SourceUnit, GenError> {
    let content = fs::read_to_string(path).map_err(|source| GenError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    let unit_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(go::parse(&unit_name, &content, config))
}
