use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the collaborators around the generator core: reading source
/// files, checking the package clause, formatting and writing the output.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Failed to list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read source file {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Inconsistent package in {}: expected `{expected}`, found `{found}` in {unit}",
        .dir.display()
    )]
    InconsistentPackage {
        dir: PathBuf,
        expected: String,
        found: String,
        unit: String,
    },

    #[error("Generated file {} failed formatting: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    #[error("Failed to remove stale generated file {}: {source}", .path.display())]
    RemoveOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create generated file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write generated file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// The file or directory the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            GenError::ReadDir { path, .. }
            | GenError::ReadSource { path, .. }
            | GenError::CreateOutput { path, .. }
            | GenError::WriteOutput { path, .. }
            | GenError::RemoveOutput { path, .. }
            | GenError::Format { path, .. } => path.as_path(),
            GenError::InconsistentPackage { dir, .. } => dir.as_path(),
        }
    }
}
