pub mod format;
pub mod synth;

pub use format::format_source;
pub use synth::{synthesize, synthesize_counted, synthesize_with, TOOL_NAME};

use crate::error::GenError;
use crate::parser;
use crate::{Config, SourceUnit};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A generated file that has been rendered but not written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub dir: PathBuf,
    pub path: PathBuf,
    pub package_name: String,
    pub constants: usize,
    pub contents: String,
    /// Whether `contents` went through the formatter.
    pub formatted: bool,
}

/// What one directory needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Generate(Artifact),
    /// No constants. `stale` is a generated file left over from an earlier
    /// run that no longer has any source tags behind it.
    Nothing { stale: Option<PathBuf> },
}

/// Outcome of one run over a directory tree.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Files produced, in visiting order.
    pub artifacts: Vec<Artifact>,
    /// Directories that yielded nothing to generate.
    pub skipped: Vec<PathBuf>,
    /// Stale generated files deleted (or, in a dry run, due for deletion).
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

pub struct Generator<'a> {
    config: &'a Config,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Plan everything but leave the file system untouched.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generate for `root`, and for every subdirectory when the config asks
    /// for a recursive run. Directories whose name starts with `.` are not
    /// visited. The first failure ends the run.
    pub fn run(&self, root: &Path) -> Result<Report, GenError> {
        let mut report = Report::default();

        for dir in self.directories(root)? {
            match self.plan_dir(&dir)? {
                Plan::Generate(artifact) => {
                    if self.config.format_output && !artifact.formatted {
                        report.warnings.push(format!(
                            "formatter `{}` not found; {} is not formatted",
                            self.config.formatter.join(" "),
                            artifact.path.display()
                        ));
                    }
                    if !self.dry_run {
                        write_artifact(&artifact)?;
                    }
                    report.artifacts.push(artifact);
                }
                Plan::Nothing { stale } => {
                    if let Some(stale) = stale {
                        if !self.dry_run {
                            remove_stale(&stale)?;
                        }
                        report.removed.push(stale);
                    }
                    report.skipped.push(dir);
                }
            }
        }

        Ok(report)
    }

    /// Parse the Go files of one directory and render (and format) the
    /// constants file for them.
    pub fn plan_dir(&self, dir: &Path) -> Result<Plan, GenError> {
        let files = source_files(dir)?;
        if files.is_empty() {
            return Ok(Plan::Nothing { stale: None });
        }

        let units = files
            .par_iter()
            .map(|path| parser::parse_file(path, self.config))
            .collect::<Result<Vec<_>, _>>()?;
        check_package(dir, &units)?;

        let package_name = units[0].package_name.clone();
        let path = dir.join(parser::generated_file_name(&package_name));

        let Some((contents, constants)) = synth::synthesize_counted_with(&units, self.config) else {
            let stale = path.is_file().then_some(path);
            return Ok(Plan::Nothing { stale });
        };

        let (contents, formatted) = if self.config.format_output {
            match format_source(&self.config.formatter, &contents, &path)? {
                Some(formatted) => (formatted, true),
                None => (contents, false),
            }
        } else {
            (contents, false)
        };

        Ok(Plan::Generate(Artifact {
            dir: dir.to_path_buf(),
            path,
            package_name,
            constants,
            contents,
            formatted,
        }))
    }

    fn directories(&self, root: &Path) -> Result<Vec<PathBuf>, GenError> {
        let metadata = fs::metadata(root).map_err(|source| GenError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(GenError::ReadDir {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::Other, "not a directory"),
            });
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 0 };
        let mut dirs = Vec::new();

        let walker = WalkDir::new(root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = entry.map_err(|err| GenError::ReadDir {
                path: err.path().unwrap_or(root).to_path_buf(),
                source: err.into(),
            })?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }
}

/// Create (or truncate) the artifact's file and write its contents.
pub fn write_artifact(artifact: &Artifact) -> Result<(), GenError> {
    use std::io::{BufWriter, Write};

    let file = fs::File::create(&artifact.path).map_err(|source| GenError::CreateOutput {
        path: artifact.path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(artifact.contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| GenError::WriteOutput {
            path: artifact.path.clone(),
            source,
        })
}

fn remove_stale(path: &Path) -> Result<(), GenError> {
    fs::remove_file(path).map_err(|source| GenError::RemoveOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Candidate Go files directly inside `dir`, sorted by name.
fn source_files(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let read_dir_err = |source| GenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && parser::is_candidate(&path) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// All units of one directory must declare the same package.
fn check_package(dir: &Path, units: &[SourceUnit]) -> Result<(), GenError> {
    let Some(first) = units.first() else {
        return Ok(());
    };

    match units.iter().find(|u| u.package_name != first.package_name) {
        Some(unit) => Err(GenError::InconsistentPackage {
            dir: dir.to_path_buf(),
            expected: first.package_name.clone(),
            found: unit.package_name.clone(),
            unit: unit.unit_name.clone(),
        }),
        None => Ok(()),
    }
}
