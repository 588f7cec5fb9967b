use crate::gen::{Artifact, Report};
use crate::GenError;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonArtifact {
    pub path: String,
    pub package: String,
    pub constants: usize,
    pub formatted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub generated: Vec<JsonArtifact>,
    pub skipped: Vec<String>,
    pub removed: Vec<String>,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

pub fn print_report(report: &Report, dry_run: bool, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_report(report, dry_run, colored_output),
        OutputFormat::Json => print_json_report(report, dry_run),
    }
}

fn print_text_report(report: &Report, dry_run: bool, colored_output: bool) {
    for artifact in &report.artifacts {
        if dry_run {
            print_artifact_contents(artifact, colored_output);
        } else {
            print_generated(artifact, colored_output);
        }
    }

    for path in &report.removed {
        print_removed(path, dry_run, colored_output);
    }

    if !dry_run {
        print_summary(report, colored_output);
    }
}

fn print_generated(artifact: &Artifact, colored_output: bool) {
    let path = artifact.path.display().to_string();
    let constants = constant_word(artifact.constants);

    if colored_output {
        println!(
            "  {} {} ({} {})",
            "✓".green(),
            path.bold(),
            artifact.constants.to_string().cyan(),
            constants
        );
    } else {
        println!("  ✓ {} ({} {})", path, artifact.constants, constants);
    }
}

fn print_removed(path: &Path, dry_run: bool, colored_output: bool) {
    let action = if dry_run { "would remove stale" } else { "removed stale" };
    if colored_output {
        println!("  {} {} {}", "✗".red(), action.dimmed(), path.display());
    } else {
        println!("  ✗ {} {}", action, path.display());
    }
}

fn print_artifact_contents(artifact: &Artifact, colored_output: bool) {
    let header = format!("==> {} <==", artifact.path.display());
    if colored_output {
        println!("{}", header.dimmed());
    } else {
        println!("{}", header);
    }
    print!("{}", artifact.contents);
}

fn print_summary(report: &Report, colored: bool) {
    println!();
    let total = report.artifacts.len();
    if total == 0 && !report.removed.is_empty() {
        return;
    }
    if total == 0 {
        if colored {
            println!("{}", "Nothing to generate.".yellow());
        } else {
            println!("Nothing to generate.");
        }
        return;
    }

    let file_word = if total == 1 { "file" } else { "files" };
    let constants: usize = report.artifacts.iter().map(|a| a.constants).sum();
    if colored {
        println!(
            "{} {} {} generated with {} {}",
            "✓".green().bold(),
            total.to_string().green().bold(),
            file_word,
            constants.to_string().green().bold(),
            constant_word(constants)
        );
    } else {
        println!(
            "✓ {} {} generated with {} {}",
            total,
            file_word,
            constants,
            constant_word(constants)
        );
    }
}

fn constant_word(count: usize) -> &'static str {
    if count == 1 {
        "constant"
    } else {
        "constants"
    }
}

pub fn json_report(report: &Report, dry_run: bool) -> JsonOutput {
    JsonOutput {
        generated: report
            .artifacts
            .iter()
            .map(|a| JsonArtifact {
                path: a.path.display().to_string(),
                package: a.package_name.clone(),
                constants: a.constants,
                formatted: a.formatted,
                contents: dry_run.then(|| a.contents.clone()),
            })
            .collect(),
        skipped: report
            .skipped
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        removed: report
            .removed
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        warnings: report.warnings.clone(),
        dry_run,
    }
}

fn print_json_report(report: &Report, dry_run: bool) {
    match serde_json::to_string_pretty(&json_report(report, dry_run)) {
        Ok(json) => println!("{}", json),
        Err(e) => print_warning(&format!("Failed to serialize report: {}", e), false),
    }
}

pub fn print_warning(message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

pub fn print_error(error: &GenError, colored: bool) {
    let location = error.path().display().to_string();
    if colored {
        eprintln!("{} {}", "Error:".red().bold(), error);
        eprintln!("  {} {}", "at".dimmed(), location.dimmed());
    } else {
        eprintln!("Error: {}", error);
        eprintln!("  at {}", location);
    }
}

/// Printed before a run so users see which directory is processed.
pub fn print_start(root: &Path, recursive: bool, colored: bool) {
    let mode = if recursive { " (recursive)" } else { "" };
    if colored {
        println!("{} {}{}", "Generating".cyan().bold(), root.display(), mode.dimmed());
    } else {
        println!("Generating {}{}", root.display(), mode);
    }
}
