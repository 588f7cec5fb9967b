use crate::text::TransformFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".tgconst.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag keys to generate constants for. Empty means every key.
    pub tags: Vec<String>,

    /// Skip fields without any (selected) tag instead of deriving a value
    /// from the field name.
    pub only_tagged_fields: bool,

    /// How to derive the value for untagged fields.
    pub missing_tag_val_format: TransformFormat,

    /// Also generate for every subdirectory.
    pub recursive: bool,

    /// Currently has no effect.
    // TODO: emit a single `<Struct>_<Field>` constant per field when set.
    pub no_suffix: bool,

    /// Pipe generated code through `formatter` before writing it.
    pub format_output: bool,

    /// Formatter command line; reads source on stdin, prints it on stdout.
    pub formatter: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            only_tagged_fields: false,
            missing_tag_val_format: TransformFormat::default(),
            recursive: false,
            no_suffix: false,
            format_output: true,
            formatter: vec!["gofmt".to_string()],
        }
    }
}

/// One configuration source. Only the settings it actually mentions
/// override the layers below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    pub tags: Option<Vec<String>>,
    pub only_tagged_fields: Option<bool>,
    pub missing_tag_val_format: Option<TransformFormat>,
    pub recursive: Option<bool>,
    pub no_suffix: Option<bool>,
    pub format_output: Option<bool>,
    pub formatter: Option<Vec<String>>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli: ConfigLayer) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.merge(cli))
    }

    /// Defaults overridden by a single config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(tags) = layer.tags {
            self.tags = tags;
        }
        if let Some(format) = layer.missing_tag_val_format {
            self.missing_tag_val_format = format;
        }
        if let Some(only_tagged_fields) = layer.only_tagged_fields {
            self.only_tagged_fields = only_tagged_fields;
        }
        if let Some(recursive) = layer.recursive {
            self.recursive = recursive;
        }
        if let Some(no_suffix) = layer.no_suffix {
            self.no_suffix = no_suffix;
        }
        if let Some(format_output) = layer.format_output {
            self.format_output = format_output;
        }
        if let Some(formatter) = layer.formatter {
            self.formatter = formatter;
        }
        self
    }

    /// Whether a tag key is one we generate constants for.
    pub fn wants_tag(&self, key: &str) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| t == key)
    }

    /// Settings that are accepted but have no effect in combination.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.only_tagged_fields && self.missing_tag_val_format != TransformFormat::Mirror {
            warnings.push(format!(
                "missing tag format '{}' ignored because only tagged fields are generated",
                self.missing_tag_val_format
            ));
        }
        if self.format_output && self.formatter.is_empty() {
            warnings.push("formatter is empty; output is written unformatted".to_string());
        }
        if self.no_suffix {
            warnings.push("no-suffix is not supported yet and has no effect".to_string());
        }
        warnings
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tgconst").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
