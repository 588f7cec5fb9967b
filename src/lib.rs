pub mod cli;
pub mod config;
pub mod error;
pub mod gen;
pub mod parser;
pub mod text;

pub use config::Config;
pub use error::GenError;
pub use gen::{synthesize, Generator};
pub use text::{split, transform, TransformFormat};

use serde::{Deserialize, Serialize};

/// A `key:"value"` pair from a struct field tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Everything extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub unit_name: String,
    pub package_name: String,
    #[serde(default)]
    pub structs: Vec<Struct>,
}
