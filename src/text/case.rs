use super::split::split;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming convention used to derive a constant value from a field name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransformFormat {
    SnakeCase,
    LispCase,
    CamelCase,
    PascalCase,
    #[default]
    Mirror,
}

impl FromStr for TransformFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "snakecase" | "snake" => Ok(TransformFormat::SnakeCase),
            "lispcase" | "lisp" | "kebabcase" | "kebab" => Ok(TransformFormat::LispCase),
            "camelcase" | "camel" => Ok(TransformFormat::CamelCase),
            "pascalcase" | "pascal" => Ok(TransformFormat::PascalCase),
            "mirror" | "" => Ok(TransformFormat::Mirror),
            _ => Err(format!(
                "Unknown format: {} (expected one of snakecase, lispcase, camelcase, pascalcase, mirror)",
                s
            )),
        }
    }
}

impl TryFrom<String> for TransformFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TransformFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformFormat::SnakeCase => write!(f, "snakecase"),
            TransformFormat::LispCase => write!(f, "lispcase"),
            TransformFormat::CamelCase => write!(f, "camelcase"),
            TransformFormat::PascalCase => write!(f, "pascalcase"),
            TransformFormat::Mirror => write!(f, "mirror"),
        }
    }
}

/// Re-case `txt` according to `format`.
///
/// The input is split into words first (see [`split`]); runs made only of
/// `_`, `-` or whitespace act as delimiters and are not carried over.
/// Title-casing touches the first character of a word and nothing else, so
/// acronyms stay upper case: `HTTPServer` in PascalCase is `HTTPServer`.
pub fn transform(txt: &str, format: TransformFormat) -> String {
    if txt.is_empty() {
        return String::new();
    }

    let words = || {
        split(txt)
            .into_iter()
            .filter(|word| !is_delimiter(word))
    };

    match format {
        TransformFormat::SnakeCase => words()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        TransformFormat::LispCase => words()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-"),
        TransformFormat::CamelCase => {
            let pascal: String = words().map(|w| title(&w)).collect();
            lower_first(&pascal)
        }
        TransformFormat::PascalCase => words().map(|w| title(&w)).collect(),
        TransformFormat::Mirror => txt.to_string(),
    }
}

fn is_delimiter(word: &str) -> bool {
    word.chars().all(|c| c == '_' || c == '-' || c.is_whitespace())
}

fn title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(transform("", TransformFormat::PascalCase), "");
        assert_eq!(transform("", TransformFormat::Mirror), "");
    }

    #[test]
    fn test_snake_and_lisp() {
        assert_eq!(transform("foo_bar", TransformFormat::SnakeCase), "foo_bar");
        assert_eq!(transform("FooBar", TransformFormat::SnakeCase), "foo_bar");
        assert_eq!(transform("PDFLoader", TransformFormat::SnakeCase), "pdf_loader");
        assert_eq!(transform("UserID2", TransformFormat::SnakeCase), "user_id_2");
        assert_eq!(transform("FooBar", TransformFormat::LispCase), "foo-bar");
        assert_eq!(transform("foo_bar", TransformFormat::LispCase), "foo-bar");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(transform("FooBar", TransformFormat::CamelCase), "fooBar");
        assert_eq!(transform("foo_bar", TransformFormat::CamelCase), "fooBar");
        assert_eq!(transform("FooBar", TransformFormat::PascalCase), "FooBar");
        assert_eq!(transform("foo_bar", TransformFormat::PascalCase), "FooBar");
    }

    #[test]
    fn test_title_case_keeps_acronyms() {
        assert_eq!(transform("HTTPServer", TransformFormat::PascalCase), "HTTPServer");
        assert_eq!(transform("HTTPServer", TransformFormat::CamelCase), "hTTPServer");
        assert_eq!(transform("userID", TransformFormat::PascalCase), "UserID");
    }

    #[test]
    fn test_mirror_is_identity() {
        assert_eq!(transform("anything", TransformFormat::Mirror), "anything");
        assert_eq!(transform("Foo_Bar-9", TransformFormat::Mirror), "Foo_Bar-9");
    }

    #[test]
    fn test_delimiters_only() {
        assert_eq!(transform("__", TransformFormat::SnakeCase), "");
        assert_eq!(transform("__", TransformFormat::CamelCase), "");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("camelcase".parse::<TransformFormat>(), Ok(TransformFormat::CamelCase));
        assert_eq!("SnakeCase".parse::<TransformFormat>(), Ok(TransformFormat::SnakeCase));
        assert_eq!("kebab-case".parse::<TransformFormat>(), Ok(TransformFormat::LispCase));
        assert_eq!("".parse::<TransformFormat>(), Ok(TransformFormat::Mirror));
        assert!("screaming".parse::<TransformFormat>().is_err());
        assert_eq!(TransformFormat::default(), TransformFormat::Mirror);
    }

    #[test]
    fn test_display_round_trips() {
        for format in [
            TransformFormat::SnakeCase,
            TransformFormat::LispCase,
            TransformFormat::CamelCase,
            TransformFormat::PascalCase,
            TransformFormat::Mirror,
        ] {
            assert_eq!(format.to_string().parse::<TransformFormat>(), Ok(format));
        }
    }
}
