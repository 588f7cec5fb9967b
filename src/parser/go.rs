use super::tag;
use crate::{Config, Field, SourceUnit, Struct};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PACKAGE_CLAUSE: Regex =
        Regex::new(r"(?m)^\s*package\s+([\p{L}_][\p{L}\p{N}_]*)").unwrap();
    // `type Name struct {`, `Name struct {` inside a type group, generics allowed
    static ref STRUCT_START: Regex = Regex::new(
        r"(?m)^[ \t]*(?:type[ \t]+)?([\p{L}_][\p{L}\p{N}_]*)(?:\[[^\]\n]*\])?[ \t]+struct[ \t]*\{"
    )
    .unwrap();
    static ref FIELD_NAMES: Regex = Regex::new(
        r"^([\p{L}_][\p{L}\p{N}_]*(?:[ \t]*,[ \t]*[\p{L}_][\p{L}\p{N}_]*)*)[ \t]+\S"
    )
    .unwrap();
    static ref TAG_SUFFIX: Regex =
        Regex::new(r#"(?:`([^`]*)`|"((?:[^"\\]|\\.)*)")\s*$"#).unwrap();
}

/// Extract the package name and struct declarations of a Go source file.
///
/// This is a scanner, not a parser: it understands struct declarations,
/// comments and string literals, and ignores everything else.
pub fn parse(unit_name: &str, content: &str, config: &Config) -> SourceUnit {
    let code = strip_comments(content);

    let package_name = PACKAGE_CLAUSE
        .captures(&code)
        .map(|cap| cap[1].to_string())
        .unwrap_or_default();

    let mut structs = Vec::new();
    let mut consumed = 0;

    for cap in STRUCT_START.captures_iter(&code) {
        let Some(whole) = cap.get(0) else {
            continue;
        };
        if whole.start() < consumed {
            // a nested `Name struct {` field of a struct already handled
            continue;
        }

        let open = whole.end() - 1;
        let Some(body) = struct_body(&code, open) else {
            break;
        };
        consumed = open + body.len() + 2;

        let fields = field_decls(body)
            .iter()
            .flat_map(|decl| parse_field(decl, config))
            .collect();

        structs.push(Struct {
            name: cap[1].to_string(),
            fields,
        });
    }

    SourceUnit {
        unit_name: unit_name.to_string(),
        package_name,
        structs,
    }
}

/// Tracks whether the scanner is inside a string, rune or raw string literal.
#[derive(Default)]
struct Literals {
    quote: Option<char>,
    escaped: bool,
}

impl Literals {
    /// Feed the next character; true when it is code rather than literal text.
    fn is_code(&mut self, ch: char) -> bool {
        match self.quote {
            Some(quote) => {
                if self.escaped {
                    self.escaped = false;
                } else if ch == '\\' && quote != '`' {
                    self.escaped = true;
                } else if ch == quote {
                    self.quote = None;
                }
                false
            }
            None if matches!(ch, '"' | '\'' | '`') => {
                self.quote = Some(ch);
                false
            }
            None => true,
        }
    }
}

/// Blank out `//` and `/* */` comments, keeping line breaks.
fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut literals = Literals::default();
    let mut chars = src.chars().peekable();

    while let Some(ch) = chars.next() {
        if !literals.is_code(ch) {
            out.push(ch);
            continue;
        }

        let next = chars.peek().copied();
        match (ch, next) {
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                out.push(' ');
            }
            _ => out.push(ch),
        }
    }

    out
}

/// The text between the brace at `open` and its matching close brace.
fn struct_body(src: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut literals = Literals::default();

    for (idx, ch) in src[open..].char_indices() {
        if !literals.is_code(ch) {
            continue;
        }
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&src[open + 1..open + idx]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Split a struct body into one declaration per line (or `;`). Bodies of
/// nested struct types are dropped, so `Inner struct { ... } `json:"in"``
/// becomes `Inner struct `json:"in"``.
fn field_decls(body: &str) -> Vec<String> {
    let mut decls = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut literals = Literals::default();

    for ch in body.chars() {
        if literals.is_code(ch) {
            match ch {
                '{' => {
                    depth += 1;
                    continue;
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        current.push(' ');
                    }
                    continue;
                }
                '\n' | ';' if depth == 0 => {
                    push_decl(&mut decls, &mut current);
                    continue;
                }
                _ => {}
            }
        }
        if depth == 0 {
            current.push(ch);
        }
    }
    push_decl(&mut decls, &mut current);

    decls
}

fn push_decl(decls: &mut Vec<String>, current: &mut String) {
    let decl = current.trim();
    if !decl.is_empty() {
        decls.push(decl.to_string());
    }
    current.clear();
}

/// One declaration line yields a field per declared name.
fn parse_field(decl: &str, config: &Config) -> Vec<Field> {
    let (rest, tags) = match TAG_SUFFIX.captures(decl) {
        Some(cap) => {
            let raw = match (cap.get(1), cap.get(2)) {
                (Some(raw), _) => raw.as_str().to_string(),
                (None, Some(quoted)) => quoted.as_str().replace("\\\"", "\""),
                (None, None) => String::new(),
            };
            let start = cap.get(0).map_or(decl.len(), |m| m.start());
            (decl[..start].trim(), tag::parse(&raw, config))
        }
        None => (decl, Vec::new()),
    };

    if rest.is_empty() {
        return Vec::new();
    }

    let names: Vec<String> = match FIELD_NAMES.captures(rest) {
        Some(cap) => cap[1].split(',').map(|n| n.trim().to_string()).collect(),
        None => vec![embedded_name(rest)],
    };

    names
        .into_iter()
        .map(|name| Field {
            name,
            tags: tags.clone(),
        })
        .collect()
}

/// `*pkg.Base[T]` is declared under the name `Base`.
fn embedded_name(type_expr: &str) -> String {
    let base = type_expr.trim_start_matches('*');
    let base = base.split('[').next().unwrap_or(base);
    base.rsplit('.').next().unwrap_or(base).trim().to_string()
}
