/// Character class used to find word boundaries inside identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

/// Classify a single code point. Punctuation, whitespace and letters without
/// case (CJK, for instance) all land in `Other`.
pub fn classify(ch: char) -> CharClass {
    if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}
