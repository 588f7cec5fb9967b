use crate::{Config, Tag};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // key:"value" pairs of a struct tag, value kept with its escapes
    static ref TAG_PAIR: Regex = Regex::new(r#"([^\s:"]+):"((?:[^"\\]|\\.)*)""#).unwrap();
}

/// Parse the contents of a struct tag (without the surrounding quotes),
/// keeping the keys `config` selects in the order they are written.
pub fn parse(raw: &str, config: &Config) -> Vec<Tag> {
    TAG_PAIR
        .captures_iter(raw)
        .filter(|cap| config.wants_tag(&cap[1]))
        .map(|cap| Tag {
            name: cap[1].to_string(),
            value: cap[2].to_string(),
        })
        .collect()
}
