use crate::text::{center_aligned_padded, transform, TransformFormat};
use crate::{Config, SourceUnit};

/// Name written into the generated-code header.
pub const TOOL_NAME: &str = "tgconst";

/// Render the constant declarations for `units`.
///
/// Every tag of every field becomes `<Struct>_<Field>_<Tag>= "<value>"`.
/// Fields without tags become `<Struct>_<Field>= "<name>"` with the field
/// name re-cased by `missing_tag_format`, unless `only_tagged_fields` is set.
/// Emission follows input order exactly. The package clause comes from the
/// first unit.
///
/// Returns `None` when not a single constant would be written, in which case
/// no file should be produced.
pub fn synthesize(
    units: &[SourceUnit],
    only_tagged_fields: bool,
    missing_tag_format: TransformFormat,
) -> Option<String> {
    synthesize_counted(units, only_tagged_fields, missing_tag_format).map(|(source, _)| source)
}

/// [`synthesize`], also returning how many constants were written.
pub fn synthesize_counted(
    units: &[SourceUnit],
    only_tagged_fields: bool,
    missing_tag_format: TransformFormat,
) -> Option<(String, usize)> {
    let first = units.first()?;

    let mut source = String::new();
    source.push_str(&format!("// Code generated by {}; DO NOT EDIT.\n", TOOL_NAME));
    source.push_str(&format!("package {}\n\n", first.package_name));
    source.push_str("const (\n\n");

    let mut constants = 0usize;
    for unit in units {
        let banner = center_aligned_padded(&format!("File: {}", unit.unit_name), "-");
        source.push_str(&format!("// {}\n", banner));

        for item in &unit.structs {
            source.push_str(&format!("// Struct: {}\n", item.name));

            for field in &item.fields {
                for tag in &field.tags {
                    constants += 1;
                    source.push_str(&format!(
                        "\t{}_{}_{}= \"{}\"\n",
                        item.name, field.name, tag.name, tag.value
                    ));
                }

                if field.tags.is_empty() && !only_tagged_fields {
                    constants += 1;
                    source.push_str(&format!(
                        "\t{}_{}= \"{}\"\n",
                        item.name,
                        field.name,
                        transform(&field.name, missing_tag_format)
                    ));
                }
            }
            source.push('\n');
        }
        source.push('\n');
    }
    source.push_str(")\n");

    if constants == 0 {
        return None;
    }
    Some((source, constants))
}

/// [`synthesize`] with the switches taken from `config`.
pub fn synthesize_with(units: &[SourceUnit], config: &Config) -> Option<String> {
    synthesize(units, config.only_tagged_fields, config.missing_tag_val_format)
}

pub(crate) fn synthesize_counted_with(units: &[SourceUnit], config: &Config) -> Option<(String, usize)> {
    synthesize_counted(units, config.only_tagged_fields, config.missing_tag_val_format)
}
