/// Target width of a banner comment line.
pub const LINE_LENGTH: usize = 60;

const MARGIN: &str = "  ";

/// Center `label` on a line of [`LINE_LENGTH`] characters, filled with
/// `pad_with` on both sides: `"----  xyz  ----"`. Labels too long to pad are
/// returned as-is.
pub fn center_aligned_padded(label: &str, pad_with: &str) -> String {
    let used = label.chars().count() + MARGIN.len() * 2;
    let pad_each_side = LINE_LENGTH.saturating_sub(used) / 2;
    if pad_each_side == 0 {
        return label.to_string();
    }

    let padding = pad_with.repeat(pad_each_side);
    format!("{padding}{MARGIN}{label}{MARGIN}{padding}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_is_centered() {
        let line = center_aligned_padded("File: user.go", "-");
        // (60 - 13 - 4) / 2 = 21
        let dashes = "-".repeat(21);
        assert_eq!(line, format!("{dashes}  File: user.go  {dashes}"));
        assert_eq!(line.len(), 59);
    }

    #[test]
    fn test_long_label_degrades_to_label() {
        let label = "x".repeat(55);
        assert_eq!(center_aligned_padded(&label, "-"), label);
        let label = "y".repeat(80);
        assert_eq!(center_aligned_padded(&label, "="), label);
    }

    #[test]
    fn test_single_pad_each_side() {
        let label = "z".repeat(54);
        assert_eq!(center_aligned_padded(&label, "-"), format!("-  {label}  -"));
    }
}
