//! Human-readable labels for dimension values.

/// Separator between words of a value and between values of a combination slug.
pub const SLUG_SEPARATOR: char = '-';

/// Format a dimension value as a label.
///
/// Splits on [`SLUG_SEPARATOR`], capitalizes each segment and joins with
/// spaces: `viral-posts` becomes `Viral Posts`.
pub fn format_label(value: &str) -> String {
    let mut label = String::with_capacity(value.len());
    for (i, segment) in value.split(SLUG_SEPARATOR).enumerate() {
        if i > 0 {
            label.push(' ');
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_segment() {
        assert_eq!(format_label("viral-posts"), "Viral Posts");
        assert_eq!(format_label("health"), "Health");
        assert_eq!(format_label("covid-19"), "Covid 19");
    }

    #[test]
    fn keeps_inner_case() {
        assert_eq!(format_label("tikTok"), "TikTok");
        assert_eq!(format_label("en"), "En");
    }
}
